//! Termtree rendering of one reporting hierarchy.

use generational_arena::Index;
use termtree::Tree;
use tracing::instrument;

use crate::domain::Roster;

/// Render the hierarchy under `root` as a termtree, one label per person.
#[instrument(level = "debug", skip(roster))]
pub fn tree_diagram(roster: &Roster, root: Index) -> Tree<String> {
    fn attach(roster: &Roster, idx: Index, parent: &mut Tree<String>) {
        if let Some(person) = roster.get(idx) {
            for &report_idx in &person.reports {
                if let Some(report) = roster.get(report_idx) {
                    let mut subtree = Tree::new(report.to_string());
                    attach(roster, report_idx, &mut subtree);
                    parent.push(subtree);
                }
            }
        }
    }

    let label = roster
        .get(root)
        .map(|person| person.to_string())
        .unwrap_or_else(|| "Empty chart".to_string());
    let mut tree = Tree::new(label);
    attach(roster, root, &mut tree);
    tree
}
