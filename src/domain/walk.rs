//! Traversal over the reporting hierarchy.

use generational_arena::Index;
use tracing::instrument;

use crate::domain::roster::{Person, Roster};

/// The node's reports list verbatim; empty for an unknown index.
pub fn direct_reports(roster: &Roster, idx: Index) -> &[Index] {
    roster
        .get(idx)
        .map(|person| person.reports.as_slice())
        .unwrap_or(&[])
}

/// All transitive reports of `root` in pre-order, excluding `root` itself.
///
/// Each item carries its depth as edge distance from `root`. Depth travels
/// with the stack entry, so sibling subtrees cannot bleed depth into one
/// another. The stack lives on the heap; hierarchy depth is bounded by input
/// size, not the call stack.
#[instrument(level = "trace", skip(roster))]
pub fn all_reports(roster: &Roster, root: Index) -> ReportsIter<'_> {
    ReportsIter::new(roster, root)
}

pub struct ReportsIter<'a> {
    roster: &'a Roster,
    stack: Vec<(Index, usize)>,
}

impl<'a> ReportsIter<'a> {
    fn new(roster: &'a Roster, root: Index) -> Self {
        let mut stack = Vec::new();
        if let Some(person) = roster.get(root) {
            // Push in reverse order for left-to-right traversal
            for &report in person.reports.iter().rev() {
                stack.push((report, 1));
            }
        }
        Self { roster, stack }
    }
}

impl<'a> Iterator for ReportsIter<'a> {
    type Item = (Index, &'a Person, usize);

    #[instrument(level = "trace", skip(self))]
    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current_idx, depth)) = self.stack.pop() {
            if let Some(person) = self.roster.get(current_idx) {
                for &report in person.reports.iter().rev() {
                    self.stack.push((report, depth + 1));
                }
                return Some((current_idx, person, depth));
            }
        }
        None
    }
}
