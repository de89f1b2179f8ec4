//! Manager resolution: wires textual references into arena links.

use std::io::Write;

use generational_arena::Index;
use tracing::{debug, instrument};

use crate::domain::error::DomainResult;
use crate::domain::roster::Roster;

/// An unresolved manager reference found during linking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingManager {
    pub employee: String,
    pub manager: String,
}

/// Outcome of one linking pass.
#[derive(Debug, Default)]
pub struct LinkReport {
    /// References resolved into reports lists
    pub linked: usize,
    /// References that named nobody, in linking order
    pub dangling: Vec<DanglingManager>,
}

/// Resolve every manager reference in insertion order.
///
/// A resolved reference appends the person to the manager's reports list.
/// An unresolved one writes a warning line to `sink` immediately and is
/// recorded; the person stays in the roster, attached to nobody. Only sink
/// write failures abort. Call once per roster: a second pass would append
/// the same references again.
#[instrument(level = "debug", skip(roster, sink))]
pub fn link_managers<W: Write>(roster: &mut Roster, sink: &mut W) -> DomainResult<LinkReport> {
    let references: Vec<(Index, String, String)> = roster
        .iter()
        .filter_map(|(idx, person)| {
            person
                .manager
                .as_ref()
                .map(|manager| (idx, person.name.clone(), manager.clone()))
        })
        .collect();

    let mut report = LinkReport::default();
    for (person_idx, employee, manager) in references {
        match roster.lookup(&manager) {
            Some(manager_idx) => {
                if let Some(boss) = roster.get_mut(manager_idx) {
                    boss.reports.push(person_idx);
                    report.linked += 1;
                }
            }
            None => {
                writeln!(sink, "Warning: manager '{}' of '{}' not found", manager, employee)?;
                report.dangling.push(DanglingManager { employee, manager });
            }
        }
    }

    debug!(
        "linked {} references, {} dangling",
        report.linked,
        report.dangling.len()
    );
    Ok(report)
}
