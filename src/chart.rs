//! Forest driver: renders the whole reporting structure to a sink.

use std::io::Write;

use generational_arena::Index;
use tracing::{debug, instrument};

use crate::domain::error::DomainResult;
use crate::domain::walk::all_reports;
use crate::domain::Roster;

/// Rendering options for the forest driver.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChartOptions {
    /// Also treat people whose manager name resolves to nobody as roots.
    /// Off by default: such people stay invisible to the chart.
    pub orphans_as_roots: bool,
}

/// Totals reported after a chart run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Every person taken from the input, duplicate names included
    pub people: usize,
    /// Reporting references visited across all hierarchies
    pub subordinates: usize,
}

/// Starting points for the forest walk, insertion order.
///
/// A root is a person with no manager at all. The orphan check is separate:
/// a person whose manager name does not resolve still carries the name, so
/// the null test skips them unless `orphans_as_roots` is set.
#[instrument(level = "debug", skip(roster))]
pub fn scan_roots(roster: &Roster, opts: ChartOptions) -> Vec<Index> {
    roster
        .iter()
        .filter(|(_, person)| match &person.manager {
            None => true,
            Some(manager) => opts.orphans_as_roots && roster.lookup(manager).is_none(),
        })
        .map(|(idx, _)| idx)
        .collect()
}

/// Walk every hierarchy and stream it to `sink`, then the summary lines.
///
/// Per root: one banner line, then one depth-marked line per transitive
/// report in pre-order. Depth d is rendered as d dashes.
#[instrument(level = "debug", skip(roster, sink))]
pub fn write_chart<W: Write>(
    roster: &Roster,
    opts: ChartOptions,
    sink: &mut W,
) -> DomainResult<Summary> {
    let mut subordinates = 0;

    for root_idx in scan_roots(roster, opts) {
        if let Some(root) = roster.get(root_idx) {
            writeln!(sink, "{} ({}) joined {}", root.name, root.title, root.join_date)?;
            for (_, person, depth) in all_reports(roster, root_idx) {
                writeln!(sink, "{} {} {}", "-".repeat(depth), person.title, person.name)?;
                subordinates += 1;
            }
        }
    }

    writeln!(sink, "People loaded: {}", roster.len())?;
    writeln!(sink, "Subordinate links: {}", subordinates)?;

    let summary = Summary {
        people: roster.len(),
        subordinates,
    };
    debug!(?summary, "chart complete");
    Ok(summary)
}
