//! Command dispatch for the rsorg CLI.

use std::io;
use std::path::Path;

use tracing::{debug, instrument};

use crate::chart::{scan_roots, write_chart, ChartOptions};
use crate::cli::args::{Cli, Commands};
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::config::Settings;
use crate::diagram::tree_diagram;
use crate::domain::{direct_reports, link_managers, DomainError, Roster};
use crate::source::load_roster;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Chart {
            roster,
            orphans_as_roots,
        }) => _chart(roster, *orphans_as_roots),
        Some(Commands::Reports { roster, name }) => _reports(roster, name),
        Some(Commands::Tree {
            roster,
            orphans_as_roots,
        }) => _tree(roster, *orphans_as_roots),
        None => Ok(()),
    }
}

/// Shared pipeline: settings, load, index, link.
/// Dangling-manager warnings land on `sink` as linking finds them.
#[instrument(level = "debug", skip(sink))]
fn load_linked<W: io::Write>(path: &Path, sink: &mut W) -> CliResult<Roster> {
    let settings = Settings::load()?;
    let records = load_roster(path, settings.max_roster_bytes)?;
    let mut roster = Roster::from_records(records);
    let report = link_managers(&mut roster, sink)?;
    debug!(
        "linked {} references, {} dangling",
        report.linked,
        report.dangling.len()
    );
    Ok(roster)
}

#[instrument]
fn _chart(roster_path: &Path, orphans_as_roots: bool) -> CliResult<()> {
    let stdout = io::stdout();
    let mut sink = stdout.lock();
    let roster = load_linked(roster_path, &mut sink)?;
    let summary = write_chart(&roster, ChartOptions { orphans_as_roots }, &mut sink)?;
    debug!(?summary, "chart done");
    Ok(())
}

#[instrument]
fn _reports(roster_path: &Path, name: &str) -> CliResult<()> {
    let stdout = io::stdout();
    let mut sink = stdout.lock();
    let roster = load_linked(roster_path, &mut sink)?;
    let (idx, person) = roster
        .find(name)
        .ok_or_else(|| DomainError::UnknownPerson(name.to_string()))?;
    output::header(&format!("Direct reports of {}", person));
    for &report_idx in direct_reports(&roster, idx) {
        if let Some(report) = roster.get(report_idx) {
            output::detail(&format!("{} {}", report.title, report.name));
        }
    }
    Ok(())
}

#[instrument]
fn _tree(roster_path: &Path, orphans_as_roots: bool) -> CliResult<()> {
    let stdout = io::stdout();
    let mut sink = stdout.lock();
    let roster = load_linked(roster_path, &mut sink)?;
    for root_idx in scan_roots(&roster, ChartOptions { orphans_as_roots }) {
        output::info(&tree_diagram(&roster, root_idx));
    }
    Ok(())
}
