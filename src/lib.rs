//! rsorg: org chart explorer.
//!
//! Rebuilds reporting hierarchies from flat personnel rosters and renders
//! them as indented charts, report lists, or trees.

pub mod chart;
pub mod cli;
pub mod config;
pub mod diagram;
pub mod domain;
pub mod exitcode;
pub mod source;
pub mod util;

pub use chart::{scan_roots, write_chart, ChartOptions, Summary};
pub use config::Settings;
pub use diagram::tree_diagram;
pub use domain::{
    all_reports, direct_reports, link_managers, DanglingManager, DomainError, LinkReport, Person,
    PersonRecord, Roster,
};
pub use source::{load_roster, SourceError};
