//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};
use clap_complete::Shell;

/// Org chart explorer: rebuilds reporting hierarchies from flat personnel rosters
#[derive(Parser, Debug)]
#[command(name = "rsorg")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase logging verbosity (-d, -dd, -ddd)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Generate shell completions
    #[arg(long = "generate", value_enum)]
    pub generator: Option<Shell>,

    /// Print author and version information
    #[arg(long)]
    pub info: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the full reporting structure
    Chart {
        /// Roster file (JSON array of person records)
        #[arg(value_hint = ValueHint::FilePath)]
        roster: PathBuf,
        /// Also chart people whose manager is unknown
        #[arg(long)]
        orphans_as_roots: bool,
    },

    /// List the direct reports of one person
    Reports {
        /// Roster file (JSON array of person records)
        #[arg(value_hint = ValueHint::FilePath)]
        roster: PathBuf,
        /// Person to look up
        name: String,
    },

    /// Show each hierarchy as a tree
    Tree {
        /// Roster file (JSON array of person records)
        #[arg(value_hint = ValueHint::FilePath)]
        roster: PathBuf,
        /// Also chart people whose manager is unknown
        #[arg(long)]
        orphans_as_roots: bool,
    },
}
