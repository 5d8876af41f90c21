//! CLI definition using clap

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use depot_types::{Depot, Mode, OutputFormat};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "depot-productivity")]
#[command(author = "tgsrtc-depot-ops")]
#[command(version)]
#[command(about = "Daily driver productivity summary for bus depots")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Database file override
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Verbose output (debug logging)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the summary for an input file without storing it
    Compute {
        /// Input file (.toml or .json)
        input: PathBuf,
    },

    /// Compute the summary and append it to the database
    Submit {
        /// Input file (.toml or .json)
        input: PathBuf,

        /// Date the figures belong to (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        entry_date: Option<NaiveDate>,

        /// Also export the summary to an Excel file
        #[arg(long)]
        xlsx: Option<PathBuf>,
    },

    /// Show benchmark figures for an operating mode
    Benchmarks {
        /// Operating mode
        #[arg(long, value_enum)]
        mode: Mode,
    },

    /// List depots and their fixed planned values
    Depots,

    /// Write an input template pre-filled with defaults
    Template {
        /// Depot name (e.g., "Khammam", "Hyderabad-2")
        #[arg(long)]
        depot: Depot,

        /// Operating mode
        #[arg(long, value_enum)]
        mode: Mode,

        /// Output path (prints to stdout if omitted)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Show database location, liveness and stored row count
    Status,

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set database file path
        #[arg(long)]
        set_db: Option<PathBuf>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
