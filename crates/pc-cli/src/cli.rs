//! Command-line argument definitions.

use std::num::NonZeroU32;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use pc_core::{TimerName, parse_date};

/// Named punchclocks.
///
/// Clock in and out of named timers, then total or chart the time spent.
#[derive(Debug, Parser)]
#[command(name = "clock", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Clock into a punchclock.
    #[command(visible_alias = "i")]
    In {
        /// Name of the clock to punch into.
        name: TimerName,

        /// Create the clock without asking if it does not exist.
        #[arg(short, long)]
        yes: bool,
    },

    /// Clock out of a punchclock.
    #[command(visible_alias = "o")]
    Out {
        /// Name of the clock to punch out of.
        name: TimerName,
    },

    /// Show the most recent entry of a punchclock.
    #[command(visible_alias = "s")]
    Show {
        /// Name of the clock to show.
        name: TimerName,
    },

    /// Delete a punchclock and all of its history.
    #[command(visible_alias = "d")]
    Delete {
        /// Name of the clock to delete.
        name: TimerName,
    },

    /// Chart the most recent days of a punchclock.
    #[command(visible_alias = "p")]
    Plot {
        /// Name of the clock to chart.
        name: TimerName,

        /// Number of days to display.
        #[arg(short, long)]
        days: Option<NonZeroU32>,

        /// Skip days that do not have any time recorded on them.
        #[arg(short, long)]
        skip_empty: bool,

        /// Output the chart data as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Chart a punchclock between two dates.
    #[command(visible_alias = "pd")]
    PlotDates {
        /// Name of the clock to chart.
        name: TimerName,

        /// Start of the date range (YYYY-MM-DD).
        #[arg(value_parser = parse_date)]
        start: NaiveDate,

        /// End of the date range (YYYY-MM-DD).
        #[arg(value_parser = parse_date)]
        end: NaiveDate,

        /// Skip days that do not have any time recorded on them.
        #[arg(short, long)]
        skip_empty: bool,

        /// Output the chart data as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Total time clocked since a date.
    #[command(visible_alias = "t")]
    Total {
        /// Name of the clock to total.
        name: TimerName,

        /// Earliest date to count (YYYY-MM-DD).
        #[arg(value_parser = parse_date)]
        since: NaiveDate,
    },

    /// List all punchclocks.
    #[command(visible_alias = "l")]
    List,

    /// List punchclocks that are currently clocked in.
    #[command(visible_alias = "r")]
    Running,
}
