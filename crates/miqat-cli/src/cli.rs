use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for the `miqat` binary.
#[derive(Debug, Parser)]
#[command(name = "miqat", version, about = "Miqat - Hijri dates, prayer times, and Qibla")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Today's Hijri date (with the configured adjustment) and any
    /// almanac entries falling on it
    Today {
        /// Gregorian date to treat as "today" (YYYY-MM-DD; defaults to the
        /// local date)
        #[arg(long)]
        date: Option<String>,

        /// Path to an almanac JSON fixture to check for commemorations
        #[arg(long)]
        almanac: Option<PathBuf>,
    },

    /// Convert a Gregorian date to its tabular Hijri date, unadjusted
    Convert {
        /// Gregorian date (YYYY-MM-DD)
        date: String,
    },

    /// Print a day's prayer times from a saved timetable
    Times {
        /// Path to a serialized timetable (JSON)
        #[arg(long)]
        table: PathBuf,

        /// Day to look up (YYYY-MM-DD; defaults to the local date)
        #[arg(long)]
        date: Option<String>,

        /// Print only the next upcoming prayer
        #[arg(long)]
        next: bool,
    },

    /// Compass bearing from an observer to the Kaaba
    Qibla {
        /// Observer latitude in degrees (falls back to the configured
        /// location)
        #[arg(long)]
        lat: Option<f64>,

        /// Observer longitude in degrees (falls back to the configured
        /// location)
        #[arg(long)]
        lon: Option<f64>,

        /// Device heading in degrees; when given, the bearing is printed
        /// relative to it
        #[arg(long)]
        heading: Option<f64>,
    },
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn convert_takes_a_positional_date() {
        let cli = Cli::try_parse_from(["miqat", "convert", "2024-01-01"]).unwrap();
        match cli.command {
            Commands::Convert { date } => assert_eq!(date, "2024-01-01"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["miqat", "--verbose", "today"]).unwrap();
        assert!(cli.verbose);
        assert!(!cli.quiet);
        assert!(matches!(cli.command, Commands::Today { .. }));
    }

    #[test]
    fn times_requires_a_table_path() {
        assert!(Cli::try_parse_from(["miqat", "times"]).is_err());
        let cli = Cli::try_parse_from(["miqat", "times", "--table", "t.json", "--next"]).unwrap();
        match cli.command {
            Commands::Times { next, .. } => assert!(next),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
