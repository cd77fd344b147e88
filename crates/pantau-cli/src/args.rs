use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use jiff::civil::Date;
use pantau_core::{locale::Locale, models::dates::parse_date_arg};

use crate::cli::{SummaryArgs, ViewArgs};

/// Terminal dashboard for procurement program timelines
///
/// Pantau reads a program snapshot exported from the monitoring backend and
/// shows its procurement stages as a weekly timeline, a flat stage listing,
/// or status counts. Statuses are evaluated as of today unless `--today`
/// pins another date.
#[derive(Parser)]
#[command(version, about, name = "pantau")]
pub struct Args {
    /// Path to the program snapshot (JSON). Defaults to
    /// $XDG_DATA_HOME/pantau/program.json
    #[arg(long, global = true)]
    pub snapshot: Option<PathBuf>,

    /// Evaluate statuses as of this date (YYYY-MM-DD) instead of today
    #[arg(long, global = true, value_parser = parse_today)]
    pub today: Option<Date>,

    /// Language of month names and week labels
    #[arg(long, global = true, value_enum, default_value_t = LocaleArg::Id)]
    pub locale: LocaleArg,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Pantau CLI
///
/// Without a command, the program summary is shown.
#[derive(Subcommand)]
pub enum Commands {
    /// Show the weekly timeline grid
    #[command(alias = "t")]
    Timeline(ViewArgs),
    /// List stages with their dates and status
    #[command(aliases = ["s", "ls"])]
    Stages(ViewArgs),
    /// Show the program header and status counts
    Summary(SummaryArgs),
    /// List the weekly columns of the timeline
    Columns(ViewArgs),
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum LocaleArg {
    /// Bahasa Indonesia
    Id,
    /// English
    En,
}

impl From<LocaleArg> for Locale {
    fn from(val: LocaleArg) -> Self {
        match val {
            LocaleArg::Id => Locale::Indonesian,
            LocaleArg::En => Locale::English,
        }
    }
}

fn parse_today(raw: &str) -> Result<Date, String> {
    parse_date_arg("today", raw).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = Args::try_parse_from([
            "pantau",
            "timeline",
            "--today",
            "2024-03-15",
            "--locale",
            "en",
        ])
        .unwrap();

        assert_eq!(args.today, Some(date(2024, 3, 15)));
        assert!(args.locale == LocaleArg::En);
        assert!(matches!(args.command, Some(Commands::Timeline(_))));
    }

    #[test]
    fn test_invalid_today_is_rejected() {
        assert!(Args::try_parse_from(["pantau", "--today", "kemarin"]).is_err());
    }

    #[test]
    fn test_no_command_defaults() {
        let args = Args::try_parse_from(["pantau"]).unwrap();
        assert!(args.command.is_none());
        assert!(args.locale == LocaleArg::Id);
        assert_eq!(Locale::from(args.locale), Locale::Indonesian);
    }
}
