//! Command handlers and their clap argument wrappers.
//!
//! Argument structs carry clap-specific attributes and convert into the
//! framework-free query types of `pantau-core`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Monitor
//! ```

use std::fmt::Write as _;

use anyhow::Result;
use clap::{Args, ValueEnum};
use log::debug;
use pantau_core::{
    display::OptionalDate, models::StatusFilter, params::TimelineQuery, Monitor,
};
use serde::Serialize;
use serde_json::json;

use crate::renderer::TerminalRenderer;

/// Options shared by every view over the stages of a program
#[derive(Args, Default)]
pub struct ViewArgs {
    /// Keep only stages with this status
    #[arg(short, long, value_enum, default_value_t = StatusArg::All)]
    pub status: StatusArg,

    /// Show only the procurement with this id
    #[arg(short, long)]
    pub procurement: Option<u64>,

    /// Case-insensitive text matched against stage and transaction names
    #[arg(short = 'q', long)]
    pub search: Option<String>,

    /// Print JSON instead of formatted text
    #[arg(long)]
    pub json: bool,
}

impl From<&ViewArgs> for TimelineQuery {
    fn from(val: &ViewArgs) -> Self {
        TimelineQuery {
            status: val.status.into(),
            procurement: val.procurement,
            search: val.search.clone(),
        }
    }
}

#[derive(Args, Default)]
pub struct SummaryArgs {
    /// Print JSON instead of formatted text
    #[arg(long)]
    pub json: bool,
}

#[derive(Copy, Clone, Default, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    /// Every stage
    #[default]
    #[value(alias = "semua")]
    All,
    /// Finished or running within the planned window
    #[value(alias = "aman")]
    OnTime,
    /// Finished after, or still open past, the planned end
    #[value(alias = "terlambat")]
    Late,
    /// No dates to judge against
    Undetermined,
}

impl From<StatusArg> for StatusFilter {
    fn from(val: StatusArg) -> Self {
        match val {
            StatusArg::All => StatusFilter::All,
            StatusArg::OnTime => StatusFilter::OnTime,
            StatusArg::Late => StatusFilter::Late,
            StatusArg::Undetermined => StatusFilter::Undetermined,
        }
    }
}

/// Runs commands against one loaded monitor.
pub struct Cli {
    monitor: Monitor,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(monitor: Monitor, renderer: TerminalRenderer) -> Self {
        Self { monitor, renderer }
    }

    pub fn show_timeline(&self, args: &ViewArgs) -> Result<()> {
        let query = TimelineQuery::from(args);
        let grid = self.monitor.timeline(&query);
        debug!("Rendering timeline with {} rows", grid.rows().count());

        if args.json {
            return print_json(&grid);
        }

        let mut output = self.heading(&query);
        write!(output, "{grid}")?;
        self.renderer.render(&output)
    }

    pub fn list_stages(&self, args: &ViewArgs) -> Result<()> {
        let query = TimelineQuery::from(args);
        let rows = self.monitor.stage_rows(&query);

        if args.json {
            return print_json(&rows);
        }

        let mut output = self.heading(&query);
        write!(output, "{rows}")?;
        self.renderer.render(&output)
    }

    pub fn list_columns(&self, args: &ViewArgs) -> Result<()> {
        let grid = self.monitor.timeline(&TimelineQuery::from(args));

        if args.json {
            return print_json(&json!({
                "range": grid.range,
                "columns": grid.columns,
                "months": grid.months,
            }));
        }

        let mut output = format!(
            "## Columns {} → {}\n\n",
            grid.range.start, grid.range.end
        );
        for month in &grid.months {
            writeln!(
                output,
                "- {} {}: {} columns",
                month.month_name, month.year, month.span
            )?;
        }
        writeln!(output)?;
        for (index, column) in grid.columns.iter().enumerate() {
            writeln!(
                output,
                "{index:>3}. {} {} {} (from {})",
                column.label,
                column.month_name,
                column.year,
                OptionalDate(Some(column.start))
            )?;
        }
        self.renderer.render(&output)
    }

    pub fn show_summary(&self, args: &SummaryArgs) -> Result<()> {
        let program = self.monitor.program();
        let summary = self.monitor.summary();

        if args.json {
            return print_json(&json!({
                "program": {
                    "id": program.id,
                    "name": program.name,
                    "agency": program.agency_name(),
                    "budget": program.budget,
                    "priority": program.priority,
                },
                "today": self.monitor.today(),
                "summary": summary,
            }));
        }

        let output = format!(
            "{program}\n{summary}\nAs of {}\n",
            self.monitor.today()
        );
        self.renderer.render(&output)
    }

    /// Program title plus a line describing any active filter.
    fn heading(&self, query: &TimelineQuery) -> String {
        let mut heading = format!("# {}\n\n", self.monitor.program().name);
        if !query.is_unfiltered() {
            let mut parts = Vec::new();
            if query.status != StatusFilter::All {
                parts.push(format!("status {}", query.status));
            }
            if let Some(id) = query.procurement {
                parts.push(format!("procurement {id}"));
            }
            if let Some(search) = query.search.as_deref().filter(|s| !s.trim().is_empty()) {
                parts.push(format!("matching '{}'", search.trim()));
            }
            heading.push_str(&format!("Filter: {}\n\n", parts.join(", ")));
        }
        heading
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
