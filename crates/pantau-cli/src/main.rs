//! Pantau CLI Application
//!
//! Command-line interface for the procurement timeline monitor.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::{Cli, SummaryArgs};
use log::info;
use pantau_core::MonitorBuilder;
use renderer::TerminalRenderer;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        snapshot,
        today,
        locale,
        no_color,
        command,
    } = Args::parse();

    let monitor = MonitorBuilder::new()
        .with_snapshot_path(snapshot)
        .with_today(today)
        .with_locale(locale.into())
        .build()
        .context("Failed to load program snapshot")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Pantau started");

    let cli = Cli::new(monitor, renderer);
    match command {
        Some(Timeline(args)) => cli.show_timeline(&args),
        Some(Stages(args)) => cli.list_stages(&args),
        Some(Columns(args)) => cli.list_columns(&args),
        Some(Summary(args)) => cli.show_summary(&args),
        None => cli.show_summary(&SummaryArgs::default()),
    }
}
