//! Taskboard CLI Application
//!
//! Command-line interface for the Taskboard task tracker.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use taskboard_core::{Preferences, TaskStoreBuilder};

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let store = TaskStoreBuilder::new()
        .with_database_path(database_file)
        .build()
        .context("Failed to initialize task store")?;

    let prefs = Preferences::load(store.storage());
    let renderer = TerminalRenderer::new(!no_color, prefs.dark_mode);

    info!("Taskboard started with {} tasks", store.len());

    Cli::new(store, renderer).run(command)
}
