//! TourMate CLI Application
//!
//! Command-line front end for the TourMate trip planning service.

mod args;
mod cli;
mod renderer;

use std::process::ExitCode;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use tourmate_core::OrchestratorBuilder;
use Commands::*;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    env_logger::init();

    let Args {
        api_base_url,
        no_color,
        command,
    } = Args::parse();

    let orchestrator = OrchestratorBuilder::new()
        .with_base_url(api_base_url)
        .build()
        .context("Failed to initialize TourMate client")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("TourMate started against {}", orchestrator.config().base_url());

    let cli = Cli::new(orchestrator, renderer);
    match command {
        Itinerary(args) => cli.run_form(args).await,
        Summarize(args) => cli.summarize(args).await,
        Packing(args) => cli.run_form(args).await,
        Budget(args) => cli.run_form(args).await,
        Forms(args) => cli.show_forms(args),
    }
}
