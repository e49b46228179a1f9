use clap::{Parser, Subcommand};

use crate::cli::{BudgetArgs, FormsArgs, ItineraryArgs, PackingArgs, SummarizeArgs};

/// Command-line client for the TourMate trip planning service
///
/// Each subcommand fills in one TourMate form, sends it to the generation
/// service and prints the generated itinerary, summary or guide. Required
/// fields are checked before anything is sent.
#[derive(Parser)]
#[command(version, about, name = "tourmate")]
pub struct Args {
    /// Base URL of the TourMate service. Defaults to http://localhost:8000
    #[arg(long, global = true, env = tourmate_core::client::BASE_URL_ENV)]
    pub api_base_url: Option<String>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the TourMate CLI
///
/// One command per form, plus `forms` to inspect what each form accepts.
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a day-by-day travel itinerary
    #[command(alias = "i")]
    Itinerary(ItineraryArgs),
    /// Summarize travel blog posts or articles
    #[command(alias = "s")]
    Summarize(SummarizeArgs),
    /// Build a packing checklist and safety guide
    #[command(alias = "p")]
    Packing(PackingArgs),
    /// Estimate a trip budget with money-saving tips
    #[command(alias = "b")]
    Budget(BudgetArgs),
    /// Show the fields and choices of the forms
    Forms(FormsArgs),
}
