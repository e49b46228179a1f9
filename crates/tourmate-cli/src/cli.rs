//! Command-line form definitions and command handling.
//!
//! Every flag is optional at the clap level. Presence of required fields is
//! checked by the form engine, so a missing flag produces the same banner a
//! user of any other TourMate front end would see:
//!
//! ```text
//! User Input → Form Args (clap) → field values → FormSession → SubmissionStatus
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Args;
use log::info;
use tokio::io::AsyncReadExt;
use tourmate_core::{
    forms::{self, ALL_FORMS},
    FormCatalog, FormDescriptor, FormKind, FormOverview, FormSession, RequestOrchestrator,
    SubmissionStatus,
};

use crate::renderer::TerminalRenderer;

/// Clap arguments that fill in one form.
pub trait FormArgs {
    /// The form these arguments fill in.
    const FORM: &'static FormDescriptor;

    /// Field values keyed by field name. Absent flags are sent as blank.
    fn field_values(self) -> Vec<(&'static str, String)>;
}

/// Generate a day-by-day travel itinerary
#[derive(Args)]
pub struct ItineraryArgs {
    #[arg(long, help = "Country you are travelling to, e.g. France")]
    pub country: Option<String>,
    #[arg(long, visible_alias = "city", help = "State or city, e.g. Paris")]
    pub state_city: Option<String>,
    #[arg(
        long,
        help = "Specific places to visit (optional, chosen for you if blank)"
    )]
    pub destination: Option<String>,
    #[arg(long, help = "First day of the trip, YYYY-MM-DD")]
    pub start_date: Option<String>,
    #[arg(long, help = "Last day of the trip, YYYY-MM-DD")]
    pub end_date: Option<String>,
    #[arg(
        long,
        help = "Historical, Adventure, Children, Food, Culture or Nature/Natural (any case)"
    )]
    pub travel_type: Option<String>,
    #[arg(long, help = "Anything else the planner should know (optional)")]
    pub additional_info: Option<String>,
}

impl FormArgs for ItineraryArgs {
    const FORM: &'static FormDescriptor = &forms::ITINERARY;

    fn field_values(self) -> Vec<(&'static str, String)> {
        vec![
            ("country", self.country.unwrap_or_default()),
            ("state-city", self.state_city.unwrap_or_default()),
            ("destination", self.destination.unwrap_or_default()),
            ("start-date", self.start_date.unwrap_or_default()),
            ("end-date", self.end_date.unwrap_or_default()),
            ("travel-type", self.travel_type.unwrap_or_default()),
            ("additional-info", self.additional_info.unwrap_or_default()),
        ]
    }
}

/// Summarize travel content
///
/// The text comes from `--text`, or from `--file` (use `-` for stdin).
#[derive(Args)]
pub struct SummarizeArgs {
    #[arg(short, long, help = "Travel content to summarize")]
    pub text: Option<String>,
    #[arg(
        short,
        long,
        conflicts_with = "text",
        help = "Read the content from a file, or '-' for stdin"
    )]
    pub file: Option<PathBuf>,
}

impl SummarizeArgs {
    /// Replaces `--file` with the file's content.
    async fn load(self) -> Result<Self> {
        let file = match self.file {
            Some(file) => file,
            None => return Ok(self),
        };
        let text = if file.as_os_str() == "-" {
            let mut text = String::new();
            tokio::io::stdin()
                .read_to_string(&mut text)
                .await
                .context("Failed to read travel content from stdin")?;
            text
        } else {
            tokio::fs::read_to_string(&file)
                .await
                .with_context(|| format!("Failed to read travel content from {}", file.display()))?
        };
        Ok(Self {
            text: Some(text),
            file: None,
        })
    }
}

impl FormArgs for SummarizeArgs {
    const FORM: &'static FormDescriptor = &forms::SUMMARIZER;

    fn field_values(self) -> Vec<(&'static str, String)> {
        vec![("text-content", self.text.unwrap_or_default())]
    }
}

/// Build a packing checklist and safety guide
#[derive(Args)]
pub struct PackingArgs {
    #[arg(long, help = "Where you are going, e.g. Tokyo, Japan")]
    pub destination: Option<String>,
    #[arg(long, help = "When and how long, e.g. early July for 5 days")]
    pub travel_dates: Option<String>,
    #[arg(long, help = "e.g. Adventure Seeker, Budget Traveler, Family Trip")]
    pub travel_style: Option<String>,
    #[arg(long, help = "Planned activities as a comma-separated list (optional)")]
    pub activities: Option<String>,
    #[arg(long, help = "Who is travelling, e.g. couple with a toddler (optional)")]
    pub travelers: Option<String>,
}

impl FormArgs for PackingArgs {
    const FORM: &'static FormDescriptor = &forms::PACKING_SAFETY;

    fn field_values(self) -> Vec<(&'static str, String)> {
        vec![
            ("destination", self.destination.unwrap_or_default()),
            ("travel-dates", self.travel_dates.unwrap_or_default()),
            ("travel-style", self.travel_style.unwrap_or_default()),
            ("activities", self.activities.unwrap_or_default()),
            ("travelers", self.travelers.unwrap_or_default()),
        ]
    }
}

/// Estimate a trip budget
#[derive(Args)]
pub struct BudgetArgs {
    #[arg(long, help = "Where you are going, e.g. Rome, Italy")]
    pub destination: Option<String>,
    #[arg(long, help = "Trip length in days")]
    pub duration_days: Option<String>,
    #[arg(long, help = "Frugal, Mid-Range, Comfort or Luxury (see `tourmate forms budget`)")]
    pub budget_level: Option<String>,
    #[arg(long, help = "Number and type of travelers, e.g. 2 adults")]
    pub travelers: Option<String>,
    #[arg(long, help = "Preferred accommodation (optional)")]
    pub accommodation: Option<String>,
    #[arg(long, help = "Preferred dining style (optional)")]
    pub dining: Option<String>,
    #[arg(long, help = "Activities of interest as a comma-separated list (optional)")]
    pub activities: Option<String>,
    #[arg(long, help = "Month or season of travel (optional)")]
    pub travel_month: Option<String>,
}

impl FormArgs for BudgetArgs {
    const FORM: &'static FormDescriptor = &forms::BUDGET_HELPER;

    fn field_values(self) -> Vec<(&'static str, String)> {
        vec![
            ("destination", self.destination.unwrap_or_default()),
            ("duration-days", self.duration_days.unwrap_or_default()),
            ("budget-level", self.budget_level.unwrap_or_default()),
            ("travelers", self.travelers.unwrap_or_default()),
            ("accommodation", self.accommodation.unwrap_or_default()),
            ("dining", self.dining.unwrap_or_default()),
            ("activities", self.activities.unwrap_or_default()),
            ("travel-month", self.travel_month.unwrap_or_default()),
        ]
    }
}

/// Show the fields and choices of the forms
#[derive(Args)]
pub struct FormsArgs {
    #[arg(help = "Form to describe (itinerary, summarize, packing, budget); all if omitted")]
    pub form: Option<String>,
}

/// Command handler tying the orchestrator to terminal output.
pub struct Cli {
    orchestrator: RequestOrchestrator,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(orchestrator: RequestOrchestrator, renderer: TerminalRenderer) -> Self {
        Self {
            orchestrator,
            renderer,
        }
    }

    pub async fn summarize(&self, args: SummarizeArgs) -> Result<ExitCode> {
        let args = args.load().await?;
        self.run_form(args).await
    }

    /// Fills in the form from `args`, submits it and prints the outcome.
    ///
    /// The result goes to stdout. A failure banner goes to stderr and yields
    /// a failing exit code; it is not an error of the CLI itself.
    pub async fn run_form<A: FormArgs>(&self, args: A) -> Result<ExitCode> {
        let form = A::FORM;
        let mut session = FormSession::new(form);
        for (name, value) in args.field_values() {
            session.set_field(name, value)?;
        }

        if session.is_submittable() {
            eprintln!("{}", form.loading_label);
        }
        info!("Submitting {} form to {}", form.name, self.orchestrator.config().base_url());
        let status = session.submit(&self.orchestrator).await;

        match status {
            SubmissionStatus::Success(text) => {
                self.renderer.render_output(&text, form.output)?;
                Ok(ExitCode::SUCCESS)
            }
            SubmissionStatus::Failure(err) => {
                eprintln!("{err}");
                Ok(ExitCode::FAILURE)
            }
            SubmissionStatus::Idle | SubmissionStatus::Pending => {
                bail!("{} form submission did not settle", form.name)
            }
        }
    }

    pub fn show_forms(&self, args: FormsArgs) -> Result<ExitCode> {
        let markdown = match args.form {
            Some(name) => {
                let kind: FormKind = name.parse()?;
                FormOverview(kind.descriptor()).to_string()
            }
            None => {
                let overviews: Vec<String> = ALL_FORMS
                    .iter()
                    .map(|form| FormOverview(form).to_string())
                    .collect();
                format!("{}\n{}", FormCatalog(&ALL_FORMS), overviews.join("\n"))
            }
        };
        self.renderer.render(&markdown)?;
        Ok(ExitCode::SUCCESS)
    }
}
