//! Core library for the TourMate trip planning client.
//!
//! Each TourMate form (itinerary, summarizer, packing & safety guide, budget
//! helper) follows the same pipeline:
//!
//! ```text
//! ┌─────────────┐   ┌─────────────┐   ┌─────────────┐   ┌──────────────────┐
//! │ Field Model │──▶│  FormState  │──▶│ to_payload  │──▶│RequestOrchestrator│──▶ SubmissionStatus
//! │  (fields)   │   │  (state)    │   │ (payload)   │   │    (client)       │
//! └─────────────┘   └─────────────┘   └─────────────┘   └──────────────────┘
//! ```
//!
//! The four forms are not separate code paths. They are [`FormDescriptor`]s
//! in [`forms`] driving one engine, [`FormSession`].
//!
//! # Quick Start
//!
//! ```no_run
//! use tourmate_core::{forms::BUDGET_HELPER, FormSession, OrchestratorBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let orchestrator = OrchestratorBuilder::new().build()?;
//!
//! let mut session = FormSession::new(&BUDGET_HELPER);
//! session.set_field("destination", "Kyoto, Japan")?;
//! session.set_field("duration-days", "7")?;
//! session.set_field("budget-level", "Mid-Range (Comfortable, Value-Focused)")?;
//! session.set_field("travelers", "2 adults")?;
//!
//! let status = session.submit(&orchestrator).await;
//! match status.result() {
//!     Some(markdown) => println!("{markdown}"),
//!     None => eprintln!("{status}"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod display;
pub mod error;
pub mod fields;
pub mod forms;
pub mod outcome;
pub mod payload;
pub mod session;
pub mod state;

// Re-export commonly used types
pub use client::{ApiConfig, OrchestratorBuilder, RequestOrchestrator};
pub use display::{FormCatalog, FormOverview};
pub use error::{Result, SubmitError, TourmateError};
pub use fields::{FieldKind, FieldSpec, FormModel};
pub use forms::{FormDescriptor, FormKind, OutputFormat};
pub use outcome::{RequestOutcome, SubmissionStatus};
pub use payload::{to_payload, SubmissionPayload};
pub use session::FormSession;
pub use state::FormState;
