//! The four TourMate forms.
//!
//! Every form is an instance of the same engine. A [`FormDescriptor`] holds
//! everything that differs between them: the field model, the service
//! endpoint, the response field carrying the generated text, and the
//! user-facing messages.

use std::fmt;
use std::str::FromStr;

use crate::{
    error::TourmateError,
    fields::{FieldKind, FieldSpec, FormModel},
};

/// How the generated text should be displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Structured markup (headings, lists, tables).
    Markup,
    /// Shown verbatim.
    Plain,
}

/// Configuration of one form instance of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormDescriptor {
    /// Short identifier, also the CLI subcommand.
    pub name: &'static str,
    pub title: &'static str,
    pub intro: &'static str,
    pub model: FormModel,
    /// Path appended to the API base URL.
    pub endpoint: &'static str,
    /// Field of the success body holding the generated text.
    pub response_key: &'static str,
    /// Shown instead of the result when the response field is missing or empty.
    pub fallback: &'static str,
    /// Banner shown when a required field is blank.
    pub validation_message: &'static str,
    /// Progress text shown while a request is in flight.
    pub loading_label: &'static str,
    pub output: OutputFormat,
}

const TRAVEL_TYPES: &[&str] = &[
    "Historical",
    "Adventure",
    "Children",
    "Food",
    "Culture",
    "Nature/Natural",
];

const TRAVEL_STYLES: &[&str] = &[
    "Adventure Seeker",
    "Relaxing Vacation",
    "Cultural Explorer",
    "Budget Traveler",
    "Luxury Trip",
    "Family Trip",
    "Solo Trip",
    "Romantic Getaway",
    "Foodie Trip",
    "Business Trip",
];

const BUDGET_LEVELS: &[&str] = &[
    "Frugal (Backpacking/Hostels)",
    "Mid-Range (Comfortable, Value-Focused)",
    "Comfort (Good Hotels, Varied Dining)",
    "Luxury (High-End Experiences)",
];

const ACCOMMODATION_OPTIONS: &[&str] = &[
    "Hostel/Guesthouse",
    "Budget Hotel",
    "Mid-Range Hotel",
    "Boutique Hotel",
    "Luxury Hotel/Resort",
    "Vacation Rental (Airbnb)",
    "Camping",
];

const DINING_OPTIONS: &[&str] = &[
    "Street Food/Supermarket",
    "Casual Local Restaurants",
    "Mix of Casual & Mid-Range",
    "Fine Dining Focus",
];

const ITINERARY_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("country", FieldKind::Text)
        .label("Travel Country")
        .placeholder("e.g. France"),
    FieldSpec::required("state-city", FieldKind::Text)
        .key("city")
        .label("State / City")
        .placeholder("e.g. Paris"),
    FieldSpec::optional("destination", FieldKind::Text)
        .label("Destination")
        .placeholder("Eiffel Tower, Louvre, etc. (AI will choose if blank)")
        .blank_as_empty(),
    FieldSpec::required("start-date", FieldKind::Date)
        .key("start_date")
        .label("Start Date")
        .placeholder("e.g. 2025-06-01"),
    FieldSpec::required("end-date", FieldKind::Date)
        .key("end_date")
        .label("End Date")
        .placeholder("e.g. 2025-06-07"),
    FieldSpec::required("travel-type", FieldKind::Choice(TRAVEL_TYPES))
        .key("travel_type")
        .label("Travel Type")
        .lowercase(),
    FieldSpec::optional("additional-info", FieldKind::Text)
        .key("additional_info")
        .label("Additional Info")
        .placeholder("e.g. Prefer morning activities"),
];

const SUMMARIZER_FIELDS: &[FieldSpec] = &[FieldSpec::required("text-content", FieldKind::LongText)
    .key("text_content")
    .label("Travel Content")
    .placeholder("A detailed travel diary, a long article about a destination, etc.")];

const PACKING_SAFETY_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("destination", FieldKind::Text)
        .label("Destination")
        .placeholder("e.g. Tokyo, Japan"),
    FieldSpec::required("travel-dates", FieldKind::Text)
        .key("travel_dates")
        .label("Travel Dates")
        .placeholder("e.g. early July for 5 days"),
    FieldSpec::required("travel-style", FieldKind::Choice(TRAVEL_STYLES))
        .key("travel_style")
        .label("Travel Style"),
    FieldSpec::optional("activities", FieldKind::MultiChoice)
        .label("Planned Activities")
        .placeholder("e.g. hiking, swimming, museum visits, fine dining"),
    FieldSpec::optional("travelers", FieldKind::Text)
        .label("Who are you traveling with?")
        .placeholder("e.g. solo female traveler, family with young kids, couple"),
];

const BUDGET_HELPER_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("destination", FieldKind::Text)
        .label("Destination")
        .placeholder("e.g. Rome, Italy"),
    FieldSpec::required("duration-days", FieldKind::Number)
        .key("duration_days")
        .label("Duration (in days)")
        .placeholder("e.g. 7"),
    FieldSpec::required("budget-level", FieldKind::Choice(BUDGET_LEVELS))
        .key("budget_level")
        .label("Budget Level"),
    FieldSpec::required("travelers", FieldKind::Text)
        .label("Number & Type of Travelers")
        .placeholder("e.g. solo, 2 adults, family with 2 kids"),
    FieldSpec::optional("accommodation", FieldKind::Choice(ACCOMMODATION_OPTIONS))
        .key("accommodation_preference")
        .label("Accommodation Preference"),
    FieldSpec::optional("dining", FieldKind::Choice(DINING_OPTIONS))
        .key("dining_preference")
        .label("Dining Preference"),
    FieldSpec::optional("activities", FieldKind::MultiChoice)
        .key("activities_interest")
        .label("Key Activities / Interests")
        .placeholder("e.g. museums, outdoor adventures, shopping, nightlife"),
    FieldSpec::optional("travel-month", FieldKind::Text)
        .key("travel_month")
        .label("Travel Month/Season")
        .placeholder("e.g. July, Winter, Cherry Blossom season"),
];

pub const ITINERARY: FormDescriptor = FormDescriptor {
    name: "itinerary",
    title: "Travel Itinerary Planner",
    intro: "Fill in your travel details and get a day-by-day itinerary tailored to your preferences.",
    model: FormModel::new(ITINERARY_FIELDS),
    endpoint: "/generate/generate-itinerary",
    response_key: "itinerary_text",
    fallback: "No itinerary returned from the AI. Please try again with different inputs.",
    validation_message:
        "Please fill in all required fields (Country, City, Start Date, End Date, Travel Type).",
    loading_label: "Generating your plan...",
    output: OutputFormat::Markup,
};

pub const SUMMARIZER: FormDescriptor = FormDescriptor {
    name: "summarize",
    title: "Travel Content Summarizer",
    intro: "Paste any travel-related text and get a concise summary of its highlights and tips.",
    model: FormModel::new(SUMMARIZER_FIELDS),
    endpoint: "/content/summarize-travel-text/",
    response_key: "summary",
    fallback: "Could not generate a summary. Please try again or provide different text.",
    validation_message: "Please paste some text content to summarize.",
    loading_label: "Summarizing content...",
    output: OutputFormat::Plain,
};

pub const PACKING_SAFETY: FormDescriptor = FormDescriptor {
    name: "packing",
    title: "Safety & Packing Navigator",
    intro: "Get a packing checklist and safety guide for your destination, travel style and activities.",
    model: FormModel::new(PACKING_SAFETY_FIELDS),
    endpoint: "/guide/packing-safety/",
    response_key: "guide_text",
    fallback: "Could not generate a guide. Please try again with different inputs.",
    validation_message:
        "Please fill in all required fields: Destination, Travel Dates, and Travel Style.",
    loading_label: "Generating guide...",
    output: OutputFormat::Markup,
};

pub const BUDGET_HELPER: FormDescriptor = FormDescriptor {
    name: "budget",
    title: "Travel Expense & Budget Helper",
    intro: "Get an itemized expense breakdown and money-saving tips for your next trip.",
    model: FormModel::new(BUDGET_HELPER_FIELDS),
    endpoint: "/financial/budget-helper/",
    response_key: "budget_details",
    fallback: "Could not generate a budget guide. Please try again with different inputs.",
    validation_message:
        "Please fill in all required fields: Destination, Duration, Budget Level, and Travelers.",
    loading_label: "Generating budget...",
    output: OutputFormat::Markup,
};

/// Every form in the catalog, in menu order.
pub const ALL_FORMS: [&FormDescriptor; 4] = [&ITINERARY, &SUMMARIZER, &PACKING_SAFETY, &BUDGET_HELPER];

/// Selects one of the catalog forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    Itinerary,
    Summarizer,
    PackingSafety,
    BudgetHelper,
}

impl FormKind {
    pub fn descriptor(self) -> &'static FormDescriptor {
        match self {
            FormKind::Itinerary => &ITINERARY,
            FormKind::Summarizer => &SUMMARIZER,
            FormKind::PackingSafety => &PACKING_SAFETY,
            FormKind::BudgetHelper => &BUDGET_HELPER,
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.descriptor().name)
    }
}

impl FromStr for FormKind {
    type Err = TourmateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "itinerary" => Ok(FormKind::Itinerary),
            "summarize" | "summarizer" => Ok(FormKind::Summarizer),
            "packing" | "packing-safety" => Ok(FormKind::PackingSafety),
            "budget" | "budget-helper" => Ok(FormKind::BudgetHelper),
            other => Err(TourmateError::UnknownForm(other.to_string())),
        }
    }
}
