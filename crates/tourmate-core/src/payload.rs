//! Mapping from form values to the request body the service expects.
//!
//! Rules per [`FieldKind`]:
//!
//! | kind                           | blank optional | otherwise                                  |
//! |--------------------------------|----------------|--------------------------------------------|
//! | `Text`, `LongText`, `Choice`   | `null`         | value unchanged                            |
//! | `Number`                       | `null`         | integer, or `null` if it does not parse    |
//! | `Date`                         | `null`         | `YYYY-MM-DD`, or the raw value if invalid  |
//! | `MultiChoice`                  | `[]`           | comma-split, trimmed, empty entries dropped|
//!
//! Required fields are never blank once the form is submittable, so they go
//! through the "otherwise" column. Two per-field flags adjust the table: a
//! [`blank_as_empty`](FieldSpec::blank_as_empty) field sends `""` instead of
//! `null`, and a [`lowercase`](FieldSpec::lowercase) field sends its text
//! lowercased.

use std::fmt;

use jiff::civil::Date;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::{
    fields::{is_blank, FieldKind, FieldSpec, FormModel},
    state::FormState,
};

/// Request body derived from a [`FormState`], keyed by payload keys in field
/// order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SubmissionPayload(Map<String, Value>);

impl SubmissionPayload {
    /// Value sent for a payload key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Serialized request body.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(&self.0)?)
    }
}

impl fmt::Display for SubmissionPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Value::Object(self.0.clone()))
    }
}

/// Builds the submission payload for `state` according to `model`.
///
/// Pure: the same state and model always yield the same payload. Fields of
/// `model` that `state` does not know are sent as if blank.
pub fn to_payload(state: &FormState, model: &FormModel) -> SubmissionPayload {
    let mut body = Map::with_capacity(model.fields().len());
    for spec in model.fields() {
        let raw = state.get(spec.name).unwrap_or_default();
        body.insert(spec.key.to_string(), map_value(spec, raw));
    }
    SubmissionPayload(body)
}

fn map_value(spec: &FieldSpec, raw: &str) -> Value {
    match spec.kind {
        FieldKind::MultiChoice => {
            Value::Array(split_list(raw).into_iter().map(Value::String).collect())
        }
        _ if !spec.required && is_blank(raw) => {
            if spec.blank_as_empty {
                Value::String(String::new())
            } else {
                Value::Null
            }
        }
        FieldKind::Number => parse_number(raw),
        FieldKind::Date => Value::String(normalize_date(raw)),
        FieldKind::Text | FieldKind::LongText | FieldKind::Choice(_) if spec.lowercase => {
            Value::String(raw.to_lowercase())
        }
        FieldKind::Text | FieldKind::LongText | FieldKind::Choice(_) => {
            Value::String(raw.to_string())
        }
    }
}

/// Splits a comma-separated list into trimmed, non-empty entries.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

// Non-numeric input has no integer rendition; JSON has no NaN, so it goes
// out as null and the service rejects it.
fn parse_number(raw: &str) -> Value {
    raw.trim()
        .parse::<i64>()
        .map(Value::from)
        .unwrap_or(Value::Null)
}

fn normalize_date(raw: &str) -> String {
    match raw.trim().parse::<Date>() {
        Ok(date) => date.to_string(),
        Err(_) => raw.to_string(),
    }
}
