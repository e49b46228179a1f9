//! Declarative description of form inputs.
//!
//! A [`FormModel`] is an ordered list of [`FieldSpec`]s. The model drives
//! everything downstream: which keys a [`FormState`](crate::state::FormState)
//! may hold, which fields must be present before submission, and how each raw
//! value is shaped for the wire by the [payload mapper](crate::payload).

use std::fmt;

/// How a field's raw value is interpreted when the payload is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-line free text.
    Text,
    /// Multi-line free text (pasted content).
    LongText,
    /// Whole number, parsed at mapping time.
    Number,
    /// Calendar date in `YYYY-MM-DD` form, parsed at mapping time.
    Date,
    /// One value picked from a fixed, ordered list. The list is offered to
    /// the user but not enforced.
    Choice(&'static [&'static str]),
    /// Comma-separated list of free-text entries.
    MultiChoice,
}

impl FieldKind {
    /// Short lowercase name used in listings.
    pub fn name(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::LongText => "long text",
            FieldKind::Number => "number",
            FieldKind::Date => "date",
            FieldKind::Choice(_) => "choice",
            FieldKind::MultiChoice => "comma list",
        }
    }

    /// The offered choices, empty for non-choice kinds.
    pub fn choices(&self) -> &'static [&'static str] {
        match self {
            FieldKind::Choice(choices) => choices,
            _ => &[],
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One form input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Internal name, also the CLI flag name.
    pub name: &'static str,
    /// Key used for this field in the submission payload.
    pub key: &'static str,
    /// Human readable label.
    pub label: &'static str,
    /// Example input shown as a hint.
    pub placeholder: &'static str,
    pub required: bool,
    pub kind: FieldKind,
    /// A blank value is sent as `""` instead of `null`.
    pub blank_as_empty: bool,
    /// The value is lowercased before it is sent.
    pub lowercase: bool,
}

impl FieldSpec {
    /// A required field whose payload key equals its name.
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            key: name,
            label: name,
            placeholder: "",
            required: true,
            kind,
            blank_as_empty: false,
            lowercase: false,
        }
    }

    /// An optional field whose payload key equals its name.
    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            required: false,
            ..Self::required(name, kind)
        }
    }

    /// Sets the payload key.
    pub const fn key(mut self, key: &'static str) -> Self {
        self.key = key;
        self
    }

    /// Sets the label.
    pub const fn label(mut self, label: &'static str) -> Self {
        self.label = label;
        self
    }

    /// Sets the placeholder hint.
    pub const fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Sends a blank value as the empty string, for keys the service
    /// declares as plain strings.
    pub const fn blank_as_empty(mut self) -> Self {
        self.blank_as_empty = true;
        self
    }

    /// Sends the value lowercased.
    pub const fn lowercase(mut self) -> Self {
        self.lowercase = true;
        self
    }
}

/// Ordered field list of one form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormModel {
    fields: &'static [FieldSpec],
}

impl FormModel {
    pub const fn new(fields: &'static [FieldSpec]) -> Self {
        Self { fields }
    }

    /// All fields in declaration order.
    pub fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    /// Looks a field up by its internal name.
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|spec| spec.name == name)
    }

    /// Fields that must be non-blank before the form can be submitted.
    pub fn required_fields(&self) -> impl Iterator<Item = &'static FieldSpec> {
        self.fields.iter().filter(|spec| spec.required)
    }

    /// Checks the model's structural invariants.
    ///
    /// Returns a description of the first violation found: a choice field
    /// without choices, a choice list containing the empty selection, or a
    /// duplicated name or payload key.
    pub fn check(&self) -> std::result::Result<(), String> {
        for (index, spec) in self.fields.iter().enumerate() {
            if let FieldKind::Choice(choices) = spec.kind {
                if choices.is_empty() {
                    return Err(format!("choice field '{}' has no choices", spec.name));
                }
                if choices.iter().any(|choice| choice.trim().is_empty()) {
                    return Err(format!(
                        "choice field '{}' offers the empty selection as a choice",
                        spec.name
                    ));
                }
            }
            let earlier = &self.fields[..index];
            if earlier.iter().any(|other| other.name == spec.name) {
                return Err(format!("duplicate field name '{}'", spec.name));
            }
            if earlier.iter().any(|other| other.key == spec.key) {
                return Err(format!("duplicate payload key '{}'", spec.key));
            }
        }
        Ok(())
    }
}

/// True when the value is empty after trimming whitespace.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZES: &[&str] = &["Small", "Large"];
    const FIELDS: &[FieldSpec] = &[
        FieldSpec::required("city-name", FieldKind::Text).key("city"),
        FieldSpec::optional("size", FieldKind::Choice(SIZES)),
    ];

    #[test]
    fn test_builder_defaults_key_to_name() {
        let spec = FieldSpec::optional("travel-month", FieldKind::Text);
        assert_eq!(spec.key, "travel-month");
        assert!(!spec.required);
        assert_eq!(spec.kind.choices().len(), 0);
        assert!(!spec.blank_as_empty);
        assert!(!spec.lowercase);

        let spec = spec.blank_as_empty().lowercase();
        assert!(spec.blank_as_empty);
        assert!(spec.lowercase);
    }

    #[test]
    fn test_lookup_and_required() {
        let model = FormModel::new(FIELDS);
        assert_eq!(model.field("city-name").map(|f| f.key), Some("city"));
        assert!(model.field("city").is_none());
        let required: Vec<_> = model.required_fields().map(|f| f.name).collect();
        assert_eq!(required, vec!["city-name"]);
        assert!(model.check().is_ok());
    }

    #[test]
    fn test_check_rejects_empty_choices() {
        const BAD: &[FieldSpec] = &[FieldSpec::required("pick", FieldKind::Choice(&[]))];
        let err = FormModel::new(BAD).check().unwrap_err();
        assert!(err.contains("no choices"));
    }

    #[test]
    fn test_check_rejects_blank_choice() {
        const BAD: &[FieldSpec] = &[FieldSpec::required("pick", FieldKind::Choice(&["A", " "]))];
        assert!(FormModel::new(BAD).check().is_err());
    }

    #[test]
    fn test_check_rejects_duplicate_keys() {
        const BAD: &[FieldSpec] = &[
            FieldSpec::required("a", FieldKind::Text).key("x"),
            FieldSpec::required("b", FieldKind::Text).key("x"),
        ];
        let err = FormModel::new(BAD).check().unwrap_err();
        assert!(err.contains("duplicate payload key"));
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("  \n\t"));
        assert!(!is_blank(" a "));
    }
}
