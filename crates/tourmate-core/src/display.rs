//! Display wrappers for the form catalog.
//!
//! These format form descriptions as markdown so the CLI can hand them to
//! the same terminal renderer that shows generated results.

use std::fmt;

use crate::{fields::FieldSpec, forms::FormDescriptor};

/// Markdown description of one form: title, endpoint and a field table.
pub struct FormOverview<'a>(pub &'a FormDescriptor);

impl fmt::Display for FormOverview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let form = self.0;
        writeln!(f, "# {}", form.title)?;
        writeln!(f)?;
        writeln!(f, "{}", form.intro)?;
        writeln!(f)?;
        writeln!(f, "Command: `{}`, endpoint: `POST {}`", form.name, form.endpoint)?;
        writeln!(f)?;
        writeln!(f, "| Flag | Kind | Required | Example |")?;
        writeln!(f, "|:-|:-|:-:|:-|")?;
        for spec in form.model.fields() {
            writeln!(
                f,
                "| --{} | {} | {} | {} |",
                spec.name,
                spec.kind,
                if spec.required { "yes" } else { "no" },
                spec.placeholder
            )?;
        }
        for spec in form.model.fields() {
            write_choices(f, spec)?;
        }
        Ok(())
    }
}

fn write_choices(f: &mut fmt::Formatter<'_>, spec: &FieldSpec) -> fmt::Result {
    let choices = spec.kind.choices();
    if choices.is_empty() {
        return Ok(());
    }
    writeln!(f)?;
    writeln!(f, "## {} (--{})", spec.label, spec.name)?;
    writeln!(f)?;
    for choice in choices {
        writeln!(f, "- {choice}")?;
    }
    Ok(())
}

/// Markdown list of every form.
pub struct FormCatalog<'a>(pub &'a [&'a FormDescriptor]);

impl fmt::Display for FormCatalog<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No forms available.");
        }
        writeln!(f, "# Forms")?;
        writeln!(f)?;
        for form in self.0 {
            writeln!(f, "- **{}**: {}", form.name, form.title)?;
        }
        Ok(())
    }
}
