//! Current values of one form.

use crate::{
    error::{Result, TourmateError},
    fields::{is_blank, FieldSpec, FormModel},
    forms::FormDescriptor,
};

/// Raw field values of one form, keyed by the fields of its model.
///
/// Values are kept exactly as entered. Numbers and dates are only
/// interpreted when the payload is built, so an edit never fails because
/// of its content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    form: &'static str,
    model: FormModel,
    // Same order as `model.fields()`.
    values: Vec<String>,
}

impl FormState {
    /// Creates a state with every field empty.
    pub fn new(form: &'static str, model: FormModel) -> Self {
        Self {
            form,
            model,
            values: vec![String::new(); model.fields().len()],
        }
    }

    pub fn for_form(descriptor: &FormDescriptor) -> Self {
        Self::new(descriptor.name, descriptor.model)
    }

    /// Overwrites one field.
    ///
    /// # Errors
    ///
    /// Returns `TourmateError::UnknownField` if the model has no field with
    /// this name; the state is left untouched.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        let index = self.index_of(name)?;
        self.values[index] = value.into();
        Ok(())
    }

    /// Current raw value of a field.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.index_of(name)
            .ok()
            .map(|index| self.values[index].as_str())
    }

    /// Fields paired with their raw values, in model order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static FieldSpec, &str)> {
        self.model
            .fields()
            .iter()
            .zip(self.values.iter().map(String::as_str))
    }

    /// True iff every required field holds a non-blank value.
    ///
    /// Only presence is checked. Numbers are not parsed and date order is
    /// not compared here.
    pub fn is_submittable(&self) -> bool {
        self.missing_required().is_empty()
    }

    /// Required fields that are still blank.
    pub fn missing_required(&self) -> Vec<&'static FieldSpec> {
        self.entries()
            .filter(|(spec, value)| spec.required && is_blank(value))
            .map(|(spec, _)| spec)
            .collect()
    }

    fn index_of(&self, name: &str) -> Result<usize> {
        self.model
            .fields()
            .iter()
            .position(|spec| spec.name == name)
            .ok_or_else(|| TourmateError::unknown_field(self.form).with_field(name))
    }
}
