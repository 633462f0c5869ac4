use std::collections::HashMap;

use fractic_server_error::ServerError;

use crate::{
    entities::{FieldDescriptor, FieldKind, FieldValue, FormField, Patch},
    errors::{InvalidNumberInput, MissingRequiredField, UnknownField},
};

/// Reusable key/value edit form. Knows nothing about the entity it edits: it
/// holds the field list, the values it was opened with, and whatever the user
/// typed since.
#[derive(Debug, Clone)]
pub struct EditForm {
    title: String,
    fields: Vec<FormField>,
    inputs: HashMap<String, String>,
}

impl EditForm {
    pub fn new(title: impl Into<String>, fields: Vec<FormField>) -> Self {
        Self {
            title: title.into(),
            fields,
            inputs: HashMap::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Text currently shown for the field: the user's input if any,
    /// otherwise the pre-filled value.
    pub fn input(&self, name: &str) -> Option<String> {
        let field = self.field(name)?;
        Some(
            self.inputs
                .get(name)
                .cloned()
                .unwrap_or_else(|| field.initial.to_input()),
        )
    }

    pub fn set_input(&mut self, name: &str, raw: impl Into<String>) -> Result<(), ServerError> {
        if self.field(name).is_none() {
            return Err(UnknownField::new(name));
        }
        self.inputs.insert(name.to_string(), raw.into());
        Ok(())
    }

    pub fn is_dirty(&self) -> bool {
        !self.inputs.is_empty()
    }

    /// Discard everything typed since the form was opened.
    pub fn reset(&mut self) {
        self.inputs.clear();
    }

    /// Coerce every field to its declared kind and collect the result. Fails
    /// on the first field whose input does not fit, so nothing malformed can
    /// reach the backend.
    pub fn submit(&self) -> Result<Patch, ServerError> {
        self.fields
            .iter()
            .map(|field| {
                let value = match self.inputs.get(field.name()) {
                    Some(raw) => coerce(&field.descriptor, raw)?,
                    None => field.initial.clone(),
                };
                Ok::<_, ServerError>((field.name().to_string(), value))
            })
            .collect()
    }

    fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name() == name)
    }
}

fn coerce(descriptor: &FieldDescriptor, raw: &str) -> Result<FieldValue, ServerError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() && descriptor.required {
        return Err(MissingRequiredField::new(&descriptor.name));
    }
    match descriptor.kind {
        FieldKind::Text => Ok(FieldValue::Text(trimmed.to_string())),
        FieldKind::Number if trimmed.is_empty() => Ok(FieldValue::Number(None)),
        FieldKind::Number => {
            // Accept the thousands separators people type ("1,200").
            let numeric = trimmed.replace(',', "");
            match numeric.parse::<f64>() {
                Ok(n) if n.is_finite() => Ok(FieldValue::Number(Some(n))),
                _ => Err(InvalidNumberInput::new(&descriptor.name, raw)),
            }
        }
    }
}
