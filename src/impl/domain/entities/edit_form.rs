use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
}

/// Declarative description of one editable field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    /// A blank input is rejected on submit when set.
    pub required: bool,
}

/// Typed value of a field. Numbers are always coerced before they get here,
/// so a `Number` can never hold unparsed text.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    /// `None` is a blank optional number.
    Number(Option<f64>),
}

/// A field descriptor together with the value the form is pre-filled with.
#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub descriptor: FieldDescriptor,
    pub initial: FieldValue,
}

/// Result of submitting an edit form: field name to new value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Patch(pub(crate) BTreeMap<String, FieldValue>);

// --

impl FieldDescriptor {
    pub fn text(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind: FieldKind::Text,
            required: true,
        }
    }

    pub fn number(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind: FieldKind::Number,
            required: true,
        }
    }

    pub fn optional(self) -> Self {
        Self {
            required: false,
            ..self
        }
    }
}

impl FieldValue {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Text(_) => FieldKind::Text,
            FieldValue::Number(_) => FieldKind::Number,
        }
    }

    /// How the value is shown in an input box.
    pub fn to_input(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Number(Some(n)) => n.to_string(),
            FieldValue::Number(None) => String::new(),
        }
    }
}

impl FormField {
    pub fn new(descriptor: FieldDescriptor, initial: FieldValue) -> Self {
        Self {
            descriptor,
            initial,
        }
    }

    pub fn name(&self) -> &str {
        &self.descriptor.name
    }
}

impl Patch {
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.0.get(name)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        match self.0.get(name) {
            Some(FieldValue::Text(s)) => Some(s),
            _ => None,
        }
    }

    pub fn number(&self, name: &str) -> Option<f64> {
        match self.0.get(name) {
            Some(FieldValue::Number(n)) => *n,
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, FieldValue)> for Patch {
    fn from_iter<T: IntoIterator<Item = (String, FieldValue)>>(iter: T) -> Self {
        Patch(iter.into_iter().collect())
    }
}
