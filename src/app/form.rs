//! Search criteria form.
//!
//! The form collects one text value per configured field. It knows which fields
//! are required and refuses to hand out criteria while one of them is empty;
//! beyond that no validation happens on the client.

/// Static description of a form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Key sent to the service.
    pub name: String,
    /// Label shown in the form.
    pub label: String,
    /// Whether the field must be non-empty to submit.
    pub required: bool,
}

impl FieldSpec {
    /// Parses `key` or `key:Label`. A missing label is derived from the key
    /// (`nombre_empresa` becomes `Nombre empresa`).
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let (name, label) = match raw.split_once(':') {
            Some((name, label)) => (name.trim(), label.trim().to_string()),
            None => (raw.trim(), String::new()),
        };
        if name.is_empty() {
            return None;
        }
        let label = if label.is_empty() {
            label_from_key(name)
        } else {
            label
        };
        Some(Self {
            name: name.to_string(),
            label,
            required: false,
        })
    }
}

fn label_from_key(key: &str) -> String {
    let spaced = key.replace(['_', '-'], " ");
    let mut chars = spaced.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// A field together with its current value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub spec: FieldSpec,
    pub value: String,
}

/// Editable search form with a focused field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchForm {
    fields: Vec<FormField>,
    focus: usize,
    hint: Option<String>,
}

impl SearchForm {
    #[must_use]
    pub fn new(specs: Vec<FieldSpec>) -> Self {
        Self {
            fields: specs
                .into_iter()
                .map(|spec| FormField {
                    spec,
                    value: String::new(),
                })
                .collect(),
            focus: 0,
            hint: None,
        }
    }

    #[must_use]
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    #[must_use]
    pub const fn focus(&self) -> usize {
        self.focus
    }

    /// Validation hint from the last rejected submission.
    #[must_use]
    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    pub fn push_char(&mut self, c: char) {
        if let Some(field) = self.fields.get_mut(self.focus) {
            field.value.push(c);
            self.hint = None;
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.fields.get_mut(self.focus) {
            field.value.pop();
        }
    }

    /// Moves focus to the next field, wrapping to the first.
    pub fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + 1) % self.fields.len();
        }
    }

    /// Moves focus to the previous field, wrapping to the last.
    pub fn focus_prev(&mut self) {
        if !self.fields.is_empty() {
            self.focus = self.focus.checked_sub(1).unwrap_or(self.fields.len() - 1);
        }
    }

    /// Empties every field and returns focus to the first one.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
        }
        self.focus = 0;
        self.hint = None;
    }

    /// Labels of required fields that are still blank.
    #[must_use]
    pub fn missing_required(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|f| f.spec.required && f.value.trim().is_empty())
            .map(|f| f.spec.label.as_str())
            .collect()
    }

    /// Returns the criteria to submit, or records a hint and returns `None`
    /// when a required field is blank.
    pub fn submission(&mut self) -> Option<Vec<(String, String)>> {
        let missing = self.missing_required();
        if !missing.is_empty() {
            let hint = format!("Required: {}", missing.join(", "));
            tracing::debug!(hint = %hint, "submission blocked by required fields");
            self.hint = Some(hint);
            return None;
        }

        Some(
            self.fields
                .iter()
                .map(|f| (f.spec.name.clone(), f.value.clone()))
                .collect(),
        )
    }
}
