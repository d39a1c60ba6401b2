//! Search record domain model.
//!
//! A [`SearchRecord`] is one row returned by the remote search service. The
//! record has no fixed schema: apart from the display-name field used for card
//! titles and the alphabet facet, every field is opaque pass-through data for
//! the renderer. Field order follows the order of the response body.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Placeholder rendered for a missing or empty field.
pub const PLACEHOLDER: &str = "-";

/// Card title used when a record has no display name.
pub const UNNAMED: &str = "(no name)";

/// One result row, immutable once decoded from a response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchRecord {
    fields: Map<String, Value>,
}

impl SearchRecord {
    /// Wraps a decoded JSON object.
    #[must_use]
    pub const fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Builds a record from `(field, text)` pairs, mostly useful in tests and
    /// fixtures.
    #[must_use]
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let fields = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), Value::String(v.into())))
            .collect();
        Self { fields }
    }

    /// Returns the raw value of a field.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Iterates over `(field, value)` pairs in response order.
    pub fn fields(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }

    /// Returns the display name stored in `field`.
    ///
    /// Only non-empty string values count as a name; numbers, nulls and empty
    /// strings yield `None`.
    #[must_use]
    pub fn display_name(&self, field: &str) -> Option<&str> {
        match self.fields.get(field) {
            Some(Value::String(name)) if !name.is_empty() => Some(name.as_str()),
            _ => None,
        }
    }

    /// Returns the card title, falling back to [`UNNAMED`].
    #[must_use]
    pub fn title(&self, field: &str) -> &str {
        self.display_name(field).unwrap_or(UNNAMED)
    }

    /// Formats a field for display, falling back to [`PLACEHOLDER`].
    #[must_use]
    pub fn field_text(&self, field: &str) -> String {
        self.fields
            .get(field)
            .and_then(format_value)
            .unwrap_or_else(|| PLACEHOLDER.to_string())
    }
}

/// Renders a JSON value as card text. Nulls and empty strings have no text.
#[must_use]
pub fn format_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(_) | Value::Object(_) => Some(value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> SearchRecord {
        match value {
            Value::Object(map) => SearchRecord::new(map),
            other => panic!("fixture must be an object, got {other}"),
        }
    }

    #[test]
    fn display_name_requires_non_empty_string() {
        let named = record(json!({"NombreCompleto": "Maria Lopez"}));
        let empty = record(json!({"NombreCompleto": ""}));
        let numeric = record(json!({"NombreCompleto": 42}));

        assert_eq!(named.display_name("NombreCompleto"), Some("Maria Lopez"));
        assert_eq!(empty.display_name("NombreCompleto"), None);
        assert_eq!(numeric.display_name("NombreCompleto"), None);
        assert_eq!(empty.title("NombreCompleto"), UNNAMED);
    }

    #[test]
    fn missing_fields_render_placeholder() {
        let rec = record(json!({"Dui": "01234567-8", "Telefono": null, "Correo": "  "}));

        assert_eq!(rec.field_text("Dui"), "01234567-8");
        assert_eq!(rec.field_text("Telefono"), PLACEHOLDER);
        assert_eq!(rec.field_text("Correo"), PLACEHOLDER);
        assert_eq!(rec.field_text("Placa"), PLACEHOLDER);
    }

    #[test]
    fn scalars_are_stringified() {
        let rec = record(json!({"Edad": 37, "Salario": 450.5, "Activo": true}));

        assert_eq!(rec.field_text("Edad"), "37");
        assert_eq!(rec.field_text("Salario"), "450.5");
        assert_eq!(rec.field_text("Activo"), "true");
    }

    #[test]
    fn field_order_follows_response() {
        let rec = record(json!({"b": "1", "a": "2", "c": "3"}));
        let keys: Vec<&str> = rec.fields().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }
}
