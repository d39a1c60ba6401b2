//! Decoding of search service replies.
//!
//! A successful reply is a JSON array of JSON objects. Anything else becomes a
//! [`SearchError`]: non-success statuses are transport errors carrying the best
//! available human-readable message, and undecodable bodies are format errors.

use crate::domain::{Result, SearchError, SearchRecord};
use http::StatusCode;
use serde::Deserialize;
use serde_json::Value;

/// Longest plain-text body accepted as an error message.
const MAX_PLAIN_ERROR_LEN: usize = 200;

/// Structured error payload, e.g. `{"error": "invalid date"}`.
#[derive(Debug, Deserialize)]
struct ErrorPayload {
    error: String,
}

/// Turns a status code and body into the decoded record list.
///
/// # Errors
///
/// - [`SearchError::Transport`] for any status outside `200..=299`
/// - [`SearchError::ResponseFormat`] when a success body is not an array of
///   objects
pub fn decode_response(status: u16, body: &[u8]) -> Result<Vec<SearchRecord>> {
    if !(200..300).contains(&status) {
        let message = error_message(status, body);
        tracing::debug!(status = status, message = %message, "search service returned an error");
        return Err(SearchError::Transport {
            status: Some(status),
            message,
        });
    }

    decode_records(body)
}

/// Parses a success body into records, preserving their order.
///
/// # Errors
///
/// Returns [`SearchError::ResponseFormat`] when the body is not valid JSON, not
/// an array, or contains non-object elements.
pub fn decode_records(body: &[u8]) -> Result<Vec<SearchRecord>> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| SearchError::ResponseFormat(format!("invalid JSON: {e}")))?;

    let Value::Array(items) = value else {
        return Err(SearchError::ResponseFormat(
            "expected a JSON array of records".to_string(),
        ));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(fields) => Ok(SearchRecord::new(fields)),
            other => Err(SearchError::ResponseFormat(format!(
                "record {index} is not an object: {other}"
            ))),
        })
        .collect()
}

/// Picks the message for a failed reply.
///
/// Preference order: the `error` field of a JSON payload, a short plain-text
/// body (Zellij reports transport failures this way), the canonical reason
/// phrase of the status, and finally the bare status code.
fn error_message(status: u16, body: &[u8]) -> String {
    if let Ok(payload) = serde_json::from_slice::<ErrorPayload>(body) {
        if !payload.error.trim().is_empty() {
            return payload.error;
        }
    }

    if let Some(text) = plain_text_message(body) {
        return text;
    }

    StatusCode::from_u16(status)
        .ok()
        .and_then(|code| code.canonical_reason())
        .map_or_else(|| format!("HTTP {status}"), ToString::to_string)
}

fn plain_text_message(body: &[u8]) -> Option<String> {
    let text = std::str::from_utf8(body).ok()?.trim();
    let looks_structured = text.starts_with('<') || text.starts_with('{') || text.starts_with('[');
    if text.is_empty() || looks_structured || text.len() > MAX_PLAIN_ERROR_LEN || text.contains('\n') {
        return None;
    }
    Some(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport_message(result: Result<Vec<SearchRecord>>) -> (Option<u16>, String) {
        match result {
            Err(SearchError::Transport { status, message }) => (status, message),
            other => panic!("expected transport error, got {other:?}"),
        }
    }

    #[test]
    fn decodes_records_in_order() {
        let body = br#"[{"NombreCompleto":"Ana"},{"NombreCompleto":"Beto","Edad":40}]"#;
        let records = decode_response(200, body).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].display_name("NombreCompleto"), Some("Beto"));
        assert_eq!(records[1].field_text("Edad"), "40");
    }

    #[test]
    fn empty_array_is_success() {
        assert!(decode_response(200, b"[]").unwrap().is_empty());
    }

    #[test]
    fn server_error_text_is_preferred() {
        let (status, message) = transport_message(decode_response(400, br#"{"error":"invalid date"}"#));
        assert_eq!(status, Some(400));
        assert_eq!(message, "invalid date");
    }

    #[test]
    fn falls_back_to_status_description() {
        let (_, message) = transport_message(decode_response(500, b""));
        assert_eq!(message, "Internal Server Error");

        let (_, message) = transport_message(decode_response(502, b"<html><body>bad</body></html>"));
        assert_eq!(message, "Bad Gateway");

        let (_, message) = transport_message(decode_response(599, b""));
        assert_eq!(message, "HTTP 599");
    }

    #[test]
    fn plain_text_transport_failure_is_shown() {
        let (_, message) = transport_message(decode_response(400, b"error sending request: connection refused"));
        assert_eq!(message, "error sending request: connection refused");
    }

    #[test]
    fn malformed_success_bodies_are_format_errors() {
        let bodies: [&[u8]; 4] = [b"not json", br#"{"error":"x"}"#, b"[1, 2]", b""];
        for body in bodies {
            assert!(
                matches!(decode_response(200, body), Err(SearchError::ResponseFormat(_))),
                "body {:?} should be rejected",
                String::from_utf8_lossy(body)
            );
        }
    }
}
