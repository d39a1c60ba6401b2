//! Outbound search request and its correlation context.
//!
//! A [`SearchRequest`] is a fully serialized HTTP request handed to the plugin
//! runtime, which issues it through Zellij's `web_request`. The request id and
//! the active trace context travel in the request's context map and come back
//! untouched with the response, which is how the session recognizes the reply
//! to its in-flight request.

use crate::domain::{Result, SearchError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Context key carrying the session-assigned request id.
pub const REQUEST_ID_KEY: &str = "recordseek.request_id";
const TRACE_ID_KEY: &str = "recordseek.trace_id";
const PARENT_SPAN_KEY: &str = "recordseek.parent_span_id";

/// Distributed tracing context captured when a request is issued.
///
/// Lets the span that handles the response be linked back to the span that
/// submitted the search, across the asynchronous host round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a hex string.
    pub trace_id: String,

    /// Span ID of the submitting span.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Captures the trace and span IDs of the current `tracing` span.
    ///
    /// Returns `None` when no OpenTelemetry layer is installed or the span is
    /// not sampled.
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let otel_context = tracing::Span::current().context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        span_context.is_valid().then(|| Self {
            trace_id: format!("{:032x}", span_context.trace_id()),
            parent_span_id: format!("{:016x}", span_context.span_id()),
        })
    }

    /// Reads a trace context back from a response context map.
    #[must_use]
    pub fn from_context(context: &BTreeMap<String, String>) -> Option<Self> {
        Some(Self {
            trace_id: context.get(TRACE_ID_KEY)?.clone(),
            parent_span_id: context.get(PARENT_SPAN_KEY)?.clone(),
        })
    }
}

/// A serialized search submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Session-assigned id, strictly increasing per submission.
    pub id: u64,
    /// Endpoint the request is POSTed to.
    pub url: String,
    /// Request headers.
    pub headers: BTreeMap<String, String>,
    /// JSON body: the submitted criteria as a flat object of strings.
    pub body: Vec<u8>,
    /// Opaque context echoed back by the host with the response.
    pub context: BTreeMap<String, String>,
}

impl SearchRequest {
    /// Builds the request for one submission.
    ///
    /// Every criterion is forwarded verbatim, empty values included; the
    /// service decides which ones it uses.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if the body cannot be serialized.
    pub fn new(id: u64, url: &str, criteria: &[(String, String)]) -> Result<Self> {
        let payload: Map<String, Value> = criteria
            .iter()
            .map(|(field, value)| (field.clone(), Value::String(value.clone())))
            .collect();
        let body = serde_json::to_vec(&payload)
            .map_err(|e| SearchError::Config(format!("cannot serialize search criteria: {e}")))?;

        let headers = BTreeMap::from([
            ("Content-Type".to_string(), "application/json".to_string()),
            ("Accept".to_string(), "application/json".to_string()),
        ]);

        let mut context = BTreeMap::from([(REQUEST_ID_KEY.to_string(), id.to_string())]);
        if let Some(trace) = TraceContext::from_current() {
            context.insert(TRACE_ID_KEY.to_string(), trace.trace_id);
            context.insert(PARENT_SPAN_KEY.to_string(), trace.parent_span_id);
        }

        Ok(Self {
            id,
            url: url.to_string(),
            headers,
            body,
            context,
        })
    }
}

/// Extracts the request id from a response context map.
#[must_use]
pub fn request_id_from_context(context: &BTreeMap<String, String>) -> Option<u64> {
    context.get(REQUEST_ID_KEY).and_then(|id| id.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn criteria(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn body_is_flat_object_in_form_order() {
        let request = SearchRequest::new(
            7,
            "http://localhost:5000/search",
            &criteria(&[("nombres", "Ana"), ("dui", ""), ("apellidos", "Lopez")]),
        )
        .unwrap();

        let body = String::from_utf8(request.body).unwrap();
        assert_eq!(body, r#"{"nombres":"Ana","dui":"","apellidos":"Lopez"}"#);
        assert_eq!(
            request.headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );
    }

    #[test]
    fn request_id_round_trips_through_context() {
        let request = SearchRequest::new(42, "http://x/search", &[]).unwrap();
        assert_eq!(request_id_from_context(&request.context), Some(42));
        assert_eq!(request_id_from_context(&BTreeMap::new()), None);
    }

    #[test]
    fn trace_context_absent_without_otel_layer() {
        let request = SearchRequest::new(1, "http://x/search", &[]).unwrap();
        assert_eq!(TraceContext::from_context(&request.context), None);
    }
}
