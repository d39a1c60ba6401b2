//! Request/response contract with the remote search service.
//!
//! The plugin never performs I/O here: requests are built as plain data and
//! handed to the runtime as actions, and replies come back as events carrying
//! the status code, body and the context map attached at submission.
//!
//! - `request`: Request construction with request-id and trace propagation
//! - `response`: Reply decoding and error message selection

pub mod request;
pub mod response;

pub use request::{request_id_from_context, SearchRequest, TraceContext};
pub use response::decode_response;
