//! Domain layer for recordseek.
//!
//! Core types independent of Zellij APIs and rendering concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`record`]: The opaque search record returned by the remote service

pub mod error;
pub mod record;

pub use error::{Result, SearchError};
pub use record::SearchRecord;
