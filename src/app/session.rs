//! Search session state machine.
//!
//! [`SearchSession`] governs the lifecycle of the single outstanding search:
//!
//! ```text
//!            begin()              complete(Ok)
//!   Idle ───────────────▶ Loading ─────────────▶ Success
//!   Success ─────────────▶   │                      │
//!   Error ───────────────▶   │ complete(Err)        │ begin()
//!                            │ time_out()           ▼
//!                            └────────────────▶ Error ──▶ Loading
//! ```
//!
//! Only one request is ever in flight: `begin` refuses to start while Loading,
//! and completions carrying any id other than the in-flight one are dropped.
//! The session touches the [`ResultStore`] only on success, so a failed or
//! timed-out search leaves the previous results intact.

use crate::domain::{Result, SearchRecord};
use crate::results::ResultStore;
use chrono::{DateTime, Local};

/// Lifecycle status of the search session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// No request has been made yet (or the view was cleared).
    Idle,
    /// A request is in flight; submission is disabled.
    Loading,
    /// The last request succeeded and its records are in the store.
    Success,
    /// The last request failed; the store holds the previous records.
    Error,
}

/// What a completion did to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// The completion did not belong to the in-flight request and was dropped.
    Stale,
    /// The session moved to Success with this many records.
    Succeeded {
        /// Number of records now in the store.
        count: usize,
    },
    /// The session moved to Error with this message.
    Failed {
        /// Message shown to the user.
        message: String,
    },
}

/// State of the single live search session.
#[derive(Debug, Clone)]
pub struct SearchSession {
    status: SessionStatus,
    next_id: u64,
    in_flight: Option<u64>,
    error: Option<String>,
    completed_at: Option<DateTime<Local>>,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchSession {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            status: SessionStatus::Idle,
            next_id: 1,
            in_flight: None,
            error: None,
            completed_at: None,
        }
    }

    #[must_use]
    pub const fn status(&self) -> SessionStatus {
        self.status
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.status, SessionStatus::Loading)
    }

    /// Id of the request currently in flight.
    #[must_use]
    pub const fn in_flight(&self) -> Option<u64> {
        self.in_flight
    }

    /// Message of the last failure, cleared by the next submission.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Local time the last successful search completed.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Local>> {
        self.completed_at
    }

    /// Enters Loading and returns the id for the new request.
    ///
    /// Returns `None` while a request is already in flight; the submission is
    /// rejected, not queued.
    pub fn begin(&mut self) -> Option<u64> {
        if self.is_loading() {
            tracing::debug!(in_flight = ?self.in_flight, "search already in flight, submission rejected");
            return None;
        }

        let id = self.next_id;
        self.next_id += 1;
        self.in_flight = Some(id);
        self.error = None;
        self.status = SessionStatus::Loading;

        tracing::debug!(request_id = id, "search session loading");
        Some(id)
    }

    /// Applies the outcome of request `id`.
    ///
    /// On success the records replace the store contents (which also resets
    /// the letter filter and page). On failure the store is left untouched.
    pub fn complete(
        &mut self,
        id: u64,
        outcome: Result<Vec<SearchRecord>>,
        store: &mut ResultStore,
    ) -> Completion {
        if self.in_flight != Some(id) {
            tracing::debug!(request_id = id, in_flight = ?self.in_flight, "dropping stale completion");
            return Completion::Stale;
        }
        self.in_flight = None;

        match outcome {
            Ok(records) => {
                let count = records.len();
                store.set_results(records);
                self.status = SessionStatus::Success;
                self.completed_at = Some(Local::now());
                tracing::debug!(request_id = id, record_count = count, "search succeeded");
                Completion::Succeeded { count }
            }
            Err(e) => {
                let message = e.display_message();
                tracing::debug!(request_id = id, error = %e, "search failed");
                self.fail_with(message.clone());
                Completion::Failed { message }
            }
        }
    }

    /// Fails request `id` because its deadline passed. Returns `false` when
    /// `id` is no longer in flight.
    pub fn time_out(&mut self, id: u64, message: impl Into<String>) -> bool {
        if self.in_flight != Some(id) {
            return false;
        }
        self.in_flight = None;
        self.fail_with(message.into());
        tracing::debug!(request_id = id, "search timed out");
        true
    }

    /// Returns to Idle and forgets the last error and completion time. A
    /// request in flight stays in flight: there is no cancellation.
    pub fn reset(&mut self) {
        self.error = None;
        if !self.is_loading() {
            self.status = SessionStatus::Idle;
            self.completed_at = None;
        }
    }

    fn fail_with(&mut self, message: String) {
        self.error = Some(message);
        self.status = SessionStatus::Error;
    }
}
