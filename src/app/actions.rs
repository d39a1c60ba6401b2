//! Side effects requested by the event handler.
//!
//! The handler never talks to the host directly. It returns a list of
//! [`Action`]s which the plugin runtime executes in order after the state has
//! been updated.

use crate::remote::SearchRequest;

/// Commands executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Closes the plugin pane.
    CloseFocus,

    /// Issues the search request through the host's web request facility.
    SendSearch(SearchRequest),

    /// Arms a host timer that fires `Event::Timer` after `seconds`.
    ///
    /// Emitted alongside `SendSearch` when a request timeout is configured.
    ScheduleTimeout {
        /// Request the timer belongs to.
        request_id: u64,
        /// Delay before the timer fires.
        seconds: u64,
    },
}
