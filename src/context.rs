//! # Request Context
//!
//! Per-request identity and deadline threaded through every service and
//! repository call.
//!
//! The in-memory repositories accept the context and do not consult it;
//! a backing store with real I/O is expected to stop work once
//! [`RequestContext::is_expired`] reports true.
//!
//! # Examples
//!
//! ```
//! use music_catalog::context::RequestContext;
//! use std::time::Duration;
//!
//! let ctx = RequestContext::new().with_timeout(Duration::from_secs(5));
//! assert!(!ctx.is_expired());
//! assert!(ctx.remaining().is_some());
//! ```

use std::time::Duration;
use tokio::time::Instant;
use uuid::Uuid;

/// Identity and deadline of one inbound request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestContext {
    request_id: Uuid,
    deadline: Option<Instant>,
}

impl RequestContext {
    /// Creates a context with a fresh request id and no deadline.
    #[must_use]
    pub fn new() -> Self {
        Self {
            request_id: Uuid::new_v4(),
            deadline: None,
        }
    }

    /// Sets the deadline to `timeout` from now.
    #[must_use]
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Sets an absolute deadline.
    #[must_use]
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Returns the request identifier.
    #[inline]
    #[must_use]
    pub fn request_id(&self) -> Uuid {
        self.request_id
    }

    /// Returns the deadline, if one was set.
    #[inline]
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns the time left before the deadline.
    ///
    /// `None` when no deadline was set; zero once it has passed.
    #[must_use]
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }

    /// Returns true once the deadline has passed.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.deadline
            .is_some_and(|deadline| Instant::now() >= deadline)
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}
