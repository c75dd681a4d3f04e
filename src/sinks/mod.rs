//! Outbound collaborators notified by the host.
//!
//! This module defines the [`ApplicationSink`] and [`FeedbackSink`] traits
//! that receive the side effects of swipe decisions. Both are fire-and-forget:
//! the deck never waits on them and never undoes a decision because one failed.
//!
//! # Implementations
//!
//! - [`TracingSink`]: Emits structured log events (default host wiring)
//! - [`MemorySink`]: Captures calls in memory, optionally failing on demand
//!
//! # Example
//!
//! ```rust
//! use directapply::app::Feedback;
//! use directapply::sinks::{ApplicationSink, FeedbackSink, MemorySink};
//!
//! let mut sink = MemorySink::default();
//! sink.record("5")?;
//! sink.feedback(Feedback::Success);
//! assert_eq!(sink.recorded(), ["5"]);
//! assert_eq!(sink.feedback_log(), [Feedback::Success]);
//! # Ok::<(), directapply::DeckError>(())
//! ```

use crate::app::Feedback;
use crate::domain::error::{DeckError, Result};
use std::sync::{Arc, Mutex, PoisonError};

/// Receiver of submitted applications.
pub trait ApplicationSink: Send {
    /// Submits an application for `job_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the submission could not be delivered.
    fn record(&mut self, job_id: &str) -> Result<()>;
}

/// Receiver of device feedback requests (haptics).
pub trait FeedbackSink: Send {
    fn feedback(&mut self, feedback: Feedback);
}

/// Sink that turns every call into a tracing event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl ApplicationSink for TracingSink {
    fn record(&mut self, job_id: &str) -> Result<()> {
        tracing::info!(job_id, "application submitted");
        Ok(())
    }
}

impl FeedbackSink for TracingSink {
    fn feedback(&mut self, feedback: Feedback) {
        tracing::debug!(?feedback, "feedback");
    }
}

#[derive(Debug, Default)]
struct MemoryLog {
    recorded: Vec<String>,
    feedback: Vec<Feedback>,
    failing: bool,
}

/// In-memory sink. Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    log: Arc<Mutex<MemoryLog>>,
}

impl MemorySink {
    /// Makes subsequent [`ApplicationSink::record`] calls fail when `failing`.
    pub fn set_failing(&self, failing: bool) {
        self.with_log(|log| log.failing = failing);
    }

    /// Job ids successfully recorded so far.
    #[must_use]
    pub fn recorded(&self) -> Vec<String> {
        self.with_log(|log| log.recorded.clone())
    }

    #[must_use]
    pub fn feedback_log(&self) -> Vec<Feedback> {
        self.with_log(|log| log.feedback.clone())
    }

    fn with_log<T>(&self, f: impl FnOnce(&mut MemoryLog) -> T) -> T {
        let mut log = self.log.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut log)
    }
}

impl ApplicationSink for MemorySink {
    fn record(&mut self, job_id: &str) -> Result<()> {
        self.with_log(|log| {
            if log.failing {
                return Err(DeckError::Sink(format!("rejected application {job_id}")));
            }
            log.recorded.push(job_id.to_string());
            Ok(())
        })
    }
}

impl FeedbackSink for MemorySink {
    fn feedback(&mut self, feedback: Feedback) {
        self.with_log(|log| log.feedback.push(feedback));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_one_log() {
        let sink = MemorySink::default();
        let mut handle = sink.clone();

        handle.record("1").unwrap();
        handle.feedback(Feedback::Grab);

        assert_eq!(sink.recorded(), ["1"]);
        assert_eq!(sink.feedback_log(), [Feedback::Grab]);
    }

    #[test]
    fn failing_sink_rejects_without_recording() {
        let mut sink = MemorySink::default();
        sink.set_failing(true);

        let err = sink.record("1").unwrap_err();
        assert!(matches!(err, DeckError::Sink(_)));
        assert!(sink.recorded().is_empty());
    }
}
