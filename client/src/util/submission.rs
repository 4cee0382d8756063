//! Submission sinks for the sign-in form.
//!
//! SYSTEM CONTEXT
//! ==============
//! The sign-in page hands its snapshot to whatever [`SinkHandle`] is in Leptos
//! context. The default sink only logs; there is no network transport. In the
//! browser the `log` output reaches the devtools console through
//! `console_log`.

#[cfg(test)]
#[path = "submission_test.rs"]
mod submission_test;

use std::fmt;
use std::sync::Arc;

use crate::state::sign_in::{FormState, Submission};

/// Log target used by [`LogSink`].
pub const LOG_TARGET: &str = "sign_in";

/// Destination for submitted sign-in snapshots.
pub trait SubmissionSink: Send + Sync {
    fn submit(&self, submission: &Submission);
}

/// Diagnostic sink: writes the payload as JSON through the `log` facade.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl SubmissionSink for LogSink {
    fn submit(&self, submission: &Submission) {
        match serde_json::to_string(submission) {
            Ok(json) => log::info!(target: LOG_TARGET, "{json}"),
            Err(e) => log::warn!(target: LOG_TARGET, "submission not serializable: {e}"),
        }
    }
}

/// Cloneable handle so a sink can live in Leptos context.
#[derive(Clone)]
pub struct SinkHandle(Arc<dyn SubmissionSink>);

impl SinkHandle {
    pub fn new(sink: impl SubmissionSink + 'static) -> Self {
        Self(Arc::new(sink))
    }

    pub fn sink(&self) -> &dyn SubmissionSink {
        self.0.as_ref()
    }
}

impl Default for SinkHandle {
    fn default() -> Self {
        Self::new(LogSink)
    }
}

impl fmt::Debug for SinkHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SinkHandle").finish_non_exhaustive()
    }
}

/// Snapshot `state` and forward it to `sink` unchanged.
///
/// No validation runs here; empty or malformed values are forwarded as-is.
pub fn submit(state: &FormState, sink: &dyn SubmissionSink) -> Submission {
    let submission = state.snapshot();
    sink.submit(&submission);
    submission
}
