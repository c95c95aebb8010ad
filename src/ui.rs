//! View state for the interactive parts of the page, kept free of any DOM types.

use std::time::Duration;

use chrono::{DateTime, FixedOffset};
use thiserror::Error;

/// How long "Copied" / "Not copied" stays on a button before reverting.
pub const FEEDBACK_RESET: Duration = Duration::from_millis(1200);

pub const TOTAL_STEPS: usize = 3;
/// The risk panel shows at most this many flags; the document always carries all of them.
pub const RISK_PANEL_LIMIT: usize = 3;

/// Failure of a browser side effect (clipboard write, file save).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SinkError {
    #[error("no browser window or document")]
    NoDocument,
    #[error("clipboard write rejected: {0}")]
    ClipboardRejected(String),
    #[error("copy command was refused")]
    CopyCommandRefused,
    #[error("browser call failed: {0}")]
    Browser(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyFeedback {
    Idle,
    Copied,
    Failed,
}

impl CopyFeedback {
    pub fn label(self, idle: &'static str) -> &'static str {
        match self {
            CopyFeedback::Idle => idle,
            CopyFeedback::Copied => "Copied",
            CopyFeedback::Failed => "Not copied",
        }
    }

    /// Label state shown for [`FEEDBACK_RESET`] after a copy attempt settles.
    pub fn after_copy(outcome: &Result<(), SinkError>) -> Self {
        match outcome {
            Ok(()) => CopyFeedback::Copied,
            Err(_) => CopyFeedback::Failed,
        }
    }
}

pub fn next_step(step: usize) -> usize {
    (step + 1).min(TOTAL_STEPS - 1)
}

pub fn prev_step(step: usize) -> usize {
    step.saturating_sub(1)
}

pub fn panel_risks<'a>(risks: &'a [&'static str]) -> &'a [&'static str] {
    &risks[..risks.len().min(RISK_PANEL_LIMIT)]
}

/// Accordion behavior: clicking the open item closes it, clicking another opens only that one.
pub fn toggle_open(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

pub fn build_time() -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME")).ok()
}

#[cfg(test)]
mod tests {
    use chrono::Datelike;

    use super::*;
    use crate::scope::{estimate, Deadline, DesignSource, ScopeState};

    #[test]
    fn test_copy_feedback_follows_outcome() {
        assert_eq!(CopyFeedback::after_copy(&Ok(())), CopyFeedback::Copied);
        let denied = Err(SinkError::ClipboardRejected("NotAllowedError".to_string()));
        assert_eq!(CopyFeedback::after_copy(&denied), CopyFeedback::Failed);
        assert_eq!(
            CopyFeedback::after_copy(&Err(SinkError::CopyCommandRefused)).label("Copy"),
            "Not copied"
        );
    }

    #[test]
    fn test_copy_feedback_labels() {
        assert_eq!(CopyFeedback::Idle.label("Copy message"), "Copy message");
        assert_eq!(CopyFeedback::Copied.label("Copy"), "Copied");
        assert_eq!(CopyFeedback::Failed.label("Copy"), "Not copied");
    }

    #[test]
    fn test_steps_clamp() {
        assert_eq!(prev_step(0), 0);
        assert_eq!(next_step(0), 1);
        assert_eq!(next_step(1), 2);
        assert_eq!(next_step(2), 2);
        assert_eq!(prev_step(2), 1);
    }

    #[test]
    fn test_panel_risks_limit() {
        let summary = estimate(&ScopeState {
            design_source: DesignSource::None,
            deadline: Deadline::Rush,
            ..ScopeState::default()
        });
        assert_eq!(panel_risks(&summary.risks), &summary.risks[..]);

        let many = ["a", "b", "c", "d"];
        assert_eq!(panel_risks(&many), &["a", "b", "c"]);
        assert!(panel_risks(&[]).is_empty());
    }

    #[test]
    fn test_faq_one_open_at_a_time() {
        assert_eq!(toggle_open(Some(0), 0), None);
        assert_eq!(toggle_open(Some(0), 2), Some(2));
        assert_eq!(toggle_open(None, 1), Some(1));
    }

    #[test]
    fn test_build_time_parses() {
        let built = build_time().expect("build script sets an RFC 3339 timestamp");
        assert!(built.year() >= 2024);
    }
}
