//! Clipboard hand-off for the generated summary.

use std::time::{Duration, Instant};

use crate::config::COPIED_INDICATOR_DURATION;
use crate::error::{EstimateError, Result};

/// A place the summary text can be copied to.
pub trait Clipboard {
    /// Replace the clipboard contents with `text`.
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// In-memory clipboard, useful for tests and headless runs.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    /// Create an empty clipboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Last text written, if any.
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

/// Transient "copied" flag that switches itself off after a fixed duration.
#[derive(Debug, Clone)]
pub struct CopyIndicator {
    copied_at: Option<Instant>,
    duration: Duration,
}

impl Default for CopyIndicator {
    fn default() -> Self {
        Self::new(COPIED_INDICATOR_DURATION)
    }
}

impl CopyIndicator {
    /// Create an indicator that stays on for `duration`.
    pub fn new(duration: Duration) -> Self {
        Self {
            copied_at: None,
            duration,
        }
    }

    /// Turn the indicator on at `now`.
    pub fn mark_copied(&mut self, now: Instant) {
        self.copied_at = Some(now);
    }

    /// Check if the indicator is on at `now`.
    pub fn is_copied(&self, now: Instant) -> bool {
        self.copied_at
            .is_some_and(|at| now.saturating_duration_since(at) < self.duration)
    }
}

/// Copy `text` and arm the indicator on success.
///
/// A failure is logged and returned; it is not retried and the indicator is
/// left untouched.
pub fn copy_to_clipboard(
    clipboard: &mut dyn Clipboard,
    text: &str,
    indicator: &mut CopyIndicator,
    now: Instant,
) -> Result<()> {
    match clipboard.write_text(text) {
        Ok(()) => {
            indicator.mark_copied(now);
            tracing::debug!("copied {} byte(s) to clipboard", text.len());
            Ok(())
        }
        Err(err) => {
            tracing::warn!("Failed to copy: {}", err);
            Err(match err {
                EstimateError::Clipboard { .. } => err,
                other => EstimateError::Clipboard {
                    message: other.to_string(),
                },
            })
        }
    }
}
