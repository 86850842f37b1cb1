use crate::domain::error::FetchError;
use chrono::{DateTime, Local};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureSource {
    Search,
    Palette,
}

impl FailureSource {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            FailureSource::Search => "company search",
            FailureSource::Palette => "palette",
        }
    }
}

/// Last silently recovered failure. Shown as a dim note, never as an error
/// dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct FailureNote {
    pub source: FailureSource,
    pub error: FetchError,
    pub timestamp: DateTime<Local>,
}

impl FailureNote {
    #[must_use]
    pub fn new(source: FailureSource, error: FetchError) -> Self {
        Self {
            source,
            error,
            timestamp: Local::now(),
        }
    }

    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} unavailable at {} ({})",
            self.source.label(),
            self.timestamp.format("%H:%M:%S"),
            self.error.kind()
        )
    }
}
