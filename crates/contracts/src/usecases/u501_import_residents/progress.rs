use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Observable phase of an import, rendered as the status banner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum ImportStatus {
    #[default]
    Idle,
    Parsing,
    Uploading { total: usize },
    Complete { succeeded: usize, failed: usize },
    ParseError { message: String },
}

impl ImportStatus {
    /// Import is parsing or submitting; a second one must not start.
    pub fn is_running(&self) -> bool {
        matches!(self, ImportStatus::Parsing | ImportStatus::Uploading { .. })
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ImportStatus::ParseError { .. })
    }
}

impl fmt::Display for ImportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportStatus::Idle => Ok(()),
            ImportStatus::Parsing => write!(f, "Parsing CSV..."),
            ImportStatus::Uploading { total } => {
                write!(f, "Uploading {} residents to database...", total)
            }
            ImportStatus::Complete { succeeded, failed } => {
                write!(f, "Upload Complete! Success: {}, Failed: {}", succeeded, failed)
            }
            ImportStatus::ParseError { message } => write!(f, "Error parsing CSV: {}", message),
        }
    }
}

/// Result of one registration attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowResult {
    /// 1-based position among the data rows, in file order.
    pub row_number: usize,
    /// Line of the row in the source file.
    pub line: u64,
    pub email: Option<String>,
    pub error: Option<String>,
}

impl RowResult {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Aggregate outcome of one import run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportOutcome {
    pub session_id: String,
    pub succeeded: usize,
    pub failed: usize,
    pub rows: Vec<RowResult>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl ImportOutcome {
    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }

    pub fn failures(&self) -> impl Iterator<Item = &RowResult> {
        self.rows.iter().filter(|r| !r.is_success())
    }

    pub fn status(&self) -> ImportStatus {
        ImportStatus::Complete {
            succeeded: self.succeeded,
            failed: self.failed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_banner_text() {
        assert_eq!(ImportStatus::Idle.to_string(), "");
        assert_eq!(ImportStatus::Parsing.to_string(), "Parsing CSV...");
        assert_eq!(
            ImportStatus::Uploading { total: 12 }.to_string(),
            "Uploading 12 residents to database..."
        );
        assert_eq!(
            ImportStatus::Complete {
                succeeded: 10,
                failed: 2
            }
            .to_string(),
            "Upload Complete! Success: 10, Failed: 2"
        );
        assert_eq!(
            ImportStatus::ParseError {
                message: "line 3: expected 2 fields, found 1".into()
            }
            .to_string(),
            "Error parsing CSV: line 3: expected 2 fields, found 1"
        );
    }

    #[test]
    fn test_running_flags() {
        assert!(ImportStatus::Parsing.is_running());
        assert!(ImportStatus::Uploading { total: 1 }.is_running());
        assert!(!ImportStatus::Idle.is_running());
        assert!(ImportStatus::ParseError { message: String::new() }.is_error());
    }
}
