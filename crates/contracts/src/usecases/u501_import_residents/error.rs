use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    /// The file could not be decoded into rows. Nothing was submitted.
    #[error("{}", describe(.line, .message))]
    Parse { line: Option<u64>, message: String },
}

fn describe(line: &Option<u64>, message: &str) -> String {
    match line {
        Some(line) => format!("line {}: {}", line, message),
        None => message.to_string(),
    }
}

impl ImportError {
    pub fn parse(err: &csv::Error) -> Self {
        let line = err.position().map(|p| p.line());
        let message = match err.kind() {
            csv::ErrorKind::UnequalLengths {
                expected_len, len, ..
            } => format!("expected {} fields, found {}", expected_len, len),
            csv::ErrorKind::Utf8 { .. } => "file is not valid UTF-8 text".to_string(),
            _ => err.to_string(),
        };
        ImportError::Parse { line, message }
    }
}
