use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures while evaluating a single line.
#[derive(Error, Debug)]
pub enum LineError {
    #[error("no calibration token in line: {0:?}")]
    MalformedLine(String),

    #[error("invalid token: {0:?}")]
    InvalidToken(String),
}

/// Failures that abort a whole calibration run.
#[derive(Error, Debug)]
pub enum CalibrationError {
    #[error("cannot open input {}: {source}", .path.display())]
    ResourceNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("input {} is not valid UTF-8", .path.display())]
    InvalidEncoding { path: PathBuf },

    #[error("line {line_number}: {source}")]
    Line {
        line_number: usize,
        #[source]
        source: LineError,
    },
}

impl CalibrationError {
    /// The per-line failure, if this error came from evaluating a line.
    pub fn line_error(&self) -> Option<&LineError> {
        match self {
            CalibrationError::Line { source, .. } => Some(source),
            CalibrationError::ResourceNotFound { .. }
            | CalibrationError::InvalidEncoding { .. } => None,
        }
    }
}
