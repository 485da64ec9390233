//! Error types for heredity.

use thiserror::Error;

/// Result type alias for heredity operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for heredity.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors (10-19)
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid model file: {0}")]
    InvalidModel(String),

    // Pedigree input errors (20-29)
    #[error("invalid pedigree record at line {line}: {message}")]
    InvalidRecord { line: usize, message: String },

    #[error("pedigree is missing required column '{column}'")]
    MissingColumn { column: String },

    #[error("individual '{name}' appears more than once")]
    DuplicateIndividual { name: String },

    #[error("individual '{name}' references unknown parent '{parent}'")]
    UnknownParent { name: String, parent: String },

    #[error("individual '{name}' must list both parents or neither")]
    IncompleteParents { name: String },

    // Inference errors (30-39)
    #[error("pedigree has {count} individuals, exact inference is limited to {max}")]
    PedigreeTooLarge { count: usize, max: usize },

    #[error("inference failed: {0}")]
    Inference(String),

    // I/O errors (60-69)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns the error code for this error type.
    /// Used for detailed error reporting in JSON output.
    pub fn code(&self) -> u32 {
        match self {
            Error::Config(_) => 10,
            Error::InvalidModel(_) => 11,
            Error::InvalidRecord { .. } => 20,
            Error::MissingColumn { .. } => 21,
            Error::DuplicateIndividual { .. } => 22,
            Error::UnknownParent { .. } => 23,
            Error::IncompleteParents { .. } => 24,
            Error::PedigreeTooLarge { .. } => 30,
            Error::Inference(_) => 31,
            Error::Io(_) => 60,
            Error::Json(_) => 61,
        }
    }

    /// Whether the error was caused by the pedigree input rather than the
    /// model or the environment.
    pub fn is_input_error(&self) -> bool {
        (20..30).contains(&self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_grouped_by_range() {
        assert_eq!(Error::Config("x".into()).code(), 10);
        assert_eq!(
            Error::UnknownParent {
                name: "Harry".into(),
                parent: "Petunia".into()
            }
            .code(),
            23
        );
        assert_eq!(Error::PedigreeTooLarge { count: 40, max: 12 }.code(), 30);
    }

    #[test]
    fn input_errors_are_classified() {
        assert!(Error::IncompleteParents {
            name: "Harry".into()
        }
        .is_input_error());
        assert!(!Error::Inference("boom".into()).is_input_error());
    }

    #[test]
    fn display_includes_context() {
        let err = Error::InvalidRecord {
            line: 3,
            message: "expected 4 fields, found 2".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid pedigree record at line 3: expected 4 fields, found 2"
        );
    }
}
