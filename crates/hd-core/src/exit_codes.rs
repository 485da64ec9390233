//! Exit codes for the heredity CLI.
//!
//! Exit codes communicate the outcome without requiring output parsing.

use hd_common::Error;

/// Exit codes for heredity operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Command completed
    Clean = 0,

    /// Model could not be resolved or is invalid
    ConfigError = 10,

    /// Pedigree input is malformed
    InputError = 11,

    /// Inference refused or failed
    InferenceError = 12,

    /// I/O error
    IoError = 13,

    /// Internal/unknown error
    InternalError = 99,
}

impl ExitCode {
    /// Convert to i32 for process exit.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Check if this exit code indicates success.
    pub fn is_success(self) -> bool {
        matches!(self, ExitCode::Clean)
    }

    /// Map an error to the exit code reported for it.
    pub fn from_error(err: &Error) -> Self {
        if err.is_input_error() {
            return ExitCode::InputError;
        }
        match err.code() {
            10..=19 => ExitCode::ConfigError,
            30..=39 => ExitCode::InferenceError,
            60..=69 => ExitCode::IoError,
            _ => ExitCode::InternalError,
        }
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}
