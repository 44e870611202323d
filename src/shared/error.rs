use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between "the environments
/// match", "the environments differ", and the different kinds of failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - comparison ran and no differences were found
    Success = 0,
    /// Comparison ran and at least one component differs or is missing
    DifferencesFound = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (file I/O, parse failure, export precondition, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::DifferencesFound => write!(f, "Differences Found (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for rule comparison.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum CompareError {
    #[error("XML file not found: {path}\n\n💡 Hint: {suggestion}")]
    DocumentNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to read XML file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("The {side} XML input is empty\n\n💡 Hint: Provide both the development and production rule exports before comparing")]
    EmptyInput { side: String },

    #[error("Failed to parse {side} XML\nDetails: {details}\n\n💡 Hint: Please verify that the file contains a well-formed receiver determination export")]
    ParseError { side: String, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("{message}\n\n💡 Hint: {hint}")]
    ExportPrecondition { message: String, hint: String },
}
