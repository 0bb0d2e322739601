use crate::render::write_entry;
use colored::Colorize;
use std::{fmt, io, num::ParseIntError};
use thiserror::Error;

/// Why a single environment value could not be parsed into its typed value
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    #[error("invalid boolean value")]
    InvalidBool,
    #[error(transparent)]
    Int(#[from] ParseIntError),
    #[error(transparent)]
    Duration(#[from] humantime::DurationError),
    /// Failure reported by a user-defined scalar
    #[error("{0}")]
    Custom(String),
}

impl ParseError {
    pub fn custom(message: impl fmt::Display) -> Self {
        Self::Custom(message.to_string())
    }
}

/// An environment variable that was set but failed to parse
#[derive(Debug, Clone, Error)]
#[error("invalid value of environment variable {key}: {source}")]
pub struct InvalidValue {
    pub key: String,
    #[source]
    pub source: ParseError,
}

/// Snapshot of a required variable that was absent from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingVar {
    /// Position of the variable in its registry
    pub index: usize,
    pub key: String,
    pub description: String,
    /// Rendered value at the time of parsing (the default, if any)
    pub value: String,
}

/// Every problem found by one parse pass.
///
/// Only ever constructed when at least one of the two lists is non-empty, so
/// holding an `Error` always means the configuration is unusable. Both lists
/// are in registration order.
#[derive(Debug, Clone)]
pub struct Error {
    pub invalid_values: Vec<InvalidValue>,
    pub missing_vars: Vec<MissingVar>,
}

impl Error {
    pub(crate) fn from_parts(
        invalid_values: Vec<InvalidValue>,
        missing_vars: Vec<MissingVar>,
    ) -> Option<Self> {
        if invalid_values.is_empty() && missing_vars.is_empty() {
            None
        } else {
            Some(Self {
                invalid_values,
                missing_vars,
            })
        }
    }

    /// Keys of all missing variables, in registration order
    pub fn missing_keys(&self) -> Vec<&str> {
        self.missing_vars.iter().map(|m| m.key.as_str()).collect()
    }

    /// Keys of all variables with invalid values, in registration order
    pub fn invalid_keys(&self) -> Vec<&str> {
        self.invalid_values.iter().map(|iv| iv.key.as_str()).collect()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = "**".red().bold();
        for invalid in &self.invalid_values {
            writeln!(f, "{} {}", marker, invalid)?;
        }

        match self.missing_vars.len() {
            0 => return Ok(()),
            1 => writeln!(
                f,
                "{} missing value for the following environment variable:",
                marker
            )?,
            n => writeln!(
                f,
                "{} missing values for the following {} environment variables:",
                marker,
                n.to_string().yellow().bold()
            )?,
        }
        for missing in &self.missing_vars {
            write_entry(f, &missing.key, &missing.description, &missing.value)?;
        }
        writeln!(f)
    }
}

impl std::error::Error for Error {}

/// Writes the default rendering of `error` to `out`
pub fn print_error(error: &Error, out: &mut impl io::Write) -> io::Result<()> {
    write!(out, "{}", error)
}
