//! # Error Types
//!
//! This module defines the error type shared by the configuration, selection,
//! breeding and evolution layers of the crate.
//!
//! The optimizer itself never fails on valid input: an unattractive circuit is
//! expressed as a low or negative fitness, not as an error. Errors are reserved
//! for rejected configuration, empty populations handed to operators that need
//! at least one individual, and loading options from disk.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use circuit_ga::error::{GeneticError, Result};
//!
//! fn check_population(size: usize) -> Result<()> {
//!     if size == 0 {
//!         return Err(GeneticError::Configuration(
//!             "Population size cannot be zero".to_string(),
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_population(0).is_err());
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use circuit_ga::error::{GeneticError, OptionExt};
//!
//! fn best_score(scores: &[i64]) -> circuit_ga::error::Result<i64> {
//!     scores.iter().max().cloned().ok_or_else_genetic(|| GeneticError::EmptyPopulation)
//! }
//!
//! assert!(best_score(&[]).is_err());
//! ```

use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Represents errors that can occur while configuring or running the optimizer.
#[derive(Error, Debug)]
pub enum GeneticError {
    /// Error that occurs when a breeding operation fails.
    #[error("Breeding error: {0}")]
    Breeding(String),

    /// Error that occurs when an evolution process fails.
    #[error("Evolution error: {0}")]
    Evolution(String),

    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// Error that occurs when NaN or infinity values are encountered.
    #[error("Invalid numeric value: {0}")]
    InvalidNumericValue(String),

    /// Error that occurs when an I/O operation fails.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error that occurs when options cannot be decoded.
    #[cfg(feature = "serde")]
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A generic error with a custom message.
    #[error("{0}")]
    Other(String),
}

/// A specialized Result type for optimizer operations.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Result to add context to errors.
///
/// ## Examples
///
/// ```rust
/// use circuit_ga::error::ResultExt;
///
/// fn parse_count(raw: &str) -> circuit_ga::error::Result<usize> {
///     raw.parse::<usize>().context("Failed to parse population size")
/// }
///
/// assert!(parse_count("ten").is_err());
/// ```
pub trait ResultExt<T, E> {
    /// Adds context to an error, converting it into a `GeneticError::Other`.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| GeneticError::Other(format!("{}: {}", context, e)))
    }
}

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, GeneticError>` using
    /// a closure to generate the error.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}
