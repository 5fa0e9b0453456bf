//! Unified error type for the finance tracker.
//!
//! Every fallible operation in the crate returns [`Result`]. Database errors
//! convert automatically so storage calls can use `?`; input problems are
//! reported as typed variants that the web layer turns into responses.

use crate::entities::Category;
use thiserror::Error;

/// All errors produced by the finance tracker.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be loaded or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the problem
        message: String,
    },

    /// Any error reported by the storage layer
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Filesystem or socket error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A required environment variable was missing or not unicode
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// Amount is zero, negative, NaN or infinite where that is not allowed
    #[error("Invalid amount: {amount}")]
    InvalidAmount {
        /// The rejected amount
        amount: f64,
    },

    /// A user-supplied field could not be parsed
    #[error("Invalid {field}: {message}")]
    Validation {
        /// Name of the offending field
        field: &'static str,
        /// Description of the problem
        message: String,
    },

    /// The date filter name is not one of `all`, `today`, `week`, `month`, `year`
    #[error("Unknown date filter '{name}'")]
    UnknownFilter {
        /// The rejected filter name
        name: String,
    },

    /// Budgets cannot be set for income-only categories
    #[error("Category {category} cannot have a budget")]
    NotBudgetable {
        /// The rejected category
        category: Category,
    },

    /// Month outside 1-12 or a year chrono cannot represent
    #[error("Invalid period {month}/{year}")]
    InvalidPeriod {
        /// Requested month
        month: u32,
        /// Requested year
        year: i32,
    },
}

impl Error {
    /// Shorthand for a [`Error::Validation`] error.
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
