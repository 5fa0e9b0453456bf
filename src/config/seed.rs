//! Sample data configuration loaded from TOML.
//!
//! The seed file lists transactions relative to "now" (`days_ago`) and budgets
//! for the current month. A default dataset is compiled into the binary; a
//! custom file can be passed to the `seed` command.

use crate::entities::{Category, TransactionKind};
use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_SEED: &str = include_str!("default_seed.toml");

/// Structure of a seed file
#[derive(Debug, Deserialize)]
pub struct SeedConfig {
    /// Transactions to insert
    #[serde(default)]
    pub transactions: Vec<SeedTransaction>,
    /// Budgets to set for the current month
    #[serde(default)]
    pub budgets: Vec<SeedBudget>,
}

/// One sample transaction
#[derive(Debug, Deserialize, Clone)]
pub struct SeedTransaction {
    /// Income or expense
    pub kind: TransactionKind,
    /// Positive amount
    pub amount: f64,
    /// Category name
    pub category: Category,
    /// Free-text description
    #[serde(default)]
    pub description: String,
    /// How many days before the seed run the transaction happened
    pub days_ago: u32,
}

/// One sample budget for the current month
#[derive(Debug, Deserialize, Clone)]
pub struct SeedBudget {
    /// Budgeted category
    pub category: Category,
    /// Monthly limit
    pub amount: f64,
}

/// Parses seed data from TOML text.
pub fn parse_seed_config(contents: &str) -> Result<SeedConfig> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse seed data: {e}"),
    })
}

/// Loads seed data from a TOML file.
///
/// # Errors
/// Returns an error if the file cannot be read or is not a valid seed file.
pub fn load_seed_config<P: AsRef<Path>>(path: P) -> Result<SeedConfig> {
    let path_ref = path.as_ref();
    tracing::debug!("Loading seed data from {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read seed file {path_ref:?}: {e}"),
    })?;
    parse_seed_config(&contents)
}

/// Returns the built-in sample dataset.
pub fn default_seed_config() -> Result<SeedConfig> {
    parse_seed_config(DEFAULT_SEED)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn test_default_seed_parses() {
        let config = default_seed_config().unwrap();
        assert_eq!(config.transactions.len(), 20);
        assert_eq!(config.budgets.len(), 6);
        assert!(config.budgets.iter().all(|b| b.category.is_budgetable()));

        let income: f64 = config
            .transactions
            .iter()
            .filter(|t| t.kind == TransactionKind::Income)
            .map(|t| t.amount)
            .sum();
        assert_eq!(income, 15_500.0);
    }

    #[test]
    fn test_parse_custom_seed() {
        let toml_str = r#"
            [[transactions]]
            kind = "expense"
            amount = 12.5
            category = "Food"
            days_ago = 0

            [[budgets]]
            category = "Food"
            amount = 100.0
        "#;

        let config = parse_seed_config(toml_str).unwrap();
        assert_eq!(config.transactions.len(), 1);
        assert_eq!(config.transactions[0].category, Category::Food);
        assert_eq!(config.transactions[0].description, "");
        assert_eq!(config.budgets[0].amount, 100.0);
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let toml_str = r#"
            [[budgets]]
            category = "Rent"
            amount = 100.0
        "#;
        assert!(matches!(
            parse_seed_config(toml_str),
            Err(Error::Config { message: _ })
        ));
    }

    #[test]
    fn test_missing_file_is_a_config_error() {
        let result = load_seed_config("does/not/exist.toml");
        assert!(matches!(result, Err(Error::Config { message: _ })));
    }
}
