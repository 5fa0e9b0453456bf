//! Category and transaction kind enums shared by both tables.
//!
//! Both are stored as text columns through `DeriveActiveEnum`, so queries can
//! filter and group on them without string juggling.

use crate::errors::{Error, Result};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Fixed set of transaction categories, in display order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, DeriveActiveEnum,
    Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum Category {
    /// Groceries and eating out
    #[sea_orm(string_value = "Food")]
    Food,
    /// Fuel, fares and rides
    #[sea_orm(string_value = "Transport")]
    Transport,
    /// Subscriptions, tickets and leisure
    #[sea_orm(string_value = "Entertainment")]
    Entertainment,
    /// Doctors and pharmacy
    #[sea_orm(string_value = "Healthcare")]
    Healthcare,
    /// Electricity, water and internet
    #[sea_orm(string_value = "Utilities")]
    Utilities,
    /// Clothes, electronics and other purchases
    #[sea_orm(string_value = "Shopping")]
    Shopping,
    /// Regular pay; income only and never budgeted
    #[sea_orm(string_value = "Salary")]
    Salary,
    /// Anything else
    #[sea_orm(string_value = "Other")]
    Other,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Self; 8] = [
        Self::Food,
        Self::Transport,
        Self::Entertainment,
        Self::Healthcare,
        Self::Utilities,
        Self::Shopping,
        Self::Salary,
        Self::Other,
    ];

    /// Returns the category name as stored and displayed.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Entertainment => "Entertainment",
            Self::Healthcare => "Healthcare",
            Self::Utilities => "Utilities",
            Self::Shopping => "Shopping",
            Self::Salary => "Salary",
            Self::Other => "Other",
        }
    }

    /// Whether a spending budget may be set for this category.
    #[must_use]
    pub const fn is_budgetable(self) -> bool {
        !matches!(self, Self::Salary)
    }

    /// Budgetable categories in display order.
    pub fn budgetable() -> impl Iterator<Item = Self> {
        Self::ALL.into_iter().filter(|c| c.is_budgetable())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::validation("category", format!("unknown category '{name}'")))
    }
}

/// Whether a transaction brings money in or takes it out.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money received
    #[sea_orm(string_value = "income")]
    Income,
    /// Money spent
    #[sea_orm(string_value = "expense")]
    Expense,
}

impl TransactionKind {
    /// Returns the lowercase name used in storage and query strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(Error::validation(
                "type",
                format!("expected 'income' or 'expense', got '{other}'"),
            )),
        }
    }
}
