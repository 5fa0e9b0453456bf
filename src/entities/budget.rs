//! Budget entity - A per-category spending limit for one month.
//!
//! Rows are unique per (category, month, year); the unique index is created in
//! [`crate::config::database::create_tables`] and writes go through an upsert.

use super::category::Category;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Budget database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "budgets")]
pub struct Model {
    /// Unique identifier for the budget
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Budgeted category (never `Salary`)
    pub category: Category,
    /// Non-negative spending limit in dollars
    pub amount: f64,
    /// Calendar month, 1-12
    pub month: i32,
    /// Calendar year
    pub year: i32,
    /// When the amount was last set
    pub updated_at: DateTime,
}

/// `Budget` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
