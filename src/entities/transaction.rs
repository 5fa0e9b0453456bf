//! Transaction entity - A single recorded income or expense event.
//!
//! Transactions are immutable once written: the only mutation is deletion.
//! `occurred_at` is the user-supplied date the money moved, `recorded_at` the
//! instant the row was created.
use super::category::{Category, TransactionKind};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Transaction database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    /// Unique identifier for the transaction
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Income or expense
    pub kind: TransactionKind,
    /// Strictly positive amount in dollars
    pub amount: f64,
    /// Category from the fixed category set
    pub category: Category,
    /// Free-text description, possibly empty
    pub description: String,
    /// Local date and time the transaction happened
    pub occurred_at: DateTime,
    /// Local time the transaction was recorded
    pub recorded_at: DateTime,
}

/// Transactions have no relationships with other tables
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
