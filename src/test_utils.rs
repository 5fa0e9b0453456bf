//! Shared test utilities.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test transactions with sensible defaults.

use crate::{
    core::transaction::{NewTransaction, create_transaction},
    entities::{Category, TransactionKind, transaction},
    errors::Result,
};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Noon on the given day. Panics on an invalid date.
#[allow(clippy::unwrap_used)]
pub fn at(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap())
}

/// Midnight at the start of the given day. Panics on an invalid date.
#[allow(clippy::unwrap_used)]
pub fn midnight(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_time(NaiveTime::MIN)
}

/// Builds a [`NewTransaction`] with a default description.
pub fn new_transaction(
    kind: TransactionKind,
    amount: f64,
    category: Category,
    occurred_at: NaiveDateTime,
) -> NewTransaction {
    NewTransaction {
        kind,
        amount,
        category,
        description: "Test transaction".to_string(),
        occurred_at,
    }
}

/// Inserts a transaction with a default description.
pub async fn insert_transaction(
    db: &DatabaseConnection,
    kind: TransactionKind,
    amount: f64,
    category: Category,
    occurred_at: NaiveDateTime,
) -> Result<transaction::Model> {
    create_transaction(db, new_transaction(kind, amount, category, occurred_at)).await
}

/// An unsaved transaction model for pure tests.
pub fn model(id: i64, kind: TransactionKind, amount: f64, category: Category) -> transaction::Model {
    transaction::Model {
        id,
        kind,
        amount,
        category,
        description: String::new(),
        occurred_at: at(2024, 6, 1),
        recorded_at: at(2024, 6, 1),
    }
}
