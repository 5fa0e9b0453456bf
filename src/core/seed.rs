//! Sample data loading.
//!
//! Replaces all stored transactions and budgets with a seed dataset. The reset
//! runs inside one database transaction so a failed seed leaves the old data
//! in place.

use crate::{
    config::seed::SeedConfig,
    core::{
        budget::set_budget,
        statistics::Statistics,
        transaction::{NewTransaction, create_transaction},
    },
    entities::{Budget, Transaction, TransactionKind},
    errors::Result,
};
use chrono::{Datelike, Duration, NaiveDateTime};
use sea_orm::{DatabaseConnection, EntityTrait, TransactionTrait};
use tracing::{info, instrument};

/// What a seed run inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedSummary {
    /// Number of transactions inserted
    pub transactions: usize,
    /// Number of budgets set
    pub budgets: usize,
    /// Totals over the inserted transactions
    pub totals: Statistics,
}

/// Clears both tables and inserts `seed`, dating transactions relative to `now`.
#[instrument(skip(db, seed))]
pub async fn seed_sample_data(
    db: &DatabaseConnection,
    seed: &SeedConfig,
    now: NaiveDateTime,
) -> Result<SeedSummary> {
    let txn = db.begin().await?;

    let cleared = Transaction::delete_many().exec(&txn).await?;
    Budget::delete_many().exec(&txn).await?;
    info!(removed = cleared.rows_affected, "Cleared existing data");

    let mut income = 0.0;
    let mut expenses = 0.0;
    for sample in &seed.transactions {
        create_transaction(
            &txn,
            NewTransaction {
                kind: sample.kind,
                amount: sample.amount,
                category: sample.category,
                description: sample.description.clone(),
                occurred_at: now - Duration::days(i64::from(sample.days_ago)),
            },
        )
        .await?;
        match sample.kind {
            TransactionKind::Income => income += sample.amount,
            TransactionKind::Expense => expenses += sample.amount,
        }
    }

    for budget in &seed.budgets {
        set_budget(&txn, budget.category, now.month(), now.year(), budget.amount).await?;
    }

    txn.commit().await?;

    let summary = SeedSummary {
        transactions: seed.transactions.len(),
        budgets: seed.budgets.len(),
        totals: Statistics::from_totals(income, expenses),
    };
    info!(
        transactions = summary.transactions,
        budgets = summary.budgets,
        "Sample data inserted"
    );
    Ok(summary)
}
