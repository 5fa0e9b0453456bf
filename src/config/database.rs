//! Database configuration module.
//!
//! This module handles the `SQLite` connection and table creation using `SeaORM`.
//! Tables are generated from the entity definitions with
//! `Schema::create_table_from_entity`, so the schema always matches the Rust
//! structs. Indexes that entity attributes cannot express (the composite
//! budget key) are built here with `sea_query`.

use crate::entities::{Budget, BudgetColumn, Transaction, TransactionColumn};
use crate::errors::Result;
use sea_orm::{
    ConnectionTrait, Database, DatabaseConnection, Schema,
    sea_query::{Index, IndexCreateStatement},
};
use tracing::{debug, info, instrument};

/// Default location of the local database file.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/finance_tracker.sqlite?mode=rwc";

/// Establishes a connection to the database at `database_url`.
///
/// A failure here is fatal for the service: nothing is served without storage.
#[instrument]
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    debug!("Connecting to database");
    Database::connect(database_url).await.map_err(Into::into)
}

/// Unique key for budgets: one row per category and month.
fn budget_period_index() -> IndexCreateStatement {
    Index::create()
        .name("idx_budgets_category_month_year")
        .table(Budget)
        .col(BudgetColumn::Category)
        .col(BudgetColumn::Month)
        .col(BudgetColumn::Year)
        .unique()
        .if_not_exists()
        .to_owned()
}

fn transaction_date_index() -> IndexCreateStatement {
    Index::create()
        .name("idx_transactions_occurred_at")
        .table(Transaction)
        .col(TransactionColumn::OccurredAt)
        .if_not_exists()
        .to_owned()
}

/// Creates all tables and indexes if they do not exist yet.
///
/// Safe to call on every start-up.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut transaction_table = schema.create_table_from_entity(Transaction);
    transaction_table.if_not_exists();
    let mut budget_table = schema.create_table_from_entity(Budget);
    budget_table.if_not_exists();

    db.execute(builder.build(&transaction_table)).await?;
    db.execute(builder.build(&budget_table)).await?;
    db.execute(builder.build(&budget_period_index())).await?;
    db.execute(builder.build(&transaction_date_index())).await?;

    info!("Database tables ensured");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{BudgetModel, TransactionModel};
    use sea_orm::{EntityTrait, QuerySelect};

    #[tokio::test]
    async fn test_create_tables() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;

        // Test that tables exist by querying them
        let _: Vec<TransactionModel> = Transaction::find().limit(1).all(&db).await?;
        let _: Vec<BudgetModel> = Budget::find().limit(1).all(&db).await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_create_tables_is_idempotent() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;
        create_tables(&db).await?;
        Ok(())
    }
}
