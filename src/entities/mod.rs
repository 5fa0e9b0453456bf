//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and the enums stored in them.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod budget;
pub mod category;
pub mod transaction;

// Re-export specific types to avoid conflicts
pub use budget::{Column as BudgetColumn, Entity as Budget, Model as BudgetModel};
pub use category::{Category, TransactionKind};
pub use transaction::{
    Column as TransactionColumn, Entity as Transaction, Model as TransactionModel,
};
