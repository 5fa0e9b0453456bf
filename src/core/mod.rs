//! Core business logic - framework-agnostic statistics and reporting engine.
//!
//! Every function takes the database handle explicitly and returns plain
//! structured data; nothing here knows about HTTP.

/// Expense totals grouped by category
pub mod breakdown;
/// Budget storage and evaluation
pub mod budget;
/// Named date filters and time bounds
pub mod period;
/// Dashboard, budget page and reports composition
pub mod report;
/// Sample data loading
pub mod seed;
/// Income, expense and balance totals
pub mod statistics;
/// Transaction recording, listing and deletion
pub mod transaction;
/// Monthly income/expense trend
pub mod trend;
