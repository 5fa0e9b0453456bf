//! Finance tracker - income/expense tracking with budgets and reports
//!
//! This crate records income and expense transactions, aggregates them into
//! statistics and category breakdowns, evaluates monthly per-category budgets and
//! builds six-month trends, serving the results as JSON over HTTP.

#![deny(
    unsafe_code,
    unreachable_code,
    unreachable_patterns,
    unused_must_use,
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
)]
#![warn(
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    // Money handling: no panics, no exact float comparisons outside tests
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::panic,
    clippy::float_cmp,
    clippy::dbg_macro,
    clippy::todo,
    clippy::unimplemented,
    clippy::clone_on_ref_ptr,
    clippy::exit,
    future_incompatible,
    rust_2018_idioms,
)]
// Error variants are listed on the shared `Error` enum rather than per function
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]

/// Configuration management for database, settings and seed data
pub mod config;
/// Core business logic - statistics, budgets, trends and reports
pub mod core;
/// SeaORM entity definitions for database tables
pub mod entities;
/// Unified error types and result handling
pub mod errors;
/// HTTP interface - routes, handlers and shared state
pub mod web;

#[cfg(test)]
pub mod test_utils;
