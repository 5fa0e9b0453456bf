//! HTTP layer - routes, request parsing and shared handler state.
//!
//! Handlers parse input into typed values, call into [`crate::core`] and
//! return JSON. Rendering is left to clients.

/// Error to response mapping
pub mod error;
/// Request payloads and parsing
pub mod forms;
/// Route handlers
pub mod handlers;

use axum::{
    Router,
    routing::{delete, get},
};
use chrono::{Local, NaiveDateTime};
use sea_orm::DatabaseConnection;
use tower_http::trace::TraceLayer;

use handlers::{budget, dashboard, reports, transactions};

/// Source of the current local time.
pub type Clock = fn() -> NaiveDateTime;

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Shared data available to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection for all storage operations
    pub database: DatabaseConnection,
    /// Number of recent transactions on the dashboard
    pub recent_limit: u64,
    clock: Clock,
}

impl AppState {
    /// Creates the state using the system clock.
    #[must_use]
    pub fn new(database: DatabaseConnection, recent_limit: u64) -> Self {
        Self::with_clock(database, recent_limit, local_now)
    }

    /// Creates the state with an explicit clock.
    #[must_use]
    pub fn with_clock(database: DatabaseConnection, recent_limit: u64, clock: Clock) -> Self {
        Self {
            database,
            recent_limit,
            clock,
        }
    }

    /// The current local time.
    #[must_use]
    pub fn now(&self) -> NaiveDateTime {
        (self.clock)()
    }
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(dashboard::index))
        .route(
            "/transactions",
            get(transactions::list).post(transactions::create),
        )
        .route("/transactions/:id", delete(transactions::remove))
        .route("/categories", get(transactions::categories))
        .route("/budget", get(budget::show).post(budget::update))
        .route("/reports", get(reports::show))
        .route("/api/chart-data", get(reports::chart_data))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
