use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use finance_tracker::{
    config::{self, database, seed},
    core::seed::seed_sample_data,
    errors::Result,
    web::{self, AppState},
};
use sea_orm::DatabaseConnection;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Personal finance tracker: transactions, budgets and reports over HTTP.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the HTTP server (default)
    Serve,
    /// Replace all data with a sample dataset
    Seed {
        /// TOML seed file; the built-in dataset is used when omitted
        #[arg(long, short)]
        file: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file, non-fatal: env vars can be set externally
    dotenv().ok();

    let cli = Cli::parse();
    let app_config = config::load_app_configuration()?;

    // 3. Storage must be reachable before anything else happens
    let db = database::create_connection(&app_config.database_url)
        .await
        .inspect(|_| info!("Database connected"))
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
    database::create_tables(&db).await?;

    let outcome = match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(db.clone(), &app_config).await,
        Command::Seed { file } => run_seed(&db, file).await,
    };

    db.close().await?;
    info!("Database connection closed");
    outcome
}

async fn serve(db: DatabaseConnection, app_config: &config::AppConfig) -> Result<()> {
    let app = web::router(AppState::new(db, app_config.recent_transactions));
    let listener = tokio::net::TcpListener::bind(app_config.bind_address).await?;
    info!("Listening on {}", app_config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutting down");
}

async fn run_seed(db: &DatabaseConnection, file: Option<PathBuf>) -> Result<()> {
    let seed_config = match file {
        Some(path) => seed::load_seed_config(path)?,
        None => seed::default_seed_config()?,
    };

    let summary = seed_sample_data(db, &seed_config, chrono::Local::now().naive_local()).await?;
    info!(
        transactions = summary.transactions,
        budgets = summary.budgets,
        income = summary.totals.income,
        expenses = summary.totals.expenses,
        balance = summary.totals.balance,
        "Sample data ready"
    );
    Ok(())
}
