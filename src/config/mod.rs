/// Database configuration and connection management
pub mod database;

/// Sample data loaded from TOML for the `seed` command
pub mod seed;

/// Application settings from environment variables
pub mod settings;

pub use settings::{AppConfig, load_app_configuration};
