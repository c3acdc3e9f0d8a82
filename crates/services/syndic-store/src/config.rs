//! Store configuration.

use std::env;

use common::DatabaseConfig;

/// Store configuration.
#[derive(Debug, Clone, Default)]
pub struct StoreConfig {
    pub database: DatabaseConfig,
    /// Apply pending migrations on connect
    pub auto_migrate: bool,
}

impl StoreConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            database: DatabaseConfig::from_env(),
            auto_migrate: env::var("SYNDIC_AUTO_MIGRATE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }
}
