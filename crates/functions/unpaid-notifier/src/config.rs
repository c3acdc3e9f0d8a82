//! Notifier configuration.

use std::env;

use common::ServiceConfig;
use syndic_store::config::StoreConfig;

/// Notifier configuration, loaded once and passed to the server or job.
#[derive(Debug, Clone)]
pub struct NotifierConfig {
    pub store: StoreConfig,
    pub service: ServiceConfig,
}

impl NotifierConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            store: StoreConfig::from_env(),
            service: ServiceConfig {
                service_name: defaults.service.service_name,
                host: env::var("NOTIFIER_HOST").unwrap_or(defaults.service.host),
                port: env::var("NOTIFIER_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(defaults.service.port),
            },
        }
    }

    /// Address the HTTP server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.service.host, self.service.port)
    }
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            store: StoreConfig::default(),
            service: ServiceConfig {
                service_name: "unpaid-notifier".to_string(),
                host: "0.0.0.0".to_string(),
                port: 3001,
            },
        }
    }
}
