use std::net::SocketAddr;

use common::{Budget, BudgetError};
use reqwest::Url;
use thiserror::Error;

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
pub const DEFAULT_UPSTREAM_URL: &str = "https://economia.awesomeapi.com.br/json/last/USD-BRL";
pub const DEFAULT_DATABASE_URL: &str = "sqlite://quotation.db";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid bind address: {0}")]
    BindAddress(String),

    #[error("invalid upstream url: {0}")]
    UpstreamUrl(String),

    #[error("unsupported database url: {0}")]
    DatabaseUrl(String),

    #[error(transparent)]
    Budget(#[from] BudgetError),
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Socket the `/cotacao` endpoint listens on.
    pub bind_address: String,

    /// External quotation API queried once per request.
    pub upstream_url: String,

    /// SQLite database holding the `quotations` table.
    pub database_url: String,

    /// Bound on the upstream fetch, body read and decode included.
    pub upstream_budget: Budget,

    /// Bound on the single insert performed per request.
    pub persistence_budget: Budget,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            upstream_url: DEFAULT_UPSTREAM_URL.to_string(),
            database_url: DEFAULT_DATABASE_URL.to_string(),
            upstream_budget: Budget::upstream(),
            persistence_budget: Budget::persistence(),
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bind_address
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::BindAddress(self.bind_address.clone()))?;

        let url = Url::parse(&self.upstream_url)
            .map_err(|_| ConfigError::UpstreamUrl(self.upstream_url.clone()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::UpstreamUrl(self.upstream_url.clone()));
        }

        if !self.database_url.starts_with("sqlite:") {
            return Err(ConfigError::DatabaseUrl(self.database_url.clone()));
        }

        self.upstream_budget.validate()?;
        self.persistence_budget.validate()?;

        Ok(())
    }
}
