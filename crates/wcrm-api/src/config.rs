//! # Configuration
//!
//! Command-line flags with environment fallbacks, resolved once at startup
//! into [`AppConfig`].

use std::fmt;

use clap::{Parser, ValueEnum};

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Parser, Clone)]
#[command(name = "wcrm-api", version, about = "Wealth CRM backend HTTP service")]
pub struct Cli {
    /// Address to bind.
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 8000)]
    pub port: u16,

    /// PostgreSQL connection URL. Without it the in-memory store is used.
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Logical database name reported by diagnostics.
    #[arg(long, env = "DATABASE_NAME", default_value = "wealth_crm")]
    pub database_name: String,

    #[arg(long, env = "WCRM_DB_MAX_CONNECTIONS", default_value_t = 10)]
    pub max_connections: u32,

    #[arg(long, env = "WCRM_LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

impl Cli {
    pub fn into_config(self) -> AppConfig {
        AppConfig {
            host: self.host,
            port: self.port,
            database_url: self.database_url.filter(|url| !url.trim().is_empty()),
            database_name: self.database_name,
            max_connections: self.max_connections,
            log_format: self.log_format,
        }
    }
}

/// Resolved application configuration.
#[derive(Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: Option<String>,
    pub database_name: String,
    pub max_connections: u32,
    pub log_format: LogFormat,
}

impl AppConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field(
                "database_url",
                &self.database_url.as_ref().map(|_| "[REDACTED]"),
            )
            .field("database_name", &self.database_name)
            .field("max_connections", &self.max_connections)
            .field("log_format", &self.log_format)
            .finish()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            database_url: None,
            database_name: "wealth_crm".to_string(),
            max_connections: 10,
            log_format: LogFormat::Pretty,
        }
    }
}
