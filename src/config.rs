use anyhow::{Context, Result, bail};
use std::env;
use std::str::FromStr;

/// Which `TodoStore` implementation backs the service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Spanner,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "spanner" => Ok(StoreBackend::Spanner),
            "memory" => Ok(StoreBackend::Memory),
            other => bail!("TODO_STORE must be one of: spanner, memory, got '{}'", other),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpannerConfig {
    pub emulator_host: Option<String>,
    pub project: String,
    pub instance: String,
    pub database: String,
}

impl SpannerConfig {
    pub fn project_path(&self) -> String {
        format!("projects/{}", self.project)
    }

    pub fn instance_path(&self) -> String {
        format!("{}/instances/{}", self.project_path(), self.instance)
    }

    pub fn database_path(&self) -> String {
        format!("{}/databases/{}", self.instance_path(), self.database)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfig {
    Spanner(SpannerConfig),
    Memory,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub store: StoreConfig,
    pub service_port: u16,
    pub service_host: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let backend = match lookup("TODO_STORE") {
            Some(value) => value.parse::<StoreBackend>()?,
            None => StoreBackend::Spanner,
        };

        let store = match backend {
            StoreBackend::Memory => StoreConfig::Memory,
            StoreBackend::Spanner => {
                let required = |key: &str| {
                    lookup(key).with_context(|| format!("{} environment variable is required", key))
                };

                StoreConfig::Spanner(SpannerConfig {
                    emulator_host: lookup("SPANNER_EMULATOR_HOST"),
                    project: required("SPANNER_PROJECT")?,
                    instance: required("SPANNER_INSTANCE")?,
                    database: required("SPANNER_DATABASE")?,
                })
            }
        };

        let service_port = lookup("SERVICE_PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = lookup("SERVICE_HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        Ok(Config {
            store,
            service_port,
            service_host,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.service_host, self.service_port)
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        match &self.store {
            StoreConfig::Spanner(spanner) => {
                tracing::info!("  Store: spanner");
                tracing::info!(
                    "  Spanner emulator: {}",
                    spanner
                        .emulator_host
                        .as_deref()
                        .unwrap_or("disabled (using production)")
                );
                tracing::info!("  Spanner project: {}", spanner.project);
                tracing::info!("  Spanner instance: {}", spanner.instance);
                tracing::info!("  Spanner database: {}", spanner.database);
            }
            StoreConfig::Memory => {
                tracing::info!("  Store: memory (data is lost on restart)");
            }
        }
        tracing::info!("  Service listening on: {}", self.bind_address());
    }
}
