use std::env;
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use serde::Deserialize;

use crate::store::StoreConfig;

const DEFAULT_POSTGRES_PORT: u16 = 5432;

/// Top-level application configuration loaded from file + environment.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseSection,
    pub logging: LoggingSection,
}

impl AppConfig {
    /// Load configuration from disk and environment.
    pub fn load() -> Result<Self> {
        let config_path = env::var("SUMMIT_CONFIG").unwrap_or_else(|_| "config.toml".to_string());

        let mut builder = config::Config::builder();

        if Path::new(&config_path).exists() {
            builder = builder.add_source(config::File::from(PathBuf::from(&config_path)));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("SUMMIT")
                .separator("_")
                .try_parsing(true),
        );

        let settings = builder.build()?;
        let mut config: Self = settings.try_deserialize()?;

        if config.logging.level.trim().is_empty() {
            config.logging.level = "info".to_string();
        }

        Ok(config)
    }

    /// Resolve the store configuration for the configured backend.
    pub fn store_config(&self) -> Result<StoreConfig> {
        self.database.to_runtime()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseSection {
    pub backend: DatabaseBackendKind,
    /// Drop all peaks and insert the nine reference records at startup.
    /// Off by default: enabling it discards any previously stored data.
    pub reset_and_seed: bool,
    pub postgres: Option<PostgresSection>,
    pub sqlite: Option<SqliteSection>,
}

impl DatabaseSection {
    pub fn to_runtime(&self) -> Result<StoreConfig> {
        match self.backend {
            DatabaseBackendKind::Sqlite => {
                let sqlite = self.sqlite.clone().unwrap_or_default();
                Ok(StoreConfig::Sqlite { path: sqlite.path })
            }
            DatabaseBackendKind::Postgres => {
                let pg = match self.postgres.clone() {
                    Some(pg) => pg,
                    None => bail!("database.postgres configuration required when backend is 'postgres'"),
                };

                if pg.host.trim().is_empty() {
                    bail!("database.postgres.host must be specified");
                }
                if pg.user.trim().is_empty() {
                    bail!("database.postgres.user must be specified");
                }
                if pg.dbname.trim().is_empty() {
                    bail!("database.postgres.dbname must be specified");
                }

                Ok(StoreConfig::Postgres { url: pg.url() })
            }
        }
    }
}

impl Default for DatabaseSection {
    fn default() -> Self {
        Self {
            backend: DatabaseBackendKind::Sqlite,
            reset_and_seed: false,
            postgres: None,
            sqlite: Some(SqliteSection::default()),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseBackendKind {
    #[default]
    Sqlite,
    Postgres,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct PostgresSection {
    pub host: String,
    pub port: Option<u16>,
    pub user: String,
    pub password: String,
    pub dbname: String,
}

impl PostgresSection {
    /// Assemble a connection URL from the configured parts.
    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.user,
            self.password,
            self.host,
            self.port.unwrap_or(DEFAULT_POSTGRES_PORT),
            self.dbname,
        )
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SqliteSection {
    pub path: String,
}

impl Default for SqliteSection {
    fn default() -> Self {
        Self {
            path: "./summit.db".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct LoggingSection {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}
