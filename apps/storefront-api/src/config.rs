use core_config::{AppInfo, ConfigError, FromEnv, app_info, env_flag, server::ServerConfig};
use database::postgres::PostgresConfig;
use std::str::FromStr;

pub use core_config::Environment;

/// Where products and carts are kept
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    /// Process-local store with the sample catalog, lost on restart
    Memory,
}

impl FromStr for StoreBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "memory" | "in-memory" | "inmemory" => Ok(Self::Memory),
            other => Err(ConfigError::ParseError {
                key: "STORE_BACKEND".to_string(),
                details: format!("expected `postgres` or `memory`, got `{other}`"),
            }),
        }
    }
}

/// Application configuration composed from the shared config pieces
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub environment: Environment,
    pub server: ServerConfig,
    pub store: StoreBackend,
    /// Present only for the postgres backend
    pub database: Option<PostgresConfig>,
    pub run_migrations: bool,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?; // HOST=0.0.0.0, PORT=8080 by default

        let store = match std::env::var("STORE_BACKEND") {
            Ok(value) => value.parse()?,
            Err(_) => StoreBackend::Postgres,
        };

        let database = match store {
            StoreBackend::Postgres => Some(PostgresConfig::from_env()?), // DATABASE_URL required
            StoreBackend::Memory => None,
        };

        Ok(Self {
            app: app_info!(),
            environment,
            server,
            store,
            database,
            run_migrations: env_flag("RUN_MIGRATIONS", true)?,
        })
    }
}
