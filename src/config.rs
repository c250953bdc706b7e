use std::env;
use thiserror::Error;

/// Backend do record store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    MongoDB { database_url: String },
    Memory,
}

/// Transporte do índice de busca (Elasticsearch)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub scheme: String,
    pub host: String,
    pub port: u16,
}

impl SearchConfig {
    pub fn base_url(&self) -> String {
        format!("{}://{}:{}", self.scheme, self.host, self.port)
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub store: StoreBackend,
    pub search: SearchConfig,
    pub cors_allowed_origins: Vec<String>,
}

#[derive(Debug, PartialEq, Eq, Error)]
#[error("Configuration error: {0}")]
pub struct ConfigError(String);

impl AppConfig {
    /// Reads the process environment (after `dotenv`).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let port = parse_port("PORT", &var("PORT", "8080"))?;

        let store = match var("USER_STORE", "mongodb").to_lowercase().as_str() {
            "mongodb" | "mongo" => StoreBackend::MongoDB {
                database_url: lookup("DATABASE_URL")
                    .ok_or_else(|| ConfigError("DATABASE_URL must be set".to_string()))?,
            },
            "memory" => StoreBackend::Memory,
            other => {
                return Err(ConfigError(format!(
                    "USER_STORE must be 'mongodb' or 'memory', got '{}'",
                    other
                )))
            }
        };

        let search = SearchConfig {
            scheme: var("ELASTICSEARCH_SCHEME", "http"),
            host: var("ELASTICSEARCH_HOST", "localhost"),
            port: parse_port("ELASTICSEARCH_PORT", &var("ELASTICSEARCH_PORT", "9200"))?,
        };

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(str::trim)
                    .filter(|o| !o.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            host: var("HOST", "0.0.0.0"),
            port,
            store,
            search,
            cors_allowed_origins,
        })
    }
}

fn parse_port(key: &str, value: &str) -> Result<u16, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError(format!("{} must be a valid port, got '{}'", key, value)))
}
