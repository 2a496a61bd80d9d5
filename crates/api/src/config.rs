use std::time::Duration;

use cinetrend_catalog::DEFAULT_BASE_URL;
use cinetrend_core::debounce::DEFAULT_DEBOUNCE;
use cinetrend_store::appwrite::DEFAULT_ENDPOINT;
use cinetrend_store::AppwriteConfig;

/// Server configuration loaded from environment variables.
///
/// Everything except the Appwrite collection coordinates has a default
/// suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Extra origins allowed to call the JSON API cross-origin, parsed from
    /// comma-separated `CORS_ORIGINS`. Empty by default: the page, its
    /// socket and the API share one origin.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Quiet period before a typed query is searched, in milliseconds.
    pub debounce_ms: u64,
    pub catalog: CatalogConfig,
    pub store: StoreConfig,
}

/// Movie catalog connection settings.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub base_url: String,
    /// Bearer token. Missing is allowed; every search then fails upstream.
    pub api_token: Option<String>,
}

/// Which document store backs the trend counters.
#[derive(Debug, Clone)]
pub enum StoreConfig {
    Appwrite(AppwriteConfig),
    /// In-process store; counters vanish on restart.
    Memory,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(&|name: &str| std::env::var(name).ok())
    }

    /// Load configuration through `lookup`, applying defaults.
    ///
    /// | Env Var                | Default                          |
    /// |------------------------|----------------------------------|
    /// | `HOST`                 | `0.0.0.0`                        |
    /// | `PORT`                 | `3000`                           |
    /// | `CORS_ORIGINS`         | none                             |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                             |
    /// | `DEBOUNCE_MS`          | `500`                            |
    ///
    /// Catalog and store settings are read by [`CatalogConfig::from_lookup`]
    /// and [`StoreConfig::from_lookup`]. Panics on malformed values.
    pub fn from_lookup(lookup: &dyn Fn(&str) -> Option<String>) -> Self {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());

        let port: u16 = lookup("PORT")
            .unwrap_or_else(|| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = lookup("CORS_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = lookup("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let debounce_ms: u64 = lookup("DEBOUNCE_MS")
            .map(|v| v.parse().expect("DEBOUNCE_MS must be a valid u64"))
            .unwrap_or(DEFAULT_DEBOUNCE.as_millis() as u64);

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            debounce_ms,
            catalog: CatalogConfig::from_lookup(lookup),
            store: StoreConfig::from_lookup(lookup),
        }
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl CatalogConfig {
    /// | Env Var             | Default                        |
    /// |---------------------|--------------------------------|
    /// | `TMDB_API_BASE_URL` | `https://api.themoviedb.org/3` |
    /// | `TMDB_API_TOKEN`    | none                           |
    pub fn from_lookup(lookup: &dyn Fn(&str) -> Option<String>) -> Self {
        let api_token = lookup("TMDB_API_TOKEN").filter(|t| !t.trim().is_empty());
        if api_token.is_none() {
            tracing::warn!("TMDB_API_TOKEN is not set; catalog searches will fail");
        }

        Self {
            base_url: lookup("TMDB_API_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            api_token,
        }
    }
}

impl StoreConfig {
    /// `TREND_STORE` selects the backend (`appwrite` by default, or `memory`).
    ///
    /// For Appwrite, `APPWRITE_PROJECT_ID`, `APPWRITE_DATABASE_ID` and
    /// `APPWRITE_COLLECTION_ID` are required; `APPWRITE_ENDPOINT` defaults to
    /// Appwrite Cloud and `APPWRITE_API_KEY` is optional. Panics on missing
    /// values so misconfiguration fails at startup.
    pub fn from_lookup(lookup: &dyn Fn(&str) -> Option<String>) -> Self {
        let backend = lookup("TREND_STORE").unwrap_or_else(|| "appwrite".into());

        match backend.as_str() {
            "memory" => StoreConfig::Memory,
            "appwrite" => StoreConfig::Appwrite(AppwriteConfig {
                endpoint: lookup("APPWRITE_ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
                project_id: required(lookup, "APPWRITE_PROJECT_ID"),
                database_id: required(lookup, "APPWRITE_DATABASE_ID"),
                collection_id: required(lookup, "APPWRITE_COLLECTION_ID"),
                api_key: lookup("APPWRITE_API_KEY").filter(|k| !k.is_empty()),
            }),
            other => panic!("TREND_STORE must be 'appwrite' or 'memory', got '{other}'"),
        }
    }
}

fn required(lookup: &dyn Fn(&str) -> Option<String>, name: &str) -> String {
    let value = lookup(name).unwrap_or_else(|| panic!("{name} must be set in the environment"));
    assert!(!value.trim().is_empty(), "{name} must not be empty");
    value
}
