use std::sync::Arc;

use cinetrend_catalog::{CatalogApi, MovieCatalog};
use cinetrend_store::{AppwriteStore, DocumentStore, MemoryStore, TrendStore};

use crate::config::{ServerConfig, StoreConfig};
use crate::session::SessionDeps;
use crate::ws::WsManager;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    /// Movie catalog client.
    pub catalog: Arc<dyn MovieCatalog>,
    /// Trend counter store.
    pub trends: TrendStore,
    /// WebSocket connection manager (browser clients).
    pub ws_manager: Arc<WsManager>,
}

impl AppState {
    /// Construct the catalog client and trend store from configuration.
    pub fn from_config(config: ServerConfig, ws_manager: Arc<WsManager>) -> Self {
        let catalog = CatalogApi::new(
            config.catalog.base_url.clone(),
            config.catalog.api_token.clone(),
        );

        let store: Arc<dyn DocumentStore> = match &config.store {
            StoreConfig::Appwrite(appwrite) => {
                tracing::info!(
                    endpoint = %appwrite.endpoint,
                    database_id = %appwrite.database_id,
                    collection_id = %appwrite.collection_id,
                    "Using Appwrite trend store"
                );
                Arc::new(AppwriteStore::new(appwrite.clone()))
            }
            StoreConfig::Memory => {
                tracing::warn!("Using in-memory trend store; counters are not persisted");
                Arc::new(MemoryStore::new())
            }
        };

        Self {
            config: Arc::new(config),
            catalog: Arc::new(catalog),
            trends: TrendStore::new(store),
            ws_manager,
        }
    }

    /// Dependencies handed to each new search session.
    pub fn session_deps(&self) -> SessionDeps {
        SessionDeps {
            catalog: Arc::clone(&self.catalog),
            trends: self.trends.clone(),
            debounce: self.config.debounce(),
        }
    }
}
