use std::sync::Arc;

use favorites_store::InMemoryUserRepo;

use crate::config::ServerConfig;
use crate::service::FavoritesService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Favorites operations used by the `/users` routes.
    pub favorites: FavoritesService,
    /// Concrete store, kept for health reporting.
    pub store: Arc<InMemoryUserRepo>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Wire the service facade over `store`.
    pub fn new(store: Arc<InMemoryUserRepo>, config: ServerConfig) -> Self {
        Self {
            favorites: FavoritesService::new(store.clone()),
            store,
            config: Arc::new(config),
        }
    }
}
