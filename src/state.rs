use std::sync::Arc;

use crate::{
    config::{AppConfig, StoreBackend},
    database::MongoDB,
    search::{ElasticsearchUserSearch, UserSearch},
    services::UserService,
    store::{InMemoryUserStore, MongoUserStore, UserStore},
    utils::AppError,
};

/// Composition root shared by every actix worker.
///
/// The two name lookups are deliberately separate fields: `users` answers the
/// CRUD surface from the store, `search` answers the search surface from the
/// index. Neither calls the other.
#[derive(Clone)]
pub struct AppState {
    pub users: UserService,
    pub search: Arc<dyn UserSearch>,
}

impl AppState {
    pub fn new(store: Arc<dyn UserStore>, search: Arc<dyn UserSearch>) -> Self {
        Self {
            users: UserService::new(store),
            search,
        }
    }

    pub async fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let store: Arc<dyn UserStore> = match &config.store {
            StoreBackend::MongoDB { database_url } => {
                let db = MongoDB::new(database_url).await?;
                log::info!("✅ MongoDB connected successfully");
                Arc::new(MongoUserStore::new(db))
            }
            StoreBackend::Memory => {
                log::warn!("⚠️  Using in-memory user store, data is lost on restart");
                Arc::new(InMemoryUserStore::new())
            }
        };

        let search = Arc::new(ElasticsearchUserSearch::new(&config.search)?);
        log::info!("🔎 Search index at {}", config.search.base_url());

        Ok(Self::new(store, search))
    }
}
