// ==================== USER SERVICE (CRUD) ====================
// Orquestra apenas o record store. Nenhuma escrita no índice de busca acontece
// aqui: a população do índice é responsabilidade de um pipeline externo.

use std::sync::Arc;

use crate::{models::User, store::UserStore, utils::AppError};

#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    pub async fn save(&self, user: User) -> Result<User, AppError> {
        let saved = self.store.save(user).await?;
        log::info!("✅ User saved: {}", saved.id.as_deref().unwrap_or_default());
        Ok(saved)
    }

    /// Overwrites `name` and `last_name` of an existing record; the payload id is ignored.
    ///
    /// Persists with a non-upserting replace, so a delete racing the update wins.
    pub async fn update(&self, id: &str, user: User) -> Result<User, AppError> {
        let mut existing = self.store.find_by_id(id).await?;

        existing.name = user.name;
        existing.last_name = user.last_name;

        let updated = self.store.replace(id, existing).await?;
        log::info!("✅ User updated: {}", id);
        Ok(updated)
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        self.store.delete_by_id(id).await
    }

    pub async fn find_one(&self, id: &str) -> Result<User, AppError> {
        self.store.find_by_id(id).await
    }

    pub async fn find_all(&self) -> Result<Vec<User>, AppError> {
        self.store.find_all().await
    }

    /// Exact match against the store, not the search index.
    pub async fn find_by_name(&self, name: &str) -> Result<Vec<User>, AppError> {
        self.store.find_by_name(name).await
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
        self.store.health_check().await
    }
}
