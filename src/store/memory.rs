use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use super::{resolve_id, UserStore};
use crate::{models::User, utils::AppError};

/// Store em memória para desenvolvimento local (`USER_STORE=memory`) e testes
#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn save(&self, user: User) -> Result<User, AppError> {
        let id = resolve_id(user.id);
        let stored = User {
            id: Some(id.clone()),
            name: user.name,
            last_name: user.last_name,
        };

        self.users.write().await.insert(id, stored.clone());

        Ok(stored)
    }

    async fn replace(&self, id: &str, user: User) -> Result<User, AppError> {
        let mut users = self.users.write().await;
        let existing = users
            .get_mut(id)
            .ok_or_else(|| AppError::NotFound(id.to_string()))?;

        existing.name = user.name;
        existing.last_name = user.last_name;

        Ok(existing.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<User, AppError> {
        self.users
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(id.to_string()))
    }

    async fn find_all(&self) -> Result<Vec<User>, AppError> {
        Ok(self.users.read().await.values().cloned().collect())
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<User>, AppError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .filter(|user| user.name == name)
            .cloned()
            .collect())
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), AppError> {
        self.users.write().await.remove(id);
        Ok(())
    }
}
