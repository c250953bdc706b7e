// ==================== RECORD STORE ====================
// Fonte de verdade para os usuários. O índice de busca nunca é escrito daqui.

pub mod memory;
pub mod mongo;

pub use memory::InMemoryUserStore;
pub use mongo::MongoUserStore;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::{models::User, utils::AppError};

/// Authoritative persistence for users.
///
/// Each call is atomic for the single record it touches; nothing spans calls.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Assigns an id when absent, otherwise upserts under the given id.
    async fn save(&self, user: User) -> Result<User, AppError>;

    /// Overwrites an existing record without upserting; `NotFound` if the id is gone.
    async fn replace(&self, id: &str, user: User) -> Result<User, AppError>;

    async fn find_by_id(&self, id: &str) -> Result<User, AppError>;

    async fn find_all(&self) -> Result<Vec<User>, AppError>;

    /// Exact, case-sensitive equality on `name`.
    async fn find_by_name(&self, name: &str) -> Result<Vec<User>, AppError>;

    /// No error when the id is absent.
    async fn delete_by_id(&self, id: &str) -> Result<(), AppError>;

    async fn health_check(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// Id a ser usado no save: o informado ou um novo ObjectId em hex
pub(crate) fn resolve_id(id: Option<String>) -> String {
    match id {
        Some(id) if !id.trim().is_empty() => id,
        _ => ObjectId::new().to_hex(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_id_keeps_given_id() {
        assert_eq!(resolve_id(Some("u-1".into())), "u-1");
    }

    #[test]
    fn test_resolve_id_assigns_fresh_ids() {
        let a = resolve_id(None);
        let b = resolve_id(Some("  ".into()));
        assert_eq!(a.len(), 24);
        assert_ne!(a, b);
    }
}
