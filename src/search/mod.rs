// ==================== SEARCH INDEX (READ ONLY) ====================
// Índice de texto mantido por um pipeline externo; nunca escrito por este serviço.
// Pode estar desatualizado em relação ao store.

pub mod elasticsearch;

#[cfg(test)]
pub(crate) mod test_support;

pub use elasticsearch::ElasticsearchUserSearch;

use async_trait::async_trait;

use crate::{models::User, utils::AppError};

pub const USERS_INDEX: &str = "users";

#[async_trait]
pub trait UserSearch: Send + Sync {
    /// Term-equality match on the `name` field of the `users` index.
    ///
    /// Empty when nothing matches or the index holds no documents. Transport
    /// failures surface as [`AppError::SearchUnavailable`] and are not retried.
    async fn query_by_name(&self, text: &str) -> Result<Vec<User>, AppError>;
}
