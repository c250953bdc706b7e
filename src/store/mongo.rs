use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::{bson::doc, Collection};

use super::{resolve_id, UserStore};
use crate::{
    database::{MongoDB, USERS_COLLECTION},
    models::{User, UserDocument},
    utils::AppError,
};

/// Store backed by the `users` collection
pub struct MongoUserStore {
    db: MongoDB,
    collection: Collection<UserDocument>,
}

impl MongoUserStore {
    pub fn new(db: MongoDB) -> Self {
        let collection = db.collection::<UserDocument>(USERS_COLLECTION);
        Self { db, collection }
    }
}

#[async_trait]
impl UserStore for MongoUserStore {
    async fn save(&self, user: User) -> Result<User, AppError> {
        let document = UserDocument {
            id: resolve_id(user.id),
            name: user.name,
            last_name: user.last_name,
        };

        self.collection
            .replace_one(doc! { "_id": document.id.as_str() }, &document)
            .upsert(true)
            .await?;

        log::debug!("💾 User {} persisted", document.id);

        Ok(document.into())
    }

    async fn replace(&self, id: &str, user: User) -> Result<User, AppError> {
        let document = UserDocument {
            id: id.to_string(),
            name: user.name,
            last_name: user.last_name,
        };

        let result = self
            .collection
            .replace_one(doc! { "_id": id }, &document)
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(id.to_string()));
        }

        Ok(document.into())
    }

    async fn find_by_id(&self, id: &str) -> Result<User, AppError> {
        self.collection
            .find_one(doc! { "_id": id })
            .await?
            .map(User::from)
            .ok_or_else(|| AppError::NotFound(id.to_string()))
    }

    async fn find_all(&self) -> Result<Vec<User>, AppError> {
        let documents: Vec<UserDocument> = self.collection.find(doc! {}).await?.try_collect().await?;

        Ok(documents.into_iter().map(User::from).collect())
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<User>, AppError> {
        let documents: Vec<UserDocument> = self
            .collection
            .find(doc! { "name": name })
            .await?
            .try_collect()
            .await?;

        Ok(documents.into_iter().map(User::from).collect())
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), AppError> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;

        if result.deleted_count == 0 {
            log::debug!("ℹ️  Delete of absent user {} ignored", id);
        }

        Ok(())
    }

    async fn health_check(&self) -> Result<(), AppError> {
        self.db.health_check().await.map(|_| ())
    }
}
