//! Composer repository for database operations.

use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::options::{FindOneAndUpdateOptions, ReturnDocument};
use mongodb::{Collection, Database};

use super::{RepositoryError, parse_object_id};
use crate::models::composer::Composer;

const COLLECTION: &str = "composers";

/// Repository for composer database operations.
pub struct ComposerRepository<'a> {
    db: &'a Database,
}

impl<'a> ComposerRepository<'a> {
    /// Create a new composer repository.
    #[must_use]
    pub const fn new(db: &'a Database) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Composer> {
        self.db.collection(COLLECTION)
    }

    /// Return all composer documents.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn find_all(&self) -> Result<Vec<Composer>, RepositoryError> {
        let cursor = self.collection().find(None, None).await?;
        Ok(cursor.try_collect().await?)
    }

    /// Get a composer by its document id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::InvalidId` if `id` is not a valid `ObjectId`.
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Composer>, RepositoryError> {
        let oid = parse_object_id(id)?;
        Ok(self.collection().find_one(doc! { "_id": oid }, None).await?)
    }

    /// Insert a new composer, returning it with the store-assigned id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, composer: Composer) -> Result<Composer, RepositoryError> {
        let result = self.collection().insert_one(&composer, None).await?;
        Ok(Composer {
            id: result.inserted_id.as_object_id(),
            ..composer
        })
    }

    /// Overwrite a composer's name fields, returning the updated document.
    ///
    /// Returns `None` if no composer has the given id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::InvalidId` if `id` is not a valid `ObjectId`.
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn update(
        &self,
        id: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<Composer>, RepositoryError> {
        let oid = parse_object_id(id)?;
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();
        Ok(self
            .collection()
            .find_one_and_update(
                doc! { "_id": oid },
                doc! { "$set": { "firstName": first_name, "lastName": last_name } },
                options,
            )
            .await?)
    }

    /// Delete a composer, returning the deleted document.
    ///
    /// Returns `None` if no composer has the given id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::InvalidId` if `id` is not a valid `ObjectId`.
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn delete(&self, id: &str) -> Result<Option<Composer>, RepositoryError> {
        let oid = parse_object_id(id)?;
        Ok(self
            .collection()
            .find_one_and_delete(doc! { "_id": oid }, None)
            .await?)
    }
}
