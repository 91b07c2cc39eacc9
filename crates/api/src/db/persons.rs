//! Person repository for database operations.

use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Collection, Database};

use super::RepositoryError;
use crate::models::person::Person;

const COLLECTION: &str = "persons";

/// Repository for person database operations.
pub struct PersonRepository<'a> {
    db: &'a Database,
}

impl<'a> PersonRepository<'a> {
    /// Create a new person repository.
    #[must_use]
    pub const fn new(db: &'a Database) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Person> {
        self.db.collection(COLLECTION)
    }

    /// Return all person documents.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn find_all(&self) -> Result<Vec<Person>, RepositoryError> {
        let cursor = self.collection().find(None, None).await?;
        Ok(cursor.try_collect().await?)
    }

    /// Insert a new person, returning it with the store-assigned id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, person: Person) -> Result<Person, RepositoryError> {
        let result = self.collection().insert_one(&person, None).await?;
        Ok(Person {
            id: result.inserted_id.as_object_id(),
            ..person
        })
    }
}
