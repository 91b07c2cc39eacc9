//! User repository for database operations.
//!
//! Username uniqueness is enforced by application logic in the auth service,
//! not by a store-level constraint.

use mongodb::bson::doc;
use mongodb::{Collection, Database};

use super::RepositoryError;
use crate::models::user::User;

const COLLECTION: &str = "users";

/// Repository for user database operations.
pub struct UserRepository<'a> {
    db: &'a Database,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(db: &'a Database) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<User> {
        self.db.collection(COLLECTION)
    }

    /// Get a user by username.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        Ok(self
            .collection()
            .find_one(doc! { "userName": username }, None)
            .await?)
    }

    /// Insert a new user, returning it with the store-assigned id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, user: User) -> Result<User, RepositoryError> {
        let result = self.collection().insert_one(&user, None).await?;
        Ok(User {
            id: result.inserted_id.as_object_id(),
            ..user
        })
    }
}
