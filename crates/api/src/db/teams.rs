//! Team repository for database operations.
//!
//! Players are appended with the store's atomic `$push` so concurrent
//! appends to the same team never overwrite each other.

use futures::TryStreamExt;
use mongodb::bson::{doc, to_bson};
use mongodb::options::{FindOneAndUpdateOptions, ReturnDocument};
use mongodb::{Collection, Database};

use super::{RepositoryError, parse_object_id};
use crate::models::team::{Player, Team};

const COLLECTION: &str = "teams";

/// Repository for team database operations.
pub struct TeamRepository<'a> {
    db: &'a Database,
}

impl<'a> TeamRepository<'a> {
    /// Create a new team repository.
    #[must_use]
    pub const fn new(db: &'a Database) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Team> {
        self.db.collection(COLLECTION)
    }

    /// Return all team documents.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn find_all(&self) -> Result<Vec<Team>, RepositoryError> {
        let cursor = self.collection().find(None, None).await?;
        Ok(cursor.try_collect().await?)
    }

    /// Get a team by its document id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::InvalidId` if `id` is not a valid `ObjectId`.
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Team>, RepositoryError> {
        let oid = parse_object_id(id)?;
        Ok(self.collection().find_one(doc! { "_id": oid }, None).await?)
    }

    /// Insert a new team, returning it with the store-assigned id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, team: Team) -> Result<Team, RepositoryError> {
        let result = self.collection().insert_one(&team, None).await?;
        Ok(Team {
            id: result.inserted_id.as_object_id(),
            ..team
        })
    }

    /// Append a player to a team's roster, returning the updated team.
    ///
    /// Returns `None` if no team has the given id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::InvalidId` if `id` is not a valid `ObjectId`.
    /// Returns `RepositoryError::Serialization` if the player cannot be
    /// converted to BSON.
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn push_player(
        &self,
        id: &str,
        player: &Player,
    ) -> Result<Option<Team>, RepositoryError> {
        let oid = parse_object_id(id)?;
        let player = to_bson(player)?;
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();
        Ok(self
            .collection()
            .find_one_and_update(
                doc! { "_id": oid },
                doc! { "$push": { "players": player } },
                options,
            )
            .await?)
    }

    /// Delete a team, returning the deleted document.
    ///
    /// Returns `None` if no team has the given id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::InvalidId` if `id` is not a valid `ObjectId`.
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn delete(&self, id: &str) -> Result<Option<Team>, RepositoryError> {
        let oid = parse_object_id(id)?;
        Ok(self
            .collection()
            .find_one_and_delete(doc! { "_id": oid }, None)
            .await?)
    }
}
