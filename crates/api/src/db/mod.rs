//! Database operations for the Crescendo MongoDB.
//!
//! # Database: `crescendo`
//!
//! One collection per top-level entity; embedded arrays are stored inline
//! within their parent documents:
//!
//! ## Collections
//!
//! - `composers`
//! - `customers` - Invoices and line items embedded
//! - `persons` - Roles and dependents embedded
//! - `teams` - Players embedded
//! - `users` - Passwords stored as bcrypt hashes
//!
//! The client is created once at startup and injected into handlers through
//! `AppState`; repositories borrow the `Database` handle per request.

pub mod composers;
pub mod customers;
pub mod persons;
pub mod teams;
pub mod users;

use std::time::Duration;

use mongodb::Client;
use mongodb::bson::oid::ObjectId;
use mongodb::options::ClientOptions;
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

pub use composers::ComposerRepository;
pub use customers::CustomerRepository;
pub use persons::PersonRepository;
pub use teams::TeamRepository;
pub use users::UserRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Driver error (connectivity, server-side failure).
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// A path or body value is not a valid document id.
    #[error("invalid document id: {0}")]
    InvalidId(String),

    /// Requested document was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., unique username).
    #[error("constraint violation: {0}")]
    Conflict(String),

    /// A value could not be converted to BSON.
    #[error("serialization error: {0}")]
    Serialization(#[from] mongodb::bson::ser::Error),
}

/// Create a MongoDB client with sensible defaults.
///
/// # Arguments
///
/// * `uri` - MongoDB connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `mongodb::error::Error` if the URI cannot be parsed.
pub async fn create_client(uri: &SecretString) -> Result<Client, mongodb::error::Error> {
    let mut options = ClientOptions::parse(uri.expose_secret()).await?;
    options.app_name = Some("crescendo-api".to_string());
    options.max_pool_size = Some(10);
    options.connect_timeout = Some(Duration::from_secs(10));
    Client::with_options(options)
}

/// Parse a path parameter into an `ObjectId`.
fn parse_object_id(id: &str) -> Result<ObjectId, RepositoryError> {
    ObjectId::parse_str(id).map_err(|_| RepositoryError::InvalidId(id.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_object_id_valid() {
        let oid = ObjectId::new();
        assert_eq!(
            parse_object_id(&oid.to_hex()).expect("round trip"),
            oid
        );
    }

    #[test]
    fn test_parse_object_id_invalid() {
        assert!(matches!(
            parse_object_id("not-an-id"),
            Err(RepositoryError::InvalidId(_))
        ));
    }
}
