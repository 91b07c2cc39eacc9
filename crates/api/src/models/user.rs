//! User document type.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A user document (`users` collection).
///
/// `password` holds the bcrypt hash, never the plaintext. This type is the
/// storage representation only - handlers respond with a view that omits the
/// hash (see `routes::auth::UserResponse`), so never serialize it into a
/// response body directly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    /// Store-assigned identifier; `None` until the document is inserted.
    #[serde(
        rename = "_id",
        skip_serializing_if = "Option::is_none",
        serialize_with = "crate::models::serialize_option_oid_as_hex"
    )]
    pub id: Option<ObjectId>,
    pub user_name: String,
    /// bcrypt hash of the user's password.
    pub password: String,
    pub email_address: String,
}
