//! Person document types.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A person document (`persons` collection).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Person {
    /// Store-assigned identifier; `None` until the document is inserted.
    #[serde(
        rename = "_id",
        skip_serializing_if = "Option::is_none",
        serialize_with = "crate::models::serialize_option_oid_as_hex"
    )]
    pub id: Option<ObjectId>,
    pub first_name: String,
    pub last_name: String,
    pub roles: Vec<Role>,
    pub dependents: Vec<Dependent>,
    pub birth_date: String,
}

/// A role embedded in a person document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Role {
    pub text: String,
}

/// A dependent embedded in a person document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Dependent {
    pub first_name: String,
    pub last_name: String,
}
