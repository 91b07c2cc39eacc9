//! Team document types.
//!
//! Players are embedded in the team document; appending one never gives it
//! an identity outside its team.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A team document (`teams` collection).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Team {
    /// Store-assigned identifier; `None` until the document is inserted.
    #[serde(
        rename = "_id",
        skip_serializing_if = "Option::is_none",
        serialize_with = "crate::models::serialize_option_oid_as_hex"
    )]
    pub id: Option<ObjectId>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mascot: Option<String>,
    pub players: Vec<Player>,
}

/// A player embedded in a team document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Player {
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
}
