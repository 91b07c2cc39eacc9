//! Composer document type.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A composer document (`composers` collection).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Composer {
    /// Store-assigned identifier; `None` until the document is inserted.
    #[serde(
        rename = "_id",
        skip_serializing_if = "Option::is_none",
        serialize_with = "crate::models::serialize_option_oid_as_hex"
    )]
    pub id: Option<ObjectId>,
    pub first_name: String,
    pub last_name: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_without_id() {
        let composer = Composer {
            id: None,
            first_name: "Johann".to_string(),
            last_name: "Bach".to_string(),
        };

        let json = serde_json::to_value(&composer).unwrap();
        assert_eq!(json["firstName"], "Johann");
        assert_eq!(json["lastName"], "Bach");
        // Unset ids are skipped entirely, so inserts let the store assign one
        assert!(json.get("_id").is_none());
    }

    #[test]
    fn test_serialize_id_as_hex() {
        let oid = ObjectId::new();
        let composer = Composer {
            id: Some(oid),
            first_name: "Johann".to_string(),
            last_name: "Bach".to_string(),
        };

        let json = serde_json::to_value(&composer).unwrap();
        assert_eq!(json["_id"], oid.to_hex());
    }

    #[test]
    fn test_deserialize_from_bson_document() {
        let oid = ObjectId::new();
        let doc = mongodb::bson::doc! {
            "_id": oid,
            "firstName": "Ludwig",
            "lastName": "Beethoven",
        };

        let composer: Composer = mongodb::bson::from_document(doc).unwrap();
        assert_eq!(composer.id, Some(oid));
        assert_eq!(composer.first_name, "Ludwig");
        assert_eq!(composer.last_name, "Beethoven");
    }
}
