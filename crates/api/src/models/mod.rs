//! Document types stored in MongoDB.
//!
//! Each top-level type maps one-to-one onto a collection; embedded types
//! (invoices, line items, roles, dependents, players) live inside their
//! parent document and have no identity of their own. Field names are
//! camelCase on the wire and in the stored documents.

pub mod composer;
pub mod customer;
pub mod person;
pub mod team;
pub mod user;

use mongodb::bson::oid::ObjectId;
use serde::Serializer;

/// Serialize an optional `ObjectId` as its 24-character hex string.
///
/// Only affects serialization: JSON responses carry `"_id": "<hex>"` instead
/// of the extended-JSON `{"$oid": ...}` form. Deserialization from stored
/// BSON documents uses the default `ObjectId` representation.
#[allow(clippy::ref_option)]
pub fn serialize_option_oid_as_hex<S>(
    id: &Option<ObjectId>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match id {
        Some(oid) => serializer.serialize_str(&oid.to_hex()),
        None => serializer.serialize_none(),
    }
}
