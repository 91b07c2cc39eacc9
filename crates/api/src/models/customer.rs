//! Customer document types.
//!
//! Invoices and their line items are embedded in the customer document and
//! addressed only through it; `userName` is the customer's lookup key.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A customer document (`customers` collection).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Customer {
    /// Store-assigned identifier; `None` until the document is inserted.
    #[serde(
        rename = "_id",
        skip_serializing_if = "Option::is_none",
        serialize_with = "crate::models::serialize_option_oid_as_hex"
    )]
    pub id: Option<ObjectId>,
    pub first_name: String,
    pub last_name: String,
    pub user_name: String,
    pub invoices: Vec<Invoice>,
}

/// An invoice embedded in a customer document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Invoice {
    pub subtotal: f64,
    pub tax: f64,
    pub date_created: String,
    pub date_shipped: String,
    pub line_items: Vec<LineItem>,
}

/// A line item embedded in an invoice.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LineItem {
    pub name: String,
    pub price: f64,
    pub quantity: i64,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format_is_camel_case() {
        let customer = Customer {
            id: None,
            first_name: "Anna".to_string(),
            last_name: "Magdalena".to_string(),
            user_name: "amagdalena".to_string(),
            invoices: vec![Invoice {
                subtotal: 120.5,
                tax: 9.64,
                date_created: "2023-04-30".to_string(),
                date_shipped: "2023-05-02".to_string(),
                line_items: vec![LineItem {
                    name: "strings".to_string(),
                    price: 60.25,
                    quantity: 2,
                }],
            }],
        };

        let json = serde_json::to_value(&customer).unwrap();
        assert_eq!(json["userName"], "amagdalena");
        assert_eq!(json["invoices"][0]["dateCreated"], "2023-04-30");
        assert_eq!(json["invoices"][0]["lineItems"][0]["quantity"], 2);
    }

    #[test]
    fn test_deserialize_document_without_invoices() {
        // Schema-flexible store: older documents may lack the array entirely
        let doc = mongodb::bson::doc! {
            "_id": ObjectId::new(),
            "firstName": "Anna",
            "lastName": "Magdalena",
            "userName": "amagdalena",
        };

        let customer: Customer = mongodb::bson::from_document(doc).unwrap();
        assert!(customer.invoices.is_empty());
    }
}
