//! Integration tests for the customer and invoice routes.
//!
//! These tests require:
//! - A running MongoDB instance
//! - The API server running (cargo run -p crescendo-api)
//!
//! Run with: cargo test -p crescendo-integration-tests -- --ignored

use reqwest::StatusCode;
use serde_json::{Value, json};

use crescendo_integration_tests::{base_url, client, unique_username};

#[tokio::test]
#[ignore = "Requires a running crescendo-api server and MongoDB"]
async fn test_invoice_append_returns_updated_customer() {
    let client = client();
    let base_url = base_url();
    let username = unique_username("shopper");

    // Create the customer
    let resp = client
        .post(format!("{base_url}/api/customers"))
        .json(&json!({
            "firstName": "Anna",
            "lastName": "Magdalena",
            "userName": username,
        }))
        .send()
        .await
        .expect("Failed to create customer");
    assert_eq!(resp.status(), StatusCode::OK);

    // Append an invoice; the updated customer comes back
    let resp = client
        .post(format!("{base_url}/api/customers/{username}/invoices"))
        .json(&json!({
            "subtotal": 120.5,
            "tax": 9.64,
            "dateCreated": "2023-04-30",
            "dateShipped": "2023-05-02",
            "lineItems": [
                { "name": "strings", "price": 60.25, "quantity": 2 },
            ],
        }))
        .send()
        .await
        .expect("Failed to append invoice");
    assert_eq!(resp.status(), StatusCode::OK);

    let customer: Value = resp.json().await.expect("Failed to parse customer");
    assert_eq!(customer["userName"], username.as_str());
    let invoices = customer["invoices"].as_array().expect("invoices array");
    assert_eq!(invoices.len(), 1);
    assert_eq!(invoices[0]["lineItems"][0]["name"], "strings");

    // Listing invoices returns the customer with the embedded array
    let fetched: Value = client
        .get(format!("{base_url}/api/customers/{username}/invoices"))
        .send()
        .await
        .expect("Failed to fetch invoices")
        .json()
        .await
        .expect("Failed to parse customer");
    assert_eq!(
        fetched["invoices"].as_array().expect("invoices array").len(),
        1
    );
}

#[tokio::test]
#[ignore = "Requires a running crescendo-api server and MongoDB"]
async fn test_invoice_routes_for_unknown_customer_are_not_found() {
    let client = client();
    let base_url = base_url();
    let username = unique_username("nobody");

    let resp = client
        .get(format!("{base_url}/api/customers/{username}/invoices"))
        .send()
        .await
        .expect("Failed to fetch invoices");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = client
        .post(format!("{base_url}/api/customers/{username}/invoices"))
        .json(&json!({
            "subtotal": 10.0,
            "tax": 0.8,
            "dateCreated": "2023-04-30",
            "dateShipped": "2023-05-02",
            "lineItems": [],
        }))
        .send()
        .await
        .expect("Failed to append invoice");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
