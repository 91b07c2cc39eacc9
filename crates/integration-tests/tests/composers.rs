//! Integration tests for the composer CRUD routes.
//!
//! These tests require:
//! - A running MongoDB instance
//! - The API server running (cargo run -p crescendo-api)
//!
//! Run with: cargo test -p crescendo-integration-tests -- --ignored

use reqwest::StatusCode;
use serde_json::{Value, json};

use crescendo_integration_tests::{base_url, client};

#[tokio::test]
#[ignore = "Requires a running crescendo-api server and MongoDB"]
async fn test_create_composer_returns_fields_and_id() {
    let client = client();
    let base_url = base_url();

    let resp = client
        .post(format!("{base_url}/api/composers"))
        .json(&json!({ "firstName": "Johann", "lastName": "Bach" }))
        .send()
        .await
        .expect("Failed to create composer");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(body["firstName"], "Johann");
    assert_eq!(body["lastName"], "Bach");
    assert!(
        body["_id"].as_str().is_some_and(|id| !id.is_empty()),
        "created composer should carry a generated id"
    );
}

#[tokio::test]
#[ignore = "Requires a running crescendo-api server and MongoDB"]
async fn test_composer_crud_lifecycle() {
    let client = client();
    let base_url = base_url();

    // Create
    let created: Value = client
        .post(format!("{base_url}/api/composers"))
        .json(&json!({ "firstName": "Clara", "lastName": "Schumann" }))
        .send()
        .await
        .expect("Failed to create composer")
        .json()
        .await
        .expect("Failed to parse created composer");
    let id = created["_id"].as_str().expect("missing id").to_string();

    // Round-trip: find-by-id returns the created record
    let fetched: Value = client
        .get(format!("{base_url}/api/composers/{id}"))
        .send()
        .await
        .expect("Failed to fetch composer")
        .json()
        .await
        .expect("Failed to parse fetched composer");
    assert_eq!(fetched["firstName"], "Clara");
    assert_eq!(fetched["lastName"], "Schumann");

    // Update returns the updated document
    let updated: Value = client
        .put(format!("{base_url}/api/composers/{id}"))
        .json(&json!({ "firstName": "Clara", "lastName": "Wieck" }))
        .send()
        .await
        .expect("Failed to update composer")
        .json()
        .await
        .expect("Failed to parse updated composer");
    assert_eq!(updated["lastName"], "Wieck");

    // Delete returns the deleted document
    let resp = client
        .delete(format!("{base_url}/api/composers/{id}"))
        .send()
        .await
        .expect("Failed to delete composer");
    assert_eq!(resp.status(), StatusCode::OK);
    let deleted: Value = resp.json().await.expect("Failed to parse deleted composer");
    assert_eq!(deleted["_id"], id.as_str());

    // Deleted id is now absent
    let resp = client
        .get(format!("{base_url}/api/composers/{id}"))
        .send()
        .await
        .expect("Failed to re-fetch composer");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "Requires a running crescendo-api server and MongoDB"]
async fn test_list_composers_returns_array() {
    let client = client();
    let base_url = base_url();

    let resp = client
        .get(format!("{base_url}/api/composers"))
        .send()
        .await
        .expect("Failed to list composers");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert!(body.is_array());
}

#[tokio::test]
#[ignore = "Requires a running crescendo-api server and MongoDB"]
async fn test_malformed_composer_id_is_bad_request() {
    let client = client();
    let base_url = base_url();

    let resp = client
        .get(format!("{base_url}/api/composers/not-an-object-id"))
        .send()
        .await
        .expect("Failed to fetch composer");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
