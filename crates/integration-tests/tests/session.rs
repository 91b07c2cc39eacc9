//! Integration tests for the signup/login flow.
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
async fn test_signup_returns_user_without_password() {
    let username = unique_username("signup");

    let resp = client()
        .post(format!("{}/api/signup", base_url()))
        .json(&json!({
            "userName": username,
            "password": "s3cret-passphrase",
            "emailAddress": "signup@example.com",
        }))
        .send()
        .await
        .expect("Failed to sign up");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(body["userName"], username.as_str());
    assert_eq!(body["emailAddress"], "signup@example.com");
    assert!(body["_id"].as_str().is_some());
    // Neither the plaintext nor the hash leaves the server
    assert!(body.get("password").is_none());
}

#[tokio::test]
#[ignore = "Requires a running crescendo-api server and MongoDB"]
async fn test_duplicate_signup_is_conflict() {
    let client = client();
    let base_url = base_url();
    let username = unique_username("dup");
    let payload = json!({
        "userName": username,
        "password": "s3cret-passphrase",
        "emailAddress": "dup@example.com",
    });

    let resp = client
        .post(format!("{base_url}/api/signup"))
        .json(&payload)
        .send()
        .await
        .expect("Failed to sign up");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client
        .post(format!("{base_url}/api/signup"))
        .json(&payload)
        .send()
        .await
        .expect("Failed to re-sign up");
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Username is already in use");
}

#[tokio::test]
#[ignore = "Requires a running crescendo-api server and MongoDB"]
async fn test_login_with_correct_credentials() {
    let client = client();
    let base_url = base_url();
    let username = unique_username("login");

    client
        .post(format!("{base_url}/api/signup"))
        .json(&json!({
            "userName": username,
            "password": "correct-horse",
            "emailAddress": "login@example.com",
        }))
        .send()
        .await
        .expect("Failed to sign up");

    let resp = client
        .post(format!("{base_url}/api/login"))
        .json(&json!({ "userName": username, "password": "correct-horse" }))
        .send()
        .await
        .expect("Failed to log in");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "User logged in");
}

#[tokio::test]
#[ignore = "Requires a running crescendo-api server and MongoDB"]
async fn test_login_failures_are_not_enumerable() {
    let client = client();
    let base_url = base_url();
    let username = unique_username("enum");

    client
        .post(format!("{base_url}/api/signup"))
        .json(&json!({
            "userName": username,
            "password": "correct-horse",
            "emailAddress": "enum@example.com",
        }))
        .send()
        .await
        .expect("Failed to sign up");

    // Wrong password for an existing user
    let wrong_password = client
        .post(format!("{base_url}/api/login"))
        .json(&json!({ "userName": username, "password": "wrong-horse" }))
        .send()
        .await
        .expect("Failed to log in");
    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    let wrong_password: Value = wrong_password.json().await.expect("Failed to parse");

    // Username that was never registered
    let unknown_user = client
        .post(format!("{base_url}/api/login"))
        .json(&json!({
            "userName": unique_username("ghost"),
            "password": "wrong-horse",
        }))
        .send()
        .await
        .expect("Failed to log in");
    assert_eq!(unknown_user.status(), StatusCode::UNAUTHORIZED);
    let unknown_user: Value = unknown_user.json().await.expect("Failed to parse");

    // The two failure responses are indistinguishable
    assert_eq!(wrong_password, unknown_user);
}
