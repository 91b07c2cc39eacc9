//! Signup and login handlers.

use axum::Json;
use axum::extract::State;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::error::Result;
use crate::models::user::User;
use crate::services::auth::AuthService;
use crate::state::AppState;

/// Request body for registering a user.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub user_name: String,
    pub password: String,
    pub email_address: String,
}

/// Request body for verifying credentials.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub user_name: String,
    pub password: String,
}

/// The created user as returned to the client.
///
/// Deliberately omits the password hash stored on [`User`].
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[serde(
        rename = "_id",
        skip_serializing_if = "Option::is_none",
        serialize_with = "crate::models::serialize_option_oid_as_hex"
    )]
    pub id: Option<ObjectId>,
    pub user_name: String,
    pub email_address: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            user_name: user.user_name,
            email_address: user.email_address,
        }
    }
}

/// Register a new user.
pub async fn signup(
    State(state): State<AppState>,
    Json(body): Json<SignupRequest>,
) -> Result<Json<UserResponse>> {
    let user = AuthService::new(state.db())
        .signup(&body.user_name, &body.password, &body.email_address)
        .await?;

    tracing::info!(username = %user.user_name, "user registered");
    Ok(Json(UserResponse::from(user)))
}

/// Verify login credentials.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<Value>> {
    AuthService::new(state.db())
        .login(&body.user_name, &body.password)
        .await?;

    tracing::info!(username = %body.user_name, "user logged in");
    Ok(Json(json!({ "message": "User logged in" })))
}
