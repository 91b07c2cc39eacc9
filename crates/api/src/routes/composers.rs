//! Composer CRUD handlers.

use axum::Json;
use axum::extract::{Path, State};
use serde::Deserialize;

use crate::db::ComposerRepository;
use crate::error::{AppError, Result};
use crate::models::composer::Composer;
use crate::state::AppState;

/// Request body for creating or updating a composer.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposerRequest {
    pub first_name: String,
    pub last_name: String,
}

/// List all composers.
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Composer>>> {
    let composers = ComposerRepository::new(state.db()).find_all().await?;
    Ok(Json(composers))
}

/// Get a composer by id.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Composer>> {
    let composer = ComposerRepository::new(state.db())
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("composer not found".to_string()))?;
    Ok(Json(composer))
}

/// Create a new composer.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<ComposerRequest>,
) -> Result<Json<Composer>> {
    let composer = ComposerRepository::new(state.db())
        .create(Composer {
            id: None,
            first_name: body.first_name,
            last_name: body.last_name,
        })
        .await?;

    tracing::info!(id = ?composer.id, "composer created");
    Ok(Json(composer))
}

/// Update a composer's name fields, returning the updated document.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<ComposerRequest>,
) -> Result<Json<Composer>> {
    let composer = ComposerRepository::new(state.db())
        .update(&id, &body.first_name, &body.last_name)
        .await?
        .ok_or_else(|| AppError::NotFound("composer not found".to_string()))?;
    Ok(Json(composer))
}

/// Delete a composer, returning the deleted document.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Composer>> {
    let composer = ComposerRepository::new(state.db())
        .delete(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("composer not found".to_string()))?;

    tracing::info!(id = ?composer.id, "composer deleted");
    Ok(Json(composer))
}
