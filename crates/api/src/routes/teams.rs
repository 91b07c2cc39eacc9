//! Team and player handlers.

use axum::Json;
use axum::extract::{Path, State};
use serde::Deserialize;

use crate::db::TeamRepository;
use crate::error::{AppError, Result};
use crate::models::team::{Player, Team};
use crate::state::AppState;

/// Request body for creating a team.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeamRequest {
    pub name: String,
    #[serde(default)]
    pub mascot: Option<String>,
    #[serde(default)]
    pub players: Vec<PlayerRequest>,
}

/// Request body for appending a player to a team.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRequest {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub salary: Option<f64>,
}

impl PlayerRequest {
    /// Validate the required name fields and convert to a [`Player`].
    fn into_player(self) -> Result<Player> {
        if self.first_name.trim().is_empty() || self.last_name.trim().is_empty() {
            return Err(AppError::BadRequest(
                "player firstName and lastName must not be empty".to_string(),
            ));
        }
        Ok(Player {
            first_name: self.first_name,
            last_name: self.last_name,
            salary: self.salary,
        })
    }
}

/// List all teams.
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Team>>> {
    let teams = TeamRepository::new(state.db()).find_all().await?;
    Ok(Json(teams))
}

/// Create a new team.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateTeamRequest>,
) -> Result<Json<Team>> {
    if body.name.trim().is_empty() {
        return Err(AppError::BadRequest(
            "team name must not be empty".to_string(),
        ));
    }

    let players = body
        .players
        .into_iter()
        .map(PlayerRequest::into_player)
        .collect::<Result<Vec<_>>>()?;

    let team = TeamRepository::new(state.db())
        .create(Team {
            id: None,
            name: body.name,
            mascot: body.mascot,
            players,
        })
        .await?;

    tracing::info!(id = ?team.id, "team created");
    Ok(Json(team))
}

/// Append a player to a team, returning the appended player.
pub async fn add_player(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<PlayerRequest>,
) -> Result<Json<Player>> {
    let player = body.into_player()?;

    let team = TeamRepository::new(state.db())
        .push_player(&id, &player)
        .await?
        .ok_or_else(|| AppError::NotFound("team not found".to_string()))?;

    // The push went through, so the updated roster cannot be empty
    let appended = team
        .players
        .last()
        .cloned()
        .ok_or_else(|| AppError::Internal("player append produced an empty roster".to_string()))?;

    tracing::info!(team_id = ?team.id, "player appended");
    Ok(Json(appended))
}

/// List all players in a team, in append order.
pub async fn players(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Player>>> {
    let team = TeamRepository::new(state.db())
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("team not found".to_string()))?;
    Ok(Json(team.players))
}

/// Delete a team, returning the deleted document.
pub async fn remove(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Team>> {
    let team = TeamRepository::new(state.db())
        .delete(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("team not found".to_string()))?;

    tracing::info!(id = ?team.id, "team deleted");
    Ok(Json(team))
}
