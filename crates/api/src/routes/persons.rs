//! Person handlers.

use axum::Json;
use axum::extract::State;
use serde::Deserialize;

use crate::db::PersonRepository;
use crate::error::Result;
use crate::models::person::{Dependent, Person, Role};
use crate::state::AppState;

/// Request body for creating a person.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePersonRequest {
    pub first_name: String,
    pub last_name: String,
    pub roles: Vec<RoleRequest>,
    pub dependents: Vec<DependentRequest>,
    pub birth_date: String,
}

/// A role inside a [`CreatePersonRequest`].
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleRequest {
    pub text: String,
}

/// A dependent inside a [`CreatePersonRequest`].
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependentRequest {
    pub first_name: String,
    pub last_name: String,
}

/// List all persons.
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Person>>> {
    let persons = PersonRepository::new(state.db()).find_all().await?;
    Ok(Json(persons))
}

/// Create a new person.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreatePersonRequest>,
) -> Result<Json<Person>> {
    let person = PersonRepository::new(state.db())
        .create(Person {
            id: None,
            first_name: body.first_name,
            last_name: body.last_name,
            roles: body
                .roles
                .into_iter()
                .map(|role| Role { text: role.text })
                .collect(),
            dependents: body
                .dependents
                .into_iter()
                .map(|dependent| Dependent {
                    first_name: dependent.first_name,
                    last_name: dependent.last_name,
                })
                .collect(),
            birth_date: body.birth_date,
        })
        .await?;

    tracing::info!(id = ?person.id, "person created");
    Ok(Json(person))
}
