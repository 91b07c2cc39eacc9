//! HTTP route handlers for the API.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                             - Liveness check
//! GET    /health/ready                       - Readiness check (pings MongoDB)
//!
//! # Composers
//! GET    /api/composers                      - List composers
//! POST   /api/composers                      - Create composer
//! GET    /api/composers/{id}                 - Composer by id
//! PUT    /api/composers/{id}                 - Update composer
//! DELETE /api/composers/{id}                 - Delete composer
//!
//! # Customers
//! POST   /api/customers                      - Create customer
//! POST   /api/customers/{username}/invoices  - Append invoice
//! GET    /api/customers/{username}/invoices  - Customer with invoices
//!
//! # Persons
//! GET    /api/persons                        - List persons
//! POST   /api/persons                        - Create person
//!
//! # Teams
//! GET    /api/teams                          - List teams
//! POST   /api/teams                          - Create team
//! DELETE /api/teams/{id}                     - Delete team
//! POST   /api/teams/{id}/players             - Append player
//! GET    /api/teams/{id}/players             - List players
//!
//! # Auth
//! POST   /api/signup                         - Register user
//! POST   /api/login                          - Verify credentials
//! ```

pub mod auth;
pub mod composers;
pub mod customers;
pub mod persons;
pub mod teams;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the composer routes router.
pub fn composer_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(composers::index).post(composers::create))
        .route(
            "/{id}",
            get(composers::show)
                .put(composers::update)
                .delete(composers::remove),
        )
}

/// Create the customer routes router.
pub fn customer_routes() -> Router<AppState> {
    Router::new().route("/", post(customers::create)).route(
        "/{username}/invoices",
        get(customers::invoices).post(customers::create_invoice),
    )
}

/// Create the person routes router.
pub fn person_routes() -> Router<AppState> {
    Router::new().route("/", get(persons::index).post(persons::create))
}

/// Create the team routes router.
pub fn team_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(teams::index).post(teams::create))
        .route("/{id}", axum::routing::delete(teams::remove))
        .route(
            "/{id}/players",
            get(teams::players).post(teams::add_player),
        )
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/api/signup", post(auth::signup))
        .route("/api/login", post(auth::login))
}

/// Create all routes for the API.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/api/composers", composer_routes())
        .nest("/api/customers", customer_routes())
        .nest("/api/persons", person_routes())
        .nest("/api/teams", team_routes())
        .merge(auth_routes())
}
