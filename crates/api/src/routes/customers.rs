//! Customer and invoice handlers.

use axum::Json;
use axum::extract::{Path, State};
use serde::Deserialize;

use crescendo_core::Username;

use crate::db::CustomerRepository;
use crate::error::{AppError, Result};
use crate::models::customer::{Customer, Invoice, LineItem};
use crate::state::AppState;

/// Request body for creating a customer.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerRequest {
    pub first_name: String,
    pub last_name: String,
    pub user_name: String,
}

/// Request body for appending an invoice to a customer.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceRequest {
    pub subtotal: f64,
    pub tax: f64,
    pub date_created: String,
    pub date_shipped: String,
    pub line_items: Vec<LineItemRequest>,
}

/// A line item inside an [`InvoiceRequest`].
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemRequest {
    pub name: String,
    pub price: f64,
    pub quantity: i64,
}

impl From<InvoiceRequest> for Invoice {
    fn from(body: InvoiceRequest) -> Self {
        Self {
            subtotal: body.subtotal,
            tax: body.tax,
            date_created: body.date_created,
            date_shipped: body.date_shipped,
            line_items: body
                .line_items
                .into_iter()
                .map(|item| LineItem {
                    name: item.name,
                    price: item.price,
                    quantity: item.quantity,
                })
                .collect(),
        }
    }
}

/// Create a new customer.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateCustomerRequest>,
) -> Result<Json<Customer>> {
    let username = parse_username(&body.user_name)?;

    let customer = CustomerRepository::new(state.db())
        .create(Customer {
            id: None,
            first_name: body.first_name,
            last_name: body.last_name,
            user_name: username.into_inner(),
            invoices: Vec::new(),
        })
        .await?;

    tracing::info!(id = ?customer.id, "customer created");
    Ok(Json(customer))
}

/// Append an invoice to a customer, returning the updated customer.
pub async fn create_invoice(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Json(body): Json<InvoiceRequest>,
) -> Result<Json<Customer>> {
    let username = parse_username(&username)?;
    let invoice = Invoice::from(body);

    let customer = CustomerRepository::new(state.db())
        .push_invoice(username.as_str(), &invoice)
        .await?
        .ok_or_else(|| AppError::NotFound("customer not found".to_string()))?;

    tracing::info!(username = %username, "invoice appended");
    Ok(Json(customer))
}

/// Get a customer by username, including all invoices.
pub async fn invoices(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<Customer>> {
    let username = parse_username(&username)?;

    let customer = CustomerRepository::new(state.db())
        .find_by_username(username.as_str())
        .await?
        .ok_or_else(|| AppError::NotFound("customer not found".to_string()))?;
    Ok(Json(customer))
}

fn parse_username(raw: &str) -> Result<Username> {
    Username::parse(raw).map_err(|e| AppError::BadRequest(e.to_string()))
}
