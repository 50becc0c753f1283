//! Route handlers for `/api/customers`.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    customer::{
        Customer, CustomerForm, CustomerId, create_customer, delete_customer, get_all_customers,
        get_customer, update_customer,
    },
    db::lock_connection,
    extract::{Json, Path},
    message::Message,
};

/// The state needed to manage customers.
#[derive(Debug, Clone)]
pub struct CustomerState {
    /// The database connection for managing customers.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for CustomerState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// List every customer.
pub async fn get_customers_endpoint(
    State(state): State<CustomerState>,
) -> Result<Json<Vec<Customer>>, Error> {
    let connection = lock_connection(&state.db_connection)?;

    get_all_customers(&connection).map(Json)
}

/// Get a single customer, responds with 404 if it does not exist.
pub async fn get_customer_endpoint(
    State(state): State<CustomerState>,
    Path(customer_id): Path<CustomerId>,
) -> Result<Json<Customer>, Error> {
    let connection = lock_connection(&state.db_connection)?;

    get_customer(customer_id, &connection).map(Json)
}

/// Create a customer, responds with 201 and the new customer.
pub async fn create_customer_endpoint(
    State(state): State<CustomerState>,
    Json(form): Json<CustomerForm>,
) -> Result<(StatusCode, Json<Customer>), Error> {
    let new_customer = form.validate()?;
    let connection = lock_connection(&state.db_connection)?;

    let customer = create_customer(&new_customer, &connection)?;
    tracing::info!("Created customer {}", customer.customer_id);

    Ok((StatusCode::CREATED, Json(customer)))
}

/// Replace a customer's details.
pub async fn update_customer_endpoint(
    State(state): State<CustomerState>,
    Path(customer_id): Path<CustomerId>,
    Json(form): Json<CustomerForm>,
) -> Result<Json<Message>, Error> {
    let customer = form.validate()?;
    let connection = lock_connection(&state.db_connection)?;

    update_customer(customer_id, &customer, &connection)?;

    Ok(Json(Message::new("Customer updated")))
}

/// Delete a customer.
pub async fn delete_customer_endpoint(
    State(state): State<CustomerState>,
    Path(customer_id): Path<CustomerId>,
) -> Result<Json<Message>, Error> {
    let connection = lock_connection(&state.db_connection)?;

    delete_customer(customer_id, &connection)?;

    Ok(Json(Message::new("Customer deleted")))
}
