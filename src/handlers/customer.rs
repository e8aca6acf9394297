//! Customer handlers.

use crate::error::AppError;
use crate::model::{Customer, CustomerPatch, CustomerUpsert};
use crate::service::validation;
use crate::state::AppState;
use crate::store::CustomerFilter;
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerListParams {
    pub customer_name: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

pub async fn list_customers(
    State(state): State<AppState>,
    Query(params): Query<CustomerListParams>,
) -> Result<Json<Vec<Customer>>, AppError> {
    let filter = CustomerFilter {
        customer_name: params.customer_name,
        limit: params.limit,
        offset: params.offset,
    };
    let customers = state.customers.list(&filter).await?;
    Ok(Json(customers))
}

pub async fn get_customer_by_id(
    State(state): State<AppState>,
    Path(customer_id): Path<Uuid>,
) -> Result<Json<Customer>, AppError> {
    let customer = state
        .customers
        .get_by_id(customer_id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(customer))
}

pub async fn create_customer(
    State(state): State<AppState>,
    Json(body): Json<CustomerUpsert>,
) -> Result<impl IntoResponse, AppError> {
    validation::validate_customer_upsert(&body)?;
    let customer = state.customers.create(body).await?;
    let location = format!("/api/v1/customer/{}", customer.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(customer),
    ))
}

pub async fn update_customer_by_id(
    State(state): State<AppState>,
    Path(customer_id): Path<Uuid>,
    Json(body): Json<CustomerUpsert>,
) -> Result<StatusCode, AppError> {
    validation::validate_customer_upsert(&body)?;
    state
        .customers
        .update(customer_id, body)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn patch_customer_by_id(
    State(state): State<AppState>,
    Path(customer_id): Path<Uuid>,
    Json(body): Json<CustomerPatch>,
) -> Result<StatusCode, AppError> {
    validation::validate_customer_patch(&body)?;
    state
        .customers
        .patch(customer_id, body)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_customer_by_id(
    State(state): State<AppState>,
    Path(customer_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if !state.customers.delete(customer_id).await? {
        return Err(AppError::NotFound);
    }
    Ok(StatusCode::NO_CONTENT)
}
