//! Customer CRUD handlers: list, create, read, update, delete, exists.
//! Validation runs here, before the service call; outcome-to-status mapping
//! lives in `AppError`'s `IntoResponse`.

use crate::error::AppError;
use crate::model::{CreateCustomer, UpdateCustomer};
use crate::service::{CustomerService, RequestValidator};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    Json,
};

/// GET /api/customers
#[utoipa::path(
    get,
    path = "/api/customers",
    tag = "customers",
    responses(
        (status = 200, description = "All customers", body = [crate::model::CustomerDto]),
        (status = 500, description = "Unexpected failure")
    )
)]
pub async fn list(
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let customers = CustomerService::list_all(state.store.as_ref()).await?;
    Ok(Json(customers))
}

/// POST /api/customers
#[utoipa::path(
    post,
    path = "/api/customers",
    tag = "customers",
    request_body = crate::model::CreateCustomer,
    responses(
        (status = 201, description = "Customer created; Location points at the new record", body = crate::model::CustomerDto),
        (status = 400, description = "Validation failure"),
        (status = 500, description = "Unexpected failure")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateCustomer>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    RequestValidator::validate_create(&body)?;
    let created = CustomerService::create(state.store.as_ref(), body).await?;
    let location = format!("/api/customers/{}", created.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

/// GET /api/customers/{id}
#[utoipa::path(
    get,
    path = "/api/customers/{id}",
    tag = "customers",
    params(("id" = i32, Path, description = "Customer id")),
    responses(
        (status = 200, description = "The customer", body = crate::model::CustomerDto),
        (status = 404, description = "No customer with that id"),
        (status = 500, description = "Unexpected failure")
    )
)]
pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let customer = CustomerService::get_by_id(state.store.as_ref(), id)
        .await?
        .ok_or(AppError::NotFound(id))?;
    Ok(Json(customer))
}

/// PUT /api/customers/{id}
#[utoipa::path(
    put,
    path = "/api/customers/{id}",
    tag = "customers",
    params(("id" = i32, Path, description = "Customer id")),
    request_body = crate::model::UpdateCustomer,
    responses(
        (status = 200, description = "The updated customer", body = crate::model::CustomerDto),
        (status = 400, description = "Validation failure"),
        (status = 404, description = "No customer with that id"),
        (status = 500, description = "Unexpected failure")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<UpdateCustomer>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    RequestValidator::validate_update(&body)?;
    let updated = CustomerService::update(state.store.as_ref(), id, body)
        .await?
        .ok_or(AppError::NotFound(id))?;
    Ok(Json(updated))
}

/// DELETE /api/customers/{id}
#[utoipa::path(
    delete,
    path = "/api/customers/{id}",
    tag = "customers",
    params(("id" = i32, Path, description = "Customer id")),
    responses(
        (status = 204, description = "Customer deleted"),
        (status = 404, description = "No customer with that id"),
        (status = 500, description = "Unexpected failure")
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    if !CustomerService::delete(state.store.as_ref(), id).await? {
        return Err(AppError::NotFound(id));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// HEAD /api/customers/{id} — existence probe. Bare status codes so both
/// outcomes have an empty body.
#[utoipa::path(
    head,
    path = "/api/customers/{id}",
    tag = "customers",
    params(("id" = i32, Path, description = "Customer id")),
    responses(
        (status = 200, description = "Customer exists"),
        (status = 404, description = "No customer with that id"),
        (status = 500, description = "Unexpected failure")
    )
)]
pub async fn exists(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    if CustomerService::exists(state.store.as_ref(), id).await? {
        Ok(StatusCode::OK)
    } else {
        Ok(StatusCode::NOT_FOUND)
    }
}
