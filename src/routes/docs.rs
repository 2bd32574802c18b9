//! OpenAPI document for the customer API, served as JSON.

use crate::handlers;
use crate::model::{CreateCustomer, CustomerDto, UpdateCustomer};
use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Sales Customer API",
        description = "REST API for managing sales customer records"
    ),
    paths(
        handlers::customer::list,
        handlers::customer::create,
        handlers::customer::read,
        handlers::customer::update,
        handlers::customer::delete,
        handlers::customer::exists,
    ),
    components(schemas(CustomerDto, CreateCustomer, UpdateCustomer)),
    tags((name = "customers", description = "Customer record operations"))
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// GET /api-docs/openapi.json
pub fn docs_routes() -> Router {
    Router::new().route("/api-docs/openapi.json", get(openapi_json))
}
