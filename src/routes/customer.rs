//! Customer CRUD routes under /api/customers. The explicit head route keeps
//! the existence probe from fetching the full row via the GET handler.

use crate::handlers::customer::{create, delete as delete_handler, exists, list, read, update};
use crate::state::AppState;
use axum::{routing::get, routing::head, Router};

pub fn customer_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/customers", get(list).post(create))
        .route(
            "/api/customers/:id",
            head(exists).get(read).put(update).delete(delete_handler),
        )
        .with_state(state)
}
