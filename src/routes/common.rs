//! Operational routes: health, readiness with DB probe, version.

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use sqlx::PgPool;

#[derive(Serialize)]
struct StatusBody {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    database: Option<&'static str>,
}

async fn health() -> Json<StatusBody> {
    Json(StatusBody {
        status: "ok",
        database: None,
    })
}

async fn ready(State(pool): State<PgPool>) -> (StatusCode, Json<StatusBody>) {
    if sqlx::query("SELECT 1").fetch_optional(&pool).await.is_err() {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(StatusBody {
                status: "degraded",
                database: Some("unavailable"),
            }),
        );
    }
    (
        StatusCode::OK,
        Json(StatusBody {
            status: "ok",
            database: Some("ok"),
        }),
    )
}

async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// GET /health, GET /ready (with DB probe), GET /version, GET /info.
/// Takes the pool directly; the customer routes' state does not carry one.
pub fn common_routes_with_ready(pool: PgPool) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .route("/info", get(version))
        .with_state(pool)
}
