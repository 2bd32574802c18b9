//! Server bootstrap: env config, database/table bootstrap, route wiring.

use axum::{extract::DefaultBodyLimit, Router};
use sales_customer_api::{
    common_routes_with_ready, customer_routes, docs_routes, ensure_customer_table,
    ensure_database_exists, AppState, PgCustomerStore,
};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("sales_customer_api=info")),
        )
        .init();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "postgres://localhost/sales".into());
    ensure_database_exists(&database_url).await?;
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    ensure_customer_table(&pool).await?;

    let state = AppState {
        store: Arc::new(PgCustomerStore::new(pool.clone())),
    };

    let app = Router::new()
        .merge(common_routes_with_ready(pool))
        .merge(docs_routes())
        .merge(customer_routes(state))
        .layer(DefaultBodyLimit::max(1024 * 1024));

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let listener = TcpListener::bind(&bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
