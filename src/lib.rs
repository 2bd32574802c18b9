//! Customer records REST API backed by PostgreSQL.

pub mod error;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use error::AppError;
pub use routes::{common_routes_with_ready, customer_routes, docs_routes};
pub use service::{CustomerService, RequestValidator};
pub use state::AppState;
pub use store::{
    ensure_customer_table, ensure_database_exists, CustomerStore, PgCustomerStore,
};
