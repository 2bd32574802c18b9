//! Route builders: customer CRUD, common operational routes, API docs.

mod common;
mod customer;
mod docs;
pub use common::common_routes_with_ready;
pub use customer::customer_routes;
pub use docs::{docs_routes, ApiDoc};
