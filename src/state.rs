//! Shared application state for the customer routes.

use crate::store::CustomerStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Gateway behind a trait object so tests can swap the backing store.
    pub store: Arc<dyn CustomerStore>,
}
