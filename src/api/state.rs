//! Application state - Dependency injection via explicit wiring.

use std::sync::Arc;

use crate::infra::{Database, UserStore};
use crate::services::{DirectoryService, UserService};

/// Application state containing the user service.
#[derive(Clone)]
pub struct AppState {
    /// User service
    pub user_service: Arc<dyn UserService>,
}

impl AppState {
    /// Create application state with a manually injected service.
    pub fn new(user_service: Arc<dyn UserService>) -> Self {
        Self { user_service }
    }

    /// Wire the production service stack over a database connection.
    pub fn from_database(database: &Database) -> Self {
        let repo = Arc::new(UserStore::new(database.get_connection()));
        Self::new(Arc::new(DirectoryService::new(repo)))
    }
}
