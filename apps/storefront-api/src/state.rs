//! Shared application state.

use database::postgres::DatabaseConnection;

/// Cloned into the readiness handler and used to build the domain routers.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    /// PostgreSQL pool; `None` when running on the in-memory store
    pub db: Option<DatabaseConnection>,
}
