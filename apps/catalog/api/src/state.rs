//! Application state management.

use sea_orm::DatabaseConnection;

/// Shared application state.
///
/// Cloned per handler; the database connection pool clones cheaply.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// PostgreSQL database connection pool
    pub db: DatabaseConnection,
}
