//! Database library providing the PostgreSQL connector for the catalog
//! service.
//!
//! # Example
//!
//! ```ignore
//! use core_config::FromEnv;
//! use database::postgres::{self, PostgresConfig};
//!
//! let config = PostgresConfig::from_env()?;
//! let db = postgres::connect_from_config_with_retry(config, None).await?;
//! ```

pub mod common;
pub mod postgres;

// Re-exports for convenience
pub use common::{DatabaseError, DatabaseResult};
