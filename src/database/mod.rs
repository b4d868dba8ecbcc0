//! Database module
//!
//! This module handles database connections and the SQLite session store

pub mod connection;
pub mod repositories;

// Re-export commonly used database components
pub use connection::{DatabasePool, DatabaseConfig, create_pool, create_memory_pool, run_migrations, health_check};
pub use repositories::SqliteSessionStore;
