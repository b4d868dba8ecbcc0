//! Database repositories module
//!
//! This module contains all repository implementations for data access

pub mod session;

// Re-export repositories
pub use session::SqliteSessionStore;
