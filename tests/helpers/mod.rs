//! Test helpers module
//!
//! Fakes for the engine's collaborators and shared fixtures for the
//! integration tests.

#![allow(dead_code)]

pub mod test_context;
pub mod test_data;

pub use test_context::*;
pub use test_data::*;
