//! Data models module
//!
//! This module contains all data structures used throughout the application

pub mod directive;
pub mod session;

// Re-export commonly used models
pub use directive::{Directive, Keyboard, MediaRef, group_sheet, groups_on_sheet};
pub use session::{Session, SessionRow, State, UnknownState, UserIdentity, InboundEvent};
