//! Bot handlers module
//!
//! Telegram-facing side of the bot:
//! - Message handler that feeds every text message to the conversation engine
//! - Delivery of engine directives as Telegram messages

pub mod delivery;
pub mod messages;

// Re-export commonly used handler functions
pub use delivery::{deliver, reply_keyboard};
pub use messages::{handle_message, inbound_event};
