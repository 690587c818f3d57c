//! Chat module for tagchat.
//!
//! This module provides the simulated chat between the local user and the
//! bot:
//! - Users and immutable messages
//! - The append-only message log with the bot's welcome message
//! - The chat session, which answers commands after a simulated delay

mod log;
mod message;
mod session;

pub use log::{welcome_text, MessageLog, DEFAULT_RECENT_COUNT};
pub use message::{Message, User};
pub use session::ChatSession;
