//! Command handlers for the Telegram bot
//!
//! - `basic`: start, help and the fallback reply
//! - `ingest`: adding tracks from admin audio uploads

mod basic;
mod ingest;

pub use basic::*;
pub use ingest::*;
