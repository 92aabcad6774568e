//! TrendDigest core: a locally generated market-intelligence assistant.
//!
//! Replies, news, trends, and email digests are all produced in-process
//! from canned templates and seeded random selection. There are no network
//! calls and no persistence; the mock producers stand in for the external
//! services a production deployment would integrate.

pub mod chat;
pub mod email;
pub mod error;
pub mod hub;
pub mod news;

#[cfg(test)]
mod tests;

pub use chat::{ChatAssistant, Response, ResponseType};
pub use error::AppError;
pub use hub::{HubReply, IntelligenceHub, ReplyKind};
