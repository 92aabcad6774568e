//! Session-scoped conversation log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One recorded query/response pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exchange {
    pub query: String,
    pub response: String,
    pub timestamp: DateTime<Utc>,
}

/// Append-only log of past queries and responses.
///
/// Purely observational: the composer writes it but never reads it back.
/// Grows unbounded for the session lifetime; cleared only by `reset`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationContext {
    pub previous_queries: Vec<String>,
    pub history: Vec<Exchange>,
    pub session_start: DateTime<Utc>,
}

impl Default for ConversationContext {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversationContext {
    /// Create an empty context with the session clock started now.
    pub fn new() -> Self {
        Self {
            previous_queries: Vec::new(),
            history: Vec::new(),
            session_start: Utc::now(),
        }
    }

    /// Record one exchange. Called once per composed response.
    pub(crate) fn record(&mut self, query: &str, response: &str) {
        self.previous_queries.push(query.to_string());
        self.history.push(Exchange {
            query: query.to_string(),
            response: response.to_string(),
            timestamp: Utc::now(),
        });
    }

    /// Clear both logs and restart the session clock.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Number of recorded exchanges.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}
