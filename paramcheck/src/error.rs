//! Error types for parameter validation

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for validation operations
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Aggregated validation failure for one request.
///
/// Carries one `"<field>: <message>"` entry per failing field, in field
/// order. Callers branch on the error type itself, not on its text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("parameter validation failed: {}", .messages.join("; "))]
pub struct ValidationError {
    messages: Vec<String>,
}

impl ValidationError {
    pub(crate) fn new(messages: Vec<String>) -> Self {
        Self { messages }
    }

    /// The collected `"<field>: <message>"` entries, in field order.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}
