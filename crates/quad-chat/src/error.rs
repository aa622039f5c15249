//! Error types for the conversational engine.

use quad_core::error::QuadError;

/// Errors from the chat engine boundary.
///
/// Only message validation and session management can fail; once a message
/// enters the engine, every path produces a response (degraded generators
/// fall back to the generic response instead of erroring).
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("chat is disabled")]
    Disabled,
    #[error("message cannot be empty")]
    EmptyMessage,
    #[error("message exceeds maximum length of {0} characters")]
    MessageTooLong(usize),
    #[error("session not found: {0}")]
    SessionNotFound(uuid::Uuid),
    #[error("state error: {0}")]
    StateError(String),
}

impl From<QuadError> for ChatError {
    fn from(err: QuadError) -> Self {
        ChatError::StateError(err.to_string())
    }
}
