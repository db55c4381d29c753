use std::error::Error as StdError;
use thiserror::Error;

pub const USER_FACING_MESSAGE: &str =
    "Could not generate practice questions right now. Please try again.";

#[derive(Error, Debug)]
pub enum GenerateError {
    /// Rejected before the completion handler is called.
    #[error("Invalid practice request: {0}")]
    InvalidRequest(String),

    #[error("Completion failed: {0}")]
    Upstream(Box<dyn StdError + Send + Sync>),

    #[error("Malformed practice questions: {0}")]
    MalformedResponse(String),
}

impl GenerateError {
    /// Same text for every variant; details only go to the logs.
    pub fn user_message(&self) -> &'static str {
        USER_FACING_MESSAGE
    }
}
