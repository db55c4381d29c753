//! An interface for handling text completion requests
//!
//! This crate provides a `CompletionHandler` trait: the seam between code that
//! builds prompts and the service that answers them. Keeping it in its own
//! crate lets the practice generator depend on the abstraction only.

use std::error::Error;
use tokio::sync::oneshot::Sender;

pub type CompletionResult = Result<String, Box<dyn Error + Send + Sync>>;

pub trait CompletionHandler {
    // The answer goes through the channel instead of an `async fn`,
    // so the trait can be used as `dyn CompletionHandler`.
    fn complete(&self, prompt: &str, result: Sender<CompletionResult>);
}
