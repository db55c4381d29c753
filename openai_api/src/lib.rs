//! A library for interacting with OpenAI-compatible chat completion APIs.
//!
//! `OpenAIHandler` implements `text_completion::CompletionHandler`, so code
//! building prompts never depends on this crate directly.

mod models;
pub use models::{CompletionRequest, OpenAIConfig};
mod run_completion;
pub use run_completion::run_completion;

use text_completion::{CompletionHandler, CompletionResult};
use tokio::sync::oneshot::Sender;
use tracing::*;

pub const API_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

// reqwest::Client is an Arc inside, cloning the handler per request is cheap.
#[derive(Clone, Debug)]
pub struct OpenAIHandler {
    pub config: OpenAIConfig,
    client: reqwest::Client,
}

impl OpenAIHandler {
    pub fn new(config: OpenAIConfig) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(OpenAIHandler { config, client })
    }
}

impl CompletionHandler for OpenAIHandler {
    fn complete(&self, prompt: &str, result: Sender<CompletionResult>) {
        let handler = self.clone();
        let req = CompletionRequest {
            prompt: prompt.to_string(),
        };

        tokio::spawn(async move {
            let r = run_completion(&handler, req).await;
            if result.send(r).is_err() {
                debug!("complete: receiver dropped before the answer arrived");
            }
        });
    }
}
