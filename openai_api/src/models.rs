use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use crate::{API_BASE_URL, DEFAULT_MODEL, DEFAULT_TEMPERATURE};

#[derive(Deserialize, Serialize, Debug)]
pub struct CompletionRequest {
    pub prompt: String,
}

#[derive(Clone)]
pub struct OpenAIConfig {
    pub api_key: String,
    /// Root of the API, without the trailing `/chat/completions`.
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    /// None keeps whatever limit the service enforces.
    pub timeout: Option<Duration>,
}

impl OpenAIConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        OpenAIConfig {
            api_key: api_key.into(),
            base_url: API_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            timeout: None,
        }
    }
}

// Keeps the key out of trace logs.
impl fmt::Debug for OpenAIConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAIConfig")
            .field("api_key", &"***")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_defaults() {
        let config = OpenAIConfig::new("sk-test");

        assert_eq!(config.base_url, API_BASE_URL);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_debug_hides_api_key() {
        let config = OpenAIConfig::new("sk-secret");

        let printed = format!("{:?}", config);
        assert!(!printed.contains("sk-secret"));
        assert!(printed.contains("gpt-4o-mini"));
    }
}
