use http::header::AUTHORIZATION;
use serde_json::json;
use text_completion::CompletionResult;
use tracing::*;

use crate::{CompletionRequest, OpenAIHandler};

pub async fn run_completion(handler: &OpenAIHandler, req: CompletionRequest) -> CompletionResult {
    trace!("run_completion prompt={}", req.prompt);

    let url = format!(
        "{}/chat/completions",
        handler.config.base_url.trim_end_matches('/')
    );

    let resp = handler
        .client
        .post(&url)
        .header(AUTHORIZATION, format!("Bearer {}", handler.config.api_key))
        .json(&json!({
            "model": handler.config.model,
            "temperature": handler.config.temperature,
            "response_format": { "type": "json_object" },
            "messages": [{
                "role": "user",
                "content": req.prompt,
            }],
        }))
        .send()
        .await?;

    trace!("POST {} {:?}", url, resp);

    if !resp.status().is_success() {
        let status = resp.status();
        let err_text = resp
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(format!("Error running completion: {} {}", status, err_text).into());
    }

    let data: serde_json::Value = resp.json().await?;
    trace!("POST {} {:?}", url, data);

    let content = message_content(&data)
        .ok_or_else(|| format!("No message content found, data={}", data))?;

    debug!("run_completion prompt={} result={}", req.prompt, content);
    Ok(content.to_string())
}

fn message_content(data: &serde_json::Value) -> Option<&str> {
    data.get("choices")
        .and_then(|choices| choices.as_array())
        .and_then(|array| array.first())
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(|content| content.as_str())
}
