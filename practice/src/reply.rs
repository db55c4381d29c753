use crate::{GenerateError, PracticeQuestions};

/// Parses a model reply into `PracticeQuestions`.
///
/// Models sometimes wrap JSON in a Markdown fence even when asked not to, so
/// one surrounding fence is dropped. Keys other than `question`/`answer` are
/// ignored, anything missing or mistyped fails.
pub fn parse_reply(reply: &str) -> Result<PracticeQuestions, GenerateError> {
    let body = strip_code_fence(reply);
    serde_json::from_str(body).map_err(|e| GenerateError::MalformedResponse(e.to_string()))
}

fn strip_code_fence(reply: &str) -> &str {
    let trimmed = reply.trim();
    let Some(inner) = trimmed
        .strip_prefix("```")
        .and_then(|rest| rest.strip_suffix("```"))
    else {
        return trimmed;
    };
    // the opening line may carry a language tag ("json")
    match inner.split_once('\n') {
        Some((tag, body)) if !tag.trim_start().starts_with('{') => body.trim(),
        _ => inner.trim(),
    }
}
