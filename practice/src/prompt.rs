use crate::PracticeRequest;

pub const TOPIC_PLACEHOLDER: &str = "{lessonTopic}";
pub const DIFFICULTY_PLACEHOLDER: &str = "{difficultyLevel}";

/// Number of questions the default template asks for.
/// The model is not forced to comply, see `QuestionCountPolicy`.
pub const DEFAULT_QUESTION_COUNT: usize = 5;

const DEFAULT_TEMPLATE: &str = "You are an experienced teacher writing practice material for students.\n\
Generate 5 practice questions, each with its answer, for the lesson topic \"{lessonTopic}\".\n\
The questions must suit the {difficultyLevel} difficulty level.\n\
Reply only with a JSON object of the form \
{\"questions\":[{\"question\":\"...\",\"answer\":\"...\"}]}.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PromptTemplate {
    template: String,
}

impl Default for PromptTemplate {
    fn default() -> Self {
        PromptTemplate {
            template: DEFAULT_TEMPLATE.to_string(),
        }
    }
}

impl PromptTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        PromptTemplate {
            template: template.into(),
        }
    }

    /// Placeholders the template never mentions. A template missing one of
    /// them still renders, it just ignores that field.
    pub fn missing_placeholders(&self) -> Vec<&'static str> {
        [TOPIC_PLACEHOLDER, DIFFICULTY_PLACEHOLDER]
            .into_iter()
            .filter(|p| !self.template.contains(p))
            .collect()
    }

    pub fn render(&self, request: &PracticeRequest) -> String {
        // Single pass, so a topic containing "{difficultyLevel}" stays literal.
        let mut out = String::with_capacity(
            self.template.len() + request.lesson_topic.len() + request.difficulty_level.len(),
        );
        let mut rest = self.template.as_str();
        while let Some(start) = rest.find('{') {
            out.push_str(&rest[..start]);
            let tail = &rest[start..];
            if let Some(after) = tail.strip_prefix(TOPIC_PLACEHOLDER) {
                out.push_str(&request.lesson_topic);
                rest = after;
            } else if let Some(after) = tail.strip_prefix(DIFFICULTY_PLACEHOLDER) {
                out.push_str(&request.difficulty_level);
                rest = after;
            } else {
                out.push('{');
                rest = &tail[1..];
            }
        }
        out.push_str(rest);
        out
    }
}
