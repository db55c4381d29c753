use std::sync::Arc;
use text_completion::CompletionHandler;
use tokio::sync::oneshot;
use tracing::*;

use crate::{parse_reply, GenerateError, PracticeQuestions, PracticeRequest, PromptTemplate};

/// What to do when the model does not return the requested number of questions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QuestionCountPolicy {
    /// Any count is accepted, zero included.
    #[default]
    Loose,
    Exact(usize),
}

impl QuestionCountPolicy {
    pub fn check(&self, questions: &PracticeQuestions) -> Result<(), GenerateError> {
        match self {
            QuestionCountPolicy::Loose => Ok(()),
            QuestionCountPolicy::Exact(expected) if questions.len() == *expected => Ok(()),
            QuestionCountPolicy::Exact(expected) => Err(GenerateError::MalformedResponse(format!(
                "expected {} questions, got {}",
                expected,
                questions.len()
            ))),
        }
    }
}

pub struct PracticeGenerator {
    handler: Arc<dyn CompletionHandler + Send + Sync>,
    template: PromptTemplate,
    count_policy: QuestionCountPolicy,
}

impl PracticeGenerator {
    pub fn new(handler: Arc<dyn CompletionHandler + Send + Sync>) -> Self {
        PracticeGenerator {
            handler,
            template: PromptTemplate::default(),
            count_policy: QuestionCountPolicy::default(),
        }
    }

    pub fn with_template(mut self, template: PromptTemplate) -> Self {
        self.template = template;
        self
    }

    pub fn with_count_policy(mut self, count_policy: QuestionCountPolicy) -> Self {
        self.count_policy = count_policy;
        self
    }

    /// One validated request, one completion call, one parsed reply.
    /// Nothing is retried and no partial result is ever returned.
    pub async fn generate(
        &self,
        request: &PracticeRequest,
    ) -> Result<PracticeQuestions, GenerateError> {
        request.validate()?;

        let prompt = self.template.render(request);
        trace!("generate prompt={}", prompt);

        let (tx, rx) = oneshot::channel();
        self.handler.complete(&prompt, tx);
        let reply = rx
            .await
            .map_err(|_| GenerateError::Upstream("completion handler gave no answer".into()))?
            .map_err(GenerateError::Upstream)?;
        trace!("generate reply={}", reply);

        let questions = parse_reply(&reply).and_then(|questions| {
            self.count_policy.check(&questions)?;
            Ok(questions)
        });
        if let Err(e) = &questions {
            warn!("generate rejected reply: {}, reply={}", e, reply);
        }
        let questions = questions?;

        debug!(
            "generate lessonTopic={} difficultyLevel={} questions={}",
            request.lesson_topic,
            request.difficulty_level,
            questions.len()
        );
        Ok(questions)
    }

    /// Same as `generate`, starting from a raw JSON request payload.
    pub async fn generate_from_json(
        &self,
        payload: &str,
    ) -> Result<PracticeQuestions, GenerateError> {
        let request = PracticeRequest::from_json(payload)?;
        self.generate(&request).await
    }
}
