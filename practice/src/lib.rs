//! Practice-question generation for lessons.
//!
//! A `PracticeGenerator` validates a `PracticeRequest`, renders it into a
//! prompt, asks an injected `CompletionHandler` for an answer and parses the
//! reply into `PracticeQuestions`.

mod error;
pub use error::{GenerateError, USER_FACING_MESSAGE};
mod generator;
pub use generator::{PracticeGenerator, QuestionCountPolicy};
mod models;
pub use models::{PracticeQuestion, PracticeQuestions, PracticeRequest, DIFFICULTY_LEVELS};
mod prompt;
pub use prompt::{
    PromptTemplate, DEFAULT_QUESTION_COUNT, DIFFICULTY_PLACEHOLDER, TOPIC_PLACEHOLDER,
};
mod reply;
pub use reply::parse_reply;

#[cfg(test)]
mod mock;
