use serde::{Deserialize, Serialize};

use crate::GenerateError;

/// Conventional labels offered to students. Any other label is accepted too.
pub const DIFFICULTY_LEVELS: [&str; 3] = ["Beginner", "Intermediate", "Advanced"];

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PracticeRequest {
    pub lesson_topic: String,
    pub difficulty_level: String,
}

impl PracticeRequest {
    pub fn new(lesson_topic: impl Into<String>, difficulty_level: impl Into<String>) -> Self {
        PracticeRequest {
            lesson_topic: lesson_topic.into(),
            difficulty_level: difficulty_level.into(),
        }
    }

    /// Parses a `{"lessonTopic": .., "difficultyLevel": ..}` payload.
    /// Shape only, emptiness is checked by `validate`.
    pub fn from_json(payload: &str) -> Result<Self, GenerateError> {
        serde_json::from_str(payload).map_err(|e| GenerateError::InvalidRequest(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.lesson_topic.is_empty() {
            return Err(GenerateError::InvalidRequest(
                "lessonTopic must not be empty".to_string(),
            ));
        }
        if self.difficulty_level.is_empty() {
            return Err(GenerateError::InvalidRequest(
                "difficultyLevel must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PracticeQuestion {
    pub question: String,
    pub answer: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct PracticeQuestions {
    pub questions: Vec<PracticeQuestion>,
}

impl PracticeQuestions {
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_camel_case() {
        let req = PracticeRequest::from_json(
            r#"{"lessonTopic":"Photosynthesis","difficultyLevel":"Advanced"}"#,
        )
        .unwrap();

        assert_eq!(req, PracticeRequest::new("Photosynthesis", "Advanced"));
    }

    #[test]
    fn test_from_json_missing_field() {
        let err = PracticeRequest::from_json(r#"{"lessonTopic":"Photosynthesis"}"#).unwrap_err();
        assert!(matches!(err, GenerateError::InvalidRequest(_)));

        let err = PracticeRequest::from_json(r#"{"difficultyLevel":"Beginner"}"#).unwrap_err();
        assert!(matches!(err, GenerateError::InvalidRequest(_)));
    }

    #[test]
    fn test_from_json_wrong_type() {
        let err = PracticeRequest::from_json(r#"{"lessonTopic":42,"difficultyLevel":"Beginner"}"#)
            .unwrap_err();
        assert!(matches!(err, GenerateError::InvalidRequest(_)));
    }

    #[test]
    fn test_validate_empty_fields() {
        assert!(PracticeRequest::new("", "Beginner").validate().is_err());
        assert!(PracticeRequest::new("Fractions", "").validate().is_err());
    }

    #[test]
    fn test_validate_conventional_levels() {
        for level in DIFFICULTY_LEVELS {
            assert!(PracticeRequest::new("Fractions", level).validate().is_ok());
        }
    }

    #[test]
    fn test_validate_accepts_free_text() {
        // Labels outside DIFFICULTY_LEVELS are fine.
        let req = PracticeRequest::new("Les verbes du premier groupe", "Expert+");
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_questions_serialize_shape() {
        let questions = PracticeQuestions {
            questions: vec![PracticeQuestion {
                question: "What is 2+2?".to_string(),
                answer: "4".to_string(),
            }],
        };

        assert_eq!(
            serde_json::to_string(&questions).unwrap(),
            r#"{"questions":[{"question":"What is 2+2?","answer":"4"}]}"#
        );
    }
}
