use serde::Deserialize;
use validator::Validate;

use crate::models::domain::{default_enabled, Answer, QuizDuration};

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuizRequest {
    #[validate(length(min = 1, message = "Quiz name is required"))]
    pub name: String,

    #[serde(default)]
    pub instructions: String,

    #[serde(default)]
    pub duration: QuizDuration,

    #[serde(default = "default_enabled")]
    pub is_enabled: bool,

    #[serde(default)]
    #[validate(nested)]
    pub questions: Vec<CreateQuestionRequest>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQuizRequest {
    #[validate(length(min = 1, message = "Quiz name cannot be empty"))]
    pub name: Option<String>,

    pub instructions: Option<String>,

    pub duration: Option<QuizDuration>,

    pub is_enabled: Option<bool>,

    #[validate(nested)]
    pub questions: Option<Vec<QuizQuestionRequest>>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuestionRequest {
    #[validate(length(min = 1, message = "Question text is required"))]
    pub question: String,

    #[serde(default)]
    pub answers: Vec<Answer>,

    #[serde(default)]
    pub answer: String,

    #[serde(default)]
    pub explanation: String,

    #[serde(default = "default_enabled")]
    pub is_enabled: bool,
}

/// Question item of a whole-quiz update. A supplied `_id` keeps the
/// question's identity; items without one are treated as new questions.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct QuizQuestionRequest {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,

    #[serde(flatten)]
    #[validate(nested)]
    pub fields: CreateQuestionRequest,
}

/// Partial question body. String fields that are missing or empty leave the
/// stored value alone.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQuestionRequest {
    pub question: Option<String>,
    pub answers: Option<Vec<Answer>>,
    pub answer: Option<String>,
    pub is_enabled: Option<bool>,
}
