use serde::{Deserialize, Serialize};

use crate::models::{
    domain::{default_enabled, new_id},
    dto::request::{CreateQuestionRequest, QuizQuestionRequest, UpdateQuestionRequest},
};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(rename = "_id")]
    pub id: String, // Assigned when appended to a quiz
    pub question: String,
    #[serde(default)]
    pub answers: Vec<Answer>,
    #[serde(default)]
    pub answer: String, // Free-form, never checked against `answers`
    #[serde(default)]
    pub explanation: String,
    #[serde(default = "default_enabled")]
    pub is_enabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Answer {
    pub option: String,
}

impl Question {
    pub fn from_request(request: CreateQuestionRequest) -> Self {
        Self::with_id(new_id(), request)
    }

    /// Keeps the id sent with the question; only id-less items get a new one.
    pub fn from_quiz_update(request: QuizQuestionRequest) -> Self {
        let id = request
            .id
            .filter(|id| !id.is_empty())
            .unwrap_or_else(new_id);
        Self::with_id(id, request.fields)
    }

    fn with_id(id: String, request: CreateQuestionRequest) -> Self {
        Question {
            id,
            question: request.question,
            answers: request.answers,
            answer: request.answer,
            explanation: request.explanation,
            is_enabled: request.is_enabled,
        }
    }

    /// Overwrites the fields present in `update`. Empty strings count as
    /// absent; `is_enabled` is applied whenever it is supplied, `false`
    /// included. The id and explanation are never patched.
    pub fn apply_update(&mut self, update: UpdateQuestionRequest) {
        if let Some(question) = update.question.filter(|q| !q.is_empty()) {
            self.question = question;
        }
        if let Some(answers) = update.answers {
            self.answers = answers;
        }
        if let Some(answer) = update.answer.filter(|a| !a.is_empty()) {
            self.answer = answer;
        }
        if let Some(is_enabled) = update.is_enabled {
            self.is_enabled = is_enabled;
        }
    }
}

#[cfg(test)]
impl Question {
    pub fn test_question(text: &str, enabled: bool) -> Self {
        Question {
            id: new_id(),
            question: text.to_string(),
            answers: vec![
                Answer {
                    option: "3".to_string(),
                },
                Answer {
                    option: "4".to_string(),
                },
            ],
            answer: "4".to_string(),
            explanation: "basic".to_string(),
            is_enabled: enabled,
        }
    }
}
