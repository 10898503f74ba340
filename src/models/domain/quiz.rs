use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{
    domain::{default_enabled, new_id, Question},
    dto::request::{CreateQuizRequest, UpdateQuizRequest},
};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub instructions: String,
    #[serde(default)]
    pub duration: QuizDuration,
    #[serde(default = "default_enabled")]
    pub is_enabled: bool,
    #[serde(default)]
    pub questions: Vec<Question>, // Insertion order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizDuration {
    #[serde(default)]
    pub hours: u32,
    #[serde(default)]
    pub minutes: u32,
    #[serde(default)]
    pub seconds: u32,
}

/// Fields written by a whole-quiz update. Absent fields are left out of the
/// `$set` document and stay untouched in the store.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<QuizDuration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub questions: Option<Vec<Question>>,
    pub updated_at: DateTime<Utc>,
}

impl Quiz {
    pub fn from_request(request: CreateQuizRequest) -> Self {
        Quiz {
            id: new_id(),
            name: request.name,
            instructions: request.instructions,
            duration: request.duration,
            is_enabled: request.is_enabled,
            questions: request
                .questions
                .into_iter()
                .map(Question::from_request)
                .collect(),
            created_at: Some(Utc::now()),
            updated_at: Some(Utc::now()),
        }
    }

    pub fn question(&self, question_id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == question_id)
    }

    pub fn question_mut(&mut self, question_id: &str) -> Option<&mut Question> {
        self.questions.iter_mut().find(|q| q.id == question_id)
    }

    /// Removes a question without reordering the ones that remain.
    pub fn remove_question(&mut self, question_id: &str) -> Option<Question> {
        let position = self.questions.iter().position(|q| q.id == question_id)?;
        Some(self.questions.remove(position))
    }

    pub fn touch(&mut self) {
        self.updated_at = Some(Utc::now());
    }
}

impl QuizDuration {
    pub fn new(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }
}

impl QuizUpdate {
    pub fn from_request(request: UpdateQuizRequest) -> Self {
        QuizUpdate {
            name: request.name,
            instructions: request.instructions,
            duration: request.duration,
            is_enabled: request.is_enabled,
            questions: request
                .questions
                .map(|questions| questions.into_iter().map(Question::from_quiz_update).collect()),
            updated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
impl Quiz {
    pub fn test_quiz(name: &str, enabled: bool) -> Self {
        Quiz {
            id: new_id(),
            name: name.to_string(),
            instructions: "Answer all".to_string(),
            duration: QuizDuration::new(0, 10, 0),
            is_enabled: enabled,
            questions: vec![],
            created_at: Some(Utc::now()),
            updated_at: Some(Utc::now()),
        }
    }
}
