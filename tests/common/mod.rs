use std::sync::Arc;

use async_trait::async_trait;
use mongodb::bson::{self, Bson, Document};
use tokio::sync::RwLock;

use quizes_server::{
    errors::{AppError, AppResult},
    models::domain::Quiz,
    repositories::QuizRepository,
};

/// Keeps quizzes in insertion order, the way a collection scan returns them.
#[derive(Clone, Default)]
pub struct InMemoryQuizRepository {
    quizzes: Arc<RwLock<Vec<Quiz>>>,
}

impl InMemoryQuizRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl QuizRepository for InMemoryQuizRepository {
    async fn list_enabled(&self) -> AppResult<Vec<Quiz>> {
        let quizzes = self.quizzes.read().await;
        Ok(quizzes.iter().filter(|q| q.is_enabled).cloned().collect())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Quiz>> {
        let quizzes = self.quizzes.read().await;
        Ok(quizzes.iter().find(|q| q.id == id).cloned())
    }

    async fn create(&self, quiz: Quiz) -> AppResult<Quiz> {
        let mut quizzes = self.quizzes.write().await;
        if quizzes.iter().any(|q| q.id == quiz.id) {
            return Err(AppError::DatabaseError(format!(
                "duplicate key: quiz '{}' already exists",
                quiz.id
            )));
        }
        quizzes.push(quiz.clone());
        Ok(quiz)
    }

    async fn update(&self, id: &str, update: Document) -> AppResult<Option<Quiz>> {
        let mut quizzes = self.quizzes.write().await;
        let Some(quiz) = quizzes.iter_mut().find(|q| q.id == id) else {
            return Ok(None);
        };

        let mut document = bson::to_document(&*quiz)?;
        if let Some(Bson::Document(set_doc)) = update.get("$set") {
            for (key, value) in set_doc {
                document.insert(key.clone(), value.clone());
            }
        }
        *quiz = bson::from_document(document)?;

        Ok(Some(quiz.clone()))
    }

    async fn save(&self, quiz: Quiz) -> AppResult<Quiz> {
        let mut quizzes = self.quizzes.write().await;
        let Some(existing) = quizzes.iter_mut().find(|q| q.id == quiz.id) else {
            return Err(AppError::quiz_not_found(&quiz.id));
        };
        *existing = quiz.clone();
        Ok(quiz)
    }

    async fn delete_by_id(&self, id: &str) -> AppResult<Option<Quiz>> {
        let mut quizzes = self.quizzes.write().await;
        let position = quizzes.iter().position(|q| q.id == id);
        Ok(position.map(|index| quizzes.remove(index)))
    }

    async fn delete_all(&self) -> AppResult<u64> {
        let mut quizzes = self.quizzes.write().await;
        let count = quizzes.len() as u64;
        quizzes.clear();
        Ok(count)
    }

    async fn health_check(&self) -> AppResult<()> {
        Ok(())
    }
}
