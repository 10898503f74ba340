use mongodb::bson::{self, doc};
use std::sync::Arc;
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{Question, Quiz, QuizUpdate},
        dto::{
            request::{
                CreateQuestionRequest, CreateQuizRequest, UpdateQuestionRequest, UpdateQuizRequest,
            },
            response::DeleteAllResponse,
        },
    },
    repositories::QuizRepository,
    services::quiz_renderer,
};

/// Quiz and question operations. Every mutation reads the quiz, changes the
/// in-memory copy, writes it back and reads it again. Concurrent writers to
/// the same quiz are not coordinated, so the last save wins.
pub struct QuizService {
    repository: Arc<dyn QuizRepository>,
}

impl QuizService {
    pub fn new(repository: Arc<dyn QuizRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_quizzes_html(&self) -> AppResult<String> {
        let quizzes = self.repository.list_enabled().await?;
        Ok(quiz_renderer::render_quiz_index(&quizzes))
    }

    pub async fn create_quiz(&self, request: CreateQuizRequest) -> AppResult<Quiz> {
        request.validate()?;

        let quiz = self.repository.create(Quiz::from_request(request)).await?;
        log::info!("Quiz created: {} ({})", quiz.id, quiz.name);
        Ok(quiz)
    }

    pub async fn delete_all_quizzes(&self) -> AppResult<DeleteAllResponse> {
        let deleted = self.repository.delete_all().await?;
        log::info!("Deleted {} quizzes", deleted);
        Ok(DeleteAllResponse::new(deleted))
    }

    pub async fn get_quiz(&self, quiz_id: &str) -> AppResult<Quiz> {
        self.repository.find_by_id(quiz_id).await?.ok_or_else(|| {
            log::debug!("Quiz {} not found", quiz_id);
            AppError::quiz_not_found(quiz_id)
        })
    }

    pub async fn render_quiz(&self, quiz_id: &str) -> AppResult<String> {
        let quiz = self.get_quiz(quiz_id).await?;
        Ok(quiz_renderer::render_quiz(&quiz))
    }

    pub async fn update_quiz(&self, quiz_id: &str, request: UpdateQuizRequest) -> AppResult<Quiz> {
        request.validate()?;

        let update = bson::to_document(&QuizUpdate::from_request(request))?;
        let quiz = self
            .repository
            .update(quiz_id, doc! { "$set": update })
            .await?
            .ok_or_else(|| AppError::quiz_not_found(quiz_id))?;

        log::info!("Quiz updated: {}", quiz.id);
        Ok(quiz)
    }

    pub async fn delete_quiz(&self, quiz_id: &str) -> AppResult<Quiz> {
        let quiz = self
            .repository
            .delete_by_id(quiz_id)
            .await?
            .ok_or_else(|| AppError::quiz_not_found(quiz_id))?;

        log::info!("Quiz deleted: {}", quiz.id);
        Ok(quiz)
    }

    pub async fn get_questions(&self, quiz_id: &str) -> AppResult<Vec<Question>> {
        let quiz = self.get_quiz(quiz_id).await?;
        Ok(quiz.questions)
    }

    pub async fn add_question(
        &self,
        quiz_id: &str,
        request: CreateQuestionRequest,
    ) -> AppResult<Quiz> {
        let mut quiz = self.get_quiz(quiz_id).await?;
        request.validate()?;

        let question = Question::from_request(request);
        log::info!("Adding question {} to quiz {}", question.id, quiz.id);

        quiz.questions.push(question);
        quiz.touch();
        let saved = self.repository.save(quiz).await?;

        self.get_quiz(&saved.id).await
    }

    pub async fn delete_questions(&self, quiz_id: &str) -> AppResult<Vec<Question>> {
        let mut quiz = self.get_quiz(quiz_id).await?;

        while let Some(question) = quiz.questions.pop() {
            log::debug!("Removing question {} from quiz {}", question.id, quiz.id);
        }
        quiz.touch();

        let saved = self.repository.save(quiz).await?;
        log::info!("Deleted all questions of quiz {}", saved.id);
        Ok(saved.questions)
    }

    pub async fn get_question(&self, quiz_id: &str, question_id: &str) -> AppResult<Question> {
        let quiz = self.get_quiz(quiz_id).await?;
        quiz.question(question_id)
            .cloned()
            .ok_or_else(|| AppError::question_not_found(question_id))
    }

    pub async fn update_question(
        &self,
        quiz_id: &str,
        question_id: &str,
        request: UpdateQuestionRequest,
    ) -> AppResult<Question> {
        let mut quiz = self.get_quiz(quiz_id).await?;
        let question = quiz
            .question_mut(question_id)
            .ok_or_else(|| AppError::question_not_found(question_id))?;

        question.apply_update(request);
        quiz.touch();
        let saved = self.repository.save(quiz).await?;
        log::info!("Question {} of quiz {} updated", question_id, saved.id);

        let refreshed = self.get_quiz(&saved.id).await?;
        refreshed
            .question(question_id)
            .cloned()
            .ok_or_else(|| AppError::question_not_found(question_id))
    }

    pub async fn delete_question(&self, quiz_id: &str, question_id: &str) -> AppResult<Quiz> {
        let mut quiz = self.get_quiz(quiz_id).await?;
        quiz.remove_question(question_id)
            .ok_or_else(|| AppError::question_not_found(question_id))?;

        quiz.touch();
        let saved = self.repository.save(quiz).await?;
        log::info!("Question {} removed from quiz {}", question_id, saved.id);

        self.get_quiz(&saved.id).await
    }

    pub async fn health_check(&self) -> AppResult<()> {
        self.repository.health_check().await
    }
}
