use std::sync::Arc;

use crate::{
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{MongoQuizRepository, QuizRepository},
    services::quiz_service::QuizService,
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
}

impl AppState {
    pub async fn new(config: &Config) -> AppResult<Self> {
        let db = Database::connect(config).await?;

        let quiz_repository = MongoQuizRepository::new(&db, &config.quizes_collection);
        quiz_repository.ensure_indexes().await?;

        Ok(Self::with_repository(Arc::new(quiz_repository)))
    }

    /// Builds the state around any repository implementation.
    pub fn with_repository(repository: Arc<dyn QuizRepository>) -> Self {
        Self {
            quiz_service: Arc::new(QuizService::new(repository)),
        }
    }
}
