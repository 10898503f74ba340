use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    options::{IndexOptions, ReturnDocument},
    Collection, IndexModel,
};

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::Quiz,
};

/// Persistence seam for quiz documents. Questions live inside their quiz and
/// are only ever written back through `save`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizRepository: Send + Sync {
    async fn list_enabled(&self) -> AppResult<Vec<Quiz>>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Quiz>>;
    async fn create(&self, quiz: Quiz) -> AppResult<Quiz>;
    /// Applies an update document (`$set`) and returns the quiz as it is
    /// after the update, or `None` when no quiz has that id.
    async fn update(&self, id: &str, update: Document) -> AppResult<Option<Quiz>>;
    /// Replaces an existing quiz with the in-memory copy.
    async fn save(&self, quiz: Quiz) -> AppResult<Quiz>;
    async fn delete_by_id(&self, id: &str) -> AppResult<Option<Quiz>>;
    async fn delete_all(&self) -> AppResult<u64>;
    async fn health_check(&self) -> AppResult<()>;
}

pub struct MongoQuizRepository {
    db: Database,
    collection: Collection<Quiz>,
}

impl MongoQuizRepository {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        let collection = db.get_collection(collection_name);
        Self {
            db: db.clone(),
            collection,
        }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for quizes collection");

        let enabled_index = IndexModel::builder()
            .keys(doc! { "isEnabled": 1 })
            .options(
                IndexOptions::builder()
                    .name("is_enabled".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(enabled_index).await?;

        log::info!("Successfully created indexes for quizes collection");
        Ok(())
    }
}

#[async_trait]
impl QuizRepository for MongoQuizRepository {
    async fn list_enabled(&self) -> AppResult<Vec<Quiz>> {
        let cursor = self.collection.find(doc! { "isEnabled": true }).await?;
        let quizzes: Vec<Quiz> = cursor.try_collect().await?;
        Ok(quizzes)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Quiz>> {
        let quiz = self.collection.find_one(doc! { "_id": id }).await?;
        Ok(quiz)
    }

    async fn create(&self, quiz: Quiz) -> AppResult<Quiz> {
        self.collection.insert_one(&quiz).await?;
        Ok(quiz)
    }

    async fn update(&self, id: &str, update: Document) -> AppResult<Option<Quiz>> {
        let quiz = self
            .collection
            .find_one_and_update(doc! { "_id": id }, update)
            .return_document(ReturnDocument::After)
            .await?;
        Ok(quiz)
    }

    async fn save(&self, quiz: Quiz) -> AppResult<Quiz> {
        let result = self
            .collection
            .replace_one(doc! { "_id": &quiz.id }, &quiz)
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::quiz_not_found(&quiz.id));
        }

        Ok(quiz)
    }

    async fn delete_by_id(&self, id: &str) -> AppResult<Option<Quiz>> {
        let quiz = self.collection.find_one_and_delete(doc! { "_id": id }).await?;
        Ok(quiz)
    }

    async fn delete_all(&self) -> AppResult<u64> {
        let result = self.collection.delete_many(doc! {}).await?;
        Ok(result.deleted_count)
    }

    async fn health_check(&self) -> AppResult<()> {
        self.db.health_check().await
    }
}
