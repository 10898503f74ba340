pub mod question;
pub mod quiz;

pub use question::{Answer, Question};
pub use quiz::{Quiz, QuizDuration, QuizUpdate};

use mongodb::bson::oid::ObjectId;

/// Generates the opaque identifier given to quizzes and questions when they
/// are first stored.
pub fn new_id() -> String {
    ObjectId::new().to_hex()
}

pub(crate) fn default_enabled() -> bool {
    true
}
