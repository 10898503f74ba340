pub mod health_handler;
pub mod quiz_handler;

use actix_web::{error::JsonPayloadError, web, HttpRequest};

use crate::errors::AppError;

pub use health_handler::{health_check, health_check_ready};
pub use quiz_handler::{
    add_question, create_quiz, delete_question, delete_questions, delete_quiz, delete_quizzes,
    get_question, get_questions, get_quiz, list_quizzes, question_not_supported,
    questions_not_supported, quizzes_not_supported, update_question, update_quiz,
};

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::ValidationError(err.to_string()).into()
}

/// Registers every route under `/quizes` plus the health endpoints.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(health_check)
        .service(health_check_ready)
        .service(list_quizzes)
        .service(create_quiz)
        .service(delete_quizzes)
        .service(quizzes_not_supported)
        .service(get_quiz)
        .service(update_quiz)
        .service(delete_quiz)
        .service(get_questions)
        .service(add_question)
        .service(delete_questions)
        .service(questions_not_supported)
        .service(get_question)
        .service(question_not_supported)
        .service(update_question)
        .service(delete_question);
}
