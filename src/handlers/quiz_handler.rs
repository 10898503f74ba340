use actix_web::{delete, get, http::header::ContentType, post, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{
        CreateQuestionRequest, CreateQuizRequest, UpdateQuestionRequest, UpdateQuizRequest,
    },
};

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body)
}

fn forbidden(message: String) -> HttpResponse {
    HttpResponse::Forbidden()
        .content_type(ContentType::plaintext())
        .body(message)
}

#[get("/quizes")]
pub async fn list_quizzes(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let body = state.quiz_service.list_quizzes_html().await?;
    Ok(html(body))
}

#[post("/quizes")]
pub async fn create_quiz(
    state: web::Data<AppState>,
    request: web::Json<CreateQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let quiz = state.quiz_service.create_quiz(request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(quiz))
}

#[delete("/quizes")]
pub async fn delete_quizzes(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let response = state.quiz_service.delete_all_quizzes().await?;
    Ok(HttpResponse::Ok().json(response))
}

#[put("/quizes")]
pub async fn quizzes_not_supported() -> HttpResponse {
    forbidden("Not supported".to_string())
}

#[get("/quizes/{quiz_id}")]
pub async fn get_quiz(
    state: web::Data<AppState>,
    quiz_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let body = state.quiz_service.render_quiz(&quiz_id).await?;
    Ok(html(body))
}

#[put("/quizes/{quiz_id}")]
pub async fn update_quiz(
    state: web::Data<AppState>,
    quiz_id: web::Path<String>,
    request: web::Json<UpdateQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let quiz = state
        .quiz_service
        .update_quiz(&quiz_id, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(quiz))
}

#[delete("/quizes/{quiz_id}")]
pub async fn delete_quiz(
    state: web::Data<AppState>,
    quiz_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let quiz = state.quiz_service.delete_quiz(&quiz_id).await?;
    Ok(HttpResponse::Ok().json(quiz))
}

#[get("/quizes/{quiz_id}/questions")]
pub async fn get_questions(
    state: web::Data<AppState>,
    quiz_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let questions = state.quiz_service.get_questions(&quiz_id).await?;
    Ok(HttpResponse::Ok().json(questions))
}

#[post("/quizes/{quiz_id}/questions")]
pub async fn add_question(
    state: web::Data<AppState>,
    quiz_id: web::Path<String>,
    request: web::Json<CreateQuestionRequest>,
) -> Result<HttpResponse, AppError> {
    let quiz = state
        .quiz_service
        .add_question(&quiz_id, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(quiz))
}

#[delete("/quizes/{quiz_id}/questions")]
pub async fn delete_questions(
    state: web::Data<AppState>,
    quiz_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let questions = state.quiz_service.delete_questions(&quiz_id).await?;
    Ok(HttpResponse::Ok().json(questions))
}

#[put("/quizes/{quiz_id}/questions")]
pub async fn questions_not_supported(quiz_id: web::Path<String>) -> HttpResponse {
    forbidden(format!(
        "PUT operation not supported on /quizes/{}/questions",
        quiz_id
    ))
}

#[get("/quizes/{quiz_id}/questions/{question_id}")]
pub async fn get_question(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (quiz_id, question_id) = path.into_inner();
    let question = state
        .quiz_service
        .get_question(&quiz_id, &question_id)
        .await?;
    Ok(HttpResponse::Ok().json(question))
}

#[post("/quizes/{quiz_id}/questions/{question_id}")]
pub async fn question_not_supported(path: web::Path<(String, String)>) -> HttpResponse {
    let (quiz_id, question_id) = path.into_inner();
    forbidden(format!(
        "POST operation not supported on /quizes/{}/questions/{}",
        quiz_id, question_id
    ))
}

#[put("/quizes/{quiz_id}/questions/{question_id}")]
pub async fn update_question(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    request: web::Json<UpdateQuestionRequest>,
) -> Result<HttpResponse, AppError> {
    let (quiz_id, question_id) = path.into_inner();
    let question = state
        .quiz_service
        .update_question(&quiz_id, &question_id, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(question))
}

#[delete("/quizes/{quiz_id}/questions/{question_id}")]
pub async fn delete_question(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (quiz_id, question_id) = path.into_inner();
    let quiz = state
        .quiz_service
        .delete_question(&quiz_id, &question_id)
        .await?;
    Ok(HttpResponse::Ok().json(quiz))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        handlers,
        models::domain::{Question, Quiz},
        repositories::MockQuizRepository,
    };
    use actix_web::{http::StatusCode, test, App};
    use std::sync::Arc;

    fn state(repository: MockQuizRepository) -> AppState {
        AppState::with_repository(Arc::new(repository))
    }

    #[actix_web::test]
    async fn test_put_on_collection_is_forbidden() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state(MockQuizRepository::new())))
                .configure(handlers::configure),
        )
        .await;

        let req = test::TestRequest::put().uri("/quizes").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        let body = test::read_body(resp).await;
        assert_eq!(body, "Not supported");
    }

    #[actix_web::test]
    async fn test_unsupported_question_methods_name_the_path() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state(MockQuizRepository::new())))
                .configure(handlers::configure),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/quizes/q1/questions")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        let body = test::read_body(resp).await;
        assert_eq!(body, "PUT operation not supported on /quizes/q1/questions");

        let req = test::TestRequest::post()
            .uri("/quizes/q1/questions/a1")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        let body = test::read_body(resp).await;
        assert_eq!(
            body,
            "POST operation not supported on /quizes/q1/questions/a1"
        );
    }

    #[actix_web::test]
    async fn test_get_quiz_renders_html() {
        let mut repository = MockQuizRepository::new();
        let mut quiz = Quiz::test_quiz("Math", true);
        quiz.questions.push(Question::test_question("2+2?", true));
        let quiz_id = quiz.id.clone();
        repository
            .expect_find_by_id()
            .returning(move |_| Ok(Some(quiz.clone())));

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state(repository)))
                .configure(handlers::configure),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/quizes/{}", quiz_id))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let content_type = resp.headers().get("content-type").unwrap();
        assert!(content_type.to_str().unwrap().starts_with("text/html"));
        let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
        assert!(body.contains("<b>Answer:</b> 4"));
    }

    #[actix_web::test]
    async fn test_get_missing_quiz_is_not_found() {
        let mut repository = MockQuizRepository::new();
        repository.expect_find_by_id().returning(|_| Ok(None));

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state(repository)))
                .configure(handlers::configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/quizes/missing").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Quiz missing not found");
    }

    #[actix_web::test]
    async fn test_store_failure_is_server_error() {
        let mut repository = MockQuizRepository::new();
        repository
            .expect_list_enabled()
            .returning(|| Err(AppError::DatabaseError("connection reset".to_string())));

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state(repository)))
                .configure(handlers::configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/quizes").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn test_malformed_body_is_bad_request() {
        let mut repository = MockQuizRepository::new();
        repository.expect_create().never();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state(repository)))
                .configure(handlers::configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/quizes")
            .insert_header(ContentType::json())
            .set_payload("{ not json")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
