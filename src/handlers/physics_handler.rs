use actix_web::{get, post, web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState,
    constants::sample_questions::SAMPLE_QUESTIONS,
    errors::AppError,
    middleware::get_request_id,
    models::dto::{request::GeneratePhysicsRequest, response::SampleQuestionsResponse},
    services::http_helpers::success_json,
};

#[post("/api/generate-physics")]
pub async fn generate_physics(
    state: web::Data<AppState>,
    request: web::Json<GeneratePhysicsRequest>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let request_id = get_request_id(&req).unwrap_or_else(|| "-".to_string());
    log::info!(
        "[{}] Generating physics animation (client key: {})",
        request_id,
        request.api_key.is_some()
    );

    let response = state
        .physics_service
        .generate(request.into_inner())
        .await
        .inspect_err(|e| log::error!("[{}] Generation failed: {}", request_id, e))?;

    if response.result.is_fallback() {
        log::warn!("[{}] Responding with fallback animation", request_id);
    }

    Ok(success_json(response))
}

#[get("/api/sample-questions")]
pub async fn sample_questions() -> HttpResponse {
    success_json(SampleQuestionsResponse {
        questions: SAMPLE_QUESTIONS.iter().map(|q| q.to_string()).collect(),
    })
}
