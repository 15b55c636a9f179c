use actix_web::{get, web, HttpResponse};

use crate::app_state::AppState;

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[get("/health/ready")]
pub async fn health_check_ready(state: web::Data<AppState>) -> HttpResponse {
    let key_configured = state.config.has_key_source();

    let response = serde_json::json!({
        "status": if key_configured { "ready" } else { "not_ready" },
        "version": env!("CARGO_PKG_VERSION"),
        "generation_mode": state.physics_service.mode().to_string(),
        "dependencies": {
            "llm_provider": state.config.llm_provider.display_name(),
            "api_key": if key_configured { "ok" } else { "missing" }
        }
    });

    if key_configured {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

#[get("/health/live")]
pub async fn health_check_live() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use actix_web::{http::StatusCode, test, App};

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().service(health_check)).await;

        let req = test::TestRequest::get().uri("/health").to_request();

        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
    }

    #[actix_web::test]
    async fn test_ready_without_key_source_is_unavailable() {
        let mut config = Config::test_config();
        config.llm_api_key = None;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::new(config)))
                .service(health_check_ready),
        )
        .await;

        let req = test::TestRequest::get().uri("/health/ready").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[actix_web::test]
    async fn test_ready_with_server_key() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::new(Config::test_config())))
                .service(health_check_ready),
        )
        .await;

        let req = test::TestRequest::get().uri("/health/ready").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "ready");
        assert_eq!(body["generation_mode"], "two_stage");
    }
}
