use actix_web::{web, HttpResponse};

use crate::errors::AppError;

/// Creates a success JSON response
pub fn success_json<T: serde::Serialize>(data: T) -> HttpResponse {
    HttpResponse::Ok().json(data)
}

/// JSON extractor config whose rejections use the API's error body.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(64 * 1024)
        .error_handler(|err, _req| {
            log::warn!("Rejected request body: {}", err);
            AppError::ValidationError(format!("Invalid request body: {}", err)).into()
        })
}
