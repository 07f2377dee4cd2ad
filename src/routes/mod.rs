//! # Routes Configuration
//!
//! 애플리케이션의 모든 HTTP 라우트를 등록합니다.
//!
//! ```text
//! GET    /health
//! POST   /api/v1/users
//! POST   /api/v1/forms
//! GET    /api/v1/forms/{form_id}
//! DELETE /api/v1/forms/{form_id}
//! PUT    /api/v1/forms/{form_id}/fields
//! POST   /api/v1/forms/{form_id}/techs
//! PATCH  /api/v1/forms/{form_id}/techs/{field_id}
//! DELETE /api/v1/forms/{form_id}/techs/{field_id}
//! POST   /api/v1/forms/{form_id}/submit
//! ```
//!
//! JSON 본문이나 경로 추출에 실패해도 다른 에러와 같은 `{ "error": ... }` 형태로 응답합니다.

use crate::core::errors::AppError;
use crate::handlers;
use actix_web::web;
use serde_json::json;

/// `(메서드, 경로)` 목록. 시작 배너 출력에 사용합니다.
pub const ROUTES: [(&str, &str); 10] = [
    ("GET", "/health"),
    ("POST", "/api/v1/users"),
    ("POST", "/api/v1/forms"),
    ("GET", "/api/v1/forms/{form_id}"),
    ("DELETE", "/api/v1/forms/{form_id}"),
    ("PUT", "/api/v1/forms/{form_id}/fields"),
    ("POST", "/api/v1/forms/{form_id}/techs"),
    ("PATCH", "/api/v1/forms/{form_id}/techs/{field_id}"),
    ("DELETE", "/api/v1/forms/{form_id}/techs/{field_id}"),
    ("POST", "/api/v1/forms/{form_id}/submit"),
];

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config()).app_data(path_config());

    // Health check endpoint
    cfg.service(health_check);

    configure_user_routes(cfg);
    configure_form_routes(cfg);
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/users")
            .service(handlers::users::create_user)
    );
}

fn configure_form_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/forms")
            .service(handlers::forms::create_form)
            .service(handlers::forms::get_form)
            .service(handlers::forms::delete_form)
            .service(handlers::forms::set_field)
            .service(handlers::forms::append_tech)
            .service(handlers::forms::update_tech)
            .service(handlers::forms::remove_tech)
            .service(handlers::forms::submit_form)
    );
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}

fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|err, _req| AppError::NotFound(err.to_string()).into())
}

#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "user_form_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "validation": "validator",
            "storage": "in-memory form drafts"
        }
    }))
}
