//! # Application Error Handling System
//!
//! 폼 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`로 에러 타입을 정의하고 `actix_web::ResponseError`를 구현하여
//! 핸들러에서 `?`만으로 일관된 JSON 에러 응답을 만들 수 있습니다.
//!
//! ## 검증 에러는 데이터
//!
//! 사용자 입력 검증 실패는 예외 상황이 아니라 사용자가 고칠 수 있는 정상 흐름입니다.
//! `ValidationError`는 문자열이 아닌 [`FieldErrors`]를 그대로 담아, 응답 본문에
//! 필드 경로별 메시지를 빠짐없이 싣습니다.
//!
//! ```json
//! {
//!   "error": "Validation error: email: invalid email format",
//!   "details": { "email": "invalid email format" }
//! }
//! ```
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 폼 검증 실패 |
//! | `BadRequest` | 400 Bad Request | 잘못된 필드 경로, 형식이 틀린 요청 본문 |
//! | `NotFound` | 404 Not Found | 없는 폼 초안 또는 기술 항목 |
//! | `ConflictError` | 409 Conflict | 초안 저장 한도 초과 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;
use crate::domain::models::forms::FieldPathError;
use crate::validation::FieldErrors;

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 폼 검증 실패 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(FieldErrors),

    /// 요청 형식 오류 (400 Bad Request)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// 리소스 찾을 수 없음 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/한도 초과 (409 Conflict)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl From<FieldErrors> for AppError {
    fn from(errors: FieldErrors) -> Self {
        AppError::ValidationError(errors)
    }
}

impl From<FieldPathError> for AppError {
    fn from(error: FieldPathError) -> Self {
        AppError::BadRequest(error.to_string())
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 에러 타입을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다
    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::ValidationError(details) => json!({
                "error": self.to_string(),
                "details": details,
            }),
            _ => json!({ "error": self.to_string() }),
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// 외부 에러에 문맥을 붙여 `InternalError`로 변환하는 확장 trait
pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> AppResult<T>;

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
