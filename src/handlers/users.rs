//! # User Creation HTTP Handlers
//!
//! 사용자 생성 폼을 한 번에 제출하는 엔드포인트입니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/v1/users` | 폼 레코드 검증 및 정규화 | 201 Created / 400 Bad Request |
//!
//! 본문은 어떤 JSON 객체든 받습니다. 필드 타입이 틀리거나 빠져 있어도
//! 역직렬화 단계에서 거부하지 않고 검증 단계에서 필드별 메시지로 돌려줍니다.
//!
//! ```json
//! {
//!   "error": "Validation error: name: name is required; techs: at least 2 technologies required",
//!   "details": {
//!     "name": "name is required",
//!     "techs": "at least 2 technologies required"
//!   }
//! }
//! ```

use actix_web::{web, HttpResponse, post};
use log::debug;
use crate::core::errors::AppError;
use crate::domain::dto::users::request::RawUserCreationRequest;
use crate::services::users::UserService;

/// 사용자 생성 폼 제출
///
/// 성공하면 정규화된 레코드(`user`)와 표시용 출력(`output`)을 돌려줍니다.
#[post("")]
pub async fn create_user(
    payload: web::Json<RawUserCreationRequest>,
) -> Result<HttpResponse, AppError> {
    debug!("사용자 생성 요청 수신");

    let service = UserService::instance();
    let response = service.create_user(payload.into_inner())?;

    Ok(HttpResponse::Created().json(response))
}
