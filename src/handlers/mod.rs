//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들입니다. 핸들러는 요청 본문과 경로를
//! 추출하고 서비스에 위임한 뒤, 결과를 상태 코드와 JSON으로 바꾸는 일만 합니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리       ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 폼 초안 관리, 제출 완료             ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Validation - 검증/정규화                       ← Domain Rules
//! ├─────────────────────────────────────────────┤
//!   Models/DTO - 폼 상태, 입력/출력 레코드          ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 에러는 `Result<HttpResponse, AppError>`로 돌려주면 `ResponseError` 구현이
//! 상태 코드와 JSON 본문을 만듭니다.
//!
//! ```rust,ignore
//! #[post("")]
//! pub async fn create_user(
//!     payload: web::Json<RawUserCreationRequest>,
//! ) -> Result<HttpResponse, AppError> {
//!     let service = UserService::instance();
//!     let response = service.create_user(payload.into_inner())?;
//!     Ok(HttpResponse::Created().json(response))
//! }
//! ```
//!
//! - **`users`**: 폼 레코드 일괄 제출 (`POST /api/v1/users`)
//! - **`forms`**: 폼 초안 상호작용 (`/api/v1/forms/...`)

pub mod users;
pub mod forms;
