//! # 사용자 생성 서비스
//!
//! 원시 폼 레코드를 검증/정규화하고, 성공한 요청을 호출자에게 넘길 응답으로
//! 완성합니다. 저장소가 없으므로 정규화된 요청은 응답으로 돌려준 뒤 버려집니다.
//!
//! ```text
//! RawUserCreationRequest
//!     │  validate_user_creation
//!     ▼
//! UserCreationRequest ──► complete() ──► CreateUserResponse { user, output, message }
//!     │                     ├─ 불변식 재확인 (validator::Validate)
//!     │                     └─ 표시용 출력 렌더링
//!     ▼
//! FieldErrors ──► AppError::ValidationError (400)
//! ```

use log::{debug, info};
use singleton_macro::service;
use validator::Validate;
use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::domain::dto::users::request::RawUserCreationRequest;
use crate::domain::dto::users::response::{render_output, CreateUserResponse};
use crate::domain::models::users::UserCreationRequest;
use crate::validation::validate_user_creation;

/// 사용자 생성 폼 처리 서비스
///
/// 상태가 없는 싱글톤입니다.
///
/// ```rust,ignore
/// let user_service = UserService::instance(); // 항상 동일한 인스턴스
/// ```
#[service(name = "user")]
pub struct UserService {
    // 외부 의존성 없음
}

impl UserService {
    /// 원시 레코드를 검증하고 사용자 생성 응답을 만듭니다
    ///
    /// # 반환값
    ///
    /// * `Ok(CreateUserResponse)` - 정규화된 요청과 표시용 출력
    /// * `Err(AppError::ValidationError)` - 실패한 모든 필드 경로와 메시지
    pub fn create_user(&self, raw: RawUserCreationRequest) -> AppResult<CreateUserResponse> {
        let start_time = std::time::Instant::now();

        let request = validate_user_creation(&raw).map_err(AppError::ValidationError)?;
        let response = self.complete(request)?;

        info!(
            "사용자 생성 요청 처리 완료: techs={} ({:?})",
            response.user.techs.len(),
            start_time.elapsed()
        );
        Ok(response)
    }

    /// 제출 완료 콜백: 정규화된 요청을 응답으로 완성합니다
    ///
    /// 정규화 결과가 타입 수준 불변식을 깨면 내부 오류로 취급합니다.
    pub fn complete(&self, request: UserCreationRequest) -> AppResult<CreateUserResponse> {
        request
            .validate()
            .with_context(|| "정규화된 요청이 불변식을 위반했습니다".to_string())?;

        let output = render_output(&request).context("출력 렌더링 실패")?;
        debug!("사용자 생성 출력:\n{}", output);

        Ok(CreateUserResponse {
            user: request,
            output,
            message: "사용자 생성 요청이 검증되었습니다".to_string(),
        })
    }
}
