//! # 사용자 관련 응답 DTO 모듈
//!
//! 처리 결과를 클라이언트에게 일관된 형태로 전달하는 구조체들입니다.
//!
//! - `CreateUserResponse` - 검증/정규화에 성공한 사용자 생성 요청과 표시용 출력
//! - `FormDraftResponse` - 입력 중인 폼 초안의 스냅샷 (비밀번호 값 제외)
//! - `AppendTechResponse` - 새로 추가된 기술 항목의 식별자와 폼 스냅샷

pub mod user_response;
pub mod form_response;

pub use user_response::{render_output, CreateUserResponse};
pub use form_response::{AppendTechResponse, FormDraftResponse, TechFieldResponse};
