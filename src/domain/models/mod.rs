//! # 도메인 모델
//!
//! 검증을 통과한 사용자 생성 레코드와 동적 폼 상태를 정의합니다.
//!
//! - [`users`] - 정규화된 `UserCreationRequest`, `TechEntry`
//! - [`forms`] - 필드 배열, 필드 경로, 폼 초안

pub mod users;
pub mod forms;

pub use users::*;
pub use forms::*;
