//! # 폼 검증 모듈
//!
//! 사용자 생성 폼의 선언적 검증을 필드별 검증 함수와 이를 조합하는
//! 레코드 검증기로 구현합니다. I/O도 부수효과도 없는 순수 함수들입니다.
//!
//! - [`rules`] - 필드별 검증/정규화 함수와 상수
//! - [`user_schema`] - 레코드 수준 조합 (`validate_user_creation`)
//! - [`field_errors`] - 경로별 에러 모음 (`FieldErrors`)

pub mod field_errors;
pub mod rules;
pub mod user_schema;

pub use field_errors::FieldErrors;
pub use user_schema::validate_user_creation;
