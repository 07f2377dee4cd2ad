//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 데이터를 Rust 타입으로 옮기는 구조체들입니다.
//!
//! - [`create_user`] - 검증 전 사용자 생성 레코드 (`RawUserCreationRequest`)
//! - [`form_request`] - 폼 초안 편집 요청 (`SetFieldRequest`, `UpdateTechRequest`)
//!
//! 사용자 생성 레코드는 일부러 타입을 확정하지 않습니다. 형식 검증은
//! `serde`가 아니라 검증 모듈이 수행하여 필드 경로별 에러로 보고합니다.
//! 편집 요청 DTO는 `validator` derive로 형식만 확인합니다.

pub mod create_user;
pub mod form_request;

pub use create_user::{RawTechEntry, RawUserCreationRequest};
pub use form_request::{SetFieldRequest, UpdateTechRequest};
