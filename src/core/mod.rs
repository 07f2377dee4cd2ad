//! # Core Module
//!
//! 서비스 전역에서 공유하는 핵심 타입을 제공합니다.
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입 정의
//! - **HTTP 통합**: Actix-Web ResponseError 구현
//! - **검증 에러 보존**: 필드 경로별 에러(`FieldErrors`)를 응답 본문까지 그대로 전달
//! - **자동 변환**: thiserror 기반 에러 정의와 `ErrorContext` 확장 trait

pub mod errors;
pub mod registry;

pub use errors::*;
