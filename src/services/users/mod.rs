//! 사용자 생성 서비스 모듈
//!
//! 원시 폼 레코드의 검증/정규화와 성공한 요청의 응답 완성을 담당합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let user_service = UserService::instance();
//! let response = user_service.create_user(raw)?;
//! ```

pub mod user_service;

pub use user_service::UserService;
