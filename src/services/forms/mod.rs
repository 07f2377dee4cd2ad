//! 폼 초안 서비스 모듈
//!
//! 입력 중인 폼을 메모리에 보관하고 필드 입력, 기술 항목 추가/삭제,
//! 제출을 처리합니다.

pub mod form_service;

pub use form_service::FormService;
