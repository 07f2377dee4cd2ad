//! 사용자 생성 폼 서비스
//!
//! 사용자 생성 폼(이름, 이메일, 비밀번호, 기술 목록)의 검증과 정규화,
//! 그리고 입력 중인 폼 초안의 편집과 제출을 HTTP로 제공합니다.
//!
//! # Features
//!
//! - **검증/정규화**: 실패한 모든 필드를 경로별 메시지로 보고, 성공 시 이름을 단어별 대문자로 정규화
//! - **기술 항목 배열**: 추가/삭제 후에도 각 항목의 식별자와 값이 유지됨
//! - **제출 계약**: 검증에 성공했을 때만 완료 콜백을 호출
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 폼 초안 저장소, 제출 완료
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   Validation    │ ← 규칙, 필드 경로별 에러
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use user_form_service::validation::validate_user_creation;
//!
//! match validate_user_creation(&raw) {
//!     Ok(request) => println!("{}", request.name),
//!     Err(errors) => println!("{}", errors),
//! }
//! ```

pub mod core;
pub mod config;
pub mod domain;
pub mod validation;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
