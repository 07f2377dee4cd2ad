//! # Domain Layer Module
//!
//! 사용자 생성 폼의 데이터 구조를 정의하는 도메인 계층입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── DTOs     - 요청/응답 데이터 전송 객체 (원시 폼 레코드 포함)
//! └── Models   - 정규화된 사용자 생성 레코드, 필드 배열, 폼 초안
//!      │
//!      ▼
//! Application Layer (Services)
//! ```
//!
//! 도메인 계층은 I/O를 하지 않습니다. 폼 초안 저장과 HTTP 연동은
//! 서비스/핸들러 계층의 몫입니다.

pub mod dto;
pub mod models;

pub use dto::*;
pub use models::*;
