//! # 사용자 DTO
//!
//! 사용자 생성 폼과 관련된 요청/응답 데이터 전송 객체입니다.

pub mod request;
pub mod response;

// Re-exports for convenience
pub use request::*;
pub use response::*;
