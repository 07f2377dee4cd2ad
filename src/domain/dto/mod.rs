//! # Data Transfer Objects
//!
//! HTTP 계층과 서비스 계층 사이에서 오가는 요청/응답 구조체를 정의합니다.
//! 요청 DTO는 검증 전 원시 값을, 응답 DTO는 클라이언트에게 보여줄 값만 담습니다.

pub mod users;

pub use users::*;
