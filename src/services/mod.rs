//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! `#[service]` 매크로(`singleton_macro`)로 선언한 싱글톤 서비스를 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{forms::FormService, users::UserService};
//!
//! let user_service = UserService::instance();
//! let form_service = FormService::instance();
//! ```

pub mod users;
pub mod forms;
