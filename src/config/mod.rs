//! # Configuration Module
//!
//! 환경변수 기반 설정을 제공합니다. `main`에서 `PROFILE`에 맞는 `.env` 파일을
//! 먼저 로드하고, 각 설정 구조체는 필요할 때 환경변수를 읽습니다.
//!
//! - [`server_config`] - 바인드 주소, 워커 수, Rate Limiting, CORS
//! - [`form_config`] - 폼 초안 저장 한도와 보관 시간
//!
//! 값이 없으면 기본값을 쓰고, 값은 있지만 해석할 수 없으면 에러를 로그로 남긴 뒤
//! 기본값을 씁니다.

pub mod server_config;
pub mod form_config;

pub use server_config::*;
pub use form_config::*;

use std::env;
use std::fmt::Display;
use std::str::FromStr;
use log::error;

/// 환경변수를 읽어 해석합니다. 없거나 해석 실패 시 기본값.
pub(crate) fn env_or<T>(key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    parse_or(key, env::var(key).ok(), default)
}

pub(crate) fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match raw {
        None => default,
        Some(raw) => raw.trim().parse::<T>().unwrap_or_else(|e| {
            error!("{} 파싱 실패: {}. 기본값 {} 사용", key, e, default);
            default
        }),
    }
}
