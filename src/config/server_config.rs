//! HTTP 서버 설정
//!
//! ```bash
//! # .env.dev
//! SERVER_HOST=127.0.0.1
//! SERVER_PORT=8080
//! SERVER_WORKERS=2
//! RATE_LIMIT_PER_SECOND=20
//! RATE_LIMIT_BURST_SIZE=40
//! CORS_ALLOWED_ORIGINS=http://localhost:3000,http://localhost:5173
//! ```

use std::env;
use log::info;
use super::env_or;

const DEFAULT_CORS_ORIGINS: [&str; 4] = [
    "http://localhost:3000",
    "http://127.0.0.1:3000",
    "http://localhost:5173",
    "http://127.0.0.1:5173",
];

pub struct ServerConfig;

impl ServerConfig {
    pub fn host() -> String {
        env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    pub fn port() -> u16 {
        env_or("SERVER_PORT", 8080)
    }

    pub fn workers() -> usize {
        env_or("SERVER_WORKERS", 4)
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// Rate Limiting 설정 구조체
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// 환경변수에서 Rate Limiting 설정을 로드합니다
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    pub fn load() -> Self {
        let config = Self {
            per_second: env_or("RATE_LIMIT_PER_SECOND", 100),
            burst_size: env_or("RATE_LIMIT_BURST_SIZE", 200),
        };

        info!("Rate Limiting 설정 로드됨: {:?}", config);
        config
    }
}

pub struct CorsConfig;

impl CorsConfig {
    /// 허용할 프론트엔드 Origin 목록
    ///
    /// `CORS_ALLOWED_ORIGINS`(쉼표 구분)가 없으면 로컬 개발 서버 주소를 사용합니다.
    pub fn allowed_origins() -> Vec<String> {
        Self::parse_origins(env::var("CORS_ALLOWED_ORIGINS").ok())
    }

    fn parse_origins(raw: Option<String>) -> Vec<String> {
        let origins: Vec<String> = raw
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        if origins.is_empty() {
            DEFAULT_CORS_ORIGINS.iter().map(|origin| origin.to_string()).collect()
        } else {
            origins
        }
    }
}
