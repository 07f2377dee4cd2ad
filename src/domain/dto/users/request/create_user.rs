//! # 사용자 생성 원시 요청 DTO
//!
//! 클라이언트(UI 계층)가 수집한 폼 값을 타입 변환 없이 그대로 담는 구조입니다.
//! 숫자 입력도 텍스트로 도착할 수 있고 배열 항목은 사용자가 자유롭게 편집하므로,
//! 모든 값은 `serde_json::Value`로 받고 검증/변환은
//! [`crate::validation::validate_user_creation`]이 담당합니다.
//!
//! 누락된 필드는 `null`로 역직렬화됩니다.
//!
//! ## JSON 예제
//!
//! ```json
//! {
//!   "name": "  jane doe  ",
//!   "email": "jane@example.com",
//!   "password": "secret1",
//!   "techs": [
//!     { "title": "Rust", "knowledge": "80" },
//!     { "title": "SQL", "knowledge": 60 }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use crate::domain::models::users::{TechEntry, UserCreationRequest};

/// 검증 전 사용자 생성 레코드
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawUserCreationRequest {
    #[serde(default)]
    pub name: Value,

    #[serde(default)]
    pub email: Value,

    #[serde(default)]
    pub password: Value,

    /// `{ "title", "knowledge" }` 객체 배열
    #[serde(default)]
    pub techs: Value,
}

/// 검증 전 기술 항목
///
/// `Default`는 폼에서 "추가" 버튼을 눌렀을 때의 초기값
/// `{ title: "", knowledge: 0 }` 입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTechEntry {
    #[serde(default)]
    pub title: Value,

    #[serde(default)]
    pub knowledge: Value,
}

impl Default for RawTechEntry {
    fn default() -> Self {
        Self {
            title: Value::String(String::new()),
            knowledge: Value::from(0),
        }
    }
}

impl RawTechEntry {
    pub fn to_value(&self) -> Value {
        json!({
            "title": self.title,
            "knowledge": self.knowledge,
        })
    }
}

impl From<&TechEntry> for RawTechEntry {
    fn from(tech: &TechEntry) -> Self {
        Self {
            title: Value::String(tech.title.clone()),
            knowledge: Value::from(tech.knowledge),
        }
    }
}

/// 정규화된 레코드를 다시 원시 입력으로 되돌립니다 (재검증용)
impl From<&UserCreationRequest> for RawUserCreationRequest {
    fn from(request: &UserCreationRequest) -> Self {
        Self {
            name: Value::String(request.name.clone()),
            email: Value::String(request.email.clone()),
            password: Value::String(request.password.clone()),
            techs: Value::Array(
                request
                    .techs
                    .iter()
                    .map(|tech| RawTechEntry::from(tech).to_value())
                    .collect(),
            ),
        }
    }
}
