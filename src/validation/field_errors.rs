//! # 필드 단위 검증 에러 모음
//!
//! 검증 실패는 예외가 아니라 데이터입니다. [`FieldErrors`]는 필드 경로
//! (`techs[1].knowledge`)를 키로, `validator::ValidationError`를 값으로 갖는
//! 순서 있는 맵으로, 호출자(UI 계층, HTTP 핸들러)가 별도 분기 없이 그대로
//! 렌더링할 수 있도록 설계되었습니다.
//!
//! ## 규칙
//!
//! - 경로당 에러는 하나만 보관합니다. 먼저 기록된 에러가 유지됩니다.
//! - 기록된 순서를 유지합니다. 검증기는 폼 순서대로 기록하므로
//!   `techs[2]`가 `techs[10]`보다 먼저 나옵니다.
//! - JSON 직렬화 시 `{ "<경로>": "<메시지>" }` 형태가 됩니다.
//!
//! ```json
//! {
//!   "email": "invalid email format",
//!   "techs": "at least 2 technologies required",
//!   "techs[0].knowledge": "knowledge must be between 1 and 100"
//! }
//! ```

use std::borrow::Cow;
use std::fmt;
use serde::ser::{Serialize, SerializeMap, Serializer};
use validator::ValidationError;

/// 필드 경로별 검증 에러 맵
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    errors: Vec<(String, ValidationError)>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// 경로에 에러를 기록합니다
    ///
    /// 이미 에러가 있는 경로라면 기존 에러를 유지하고 `false`를 반환합니다.
    pub fn insert(&mut self, path: impl Into<String>, error: ValidationError) -> bool {
        let path = path.into();
        if self.contains(&path) {
            return false;
        }
        self.errors.push((path, error));
        true
    }

    /// 단일 필드 검증 결과를 흡수합니다
    ///
    /// 성공이면 값을 돌려주고, 실패면 에러를 기록한 뒤 `None`을 반환합니다.
    /// 레코드 검증기가 모든 필드를 끝까지 검사하면서 에러를 모으는 데 사용합니다.
    pub fn check<T>(&mut self, path: impl Into<String>, result: Result<T, ValidationError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.insert(path, error);
                None
            }
        }
    }

    pub fn get(&self, path: &str) -> Option<&ValidationError> {
        self.errors
            .iter()
            .find(|(recorded, _)| recorded == path)
            .map(|(_, error)| error)
    }

    /// 경로의 표시용 메시지. 메시지가 없으면 에러 코드를 사용합니다.
    pub fn message(&self, path: &str) -> Option<Cow<'static, str>> {
        self.get(path).map(display_message)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(|(path, _)| path.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ValidationError)> {
        self.errors.iter().map(|(path, error)| (path.as_str(), error))
    }
}

fn display_message(error: &ValidationError) -> Cow<'static, str> {
    error.message.clone().unwrap_or_else(|| error.code.clone())
}

impl Serialize for FieldErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.errors.len()))?;
        for (path, error) in &self.errors {
            map.serialize_entry(path, &display_message(error))?;
        }
        map.end()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (path, error)) in self.errors.iter().enumerate() {
            if index > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", path, display_message(error))?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}
