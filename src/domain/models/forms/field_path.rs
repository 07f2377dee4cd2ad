//! 폼 필드 경로
//!
//! UI 계층이 사용하는 점 표기(`techs.1.title`)와 에러 맵의 대괄호 표기
//! (`techs[1].title`)를 모두 해석합니다. 출력은 항상 대괄호 표기입니다.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// 사용자 생성 폼 안의 필드 주소
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldPath {
    Name,
    Email,
    Password,
    /// 기술 목록 전체 (컬렉션 수준 에러용)
    Techs,
    /// 기술 목록의 한 항목
    Tech(usize),
    TechTitle(usize),
    TechKnowledge(usize),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldPathError {
    #[error("Unknown field path: {0}")]
    Unknown(String),

    #[error("Invalid index in field path: {0}")]
    InvalidIndex(String),

    #[error("Index {index} is out of bounds for {len} technologies")]
    OutOfBounds { index: usize, len: usize },

    #[error("Field path is not editable: {0}")]
    NotEditable(String),
}

impl FieldPath {
    /// 값을 직접 입력할 수 있는 말단 필드인지 여부
    pub fn is_editable(&self) -> bool {
        !matches!(self, FieldPath::Techs | FieldPath::Tech(_))
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldPath::Name => write!(f, "name"),
            FieldPath::Email => write!(f, "email"),
            FieldPath::Password => write!(f, "password"),
            FieldPath::Techs => write!(f, "techs"),
            FieldPath::Tech(index) => write!(f, "techs[{}]", index),
            FieldPath::TechTitle(index) => write!(f, "techs[{}].title", index),
            FieldPath::TechKnowledge(index) => write!(f, "techs[{}].knowledge", index),
        }
    }
}

impl FromStr for FieldPath {
    type Err = FieldPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let dotted = s.trim().replace('[', ".").replace(']', "");
        let segments: Vec<&str> = dotted.split('.').collect();

        match segments.as_slice() {
            ["name"] => Ok(FieldPath::Name),
            ["email"] => Ok(FieldPath::Email),
            ["password"] => Ok(FieldPath::Password),
            ["techs"] => Ok(FieldPath::Techs),
            ["techs", i] => Ok(FieldPath::Tech(parse_index(i, s)?)),
            ["techs", i, "title"] => Ok(FieldPath::TechTitle(parse_index(i, s)?)),
            ["techs", i, "knowledge"] => Ok(FieldPath::TechKnowledge(parse_index(i, s)?)),
            _ => Err(FieldPathError::Unknown(s.to_string())),
        }
    }
}

fn parse_index(raw: &str, path: &str) -> Result<usize, FieldPathError> {
    raw.parse::<usize>()
        .map_err(|_| FieldPathError::InvalidIndex(path.to_string()))
}
