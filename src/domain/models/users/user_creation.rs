//! 정규화된 사용자 생성 레코드
//!
//! [`crate::validation::validate_user_creation`]이 성공했을 때만 만들어지는
//! 타입이 확정된 레코드입니다. 저장되지 않으며, 제출 한 번마다 만들어져
//! 호출자에게 전달된 뒤 버려집니다.
//!
//! 구조체 수준의 `validator::Validate` 구현으로 불변식을 다시 확인할 수 있습니다.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use crate::utils::string_utils::capitalize_words;
use crate::validation::rules;

/// 검증과 정규화를 통과한 사용자 생성 요청
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct UserCreationRequest {
    /// 단어별 첫 글자가 대문자인 이름. 앞뒤 공백과 빈 단어가 없습니다.
    #[validate(
        length(min = 1, message = "name is required"),
        custom(function = "validate_normalized_name")
    )]
    pub name: String,

    #[validate(
        email(message = "invalid email format"),
        custom(function = "validate_email_format")
    )]
    pub email: String,

    /// UTF-16 코드 단위로 6 이상
    #[validate(custom(function = "validate_password_length"))]
    pub password: String,

    /// 입력 순서를 유지한 기술 목록 (최소 2개)
    #[validate(
        length(min = 2, message = "at least 2 technologies required"),
        custom(function = "validate_tech_entries")
    )]
    pub techs: Vec<TechEntry>,
}

/// 기술 하나와 숙련도
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct TechEntry {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,

    /// 1~100 사이의 정수
    #[validate(range(min = 1, max = 100, message = "knowledge must be between 1 and 100"))]
    pub knowledge: u8,
}

fn validate_normalized_name(name: &str) -> Result<(), ValidationError> {
    if capitalize_words(name) != name {
        return Err(ValidationError::new("not_normalized")
            .with_message("name must be trimmed and capitalized".into()));
    }
    Ok(())
}

fn validate_email_format(email: &str) -> Result<(), ValidationError> {
    if !rules::is_email(email) {
        return Err(ValidationError::new("email").with_message("invalid email format".into()));
    }
    Ok(())
}

fn validate_password_length(password: &str) -> Result<(), ValidationError> {
    if rules::utf16_len(password) < rules::PASSWORD_MIN_LENGTH {
        return Err(ValidationError::new("length")
            .with_message("password must be at least 6 characters".into()));
    }
    Ok(())
}

fn validate_tech_entries(techs: &[TechEntry]) -> Result<(), ValidationError> {
    if techs.iter().any(|tech| tech.validate().is_err()) {
        return Err(ValidationError::new("invalid_entry")
            .with_message("every technology must have a title and a knowledge between 1 and 100".into()));
    }
    Ok(())
}
