//! # 필드별 검증 규칙
//!
//! 각 함수는 원시 입력값(`serde_json::Value`) 하나를 받아 정규화된 값 또는
//! `validator::ValidationError`를 반환하는 순수 함수입니다.
//! 레코드 수준의 조합은 [`crate::validation::user_schema`]가 담당합니다.
//!
//! ## 에러 코드
//!
//! | 코드 | 의미 |
//! |------|------|
//! | `required` | 값이 비어 있음 |
//! | `invalid_type` | 텍스트/목록/객체가 와야 할 자리에 다른 타입이 옴 |
//! | `email` | 이메일 형식이 아님 |
//! | `length` | 최소 길이(개수) 미달 |
//! | `not_a_number` | 숫자로 변환할 수 없음 |
//! | `not_an_integer` | 소수 부분이 있음 |
//! | `range` | 허용 범위를 벗어남 |

use std::borrow::Cow;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use validator::{ValidateEmail, ValidationError};
use crate::utils::string_utils::capitalize_words;

pub const PASSWORD_MIN_LENGTH: u64 = 6;
pub const TECHS_MIN_COUNT: u64 = 2;
pub const KNOWLEDGE_MIN: u8 = 1;
pub const KNOWLEDGE_MAX: u8 = 100;

/// 점이 포함된 도메인과 두 글자 이상의 알파벳 TLD를 요구하는 주소 형식
///
/// 선행 점과 연속된 점은 [`is_email`]에서 따로 거릅니다.
static EMAIL_PATTERN: Lazy<Option<Regex>> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$").ok()
});

/// 이메일 형식 검사
///
/// `validator`의 RFC 기반 검사와 주소 형식 패턴을 모두 통과해야 합니다.
/// `jane@localhost`, `a@b`, `x@[127.0.0.1]`은 거부됩니다.
pub fn is_email(email: &str) -> bool {
    !email.starts_with('.')
        && !email.contains("..")
        && email.validate_email()
        && EMAIL_PATTERN.as_ref().is_some_and(|pattern| pattern.is_match(email))
}

/// UTF-16 코드 단위 길이 (브라우저 폼의 문자열 길이와 같은 기준)
pub fn utf16_len(text: &str) -> u64 {
    text.encode_utf16().count() as u64
}

fn error(code: &'static str, message: impl Into<Cow<'static, str>>) -> ValidationError {
    ValidationError::new(code).with_message(message.into())
}

fn required(message: &'static str) -> ValidationError {
    error("required", message)
}

fn invalid_type(field: &str) -> ValidationError {
    error("invalid_type", format!("{} must be text", field))
}

/// 텍스트 필드 값을 꺼냅니다. 누락(`null`)은 빈 문자열로 취급합니다.
fn text<'a>(value: &'a Value, field: &str) -> Result<&'a str, ValidationError> {
    match value {
        Value::Null => Ok(""),
        Value::String(text) => Ok(text),
        _ => Err(invalid_type(field)),
    }
}

/// 이름 검증 및 정규화
///
/// 공백 정리 후 비어 있으면 `name is required`.
/// 성공 시 각 단어의 첫 글자를 대문자로 바꾼 값을 반환합니다.
pub fn validate_name(value: &Value) -> Result<String, ValidationError> {
    let normalized = capitalize_words(text(value, "name")?);
    if normalized.is_empty() {
        return Err(required("name is required"));
    }
    Ok(normalized)
}

/// 이메일 검증
///
/// 빈 값과 형식 오류를 서로 다른 코드로 구분합니다. 값은 변경하지 않습니다.
pub fn validate_email(value: &Value) -> Result<String, ValidationError> {
    let email = text(value, "email")?.to_owned();
    if email.is_empty() {
        return Err(required("email is required"));
    }
    if !is_email(&email) {
        return Err(error("email", "invalid email format"));
    }
    Ok(email)
}

/// 비밀번호 최소 길이 검증 (UTF-16 코드 단위 기준)
pub fn validate_password(value: &Value) -> Result<String, ValidationError> {
    let password = text(value, "password")?;
    if utf16_len(password) < PASSWORD_MIN_LENGTH {
        let mut err = error(
            "length",
            format!("password must be at least {} characters", PASSWORD_MIN_LENGTH),
        );
        err.add_param(Cow::from("min"), &PASSWORD_MIN_LENGTH);
        return Err(err);
    }
    Ok(password.to_owned())
}

/// 기술 목록의 최소 개수 에러
pub fn techs_min_count_error(actual: usize) -> ValidationError {
    let mut err = error(
        "length",
        format!("at least {} technologies required", TECHS_MIN_COUNT),
    );
    err.add_param(Cow::from("min"), &TECHS_MIN_COUNT);
    err.add_param(Cow::from("actual"), &actual);
    err
}

pub fn techs_not_a_list_error() -> ValidationError {
    error("invalid_type", "techs must be a list")
}

pub fn tech_entry_not_an_object_error() -> ValidationError {
    error("invalid_type", "technology entry must be an object")
}

/// 기술 제목 검증
pub fn validate_title(value: &Value) -> Result<String, ValidationError> {
    let title = text(value, "title")?;
    if title.is_empty() {
        return Err(required("title is required"));
    }
    Ok(title.to_owned())
}

/// 숫자 입력 필드의 강제 변환
///
/// - 숫자: 그대로
/// - 텍스트: 앞뒤 공백 제거 후 파싱, 빈 텍스트는 `0`
/// - `true`/`false`: `1`/`0`
/// - `null`: `0`
/// - 배열/객체, 파싱 실패, 무한대: `None`
pub fn coerce_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Null => Some(0.0),
        Value::Bool(flag) => Some(if *flag { 1.0 } else { 0.0 }),
        Value::Number(number) => number.as_f64(),
        Value::String(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                Some(0.0)
            } else {
                trimmed.parse::<f64>().ok()
            }
        }
        Value::Array(_) | Value::Object(_) => None,
    };
    number.filter(|n| n.is_finite())
}

/// 숙련도 검증
///
/// "숫자가 아님", "정수가 아님", "범위 밖"을 각각 다른 코드로 보고합니다.
pub fn validate_knowledge(value: &Value) -> Result<u8, ValidationError> {
    let Some(number) = coerce_number(value) else {
        return Err(error("not_a_number", "knowledge must be a number"));
    };

    if number.fract() != 0.0 {
        let mut err = error("not_an_integer", "knowledge must be a whole number");
        err.add_param(Cow::from("value"), &number);
        return Err(err);
    }

    if number < f64::from(KNOWLEDGE_MIN) || number > f64::from(KNOWLEDGE_MAX) {
        let mut err = error(
            "range",
            format!("knowledge must be between {} and {}", KNOWLEDGE_MIN, KNOWLEDGE_MAX),
        );
        err.add_param(Cow::from("min"), &KNOWLEDGE_MIN);
        err.add_param(Cow::from("max"), &KNOWLEDGE_MAX);
        err.add_param(Cow::from("value"), &number);
        return Err(err);
    }

    Ok(number as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn code(result: Result<impl std::fmt::Debug, ValidationError>) -> String {
        result.unwrap_err().code.to_string()
    }

    #[test]
    fn test_validate_name() {
        assert_eq!(validate_name(&json!("  jane doe  ")).unwrap(), "Jane Doe");
        assert_eq!(validate_name(&json!("Jane Doe")).unwrap(), "Jane Doe");

        let err = validate_name(&json!("   ")).unwrap_err();
        assert_eq!(err.code, "required");
        assert_eq!(err.message.as_deref(), Some("name is required"));

        assert_eq!(code(validate_name(&Value::Null)), "required");
        assert_eq!(code(validate_name(&json!(42))), "invalid_type");
    }

    #[test]
    fn test_validate_email() {
        assert_eq!(validate_email(&json!("jane@example.com")).unwrap(), "jane@example.com");

        let required = validate_email(&json!("")).unwrap_err();
        assert_eq!(required.code, "required");
        assert_eq!(required.message.as_deref(), Some("email is required"));

        let invalid = validate_email(&json!("not-an-email")).unwrap_err();
        assert_eq!(invalid.code, "email");
        assert_eq!(invalid.message.as_deref(), Some("invalid email format"));

        assert_eq!(code(validate_email(&json!(" "))), "email");
        assert_eq!(code(validate_email(&json!("a@b"))), "email");
    }

    #[test]
    fn test_email_requires_dotted_domain_with_alphabetic_tld() {
        for accepted in ["jane.doe@example.com", "o'neil+tag@mail.example.co", "a_b-c@sub-domain.io"] {
            assert!(is_email(accepted), "{} should be accepted", accepted);
        }
        for rejected in [
            "jane@localhost",
            "a@b",
            "x@[127.0.0.1]",
            "jane@example.c",
            "jane@example.123",
            ".jane@example.com",
            "jane..doe@example.com",
            "jane.@example.com",
        ] {
            assert!(!is_email(rejected), "{} should be rejected", rejected);
        }
    }

    #[test]
    fn test_validate_password() {
        assert_eq!(validate_password(&json!("secret")).unwrap(), "secret");

        let err = validate_password(&json!("12345")).unwrap_err();
        assert_eq!(err.code, "length");
        assert_eq!(err.message.as_deref(), Some("password must be at least 6 characters"));
        assert_eq!(err.params.get("min"), Some(&json!(6)));

        // 바이트가 아니라 UTF-16 코드 단위 기준
        assert!(validate_password(&json!("비밀번호해요")).is_ok());
        assert_eq!(code(validate_password(&Value::Null)), "length");
    }

    #[test]
    fn test_password_length_counts_utf16_units() {
        // 이모지 하나는 코드 단위 2개
        assert_eq!(utf16_len("😀😀😀"), 6);
        assert!(validate_password(&json!("😀😀😀")).is_ok());
        assert_eq!(code(validate_password(&json!("😀😀"))), "length");
    }

    #[test]
    fn test_validate_title() {
        assert_eq!(validate_title(&json!("Rust")).unwrap(), "Rust");
        assert_eq!(code(validate_title(&json!(""))), "required");
        assert_eq!(code(validate_title(&Value::Null)), "required");
        assert_eq!(code(validate_title(&json!(["Rust"]))), "invalid_type");
    }

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce_number(&json!(42)), Some(42.0));
        assert_eq!(coerce_number(&json!(" 42 ")), Some(42.0));
        assert_eq!(coerce_number(&json!("1e2")), Some(100.0));
        assert_eq!(coerce_number(&json!("")), Some(0.0));
        assert_eq!(coerce_number(&json!(true)), Some(1.0));
        assert_eq!(coerce_number(&Value::Null), Some(0.0));
        assert_eq!(coerce_number(&json!("abc")), None);
        assert_eq!(coerce_number(&json!("inf")), None);
        assert_eq!(coerce_number(&json!({})), None);
    }

    #[test]
    fn test_validate_knowledge_bounds() {
        assert_eq!(validate_knowledge(&json!(1)).unwrap(), 1);
        assert_eq!(validate_knowledge(&json!("100")).unwrap(), 100);

        let low = validate_knowledge(&json!(0)).unwrap_err();
        assert_eq!(low.code, "range");
        assert_eq!(low.message.as_deref(), Some("knowledge must be between 1 and 100"));
        assert_eq!(low.params.get("min"), Some(&json!(1)));
        assert_eq!(low.params.get("max"), Some(&json!(100)));

        assert_eq!(code(validate_knowledge(&json!(101))), "range");
    }

    #[test]
    fn test_validate_knowledge_distinguishes_error_kinds() {
        let nan = validate_knowledge(&json!("abc")).unwrap_err();
        assert_eq!(nan.code, "not_a_number");
        assert_eq!(nan.message.as_deref(), Some("knowledge must be a number"));

        assert_eq!(code(validate_knowledge(&json!("50.5"))), "not_an_integer");
        assert_eq!(code(validate_knowledge(&json!(""))), "range");
    }
}
