//! 폼 초안 편집 요청 DTO

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use validator::{Validate, ValidationError};

/// 경로 주소 지정 방식의 필드 입력 (`register('techs.0.title')`에 해당)
#[derive(Debug, Deserialize, Validate)]
pub struct SetFieldRequest {
    /// `name`, `email`, `password`, `techs.<index>.title`, `techs.<index>.knowledge`
    #[validate(length(min = 1, message = "field path is required"))]
    pub path: String,

    /// 입력값. 보통 텍스트이지만 숫자 입력은 숫자로 와도 됩니다.
    #[serde(default)]
    pub value: Value,
}

/// 식별자 주소 지정 방식의 기술 항목 수정
///
/// 키가 없으면 `None`(변경 없음), 명시적인 `null`은 `Some(Value::Null)`(값 비우기)입니다.
#[derive(Debug, Default, Deserialize, Validate)]
#[validate(schema(function = "validate_has_changes"))]
pub struct UpdateTechRequest {
    #[serde(default, deserialize_with = "present")]
    pub title: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub knowledge: Option<Value>,
}

/// 키가 있으면 `null`이라도 `Some`
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// 바꿀 값이 하나도 없는 요청을 거부합니다
fn validate_has_changes(req: &UpdateTechRequest) -> Result<(), ValidationError> {
    if req.title.is_none() && req.knowledge.is_none() {
        return Err(ValidationError::new("empty_update")
            .with_message("title or knowledge must be provided".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_field_requires_path() {
        let req: SetFieldRequest = serde_json::from_value(json!({ "path": "", "value": "x" })).unwrap();
        assert!(req.validate().is_err());

        let req: SetFieldRequest = serde_json::from_value(json!({ "path": "name", "value": "x" })).unwrap();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_update_tech_requires_a_change() {
        assert!(UpdateTechRequest::default().validate().is_err());

        let req: UpdateTechRequest = serde_json::from_value(json!({ "knowledge": "42" })).unwrap();
        assert!(req.validate().is_ok());
        assert_eq!(req.title, None);
    }

    #[test]
    fn test_update_tech_accepts_explicit_null() {
        let req: UpdateTechRequest = serde_json::from_value(json!({ "title": null })).unwrap();

        assert_eq!(req.title, Some(Value::Null));
        assert_eq!(req.knowledge, None);
        assert!(req.validate().is_ok());
    }
}
