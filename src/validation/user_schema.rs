//! # 사용자 생성 스키마
//!
//! 원시 폼 레코드를 검증하고 정규화된 [`UserCreationRequest`]로 변환합니다.
//!
//! ## 검증 흐름
//!
//! ```text
//! RawUserCreationRequest
//!     │
//!     ├─ name      → rules::validate_name      (정규화 포함)
//!     ├─ email     → rules::validate_email
//!     ├─ password  → rules::validate_password
//!     └─ techs     → 목록 타입 확인
//!                    ├─ techs[i].title      → rules::validate_title
//!                    ├─ techs[i].knowledge  → rules::validate_knowledge
//!                    └─ 개수 ≥ 2            → techs 컬렉션 에러
//!     │
//!     ▼
//! Ok(UserCreationRequest) | Err(FieldErrors)
//! ```
//!
//! 모든 필드를 끝까지 검사한 뒤 한 번에 보고합니다. 부분 성공은 없습니다.

use log::debug;
use serde_json::Value;
use crate::domain::dto::users::request::RawUserCreationRequest;
use crate::domain::models::forms::FieldPath;
use crate::domain::models::users::{TechEntry, UserCreationRequest};
use crate::validation::field_errors::FieldErrors;
use crate::validation::rules;

static NULL: Value = Value::Null;

/// 원시 레코드를 검증하고 정규화합니다
///
/// # 반환값
///
/// * `Ok(UserCreationRequest)` - 모든 규칙을 만족한 정규화 레코드
/// * `Err(FieldErrors)` - 실패한 모든 필드 경로와 메시지
///
/// # 예제
///
/// ```rust
/// use serde_json::json;
/// use user_form_service::domain::dto::users::request::RawUserCreationRequest;
/// use user_form_service::validation::validate_user_creation;
///
/// let raw: RawUserCreationRequest = serde_json::from_value(json!({
///     "name": "  jane doe  ",
///     "email": "jane@example.com",
///     "password": "secret1",
///     "techs": [
///         { "title": "Rust", "knowledge": "90" },
///         { "title": "SQL", "knowledge": 60 }
///     ]
/// })).unwrap();
///
/// let request = validate_user_creation(&raw).unwrap();
/// assert_eq!(request.name, "Jane Doe");
/// assert_eq!(request.techs[0].knowledge, 90);
/// ```
pub fn validate_user_creation(raw: &RawUserCreationRequest) -> Result<UserCreationRequest, FieldErrors> {
    let mut errors = FieldErrors::new();

    let name = errors.check(FieldPath::Name.to_string(), rules::validate_name(&raw.name));
    let email = errors.check(FieldPath::Email.to_string(), rules::validate_email(&raw.email));
    let password = errors.check(FieldPath::Password.to_string(), rules::validate_password(&raw.password));
    let techs = validate_techs(&raw.techs, &mut errors);

    match (name, email, password, techs) {
        (Some(name), Some(email), Some(password), Some(techs)) if errors.is_empty() => {
            Ok(UserCreationRequest { name, email, password, techs })
        }
        _ => {
            debug!("사용자 생성 요청 검증 실패: {}개 필드 ({})", errors.len(), errors);
            Err(errors)
        }
    }
}

/// 기술 목록 검증
///
/// 개별 항목 에러와 컬렉션 수준의 최소 개수 에러를 함께 수집합니다.
fn validate_techs(value: &Value, errors: &mut FieldErrors) -> Option<Vec<TechEntry>> {
    let items: &[Value] = match value {
        Value::Null => &[],
        Value::Array(items) => items.as_slice(),
        _ => {
            errors.insert(FieldPath::Techs.to_string(), rules::techs_not_a_list_error());
            return None;
        }
    };

    let too_few = (items.len() as u64) < rules::TECHS_MIN_COUNT;
    if too_few {
        errors.insert(FieldPath::Techs.to_string(), rules::techs_min_count_error(items.len()));
    }

    let mut entries = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        if let Some(entry) = validate_tech_entry(index, item, errors) {
            entries.push(entry);
        }
    }

    (!too_few && entries.len() == items.len()).then_some(entries)
}

fn validate_tech_entry(index: usize, item: &Value, errors: &mut FieldErrors) -> Option<TechEntry> {
    let Value::Object(fields) = item else {
        errors.insert(FieldPath::Tech(index).to_string(), rules::tech_entry_not_an_object_error());
        return None;
    };

    let title = errors.check(
        FieldPath::TechTitle(index).to_string(),
        rules::validate_title(fields.get("title").unwrap_or(&NULL)),
    );
    let knowledge = errors.check(
        FieldPath::TechKnowledge(index).to_string(),
        rules::validate_knowledge(fields.get("knowledge").unwrap_or(&NULL)),
    );

    Some(TechEntry { title: title?, knowledge: knowledge? })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> RawUserCreationRequest {
        serde_json::from_value(value).unwrap()
    }

    fn valid_input() -> Value {
        json!({
            "name": "  jane doe  ",
            "email": "jane@example.com",
            "password": "secret1",
            "techs": [
                { "title": "Rust", "knowledge": "80" },
                { "title": "TypeScript", "knowledge": 55 }
            ]
        })
    }

    #[test]
    fn test_valid_input_is_normalized() {
        let request = validate_user_creation(&raw(valid_input())).unwrap();

        assert_eq!(request.name, "Jane Doe");
        assert_eq!(request.email, "jane@example.com");
        assert_eq!(request.password, "secret1");
        assert_eq!(
            request.techs,
            vec![
                TechEntry { title: "Rust".to_string(), knowledge: 80 },
                TechEntry { title: "TypeScript".to_string(), knowledge: 55 },
            ]
        );
    }

    #[test]
    fn test_too_few_techs_reports_collection_error() {
        let mut input = valid_input();
        input["techs"] = json!([{ "title": "Rust", "knowledge": 80 }]);

        let errors = validate_user_creation(&raw(input)).unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.message("techs").as_deref(), Some("at least 2 technologies required"));
    }

    #[test]
    fn test_too_few_techs_still_reports_entry_errors() {
        let mut input = valid_input();
        input["techs"] = json!([{ "title": "", "knowledge": 0 }]);

        let errors = validate_user_creation(&raw(input)).unwrap_err();

        assert_eq!(
            errors.paths().collect::<Vec<_>>(),
            vec!["techs", "techs[0].title", "techs[0].knowledge"]
        );
    }

    #[test]
    fn test_entry_errors_follow_form_order() {
        let mut input = valid_input();
        let mut techs: Vec<Value> = (0..11)
            .map(|i| json!({ "title": format!("Tech {}", i), "knowledge": 50 }))
            .collect();
        techs[2]["title"] = json!("");
        techs[10]["title"] = json!("");
        input["techs"] = Value::Array(techs);

        let errors = validate_user_creation(&raw(input)).unwrap_err();

        assert_eq!(errors.paths().collect::<Vec<_>>(), vec!["techs[2].title", "techs[10].title"]);
        assert_eq!(
            errors.to_string(),
            "techs[2].title: title is required; techs[10].title: title is required"
        );
    }

    #[test]
    fn test_missing_techs_counts_as_empty() {
        let mut input = valid_input();
        input.as_object_mut().unwrap().remove("techs");

        let errors = validate_user_creation(&raw(input)).unwrap_err();

        assert_eq!(errors.get("techs").map(|e| e.code.as_ref()), Some("length"));
    }

    #[test]
    fn test_knowledge_out_of_range_flags_only_that_entry() {
        for bad in [json!(0), json!(101), json!("0"), json!("101")] {
            let mut input = valid_input();
            input["techs"][1]["knowledge"] = bad;

            let errors = validate_user_creation(&raw(input)).unwrap_err();

            assert_eq!(errors.paths().collect::<Vec<_>>(), vec!["techs[1].knowledge"]);
            assert_eq!(errors.get("techs[1].knowledge").map(|e| e.code.as_ref()), Some("range"));
        }
    }

    #[test]
    fn test_knowledge_not_a_number_is_distinct_from_range() {
        let mut input = valid_input();
        input["techs"][0]["knowledge"] = json!("lots");

        let errors = validate_user_creation(&raw(input)).unwrap_err();

        assert_eq!(
            errors.get("techs[0].knowledge").map(|e| e.code.as_ref()),
            Some("not_a_number")
        );
    }

    #[test]
    fn test_invalid_email_flags_only_email() {
        let mut input = valid_input();
        input["email"] = json!("not-an-email");

        let errors = validate_user_creation(&raw(input)).unwrap_err();

        assert_eq!(errors.paths().collect::<Vec<_>>(), vec!["email"]);
        assert_eq!(errors.message("email").as_deref(), Some("invalid email format"));
    }

    #[test]
    fn test_all_errors_are_collected() {
        let errors = validate_user_creation(&raw(json!({}))).unwrap_err();

        assert_eq!(errors.paths().collect::<Vec<_>>(), vec!["name", "email", "password", "techs"]);
        assert_eq!(errors.message("name").as_deref(), Some("name is required"));
        assert_eq!(errors.message("email").as_deref(), Some("email is required"));
    }

    #[test]
    fn test_wrong_shapes_are_reported_as_invalid_type() {
        let mut input = valid_input();
        input["techs"] = json!("Rust, SQL");
        let errors = validate_user_creation(&raw(input)).unwrap_err();
        assert_eq!(errors.message("techs").as_deref(), Some("techs must be a list"));

        let mut input = valid_input();
        input["techs"][0] = json!("Rust");
        let errors = validate_user_creation(&raw(input)).unwrap_err();
        assert_eq!(errors.get("techs[0]").map(|e| e.code.as_ref()), Some("invalid_type"));
    }

    #[test]
    fn test_revalidating_output_is_idempotent() {
        let first = validate_user_creation(&raw(valid_input())).unwrap();
        let second = validate_user_creation(&RawUserCreationRequest::from(&first)).unwrap();

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
