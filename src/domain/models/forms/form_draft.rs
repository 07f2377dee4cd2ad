//! # 폼 초안 (UI 계층의 폼 상태)
//!
//! 사용자가 입력 중인 폼 레코드 하나를 표현합니다. 값은 검증 전 원시 값
//! 그대로 보관하며, 제출(`handle_submit`) 시점에만 검증/정규화합니다.
//!
//! ## 제출 계약
//!
//! ```text
//! handle_submit(on_valid)
//!     │
//!     ├─ 성공 → on_valid(정규화 레코드)
//!     │          ├─ Ok  → errors 초기화 → Ok(Ok(R))
//!     │          └─ Err → errors 유지   → Ok(Err(E))
//!     └─ 실패 → errors 저장  → Err(FieldErrors), on_valid 호출 안 함
//! ```

use chrono::{DateTime, Utc};
use serde_json::Value;
use uuid::Uuid;
use crate::domain::dto::users::request::{RawTechEntry, RawUserCreationRequest};
use crate::domain::models::forms::field_array::{FieldArray, FieldId};
use crate::domain::models::forms::field_path::{FieldPath, FieldPathError};
use crate::domain::models::users::UserCreationRequest;
use crate::validation::{validate_user_creation, FieldErrors};

#[derive(Debug, Clone)]
pub struct FormDraft {
    id: Uuid,
    name: Value,
    email: Value,
    password: Value,
    techs: FieldArray<RawTechEntry>,
    errors: FieldErrors,
    output: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Default for FormDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl FormDraft {
    /// 빈 폼을 만듭니다. 모든 필드는 아직 입력되지 않은(`null`) 상태입니다.
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: Value::Null,
            email: Value::Null,
            password: Value::Null,
            techs: FieldArray::new(),
            errors: FieldErrors::new(),
            output: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &Value {
        &self.name
    }

    pub fn email(&self) -> &Value {
        &self.email
    }

    /// 비밀번호가 입력되었는지 여부 (값 자체는 노출하지 않음)
    pub fn has_password(&self) -> bool {
        match &self.password {
            Value::Null => false,
            Value::String(password) => !password.is_empty(),
            _ => true,
        }
    }

    pub fn techs(&self) -> &FieldArray<RawTechEntry> {
        &self.techs
    }

    /// 마지막 제출의 에러 (성공했거나 아직 제출 전이면 비어 있음)
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// 마지막 성공 제출의 표시용 출력
    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// 경로로 필드 값을 입력합니다
    ///
    /// 기술 항목은 현재 순서상의 인덱스로 주소를 지정합니다.
    pub fn set_field(&mut self, path: &FieldPath, value: Value) -> Result<(), FieldPathError> {
        match *path {
            FieldPath::Name => self.name = value,
            FieldPath::Email => self.email = value,
            FieldPath::Password => self.password = value,
            FieldPath::TechTitle(index) => self.tech_at(index)?.title = value,
            FieldPath::TechKnowledge(index) => self.tech_at(index)?.knowledge = value,
            FieldPath::Techs | FieldPath::Tech(_) => {
                return Err(FieldPathError::NotEditable(path.to_string()));
            }
        }
        self.touch();
        Ok(())
    }

    fn tech_at(&mut self, index: usize) -> Result<&mut RawTechEntry, FieldPathError> {
        let len = self.techs.len();
        self.techs
            .get_at_mut(index)
            .ok_or(FieldPathError::OutOfBounds { index, len })
    }

    /// 기본값 `{ title: "", knowledge: 0 }` 항목을 추가합니다
    pub fn append_tech(&mut self) -> FieldId {
        let id = self.techs.append(RawTechEntry::default());
        self.touch();
        id
    }

    /// 식별자로 기술 항목을 수정합니다. 없는 식별자면 `false`.
    pub fn update_tech(&mut self, id: FieldId, title: Option<Value>, knowledge: Option<Value>) -> bool {
        let Some(entry) = self.techs.get_mut(id) else {
            return false;
        };
        if let Some(title) = title {
            entry.title = title;
        }
        if let Some(knowledge) = knowledge {
            entry.knowledge = knowledge;
        }
        self.touch();
        true
    }

    /// 식별자로 기술 항목을 제거합니다. 없는 식별자면 `false`.
    pub fn remove_tech(&mut self, id: FieldId) -> bool {
        let removed = self.techs.remove(id).is_some();
        if removed {
            self.touch();
        }
        removed
    }

    /// 현재 폼 값을 검증 입력 레코드로 변환합니다
    pub fn to_raw(&self) -> RawUserCreationRequest {
        RawUserCreationRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            techs: Value::Array(self.techs.values().map(RawTechEntry::to_value).collect()),
        }
    }

    /// 제출: 검증 후 성공 시에만 `on_valid`를 호출합니다
    ///
    /// 이전 제출의 에러는 `on_valid`까지 성공해야 지워집니다.
    pub fn handle_submit<F, R, E>(&mut self, on_valid: F) -> Result<Result<R, E>, FieldErrors>
    where
        F: FnOnce(UserCreationRequest) -> Result<R, E>,
    {
        match validate_user_creation(&self.to_raw()) {
            Ok(request) => {
                let outcome = on_valid(request);
                if outcome.is_ok() {
                    self.errors = FieldErrors::new();
                }
                Ok(outcome)
            }
            Err(errors) => {
                self.errors = errors.clone();
                Err(errors)
            }
        }
    }

    /// 성공 제출의 출력을 기록합니다
    pub fn record_output(&mut self, output: String) {
        self.output = Some(output);
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn filled_draft() -> (FormDraft, FieldId, FieldId) {
        let mut draft = FormDraft::new();
        draft.set_field(&FieldPath::Name, json!("  jane doe ")).unwrap();
        draft.set_field(&FieldPath::Email, json!("jane@example.com")).unwrap();
        draft.set_field(&FieldPath::Password, json!("secret1")).unwrap();

        let first = draft.append_tech();
        let second = draft.append_tech();
        draft.set_field(&"techs.0.title".parse().unwrap(), json!("Rust")).unwrap();
        draft.set_field(&"techs.0.knowledge".parse().unwrap(), json!("80")).unwrap();
        draft.update_tech(second, Some(json!("SQL")), Some(json!("45")));

        (draft, first, second)
    }

    #[test]
    fn test_new_draft_is_empty() {
        let draft = FormDraft::new();

        assert_eq!(draft.name(), &Value::Null);
        assert!(!draft.has_password());
        assert!(draft.techs().is_empty());
        assert!(draft.errors().is_empty());
        assert_eq!(draft.output(), None);
    }

    #[test]
    fn test_append_uses_default_entry() {
        let mut draft = FormDraft::new();
        let id = draft.append_tech();

        assert_eq!(draft.techs().get(id), Some(&RawTechEntry::default()));
        assert_eq!(draft.to_raw().techs, json!([{ "title": "", "knowledge": 0 }]));
    }

    #[test]
    fn test_set_field_out_of_bounds() {
        let mut draft = FormDraft::new();
        draft.append_tech();

        let err = draft.set_field(&FieldPath::TechTitle(3), json!("Go")).unwrap_err();
        assert_eq!(err, FieldPathError::OutOfBounds { index: 3, len: 1 });

        let err = draft.set_field(&FieldPath::Techs, json!([])).unwrap_err();
        assert!(matches!(err, FieldPathError::NotEditable(_)));
    }

    #[test]
    fn test_submit_success_calls_callback_with_normalized_request() {
        let (mut draft, _, _) = filled_draft();

        let name = draft
            .handle_submit(|request| Ok::<_, ()>(request.name))
            .unwrap()
            .unwrap();

        assert_eq!(name, "Jane Doe");
        assert!(draft.errors().is_empty());
    }

    #[test]
    fn test_failed_callback_keeps_previous_errors() {
        let (mut draft, first, _) = filled_draft();
        draft.remove_tech(first);
        let previous = draft.handle_submit(|_| Ok::<_, ()>(())).unwrap_err();

        draft.append_tech();
        draft.set_field(&FieldPath::TechTitle(1), json!("Go")).unwrap();
        draft.set_field(&FieldPath::TechKnowledge(1), json!(10)).unwrap();
        let outcome = draft.handle_submit(|_| Err::<(), _>("downstream failure")).unwrap();

        assert_eq!(outcome, Err("downstream failure"));
        assert_eq!(draft.errors(), &previous);

        draft.handle_submit(|_| Ok::<_, ()>(())).unwrap().unwrap();
        assert!(draft.errors().is_empty());
    }

    #[test]
    fn test_submit_failure_keeps_errors_and_skips_callback() {
        let (mut draft, first, _) = filled_draft();
        draft.remove_tech(first);

        let mut called = false;
        let errors = draft
            .handle_submit(|_| {
                called = true;
                Ok::<_, ()>(())
            })
            .unwrap_err();

        assert!(!called);
        assert!(errors.contains("techs"));
        assert_eq!(draft.errors(), &errors);
    }

    #[test]
    fn test_remove_keeps_remaining_entry_identity_and_values() {
        let (mut draft, first, second) = filled_draft();
        let before = draft.techs().get(second).cloned();

        assert!(draft.remove_tech(first));
        assert!(!draft.remove_tech(first));

        assert_eq!(draft.techs().len(), 1);
        assert_eq!(draft.techs().ids(), &[second]);
        assert_eq!(draft.techs().get(second).cloned(), before);

        // 남은 항목은 이제 인덱스 0으로 주소 지정됨
        draft.set_field(&FieldPath::TechTitle(0), json!("PostgreSQL")).unwrap();
        assert_eq!(draft.techs().get(second).map(|t| t.title.clone()), Some(json!("PostgreSQL")));
    }

    #[test]
    fn test_update_unknown_tech_returns_false() {
        let mut draft = FormDraft::new();
        assert!(!draft.update_tech(FieldId::new(), Some(json!("Go")), None));
    }
}
