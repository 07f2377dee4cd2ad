//! 폼 초안 응답 DTO

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;
use crate::domain::models::forms::{FieldId, FormDraft};
use crate::validation::FieldErrors;

/// 폼 초안 스냅샷
///
/// 비밀번호 값은 돌려주지 않고 입력 여부만 알려줍니다.
#[derive(Debug, Clone, Serialize)]
pub struct FormDraftResponse {
    pub id: Uuid,
    pub name: Value,
    pub email: Value,
    pub has_password: bool,
    pub techs: Vec<TechFieldResponse>,
    pub errors: FieldErrors,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 기술 항목 하나. `id`는 UI 목록의 key로 사용합니다.
#[derive(Debug, Clone, Serialize)]
pub struct TechFieldResponse {
    pub id: FieldId,
    pub title: Value,
    pub knowledge: Value,
}

#[derive(Debug, Clone, Serialize)]
pub struct AppendTechResponse {
    pub field_id: FieldId,
    pub form: FormDraftResponse,
}

impl From<&FormDraft> for FormDraftResponse {
    fn from(draft: &FormDraft) -> Self {
        Self {
            id: draft.id(),
            name: draft.name().clone(),
            email: draft.email().clone(),
            has_password: draft.has_password(),
            techs: draft
                .techs()
                .iter()
                .map(|(id, entry)| TechFieldResponse {
                    id,
                    title: entry.title.clone(),
                    knowledge: entry.knowledge.clone(),
                })
                .collect(),
            errors: draft.errors().clone(),
            output: draft.output().map(str::to_string),
            created_at: draft.created_at(),
            updated_at: draft.updated_at(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_snapshot_lists_techs_in_order_with_ids() {
        let mut draft = FormDraft::new();
        let first = draft.append_tech();
        let second = draft.append_tech();

        let response = FormDraftResponse::from(&draft);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(response.techs.iter().map(|t| t.id).collect::<Vec<_>>(), vec![first, second]);
        assert_eq!(json["techs"][0]["knowledge"], json!(0));
        assert_eq!(json["errors"], json!({}));
        assert!(json.get("output").is_none());
        assert!(json.get("password").is_none());
    }
}
