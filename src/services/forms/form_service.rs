//! # 폼 초안 서비스
//!
//! UI 계층이 소유하던 "현재 폼 레코드"를 서버 메모리에 보관하고,
//! 사용자 입력 이벤트(필드 입력, 항목 추가/삭제, 제출)를 하나씩 적용합니다.
//!
//! ## 동시성
//!
//! 초안 저장소는 `RwLock<HashMap<Uuid, FormDraft>>` 하나입니다. 각 작업은
//! 락을 잡은 채 끝까지 실행되므로 한 초안에 대한 제출이 겹치지 않습니다.
//!
//! ## 보관 기간
//!
//! 초안은 영속화되지 않습니다. `delete_draft`로 지우거나, 마지막 수정 후
//! `FORM_DRAFT_TTL_MINUTES`가 지나면 다음 `create_draft` 때 정리됩니다.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use chrono::Utc;
use log::{debug, info, warn};
use serde_json::Value;
use singleton_macro::service;
use uuid::Uuid;
use crate::config::FormLimits;
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::users::request::UpdateTechRequest;
use crate::domain::dto::users::response::{AppendTechResponse, CreateUserResponse, FormDraftResponse};
use crate::domain::models::forms::{FieldId, FieldPath, FormDraft};
use crate::services::users::UserService;

/// 폼 초안 저장소와 편집 작업
///
/// 싱글톤 인스턴스는 생성 시점에 `FormConfig`에서 한도를 읽습니다.
#[service(name = "form")]
pub struct FormService {
    drafts: RwLock<HashMap<Uuid, FormDraft>>,
    limits: FormLimits,
}

impl FormService {
    pub fn with_limits(limits: FormLimits) -> Self {
        Self {
            drafts: RwLock::new(HashMap::new()),
            limits,
        }
    }

    pub fn limits(&self) -> FormLimits {
        self.limits
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, HashMap<Uuid, FormDraft>>> {
        self.drafts
            .read()
            .map_err(|_| AppError::InternalError("폼 초안 저장소 락이 오염되었습니다".to_string()))
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, HashMap<Uuid, FormDraft>>> {
        self.drafts
            .write()
            .map_err(|_| AppError::InternalError("폼 초안 저장소 락이 오염되었습니다".to_string()))
    }

    /// 초안 하나를 잠그고 작업을 적용합니다
    fn with_draft<R>(
        &self,
        form_id: Uuid,
        f: impl FnOnce(&mut FormDraft) -> AppResult<R>,
    ) -> AppResult<R> {
        let mut drafts = self.write()?;
        let draft = drafts
            .get_mut(&form_id)
            .ok_or_else(|| AppError::NotFound(format!("Form draft {} not found", form_id)))?;
        f(draft)
    }

    pub fn draft_count(&self) -> AppResult<usize> {
        Ok(self.read()?.len())
    }

    /// 빈 초안을 만듭니다
    ///
    /// 보관 기간이 지난 초안을 먼저 정리하고, 그래도 저장 한도에 도달해 있으면
    /// `ConflictError`.
    pub fn create_draft(&self) -> AppResult<FormDraftResponse> {
        let mut drafts = self.write()?;
        let evicted = evict_expired(&mut drafts, self.limits);
        if evicted > 0 {
            info!("🧹 만료된 폼 초안 {}개 정리", evicted);
        }

        if drafts.len() >= self.limits.max_drafts {
            warn!("폼 초안 한도 도달: {}", self.limits.max_drafts);
            return Err(AppError::ConflictError(format!(
                "Form draft limit of {} reached",
                self.limits.max_drafts
            )));
        }

        let draft = FormDraft::new();
        let response = FormDraftResponse::from(&draft);
        info!("📝 폼 초안 생성: {}", draft.id());
        drafts.insert(draft.id(), draft);
        Ok(response)
    }

    pub fn get_draft(&self, form_id: Uuid) -> AppResult<FormDraftResponse> {
        let drafts = self.read()?;
        drafts
            .get(&form_id)
            .map(FormDraftResponse::from)
            .ok_or_else(|| AppError::NotFound(format!("Form draft {} not found", form_id)))
    }

    /// 경로(`techs.0.title` 등)로 필드 값을 입력합니다
    pub fn set_field(&self, form_id: Uuid, path: &str, value: Value) -> AppResult<FormDraftResponse> {
        let path: FieldPath = path.parse()?;
        self.with_draft(form_id, |draft| {
            draft.set_field(&path, value)?;
            debug!("폼 {} 필드 입력: {}", form_id, path);
            Ok(FormDraftResponse::from(&*draft))
        })
    }

    /// 기본값 항목을 추가하고 새 식별자를 돌려줍니다
    pub fn append_tech(&self, form_id: Uuid) -> AppResult<AppendTechResponse> {
        self.with_draft(form_id, |draft| {
            let field_id = draft.append_tech();
            debug!("폼 {} 기술 항목 추가: {}", form_id, field_id);
            Ok(AppendTechResponse {
                field_id,
                form: FormDraftResponse::from(&*draft),
            })
        })
    }

    pub fn update_tech(
        &self,
        form_id: Uuid,
        field_id: FieldId,
        update: UpdateTechRequest,
    ) -> AppResult<FormDraftResponse> {
        self.with_draft(form_id, |draft| {
            if !draft.update_tech(field_id, update.title, update.knowledge) {
                return Err(tech_not_found(field_id));
            }
            Ok(FormDraftResponse::from(&*draft))
        })
    }

    pub fn remove_tech(&self, form_id: Uuid, field_id: FieldId) -> AppResult<FormDraftResponse> {
        self.with_draft(form_id, |draft| {
            if !draft.remove_tech(field_id) {
                return Err(tech_not_found(field_id));
            }
            debug!("폼 {} 기술 항목 제거: {}", form_id, field_id);
            Ok(FormDraftResponse::from(&*draft))
        })
    }

    /// 제출: 검증에 성공하면 사용자 생성 응답을 만들고 출력을 초안에 기록합니다
    ///
    /// 실패하면 에러를 초안에 남기고 `AppError::ValidationError`를 돌려줍니다.
    pub fn submit(&self, form_id: Uuid) -> AppResult<CreateUserResponse> {
        let user_service = UserService::instance();
        self.with_draft(form_id, |draft| {
            let response = draft.handle_submit(|request| user_service.complete(request))??;
            draft.record_output(response.output.clone());
            info!("✅ 폼 {} 제출 성공", form_id);
            Ok(response)
        })
    }

    pub fn delete_draft(&self, form_id: Uuid) -> AppResult<()> {
        let mut drafts = self.write()?;
        drafts
            .remove(&form_id)
            .map(|_| info!("🗑️ 폼 초안 삭제: {}", form_id))
            .ok_or_else(|| AppError::NotFound(format!("Form draft {} not found", form_id)))
    }
}

/// 마지막 수정 후 `draft_ttl`이 지난 초안을 지우고 지운 수를 돌려줍니다
fn evict_expired(drafts: &mut HashMap<Uuid, FormDraft>, limits: FormLimits) -> usize {
    let now = Utc::now();
    let before = drafts.len();
    drafts.retain(|_, draft| now - draft.updated_at() < limits.draft_ttl);
    before - drafts.len()
}

fn tech_not_found(field_id: FieldId) -> AppError {
    AppError::NotFound(format!("Technology entry {} not found", field_id))
}
