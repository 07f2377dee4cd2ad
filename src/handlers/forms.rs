//! # Form Draft HTTP Handlers
//!
//! 브라우저 폼의 상호작용을 HTTP로 옮긴 엔드포인트들입니다.
//! 초안은 서버 메모리에 있고, 각 요청이 사용자 입력 이벤트 하나에 해당합니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/v1/forms` | 빈 초안 생성 | 201 |
//! | `GET` | `/api/v1/forms/{form_id}` | 초안 스냅샷 | 200 |
//! | `DELETE` | `/api/v1/forms/{form_id}` | 초안 삭제 | 204 |
//! | `PUT` | `/api/v1/forms/{form_id}/fields` | 경로로 필드 입력 | 200 |
//! | `POST` | `/api/v1/forms/{form_id}/techs` | 기술 항목 추가 | 201 |
//! | `PATCH` | `/api/v1/forms/{form_id}/techs/{field_id}` | 식별자로 항목 수정 | 200 |
//! | `DELETE` | `/api/v1/forms/{form_id}/techs/{field_id}` | 식별자로 항목 제거 | 200 |
//! | `POST` | `/api/v1/forms/{form_id}/submit` | 제출 | 200 / 400 |

use actix_web::{web, HttpResponse, delete, get, patch, post, put};
use uuid::Uuid;
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::users::request::{SetFieldRequest, UpdateTechRequest};
use crate::domain::models::forms::FieldId;
use crate::services::forms::FormService;

#[post("")]
pub async fn create_form() -> Result<HttpResponse, AppError> {
    let service = FormService::instance();
    let response = service.create_draft()?;

    Ok(HttpResponse::Created().json(response))
}

#[get("/{form_id}")]
pub async fn get_form(
    form_id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let service = FormService::instance();
    let response = service.get_draft(form_id.into_inner())?;

    Ok(HttpResponse::Ok().json(response))
}

#[delete("/{form_id}")]
pub async fn delete_form(
    form_id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let service = FormService::instance();
    service.delete_draft(form_id.into_inner())?;

    Ok(HttpResponse::NoContent().finish())
}

/// 경로(`name`, `techs.0.title`, `techs[1].knowledge` 등)로 값을 입력합니다
#[put("/{form_id}/fields")]
pub async fn set_field(
    form_id: web::Path<Uuid>,
    payload: web::Json<SetFieldRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let SetFieldRequest { path, value } = payload.into_inner();
    let service = FormService::instance();
    let response = service.set_field(form_id.into_inner(), &path, value)?;

    Ok(HttpResponse::Ok().json(response))
}

/// `{ title: "", knowledge: 0 }` 항목을 끝에 추가합니다
#[post("/{form_id}/techs")]
pub async fn append_tech(
    form_id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let service = FormService::instance();
    let response = service.append_tech(form_id.into_inner())?;

    Ok(HttpResponse::Created().json(response))
}

#[patch("/{form_id}/techs/{field_id}")]
pub async fn update_tech(
    path: web::Path<(Uuid, FieldId)>,
    payload: web::Json<UpdateTechRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let (form_id, field_id) = path.into_inner();
    let service = FormService::instance();
    let response = service.update_tech(form_id, field_id, payload.into_inner())?;

    Ok(HttpResponse::Ok().json(response))
}

/// 식별자로 항목을 제거합니다. 남은 항목의 식별자와 값은 그대로입니다.
#[delete("/{form_id}/techs/{field_id}")]
pub async fn remove_tech(
    path: web::Path<(Uuid, FieldId)>,
) -> Result<HttpResponse, AppError> {
    let (form_id, field_id) = path.into_inner();
    let service = FormService::instance();
    let response = service.remove_tech(form_id, field_id)?;

    Ok(HttpResponse::Ok().json(response))
}

#[post("/{form_id}/submit")]
pub async fn submit_form(
    form_id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let service = FormService::instance();
    let response = service.submit(form_id.into_inner())?;

    Ok(HttpResponse::Ok().json(response))
}
