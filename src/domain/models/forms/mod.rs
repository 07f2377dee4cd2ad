//! # 동적 폼 모델
//!
//! - [`field_array`] - 안정적인 식별자를 가진 항목 목록 (`FieldArray`, `FieldId`)
//! - [`field_path`] - 필드 경로 해석 (`FieldPath`)
//! - [`form_draft`] - 입력 중인 폼 상태와 제출 계약 (`FormDraft`)

pub mod field_array;
pub mod field_path;
pub mod form_draft;

pub use field_array::{FieldArray, FieldId};
pub use field_path::{FieldPath, FieldPathError};
pub use form_draft::FormDraft;
