//! 사용자 생성 응답 DTO
//!
//! 검증에 성공한 정규화 레코드와, 데모 화면처럼 들여쓰기된 JSON 출력을 함께 돌려줍니다.

use serde::{Deserialize, Serialize};
use crate::domain::models::users::UserCreationRequest;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserResponse {
    /// 정규화된 사용자 생성 요청
    pub user: UserCreationRequest,
    /// `user`를 2칸 들여쓰기 JSON으로 렌더링한 표시용 문자열
    pub output: String,
    pub message: String,
}

/// 표시용 출력 렌더링 (2칸 들여쓰기 JSON)
pub fn render_output(request: &UserCreationRequest) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(request)
}
