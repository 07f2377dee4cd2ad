//! 문자열 정규화 유틸리티
//!
//! 폼 입력값을 정규 형태로 변환하는 함수들을 제공합니다.
//! 검증 규칙([`crate::validation::rules`])과 정규화된 모델의
//! 불변식 검사에서 동일한 함수를 공유하여 결과가 항상 일치하도록 합니다.
//!
//! # Examples
//!
//! ```rust
//! use user_form_service::utils::string_utils::capitalize_words;
//!
//! assert_eq!(capitalize_words("  jane doe  "), "Jane Doe");
//! assert_eq!(capitalize_words("maria  da   silva"), "Maria Da Silva");
//! ```

/// 단어의 첫 글자만 대문자로 바꿉니다
///
/// 나머지 글자는 그대로 유지합니다. `"mcDonald"` → `"McDonald"`.
/// 대문자 변환 결과가 여러 글자인 경우(`ß` → `SS`)도 그대로 이어붙입니다.
pub fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// 이름을 정규화합니다
///
/// 1. 앞뒤 공백 제거
/// 2. 내부 공백(탭, 연속 공백 포함) 기준으로 단어 분리
/// 3. 각 단어의 첫 글자 대문자화
/// 4. 단일 공백으로 다시 결합
///
/// 공백만 있는 입력은 빈 문자열이 됩니다.
pub fn capitalize_words(value: &str) -> String {
    value
        .split_whitespace()
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

/// 공백을 제외한 내용이 있는지 확인합니다
pub fn is_valid_string(value: &str) -> bool {
    !value.trim().is_empty()
}
