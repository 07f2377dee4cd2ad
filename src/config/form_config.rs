//! 폼 초안 설정

use chrono::Duration;
use super::env_or;

pub struct FormConfig;

impl FormConfig {
    /// 메모리에 동시에 보관할 수 있는 폼 초안 수 (`FORM_MAX_DRAFTS`, 기본값 1000)
    pub fn max_drafts() -> usize {
        env_or("FORM_MAX_DRAFTS", 1000)
    }

    /// 마지막 수정 후 초안을 보관하는 시간 (`FORM_DRAFT_TTL_MINUTES`, 기본값 30분)
    pub fn draft_ttl() -> Duration {
        Duration::minutes(env_or("FORM_DRAFT_TTL_MINUTES", 30i64))
    }
}

/// 초안 저장소 한도
///
/// `Default`는 환경변수에서 읽은 값을 씁니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormLimits {
    pub max_drafts: usize,
    pub draft_ttl: Duration,
}

impl Default for FormLimits {
    fn default() -> Self {
        Self {
            max_drafts: FormConfig::max_drafts(),
            draft_ttl: FormConfig::draft_ttl(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        // 테스트 환경에는 FORM_* 변수가 없다
        let limits = FormLimits::default();
        assert_eq!(limits.max_drafts, 1000);
        assert_eq!(limits.draft_ttl, Duration::minutes(30));
    }
}
