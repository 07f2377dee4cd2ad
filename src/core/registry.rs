//! # 서비스 레지스트리
//!
//! `#[service]` 매크로(`singleton_macro`)가 생성하는 코드가 참조하는 타입들입니다.
//! 매크로는 각 서비스에 대해 다음을 만듭니다.
//!
//! - `instance()` - `OnceCell<Arc<Self>>` 기반 싱글톤 접근자
//! - `new()` - 필드를 `Default::default()`로 채우는 생성자 (비공개)
//! - `inventory::submit!`으로 [`ServiceRegistration`] 등록
//! - [`Service`] trait 구현
//!
//! ```rust,ignore
//! #[service(name = "user")]   // "user_service"로 등록
//! pub struct UserService {}
//!
//! let service = UserService::instance();
//! assert_eq!(service.name(), "user_service");
//! ```
//!
//! 서버 시작 시 [`initialize_all`]이 등록된 서비스를 모두 생성해 두므로
//! 첫 요청에서 설정을 읽거나 저장소를 만드는 비용이 들지 않습니다.

use std::any::Any;
use async_trait::async_trait;
use log::info;
use crate::utils::display_terminal::{print_step_complete, print_step_start, print_sub_task};

#[async_trait]
pub trait Service: Send + Sync {
    fn name(&self) -> &str;

    async fn init(&self) -> Result<(), Box<dyn std::error::Error>>;
}

/// `#[service]` 매크로가 등록하는 서비스 생성 정보
pub struct ServiceRegistration {
    pub name: &'static str,
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

inventory::collect!(ServiceRegistration);

/// 등록된 서비스 이름 목록 (등록 순서는 링크 순서를 따르므로 정렬해서 반환)
pub fn registered_services() -> Vec<&'static str> {
    let mut names: Vec<_> = inventory::iter::<ServiceRegistration>()
        .map(|registration| registration.name)
        .collect();
    names.sort_unstable();
    names
}

/// 등록된 모든 서비스의 싱글톤 인스턴스를 생성합니다
///
/// 생성한 서비스 수를 반환합니다.
pub fn initialize_all() -> usize {
    let registrations: Vec<_> = inventory::iter::<ServiceRegistration>().collect();
    let count = registrations.len();

    print_step_start(1, "Creating Service instances");
    for registration in registrations {
        print_sub_task(registration.name, "Creating...");
        let _instance = (registration.constructor)();
        print_sub_task(registration.name, "✓ Created");
    }
    print_step_complete(1, "Service instances created", count);

    info!("✅ 서비스 {}개 초기화 완료", count);
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_services_are_registered() {
        assert_eq!(registered_services(), vec!["form_service", "user_service"]);
    }

    #[test]
    fn test_initialize_all_creates_every_service() {
        assert_eq!(initialize_all(), 2);
    }
}
