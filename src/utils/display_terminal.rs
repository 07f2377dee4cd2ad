//! 터미널 출력 포맷팅
//!
//! 서버 시작 시 서비스 초기화 과정과 라우트 목록을 보기 좋게 출력합니다.

/// 고정 너비 박스 제목을 출력합니다
pub fn print_boxed_title(title: &str) {
    let content_width = 50;
    let border = "═".repeat(content_width);

    println!("╔{}╗", border);
    println!("║{:^49}║", title);
    println!("╚{}╝", border);
}

pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✓ Step {}: {} ({} items)", step, description, count);
}

pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 등록된 라우트를 한 줄씩 출력합니다
pub fn print_route(method: &str, path: &str) {
    println!("   │  {:<7} {}", method, path);
}

pub fn print_final_summary(services: usize, routes: usize) {
    println!();
    print_boxed_title("🎉 USER FORM SERVICE READY");
    println!("   🔧 Services: {}", services);
    println!("   🛣️  Routes: {}", routes);
    println!();
}
