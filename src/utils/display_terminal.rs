//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 시작 과정(레지스트리 초기화, 바인딩 주소)을 보기 좋게 출력합니다.
//! 로그 레벨과 무관하게 항상 표시되어야 하는 시작 배너에만 사용합니다.

const BOX_WIDTH: usize = 50;

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║         🔄 INITIALIZING SERVICE REGISTRY         ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    let border = "═".repeat(BOX_WIDTH);

    println!("╔{}╗", border);
    println!("║{:^width$}║", title, width = BOX_WIDTH - 1);
    println!("╚{}╝", border);
}

/// 진행 단계 시작 표시 (`→ Step 1: ...`)
pub fn print_step_start(step: u8, description: &str) {
    println!("\n→ Step {}: {}", step, description);
}

/// 진행 단계 완료 표시
pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✓ Step {} complete: {} ({})", step, description, count);
}

/// 단계 내 개별 작업 상태
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {:<28} {}", name, status);
}

/// 레지스트리 초기화 요약
pub fn print_final_summary(repos: usize, services: usize) {
    let border = "─".repeat(BOX_WIDTH);

    println!("\n{}", border);
    println!(
        "✅ Registry ready: {} repositories, {} services",
        repos, services
    );
    println!("{}\n", border);
}

/// 이름 조회 캐시 구성 완료 표시
pub fn print_cache_initialized(kind: &str, count: usize) {
    println!("   ├─ {} lookup table: {} entries", kind, count);
}

/// 서버 바인딩 주소와 주요 엔드포인트를 출력합니다.
pub fn print_server_ready(host: &str, port: u16, routes: &[(&str, &str)]) {
    print_boxed_title("🚀 DEVCONNECTOR API READY");
    println!("   Listening on http://{}:{}", host, port);
    for (method, path) in routes {
        println!("   ├─ {:<7} {}", method, path);
    }
    println!();
}
