//! 터미널 출력 포맷팅 유틸리티
//!
//! 애플리케이션 초기화 과정에서 어떤 저장소/발송 방식이 연결되었는지
//! 박스 형태의 제목과 항목 목록으로 보여줍니다.

pub fn print_boxed_title(title: &str) {
    // 고정 너비 50칸 사용 (박스 내부 콘텐츠)
    let content_width = 50;
    let border = "═".repeat(content_width);

    println!("╔{}╗", border);
    println!("║{:^49}║", title);
    println!("╚{}╝", border);
}

pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 구성 요소 이름과 선택된 구현을 한 번에 출력합니다.
pub fn print_wiring_summary(entries: &[(&str, String)]) {
    println!();
    print_boxed_title("🔌 APPLICATION CONTEXT WIRED");
    for (name, status) in entries {
        print_sub_task(name, status);
    }
    println!();
}
