//! 통계 및 유틸리티 모듈
//!
//! 변환 결과 요약 및 포맷팅을 담당합니다.

use colored::Colorize;
use std::time::Duration;

/// 한 번의 변환 결과 요약
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConvertSummary {
    /// 변환된 데이터 행 수
    pub rows: usize,
    /// 헤더 컬럼 수
    pub columns: usize,
    /// 입력 파일 크기
    pub bytes_read: u64,
    /// 출력 파일 크기
    pub bytes_written: u64,
    /// 처리 시간
    pub elapsed: Duration,
}

impl ConvertSummary {
    /// 변환 통계 요약 출력
    pub fn print_summary(&self) {
        println!("\n{}", "═".repeat(50).bright_blue());
        println!("{}", " 📊 변환 통계".bright_white().bold());
        println!("{}", "═".repeat(50).bright_blue());

        println!(
            "  {} 행 수:        {}",
            "📋".bright_cyan(),
            self.rows.to_string().green()
        );
        println!("  {} 컬럼 수:      {}", "🧱".bright_cyan(), self.columns);
        println!(
            "  {} 입력 용량:    {}",
            "📥".bright_yellow(),
            format_bytes(self.bytes_read)
        );
        println!(
            "  {} 출력 용량:    {}",
            "📤".bright_magenta(),
            format_bytes(self.bytes_written)
        );
        println!(
            "  {} 처리 시간:    {}",
            "⏱️".bright_cyan(),
            format_duration(self.elapsed)
        );

        println!("{}", "═".repeat(50).bright_blue());
    }
}

/// 바이트 수를 1024 단위로 표시 (예: "1.25 MB")
///
/// ```
/// use csv2json::stats::format_bytes;
///
/// assert_eq!(format_bytes(900), "900 B");
/// assert_eq!(format_bytes(2048), "2.00 KB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 3] = ["KB", "MB", "GB"];

    if bytes < 1024 {
        return format!("{} B", bytes);
    }

    let mut size = bytes as f64 / 1024.0;
    let mut unit = 0;
    while size >= 1024.0 && unit + 1 < UNITS.len() {
        size /= 1024.0;
        unit += 1;
    }
    format!("{:.2} {}", size, UNITS[unit])
}

/// 경과 시간을 읽기 쉬운 형식으로 변환
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    let millis = duration.subsec_millis();

    if secs >= 60 {
        format!("{}분 {}초", secs / 60, secs % 60)
    } else if secs > 0 {
        format!("{}.{:03}초", secs, millis)
    } else {
        format!("{}ms", millis)
    }
}
