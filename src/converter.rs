//! CSV → JSON 변환 모듈
//!
//! 읽기와 쓰기를 하나의 파이프라인으로 묶습니다. 입력 전체를 메모리에
//! 읽은 뒤에야 출력 파일을 만듭니다.

use std::path::Path;
use std::time::Instant;

use crate::error::Result;
use crate::reader::read_document;
use crate::stats::ConvertSummary;
use crate::writer::write_document;

/// 변환 옵션
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// 들여쓰기 칸 수
    pub indent: usize,
    /// 대용량 파일 임계값 (이상이면 메모리 매핑 사용)
    pub mmap_threshold: u64,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            indent: 4,
            mmap_threshold: 10 * 1024 * 1024, // 10MB
        }
    }
}

impl ConvertOptions {
    /// 기본 옵션 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 들여쓰기 설정
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// 메모리 매핑 임계값 설정
    pub fn with_mmap_threshold(mut self, threshold: u64) -> Self {
        self.mmap_threshold = threshold;
        self
    }
}

/// CSV 파일을 기본 옵션으로 JSON 파일로 변환
///
/// # Arguments
/// * `csv_path` - 입력 CSV 파일 경로
/// * `json_path` - 생성(또는 덮어쓸) JSON 파일 경로
pub fn convert(csv_path: impl AsRef<Path>, json_path: impl AsRef<Path>) -> Result<()> {
    convert_with(csv_path, json_path, &ConvertOptions::new()).map(|_| ())
}

/// 옵션을 지정하여 변환하고 결과 요약을 반환
pub fn convert_with(
    csv_path: impl AsRef<Path>,
    json_path: impl AsRef<Path>,
    options: &ConvertOptions,
) -> Result<ConvertSummary> {
    let csv_path = csv_path.as_ref();
    let json_path = json_path.as_ref();
    let start = Instant::now();

    let bytes_read = std::fs::metadata(csv_path).map(|m| m.len()).unwrap_or(0);
    let document = read_document(csv_path, options)?;
    let bytes_written = write_document(&document, json_path, options.indent)?;

    Ok(ConvertSummary {
        rows: document.len(),
        columns: document.headers.len(),
        bytes_read,
        bytes_written,
        elapsed: start.elapsed(),
    })
}
