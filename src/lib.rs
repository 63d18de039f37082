//! csv2json - CSV TO JSON CONVERTER
//!
//! CSV 파일의 첫 줄을 헤더로 삼아 각 행을 객체로 만들고,
//! 전체를 하나의 JSON 배열 파일로 저장하는 CLI 도구입니다.
//!
//! # 주요 기능
//!
//! - 🧭 **순서 유지**: 객체의 키 순서는 헤더 컬럼 순서와 같음
//! - 🔤 **문자열 값**: 숫자/불리언 추론 없이 모든 값을 문자열로 저장
//! - 🌏 **UTF-8 그대로**: 비ASCII 문자를 이스케이프하지 않고 출력
//! - 💾 **안전한 저장**: 임시 파일에 쓴 뒤 교체하여 실패 시 기존 파일 보존
//! - 📊 **변환 통계**: 행/컬럼 수, 입출력 용량, 처리 시간 표시
//!
//! # 예제
//!
//! ```bash
//! csv2json data.csv data.json
//! ```

pub mod cli;
pub mod converter;
pub mod error;
pub mod reader;
pub mod stats;
pub mod writer;

// Re-exports for convenient access
pub use cli::Args;
pub use converter::{convert, convert_with, ConvertOptions};
pub use error::{Csv2JsonError, Result};
pub use reader::{read_document, Document, Row};
pub use stats::{format_bytes, ConvertSummary};
pub use writer::{to_json_bytes, write_document};
