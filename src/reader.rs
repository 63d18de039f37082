//! CSV 읽기 모듈
//!
//! CSV 파일을 헤더 기준 `Row` 목록(`Document`)으로 읽어들입니다.

use csv::ReaderBuilder;
use memmap2::Mmap;
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::converter::ConvertOptions;
use crate::error::{Csv2JsonError, Result};

/// 헤더 이름 → 셀 값. 키 순서는 헤더 순서와 같습니다.
pub type Row = Map<String, Value>;

/// 헤더보다 필드가 많은 행에서 남는 값들을 담는 키
pub const OVERFLOW_KEY: &str = "null";

/// 하나의 입력 파일에서 읽은 전체 행
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    /// 첫 줄의 컬럼 이름
    pub headers: Vec<String>,
    /// 원본 순서대로의 데이터 행 (헤더 제외)
    pub rows: Vec<Row>,
}

impl Document {
    /// 데이터 행 수
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// CSV 파일을 `Document`로 읽기
///
/// # Arguments
/// * `path` - 입력 CSV 파일 경로
/// * `options` - 변환 옵션 (메모리 매핑 임계값 사용)
///
/// # Returns
/// 헤더와 모든 데이터 행을 담은 `Document`
pub fn read_document(path: &Path, options: &ConvertOptions) -> Result<Document> {
    if !path.exists() {
        return Err(Csv2JsonError::InputNotFound {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path).map_err(|e| Csv2JsonError::FileOpenError {
        file: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let file_size = file.metadata().map(|m| m.len()).unwrap_or(0);

    if file_size > 0 && file_size >= options.mmap_threshold {
        // 대용량 파일: 메모리 매핑 사용
        let mmap = unsafe {
            Mmap::map(&file).map_err(|e| Csv2JsonError::FileOpenError {
                file: path.to_path_buf(),
                reason: format!("메모리 매핑 실패: {}", e),
            })?
        };
        parse_rows(&mmap[..], path)
    } else {
        parse_rows(BufReader::new(file), path)
    }
}

/// CSV 레코드를 헤더 기준으로 묶어 `Document` 생성
fn parse_rows<R: Read>(source: R, path: &Path) -> Result<Document> {
    // 필드 수가 다른 행도 허용
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(source);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| parse_error(path, e))?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| parse_error(path, e))?;

        let mut row = Map::with_capacity(headers.len());
        for (i, name) in headers.iter().enumerate() {
            // 짧은 행의 빈 칸은 null
            let value = record
                .get(i)
                .map(|v| Value::String(v.to_string()))
                .unwrap_or(Value::Null);
            // 중복 헤더: 첫 위치를 유지하고 마지막 값으로 덮어씀
            row.insert(name.clone(), value);
        }

        if record.len() > headers.len() {
            let extra = record
                .iter()
                .skip(headers.len())
                .map(|v| Value::String(v.to_string()))
                .collect();
            row.insert(OVERFLOW_KEY.to_string(), Value::Array(extra));
        }
        rows.push(row);
    }

    Ok(Document { headers, rows })
}

fn parse_error(path: &Path, e: csv::Error) -> Csv2JsonError {
    Csv2JsonError::ParseError {
        file: path.to_path_buf(),
        reason: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(text: &str) -> Result<Document> {
        parse_rows(text.as_bytes(), Path::new("inline.csv"))
    }

    #[test]
    fn test_header_and_rows() {
        let doc = parse("name,city\nKim,Seoul\nLee,Busan\n").unwrap();

        assert_eq!(doc.headers, vec!["name", "city"]);
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.rows[0].get("name"), Some(&json!("Kim")));
        assert_eq!(doc.rows[1].get("city"), Some(&json!("Busan")));
    }

    #[test]
    fn test_values_stay_strings() {
        let doc = parse("id,active,score\n1,true,3.5\n").unwrap();

        assert_eq!(doc.rows[0].get("id"), Some(&json!("1")));
        assert_eq!(doc.rows[0].get("active"), Some(&json!("true")));
        assert_eq!(doc.rows[0].get("score"), Some(&json!("3.5")));
    }

    #[test]
    fn test_key_order_follows_header() {
        let doc = parse("z,a,m\n1,2,3\n4,5,6\n").unwrap();

        for row in &doc.rows {
            let keys: Vec<&str> = row.keys().map(String::as_str).collect();
            assert_eq!(keys, vec!["z", "a", "m"]);
        }
    }

    #[test]
    fn test_header_only() {
        let doc = parse("a,b\n").unwrap();
        assert_eq!(doc.headers, vec!["a", "b"]);
        assert!(doc.is_empty());
    }

    #[test]
    fn test_empty_input() {
        let doc = parse("").unwrap();
        assert!(doc.headers.is_empty());
        assert!(doc.is_empty());
    }

    #[test]
    fn test_quoted_fields() {
        let doc = parse("title,note\n\"Hello, World\",\"line1\nline2\"\n").unwrap();

        assert_eq!(doc.len(), 1);
        assert_eq!(doc.rows[0].get("title"), Some(&json!("Hello, World")));
        assert_eq!(doc.rows[0].get("note"), Some(&json!("line1\nline2")));
    }

    #[test]
    fn test_duplicate_header_keeps_first_position() {
        let doc = parse("a,b,a\n1,2,3\n").unwrap();
        let row = &doc.rows[0];

        let keys: Vec<&str> = row.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(row.get("a"), Some(&json!("3")));
    }

    #[test]
    fn test_short_row_fills_null() {
        let doc = parse("a,b,c\n1,2,3\n4,5\n").unwrap();

        assert_eq!(doc.len(), 2);
        assert_eq!(
            Value::Object(doc.rows[1].clone()),
            json!({"a": "4", "b": "5", "c": null})
        );
        let keys: Vec<&str> = doc.rows[1].keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_long_row_keeps_extra_fields() {
        let doc = parse("a,b\n1,2,3,4\n").unwrap();

        assert_eq!(
            Value::Object(doc.rows[0].clone()),
            json!({"a": "1", "b": "2", "null": ["3", "4"]})
        );
    }

    #[test]
    fn test_short_row_with_duplicate_header() {
        let doc = parse("a,b,a\n1,2\n").unwrap();
        assert_eq!(doc.rows[0].get("a"), Some(&Value::Null));
    }

    #[test]
    fn test_invalid_utf8_is_parse_error() {
        let bytes: &[u8] = b"a\n\xff\xfe\n";
        let result = parse_rows(bytes, Path::new("bad.csv"));
        assert!(matches!(result, Err(Csv2JsonError::ParseError { .. })));
    }
}
