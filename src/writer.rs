//! JSON 쓰기 모듈
//!
//! `Document`를 들여쓰기된 JSON 배열로 직렬화하고 출력 파일에 저장합니다.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{Csv2JsonError, Result};
use crate::reader::Document;

/// `Document`를 JSON 바이트로 직렬화
///
/// 비ASCII 문자는 이스케이프하지 않으며, 마지막 줄바꿈은 붙이지 않습니다.
///
/// # Examples
/// ```
/// use csv2json::reader::Document;
/// use csv2json::writer::to_json_bytes;
///
/// let doc = Document::default();
/// assert_eq!(to_json_bytes(&doc, 4).unwrap(), b"[]");
/// ```
pub fn to_json_bytes(document: &Document, indent: usize) -> Result<Vec<u8>> {
    let indent = " ".repeat(indent);
    let mut buf = Vec::new();

    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    document
        .rows
        .serialize(&mut serializer)
        .map_err(|e| Csv2JsonError::SerializeError {
            reason: e.to_string(),
        })?;

    Ok(buf)
}

/// `Document`를 `path`에 저장하고 쓴 바이트 수를 반환
///
/// 같은 폴더의 임시 파일에 먼저 쓴 뒤 이름을 바꿔 교체합니다.
/// `path`가 심볼릭 링크면 링크가 가리키는 파일을 교체하고,
/// 기존 파일의 권한은 그대로 유지합니다.
/// 실패하면 임시 파일을 지우고 기존 파일은 그대로 둡니다.
pub fn write_document(document: &Document, path: &Path, indent: usize) -> Result<u64> {
    let bytes = to_json_bytes(document, indent)?;
    let target = resolve_target(path)?;
    let tmp_path = temp_path_for(&target)?;

    if let Err(e) = write_and_rename(&bytes, &tmp_path, &target) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e);
    }

    Ok(bytes.len() as u64)
}

/// 이미 있는 출력 경로는 링크를 따라간 실제 파일 경로로 변환
fn resolve_target(path: &Path) -> Result<PathBuf> {
    if !path.exists() {
        return Ok(path.to_path_buf());
    }

    fs::canonicalize(path).map_err(|e| Csv2JsonError::WriteError {
        file: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// 출력 파일 옆의 숨김 임시 파일 경로 (`.<name>.tmp`)
fn temp_path_for(path: &Path) -> Result<PathBuf> {
    let file_name = path.file_name().ok_or_else(|| Csv2JsonError::WriteError {
        file: path.to_path_buf(),
        reason: "출력 파일 이름이 올바르지 않습니다".to_string(),
    })?;

    let mut tmp_name = OsString::from(".");
    tmp_name.push(file_name);
    tmp_name.push(".tmp");

    Ok(path.with_file_name(tmp_name))
}

fn write_and_rename(bytes: &[u8], tmp_path: &Path, path: &Path) -> Result<()> {
    let write_error = |file: &Path, e: std::io::Error| Csv2JsonError::WriteError {
        file: file.to_path_buf(),
        reason: e.to_string(),
    };

    let file = File::create(tmp_path).map_err(|e| write_error(tmp_path, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(bytes)
        .map_err(|e| write_error(tmp_path, e))?;
    writer.flush().map_err(|e| write_error(tmp_path, e))?;
    drop(writer);

    // 덮어쓰기: 기존 파일 권한 유지
    if let Ok(metadata) = fs::metadata(path) {
        fs::set_permissions(tmp_path, metadata.permissions())
            .map_err(|e| write_error(tmp_path, e))?;
    }

    fs::rename(tmp_path, path).map_err(|e| write_error(path, e))
}
