//! 에러 타입 정의 모듈
//!
//! csv2json에서 발생할 수 있는 모든 에러 타입을 정의합니다.

use std::path::PathBuf;
use thiserror::Error;

/// csv2json에서 발생할 수 있는 에러 타입
#[derive(Error, Debug)]
pub enum Csv2JsonError {
    /// 입력 CSV 파일이 존재하지 않음
    #[error("입력 파일을 찾을 수 없습니다: {path}")]
    InputNotFound { path: PathBuf },

    /// 입력 파일 열기 실패
    #[error("파일을 열 수 없습니다 ({file}): {reason}")]
    FileOpenError { file: PathBuf, reason: String },

    /// CSV 파싱 실패
    #[error("CSV 파싱 실패 ({file}): {reason}")]
    ParseError { file: PathBuf, reason: String },

    /// JSON 직렬화 실패
    #[error("JSON 직렬화 실패: {reason}")]
    SerializeError { reason: String },

    /// 출력 파일 쓰기 실패
    #[error("파일 쓰기 실패 ({file}): {reason}")]
    WriteError { file: PathBuf, reason: String },
}

/// csv2json 결과 타입 별칭
pub type Result<T> = std::result::Result<T, Csv2JsonError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_error_mentions_path() {
        let error = Csv2JsonError::WriteError {
            file: PathBuf::from("out/result.json"),
            reason: "permission denied".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("out/result.json"));
        assert!(msg.contains("permission denied"));
    }
}
