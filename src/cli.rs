//! CLI 인자 파싱 모듈
//!
//! clap을 사용한 명령줄 인자 정의 및 파싱을 담당합니다.

use clap::{CommandFactory, Parser};
use std::path::PathBuf;

/// csv2json CLI 인자 구조체
#[derive(Parser, Debug)]
#[command(
    name = "csv2json",
    author = "YourName <your@email.com>",
    about = "CSV TO JSON CONVERTER - CSV 파일을 JSON 객체 배열로 변환합니다",
    long_about = r#"
CSV TO JSON CONVERTER
=====================

CSV 파일의 첫 줄을 헤더로 사용하여 각 행을
헤더 이름을 키로 하는 JSON 객체로 변환하고,
전체를 하나의 JSON 배열로 저장합니다.

특징:
  • 헤더 순서 그대로 키 순서 유지
  • 모든 값은 문자열로 저장 (타입 변환 없음)
  • 4칸 들여쓰기, 비ASCII 문자 그대로 출력
  • 실패 시 기존 출력 파일 보존

예제:
  csv2json data.csv data.json
"#
)]
pub struct Args {
    /// 입력 CSV 파일 경로
    pub csv_file: PathBuf,

    /// 생성될 JSON 파일 경로 (있으면 덮어쓰기)
    pub json_file: PathBuf,
}

/// 한 줄짜리 사용법 문자열
pub fn usage() -> String {
    Args::command().render_usage().to_string()
}
