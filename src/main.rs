//! csv2json - CSV TO JSON CONVERTER
//!
//! 메인 엔트리포인트

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::process;

use csv2json::{
    cli::{usage, Args},
    converter::{convert_with, ConvertOptions},
};

fn main() -> Result<()> {
    // 인자가 하나도 없으면 사용법만 출력
    if std::env::args_os().len() <= 1 {
        println!("{}", usage().trim_end());
        process::exit(1);
    }

    let args = Args::parse();

    let summary = convert_with(&args.csv_file, &args.json_file, &ConvertOptions::new())
        .with_context(|| format!("변환 실패: {:?} → {:?}", args.csv_file, args.json_file))?;

    summary.print_summary();
    println!("\n{} 저장 완료: {:?}\n", "✅".bright_green(), args.json_file);

    Ok(())
}
