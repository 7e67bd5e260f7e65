//! 주가 분석 CLI.
//!
//! 이 crate는 다음 기능을 제공합니다:
//! - 종목 분석 (요약 카드, 최근 흐름, 차트 명세 JSON)
//! - 상장사 검색

pub mod commands;

pub use commands::analyze::{parse_date, render_table, run_analyze, AnalyzeConfig, OutputFormat};
pub use commands::search::run_search;
