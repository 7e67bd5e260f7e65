//! # Stockview Core
//!
//! 주가 분석 시스템 전반에서 사용하는 기본 타입을 제공합니다:
//! - 종목코드 검증 및 정규화
//! - 일봉 시계열 (검증된 OHLCV)
//! - 상장사/뉴스 헤드라인 타입
//! - 에러 타입
//! - 설정 관리
//! - 로깅 인프라

pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod types;

pub use config::*;
pub use domain::*;
pub use error::*;
pub use logging::*;
pub use types::*;
