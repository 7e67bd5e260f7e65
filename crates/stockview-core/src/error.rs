//! 주가 분석 시스템의 에러 타입.
//!
//! 분석 호출을 중단시키는 에러는 두 종류입니다:
//! - **검증 에러**: 잘못된 종목코드, 잘못된 기간, 표시할 라인이 없음
//! - **데이터 에러**: 빈 시계열, 누락되었거나 0 이하인 종가, 정렬되지 않은 날짜
//!
//! 이동평균/기간 수익률/변동성의 데이터 부족은 에러가 아니라 `None`으로 표현됩니다.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// 에러 분류.
///
/// 호출자는 에러 메시지가 아닌 이 값으로 분기합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 입력 검증 실패 (fetch 이전에 발생)
    Validation,
    /// 가격 데이터 자체의 결함
    Data,
    /// 외부 데이터 소스 실패
    Upstream,
    /// 설정/직렬화 등 내부 문제
    Internal,
}

/// 핵심 에러.
#[derive(Debug, Error)]
pub enum ViewerError {
    /// 잘못된 종목코드
    #[error("잘못된 종목코드 '{code}': {reason}")]
    InvalidCode { code: String, reason: &'static str },

    /// 잘못된 조회 기간
    #[error("시작일({start})이 종료일({end})보다 늦습니다")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    /// 표시할 라인(Close/MA)이 하나도 없음
    #[error("Close/MA 중 최소 1개는 선택해야 차트를 그릴 수 있습니다")]
    EmptySelection,

    /// 빈 시계열
    #[error("해당 기간의 주가 데이터가 없습니다")]
    EmptySeries,

    /// 종가 누락
    #[error("{date}의 종가가 없습니다")]
    MissingClose { date: NaiveDate },

    /// 0 이하의 종가
    #[error("{date}의 종가가 0 이하입니다: {close}")]
    NonPositiveClose { date: NaiveDate, close: Decimal },

    /// 날짜가 엄격하게 증가하지 않음
    #[error("날짜가 오름차순이 아닙니다: {previous} 다음에 {current}")]
    UnsortedDates {
        previous: NaiveDate,
        current: NaiveDate,
    },

    /// 위치로만 식별되는 0 이하의 가격 (날짜 없는 종가 열)
    #[error("{index}번째 가격이 0 이하입니다: {value}")]
    InvalidPrice { index: usize, value: Decimal },

    /// 음수 거래량
    #[error("{date}의 거래량이 음수입니다: {volume}")]
    NegativeVolume { date: NaiveDate, volume: i64 },

    /// 가격이 너무 커서 계산 결과를 표현할 수 없음
    #[error("{context} 계산 중 값이 표현 범위를 넘었습니다")]
    Overflow { context: String },

    /// 시계열과 길이가 맞지 않는 보조 데이터
    #[error("{name}의 길이({actual})가 시계열 길이({expected})와 다릅니다")]
    LengthMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },

    /// 설정 에러
    #[error("설정 에러: {0}")]
    Config(String),

    /// 데이터 소스 에러
    #[error("데이터 소스 에러: {0}")]
    Source(String),

    /// 네트워크 에러
    #[error("네트워크 에러: {0}")]
    Network(String),

    /// 직렬화 에러
    #[error("직렬화 에러: {0}")]
    Serialization(String),

    /// 찾을 수 없음
    #[error("찾을 수 없음: {0}")]
    NotFound(String),
}

/// 분석 작업을 위한 Result 타입.
pub type ViewerResult<T> = Result<T, ViewerError>;

impl ViewerError {
    /// 에러 분류를 반환합니다.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ViewerError::InvalidCode { .. }
            | ViewerError::InvalidDateRange { .. }
            | ViewerError::EmptySelection => ErrorKind::Validation,
            ViewerError::EmptySeries
            | ViewerError::MissingClose { .. }
            | ViewerError::NonPositiveClose { .. }
            | ViewerError::UnsortedDates { .. }
            | ViewerError::InvalidPrice { .. }
            | ViewerError::NegativeVolume { .. }
            | ViewerError::Overflow { .. } => ErrorKind::Data,
            ViewerError::Source(_) | ViewerError::Network(_) | ViewerError::NotFound(_) => {
                ErrorKind::Upstream
            }
            ViewerError::Config(_)
            | ViewerError::Serialization(_)
            | ViewerError::LengthMismatch { .. } => ErrorKind::Internal,
        }
    }

    /// 재시도 가능한 에러인지 확인합니다.
    ///
    /// 분석 코어는 재시도하지 않으며, 외부 fetch 계층만 이 값을 참고합니다.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ViewerError::Network(_))
    }
}

impl From<serde_json::Error> for ViewerError {
    fn from(err: serde_json::Error) -> Self {
        ViewerError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for ViewerError {
    fn from(err: config::ConfigError) -> Self {
        ViewerError::Config(err.to_string())
    }
}
