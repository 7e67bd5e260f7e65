//! 기술적 지표 모듈.
//!
//! # 지원 지표
//!
//! - **SMA**: 단순 이동평균 (MA20, MA60)
//! - **기간 수익률**: 최근 N거래일 수익률
//! - **실현 변동성**: 일간 수익률의 표본 표준편차
//!
//! 데이터가 부족한 구간은 에러가 아니라 `None`으로 표현합니다.
//! 에러는 파라미터가 잘못되었거나 입력 가격이 유효하지 않을 때만 발생합니다.
//!
//! # 사용 예시
//!
//! ```ignore
//! use stockview_analytics::indicators::{IndicatorEngine, SmaParams};
//!
//! let engine = IndicatorEngine::new();
//! let ma20 = engine.sma(series.closes(), SmaParams::MA20)?;
//! let vol = engine.realized_volatility(series.closes());
//! ```

pub mod returns;
pub mod trend;
pub mod volatility;

use rust_decimal::Decimal;
use stockview_core::ViewerError;
use thiserror::Error;

pub use returns::ReturnIndicators;
pub use trend::{SmaParams, TrendIndicators};
pub use volatility::VolatilityIndicators;

/// 가격과 1:1로 정렬된 지표 값. 계산할 수 없는 위치는 `None`.
pub type IndicatorSeries = Vec<Option<Decimal>>;

/// 지표 계산 오류.
#[derive(Debug, Error)]
pub enum IndicatorError {
    /// 빈 입력
    #[error("가격 데이터가 비어 있습니다")]
    EmptyInput,

    /// 0 이하의 가격
    #[error("{index}번째 가격이 0 이하입니다: {value}")]
    NonPositivePrice { index: usize, value: Decimal },

    /// 잘못된 파라미터
    #[error("잘못된 파라미터: {0}")]
    InvalidParameter(String),

    /// Decimal 표현 범위 초과
    #[error("{0} 계산 중 값이 표현 범위를 넘었습니다")]
    Overflow(&'static str),
}

/// 지표 계산 결과 타입.
pub type IndicatorResult<T> = Result<T, IndicatorError>;

impl From<IndicatorError> for ViewerError {
    fn from(err: IndicatorError) -> Self {
        match err {
            IndicatorError::EmptyInput => ViewerError::EmptySeries,
            IndicatorError::NonPositivePrice { index, value } => {
                ViewerError::InvalidPrice { index, value }
            }
            IndicatorError::InvalidParameter(msg) => ViewerError::Config(msg),
            IndicatorError::Overflow(context) => ViewerError::Overflow {
                context: context.to_string(),
            },
        }
    }
}

/// 입력 가격이 비어 있지 않고 모두 양수인지 확인합니다.
pub(crate) fn ensure_positive(prices: &[Decimal]) -> IndicatorResult<()> {
    if prices.is_empty() {
        return Err(IndicatorError::EmptyInput);
    }
    if let Some((index, value)) = prices
        .iter()
        .enumerate()
        .find(|(_, p)| **p <= Decimal::ZERO)
    {
        return Err(IndicatorError::NonPositivePrice {
            index,
            value: *value,
        });
    }
    Ok(())
}

/// 통합 지표 엔진.
#[derive(Debug, Default)]
pub struct IndicatorEngine {
    trend: TrendIndicators,
    returns: ReturnIndicators,
    volatility: VolatilityIndicators,
}

impl IndicatorEngine {
    /// 새로운 지표 엔진 생성.
    pub fn new() -> Self {
        Self::default()
    }

    /// 단순 이동평균 (SMA).
    ///
    /// # 반환
    /// 가격과 같은 길이. 처음 period-1개는 None, 데이터가 period보다 짧으면 전부 None.
    pub fn sma(&self, prices: &[Decimal], params: SmaParams) -> IndicatorResult<IndicatorSeries> {
        self.trend.sma(prices, params)
    }

    /// 최근 `lookback` 거래일 수익률 (%).
    pub fn period_return(&self, prices: &[Decimal], lookback: usize) -> Option<Decimal> {
        self.returns.period_return(prices, lookback)
    }

    /// 일간 수익률 (첫 위치는 제외되어 길이 N-1).
    pub fn daily_returns(&self, prices: &[Decimal]) -> Vec<Decimal> {
        self.returns.daily_returns(prices)
    }

    /// 실현 변동성 (%). 일간 수익률이 2개 미만이면 None.
    pub fn realized_volatility(&self, prices: &[Decimal]) -> Option<Decimal> {
        self.volatility.realized(prices)
    }
}
