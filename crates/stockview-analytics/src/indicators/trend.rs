//! 추세 지표 (Trend Indicators).
//!
//! 종가 기반 단순 이동평균(SMA)을 제공합니다.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::{IndicatorError, IndicatorResult, IndicatorSeries};

/// SMA 파라미터.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmaParams {
    /// 이동평균 기간.
    pub period: usize,
}

impl SmaParams {
    /// 20일 이동평균.
    pub const MA20: SmaParams = SmaParams { period: 20 };
    /// 60일 이동평균.
    pub const MA60: SmaParams = SmaParams { period: 60 };

    /// 차트 범례에 쓰는 이름 (`MA20`).
    pub fn label(&self) -> String {
        format!("MA{}", self.period)
    }
}

impl Default for SmaParams {
    fn default() -> Self {
        Self::MA20
    }
}

/// 추세 지표 계산기.
#[derive(Debug, Default)]
pub struct TrendIndicators;

impl TrendIndicators {
    /// 새로운 추세 지표 계산기 생성.
    pub fn new() -> Self {
        Self
    }

    /// 단순 이동평균 (SMA) 계산.
    ///
    /// SMA = (P1 + P2 + ... + Pn) / n
    ///
    /// 누적합을 한 번만 순회하며 갱신하므로 O(N)입니다.
    ///
    /// # 반환
    /// 가격과 같은 길이의 벡터. 인덱스 `period-1` 미만은 None이며,
    /// 가격이 `period`개보다 적으면 모든 값이 None입니다 (에러 아님).
    ///
    /// # Errors
    /// - `period`가 0이면 `InvalidParameter`
    /// - 구간 합이 Decimal 범위를 넘으면 `Overflow`
    pub fn sma(&self, prices: &[Decimal], params: SmaParams) -> IndicatorResult<IndicatorSeries> {
        let period = params.period;

        if period == 0 {
            return Err(IndicatorError::InvalidParameter(
                "기간은 0보다 커야 합니다".to_string(),
            ));
        }

        let mut result = Vec::with_capacity(prices.len());
        let period_decimal = Decimal::from(period);
        let mut window_sum = Decimal::ZERO;

        for (i, price) in prices.iter().enumerate() {
            window_sum = window_sum
                .checked_add(*price)
                .ok_or(IndicatorError::Overflow("이동평균"))?;
            if i >= period {
                window_sum = window_sum
                    .checked_sub(prices[i - period])
                    .ok_or(IndicatorError::Overflow("이동평균"))?;
            }

            if i + 1 < period {
                result.push(None);
            } else {
                result.push(Some(window_sum / period_decimal));
            }
        }

        trace!(
            period,
            len = prices.len(),
            defined = prices.len().saturating_sub(period - 1),
            "SMA computed"
        );

        Ok(result)
    }
}

/// 지표 값이 하나도 없는지 확인합니다.
///
/// 조회 기간이 이동평균 기간보다 짧을 때 UI가 해당 라인을 끄는 근거가 됩니다.
pub fn is_all_undefined(values: &[Option<Decimal>]) -> bool {
    values.iter().all(Option::is_none)
}
