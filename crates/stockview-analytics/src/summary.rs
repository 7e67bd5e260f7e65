//! 요약 지표 카드.
//!
//! 새로운 알고리즘 없이 시계열과 각 지표 결과를 하나의 보고서로 묶습니다.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use stockview_core::{DecimalExt, Percentage, Price, PriceSeries, ReturnLookbacks};

use crate::drawdown::DrawdownResult;
use crate::indicators::{IndicatorError, IndicatorResult, ReturnIndicators, VolatilityIndicators};

/// 최근 흐름 요약 (1주 / 1개월 / 3개월 수익률, %).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentReturns {
    pub return_1w: Option<Percentage>,
    pub return_1m: Option<Percentage>,
    pub return_3m: Option<Percentage>,
}

/// 요약 보고서.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryReport {
    /// 현재가 (마지막 종가)
    pub last_close: Price,
    /// 기간 첫 종가
    pub first_close: Price,
    /// 기간 수익률 (%)
    pub period_return_pct: Percentage,
    /// 전일 대비 변화량 (일봉 1개면 0)
    pub day_over_day_change: Decimal,
    /// 전일 대비 변화율 (%, 일봉 1개면 0)
    pub day_over_day_change_pct: Percentage,
    /// 기간 최고 종가
    pub max_close: Price,
    /// 기간 최저 종가
    pub min_close: Price,
    /// 최대 낙폭 (%)
    pub mdd_pct: Percentage,
    /// 일간 변동성 (%)
    pub volatility_pct: Option<Percentage>,
    /// 최근 흐름
    #[serde(flatten)]
    pub recent: RecentReturns,
}

impl SummaryReport {
    /// 시계열과 낙폭 결과로 요약 보고서를 만듭니다.
    ///
    /// # Errors
    /// 기간 수익률이나 전일 대비 변화율이 Decimal 범위를 넘으면 `Overflow`.
    pub fn build(
        series: &PriceSeries,
        drawdown: &DrawdownResult,
        lookbacks: ReturnLookbacks,
    ) -> IndicatorResult<Self> {
        let closes = series.closes();
        let returns = ReturnIndicators::new();

        let last_close = series.last().close;
        let first_close = series.first().close;
        let period_return_pct = ratio_pct(last_close, first_close, "기간 수익률")?;

        // 일봉이 1개뿐이면 변화량은 None이 아니라 0으로 보고한다
        let (day_over_day_change, day_over_day_change_pct) = match closes.len() {
            n if n >= 2 => {
                let prev_close = closes[n - 2];
                (
                    last_close - prev_close,
                    ratio_pct(last_close, prev_close, "전일 대비 변화율")?,
                )
            }
            _ => (Decimal::ZERO, Decimal::ZERO),
        };

        let max_close = closes.iter().copied().max().unwrap_or(last_close);
        let min_close = closes.iter().copied().min().unwrap_or(last_close);

        Ok(Self {
            last_close,
            first_close,
            period_return_pct,
            day_over_day_change,
            day_over_day_change_pct,
            max_close,
            min_close,
            mdd_pct: drawdown.mdd_pct(),
            volatility_pct: VolatilityIndicators::new().realized(closes),
            recent: RecentReturns {
                return_1w: returns.period_return(closes, lookbacks.week),
                return_1m: returns.period_return(closes, lookbacks.month),
                return_3m: returns.period_return(closes, lookbacks.quarter),
            },
        })
    }

    /// 전일 대비 상승 여부.
    pub fn is_up(&self) -> bool {
        self.day_over_day_change > Decimal::ZERO
    }
}

/// `(current / base - 1) × 100`
fn ratio_pct(current: Price, base: Price, context: &'static str) -> IndicatorResult<Percentage> {
    current
        .checked_div(base)
        .and_then(|ratio| (ratio - Decimal::ONE).checked_pct())
        .ok_or(IndicatorError::Overflow(context))
}
