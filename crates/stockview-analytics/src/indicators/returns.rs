//! 수익률 지표.
//!
//! - 일간 수익률: `r[i] = close[i] / close[i-1] - 1`
//! - 기간 수익률: 최근 N거래일 단순 수익률 (복리/연율화 아님)

use rust_decimal::Decimal;
use stockview_core::{DecimalExt, Percentage};

/// 수익률 계산기.
#[derive(Debug, Default)]
pub struct ReturnIndicators;

impl ReturnIndicators {
    /// 새로운 수익률 계산기 생성.
    pub fn new() -> Self {
        Self
    }

    /// 일간 수익률 (비율).
    ///
    /// 첫 위치는 이전 값이 없으므로 0으로 채우지 않고 제외합니다.
    /// 따라서 길이는 N-1입니다. 이전 값이 0인 위치도 제외됩니다.
    pub fn daily_returns(&self, prices: &[Decimal]) -> Vec<Decimal> {
        prices
            .windows(2)
            .filter_map(|pair| pair[1].checked_div(pair[0]))
            .map(|ratio| ratio - Decimal::ONE)
            .collect()
    }

    /// 최근 `lookback` 거래일 수익률 (%).
    ///
    /// `(close[N-1] / close[N-1-lookback] - 1) × 100`
    ///
    /// # 반환
    /// 데이터가 `lookback`개 이하이거나 결과가 Decimal 범위를 넘으면 None.
    pub fn period_return(&self, prices: &[Decimal], lookback: usize) -> Option<Percentage> {
        let n = prices.len();
        if n <= lookback {
            return None;
        }

        let last = prices[n - 1];
        let base = prices[n - 1 - lookback];
        last.checked_div(base)
            .and_then(|ratio| (ratio - Decimal::ONE).checked_pct())
    }
}
