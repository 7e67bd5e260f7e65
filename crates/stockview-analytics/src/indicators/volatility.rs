//! 변동성 지표 (Volatility Indicators).
//!
//! 일간 수익률의 표본 표준편차로 실현 변동성을 계산합니다.

use rust_decimal::Decimal;
use stockview_core::{decimal_sqrt, DecimalExt, Percentage};
use tracing::trace;

use super::returns::ReturnIndicators;

/// 표본 표준편차에 필요한 최소 수익률 개수.
const MIN_RETURNS: usize = 2;

/// 변동성 지표 계산기.
#[derive(Debug, Default)]
pub struct VolatilityIndicators {
    returns: ReturnIndicators,
}

impl VolatilityIndicators {
    /// 새로운 변동성 지표 계산기 생성.
    pub fn new() -> Self {
        Self::default()
    }

    /// 실현 변동성 (일간, %).
    ///
    /// σ = √(Σ(r - r̄)² / (n - 1)) × 100
    ///
    /// 분모는 표본 개수 - 1 입니다.
    ///
    /// # 반환
    /// 일간 수익률이 2개 미만(가격 3개 미만)이면 None.
    pub fn realized(&self, prices: &[Decimal]) -> Option<Percentage> {
        let returns = self.returns.daily_returns(prices);
        let std_dev = sample_std_dev(&returns)?;

        trace!(samples = returns.len(), %std_dev, "realized volatility computed");
        Some(std_dev.to_pct())
    }
}

/// 표본 표준편차. 값이 2개 미만이거나 중간 계산이 Decimal 범위를 넘으면 None.
pub fn sample_std_dev(values: &[Decimal]) -> Option<Decimal> {
    if values.len() < MIN_RETURNS {
        return None;
    }

    let n = Decimal::from(values.len());
    let sum = values
        .iter()
        .try_fold(Decimal::ZERO, |acc, v| acc.checked_add(*v))?;
    let mean = sum / n;
    let squared = values.iter().try_fold(Decimal::ZERO, |acc, v| {
        let diff = v.checked_sub(mean)?;
        acc.checked_add(diff.checked_mul(diff)?)
    })?;
    let variance = squared / (n - Decimal::ONE);

    Some(decimal_sqrt(variance))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_realized_volatility_known_value() {
        let vol = VolatilityIndicators::new();
        // 수익률 [0.10, -0.10], 평균 0, 분산 0.02 / 1, 표준편차 0.141421...
        let value = vol.realized(&[dec!(100), dec!(110), dec!(99)]).unwrap();
        assert!((value - dec!(14.1421356)).abs() < dec!(0.0001));
    }

    #[test]
    fn test_realized_volatility_needs_three_prices() {
        let vol = VolatilityIndicators::new();
        assert_eq!(vol.realized(&[]), None);
        assert_eq!(vol.realized(&[dec!(100)]), None);
        assert_eq!(vol.realized(&[dec!(100), dec!(101)]), None);
        assert!(vol.realized(&[dec!(100), dec!(101), dec!(102)]).is_some());
    }

    #[test]
    fn test_flat_prices_zero_volatility() {
        let vol = VolatilityIndicators::new();
        let value = vol.realized(&[dec!(50), dec!(50), dec!(50), dec!(50)]).unwrap();
        assert_eq!(value, Decimal::ZERO);
    }

    #[test]
    fn test_sample_std_dev_uses_n_minus_one() {
        // [1, 2, 3, 4]: 평균 2.5, 편차제곱합 5, 표본분산 5/3
        let sd = sample_std_dev(&[dec!(1), dec!(2), dec!(3), dec!(4)]).unwrap();
        assert!((sd - dec!(1.2909944)).abs() < dec!(0.000001));
    }

    #[test]
    fn test_extreme_prices_give_no_volatility() {
        let vol = VolatilityIndicators::new();
        let huge = Decimal::MAX / dec!(10);
        assert_eq!(vol.realized(&[dec!(1), huge, dec!(1)]), None);
    }
}
