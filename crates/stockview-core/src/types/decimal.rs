//! 가격 계산을 위한 Decimal 유틸리티.

use rust_decimal::{Decimal, RoundingStrategy};

/// 가격 타입 (원화 종가 등).
pub type Price = Decimal;

/// 퍼센트 타입 (1.0 = 1%).
pub type Percentage = Decimal;

/// 백분율 변환 계수.
pub const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Decimal 연산을 위한 확장 트레이트.
pub trait DecimalExt {
    /// 사사오입(0.5는 0에서 먼 쪽으로)으로 반올림합니다.
    fn round_half_up(&self, dp: u32) -> Decimal;

    /// 비율(0.0123)을 백분율(1.23)로 변환합니다.
    fn to_pct(&self) -> Percentage;

    /// `to_pct`와 같지만 표현 범위를 넘으면 None.
    fn checked_pct(&self) -> Option<Percentage>;
}

impl DecimalExt for Decimal {
    fn round_half_up(&self, dp: u32) -> Decimal {
        self.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
    }

    fn to_pct(&self) -> Percentage {
        *self * HUNDRED
    }

    fn checked_pct(&self) -> Option<Percentage> {
        self.checked_mul(HUNDRED)
    }
}

/// Decimal 제곱근을 뉴턴 방법으로 계산합니다.
///
/// 0 이하의 값은 0을 반환합니다. 10^-10 이내로 수렴하거나 50회 반복 후 종료합니다.
pub fn decimal_sqrt(value: Decimal) -> Decimal {
    if value <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let mut guess = if value > Decimal::ONE {
        value / Decimal::TWO
    } else {
        Decimal::ONE
    };
    let precision = Decimal::new(1, 10);

    for _ in 0..50 {
        let next_guess = (guess + value / guess) / Decimal::TWO;
        if (next_guess - guess).abs() < precision {
            return next_guess;
        }
        guess = next_guess;
    }

    guess
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_half_up() {
        assert_eq!(dec!(1.005).round_half_up(2), dec!(1.01));
        assert_eq!(dec!(-66.665).round_half_up(2), dec!(-66.67));
        assert_eq!(dec!(2.5).round_half_up(0), dec!(3));
    }

    #[test]
    fn test_to_pct() {
        assert_eq!(dec!(0.0123).to_pct(), dec!(1.23));
        assert_eq!(dec!(0.0123).checked_pct(), Some(dec!(1.23)));
        assert_eq!(Decimal::MAX.checked_pct(), None);
    }

    #[test]
    fn test_decimal_sqrt() {
        assert_eq!(decimal_sqrt(Decimal::ZERO), Decimal::ZERO);
        assert_eq!(decimal_sqrt(dec!(-4)), Decimal::ZERO);
        assert!((decimal_sqrt(dec!(16)) - dec!(4)).abs() < dec!(0.000000001));
        assert!((decimal_sqrt(dec!(0.02)) - dec!(0.1414213562)).abs() < dec!(0.000000001));
    }
}
