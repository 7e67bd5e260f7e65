//! 지표/낙폭/애니메이션 속성 테스트

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;
use stockview_analytics::{
    AnimationFrameGenerator, DrawdownAnalyzer, ReturnIndicators, SmaParams, TrendIndicators,
    VolatilityIndicators,
};
use stockview_core::{DailyBar, PriceSeries};

fn to_decimals(values: &[u32]) -> Vec<Decimal> {
    values.iter().map(|v| Decimal::from(*v)).collect()
}

fn series_of(len: usize) -> PriceSeries {
    let start = NaiveDate::from_ymd_opt(2022, 6, 1).unwrap();
    PriceSeries::new(
        (0..len)
            .map(|i| DailyBar::from_close(start + Duration::days(i as i64), Decimal::from(i + 100)))
            .collect(),
    )
    .unwrap()
}

proptest! {
    #[test]
    fn strictly_increasing_series_has_no_drawdown(
        start in 1u32..10_000,
        steps in prop::collection::vec(1u32..500, 0..120),
    ) {
        let mut closes = vec![Decimal::from(start)];
        for step in steps {
            let next = *closes.last().unwrap() + Decimal::from(step);
            closes.push(next);
        }

        let result = DrawdownAnalyzer::new().analyze(&closes).unwrap();
        prop_assert_eq!(result.mdd_value, Decimal::ZERO);
        prop_assert_eq!(result.peak_index, 0);
        prop_assert_eq!(result.trough_index, 0);
    }

    #[test]
    fn drawdown_is_non_positive_and_ordered(
        closes in prop::collection::vec(1u32..100_000, 1..200),
    ) {
        let closes = to_decimals(&closes);
        let result = DrawdownAnalyzer::new().analyze(&closes).unwrap();

        prop_assert!(result.mdd_value <= Decimal::ZERO);
        prop_assert!(result.peak_index <= result.trough_index);
        // 고점은 저점 이전 구간의 최고 종가
        let window_max = closes[..=result.trough_index].iter().copied().max().unwrap();
        prop_assert_eq!(closes[result.peak_index], window_max);
    }

    #[test]
    fn moving_average_undercount_is_all_undefined(
        window in 1usize..80,
        closes in prop::collection::vec(1u32..100_000, 0..80),
    ) {
        prop_assume!(closes.len() < window);
        let ma = TrendIndicators::new()
            .sma(&to_decimals(&closes), SmaParams { period: window })
            .unwrap();
        prop_assert_eq!(ma.len(), closes.len());
        prop_assert!(ma.iter().all(Option::is_none));
    }

    #[test]
    fn moving_average_first_defined_value_is_mean(
        window in 1usize..60,
        closes in prop::collection::vec(1u32..100_000, 60..120),
    ) {
        let closes = to_decimals(&closes);
        let ma = TrendIndicators::new()
            .sma(&closes, SmaParams { period: window })
            .unwrap();

        let expected = closes[..window].iter().copied().sum::<Decimal>() / Decimal::from(window);
        prop_assert_eq!(ma[window - 1], Some(expected));
        prop_assert!(ma[..window - 1].iter().all(Option::is_none));
    }

    #[test]
    fn period_return_defined_iff_enough_history(
        lookback in 1usize..70,
        closes in prop::collection::vec(1u32..100_000, 1..140),
    ) {
        let closes = to_decimals(&closes);
        let value = ReturnIndicators::new().period_return(&closes, lookback);
        prop_assert_eq!(value.is_none(), closes.len() <= lookback);
    }

    #[test]
    fn volatility_defined_iff_three_points(
        closes in prop::collection::vec(1u32..100_000, 1..40),
    ) {
        let closes = to_decimals(&closes);
        let value = VolatilityIndicators::new().realized(&closes);
        prop_assert_eq!(value.is_none(), closes.len() < 3);
    }

    #[test]
    fn animation_frame_count(len in 1usize..400) {
        let spec = AnimationFrameGenerator::default().generate(&series_of(len), &[]);
        let m = len.min(260);
        prop_assert_eq!(spec.points.len(), m);
        prop_assert_eq!(spec.len(), m.saturating_sub(9));
    }
}

#[test]
fn period_return_at_boundary() {
    let closes = to_decimals(&[100, 101, 102, 103, 104, 110]);
    let value = ReturnIndicators::new().period_return(&closes, 5).unwrap();
    assert_eq!(value, Decimal::from(10));
}
