//! 종목코드/시계열 검증 속성 테스트

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;
use stockview_core::{DailyBar, ErrorKind, PriceSeries, StockCode};

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 2).unwrap()
}

proptest! {
    #[test]
    fn digit_codes_up_to_six_are_padded(code in "[0-9]{1,6}") {
        let parsed = StockCode::parse(&code).unwrap();
        prop_assert_eq!(parsed.as_str().len(), 6);
        prop_assert!(parsed.as_str().ends_with(&code));
        prop_assert!(parsed.as_str()[..6 - code.len()].chars().all(|c| c == '0'));
    }

    #[test]
    fn long_digit_codes_are_rejected(code in "[0-9]{7,12}") {
        let err = StockCode::parse(&code).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn codes_with_letters_are_rejected(code in "[0-9]{0,3}[A-Za-z]{1,3}[0-9]{0,2}") {
        prop_assert!(StockCode::parse(&code).is_err());
    }

    #[test]
    fn increasing_positive_series_is_accepted(
        closes in prop::collection::vec(1u32..1_000_000, 1..200),
    ) {
        let bars: Vec<DailyBar> = closes
            .iter()
            .enumerate()
            .map(|(i, c)| DailyBar::from_close(base_date() + Duration::days(i as i64), Decimal::from(*c)))
            .collect();

        let series = PriceSeries::new(bars).unwrap();
        prop_assert_eq!(series.len(), closes.len());
        prop_assert_eq!(series.closes().len(), closes.len());
    }
}

#[test]
fn reversed_series_is_rejected_not_sorted() {
    let bars = vec![
        DailyBar::from_close(base_date() + Duration::days(1), Decimal::from(10)),
        DailyBar::from_close(base_date(), Decimal::from(11)),
    ];
    let err = PriceSeries::new(bars).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Data);
}
