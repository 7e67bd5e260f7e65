//! 화면 표시용 포맷 함수.
//!
//! 숫자 계산은 하지 않고 이미 계산된 값을 문자열로만 바꿉니다.
//! 정의되지 않은 값은 항상 `-`로 표시합니다.

use rust_decimal::Decimal;
use stockview_core::DecimalExt;

/// 정의되지 않은 값의 표시 문자열.
pub const PLACEHOLDER: &str = "-";

/// 정수부를 천 단위로 구분합니다 (`12345` → `12,345`).
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// 가격을 소수점 없이 천 단위 구분으로 표시합니다.
///
/// ```ignore
/// assert_eq!(format_price(dec!(71234.5)), "71,235");
/// ```
pub fn format_price(value: Decimal) -> String {
    let rounded = value.round_half_up(0);
    let digits = rounded.abs().trunc().to_string();
    let grouped = group_thousands(&digits);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// 거래량을 천 단위 구분으로 표시합니다. 없으면 `-`.
pub fn format_volume(volume: Option<u64>) -> String {
    match volume {
        Some(v) => group_thousands(&v.to_string()),
        None => PLACEHOLDER.to_string(),
    }
}

/// 퍼센트 값을 소수 둘째 자리까지 표시합니다 (`-23.45%`).
pub fn format_pct(value: Decimal) -> String {
    format!("{:.2}%", value.round_half_up(2))
}

/// 정의되지 않을 수 있는 퍼센트 값. 없으면 `-`.
pub fn format_optional_pct(value: Option<Decimal>) -> String {
    value.map(format_pct).unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// 전일 대비 변화를 화살표와 함께 표시합니다 (`▲ 1,200 (1.23%)`).
///
/// 변화가 0이면 하락 화살표(`▼`)를 씁니다.
pub fn format_change(change: Decimal, change_pct: Decimal) -> String {
    let arrow = if change > Decimal::ZERO { "▲" } else { "▼" };
    format!(
        "{arrow} {} ({})",
        format_price(change.abs()),
        format_pct(change_pct.abs())
    )
}

/// 기간 수익률을 추세 아이콘과 함께 표시합니다.
///
/// - 양수: `1.23% 🔺`
/// - 음수: `-1.23% 🔻`
/// - 0: `0.00%`
/// - 없음: `-`
pub fn format_return(value: Option<Decimal>) -> String {
    match value {
        None => PLACEHOLDER.to_string(),
        Some(v) if v > Decimal::ZERO => format!("{} 🔺", format_pct(v)),
        Some(v) if v < Decimal::ZERO => format!("{} 🔻", format_pct(v)),
        Some(v) => format_pct(v),
    }
}
