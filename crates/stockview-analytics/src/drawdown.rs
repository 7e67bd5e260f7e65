//! 최대 낙폭(MDD) 분석.
//!
//! # 계산 공식
//!
//! M[i] = max(close[0..=i])
//! drawdown[i] = close[i] / M[i] - 1   (신고가에서 정확히 0, 그 외 음수)
//! MDD = min(drawdown)
//!
//! # 예시
//!
//! 종가 10 → 12 → 8 → 9 → 15 → 5
//! 누적 최고가 10, 12, 12, 12, 15, 15
//! 낙폭 0, 0, -33.3%, -25%, 0, -66.7%
//! → 고점 4번(15), 저점 5번(5), MDD -66.7%
//!
//! 동점은 항상 먼저 나온 위치가 이깁니다 (저점과 저점 이전 구간의 고점 모두).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use stockview_core::{DecimalExt, Percentage};
use tracing::debug;

use crate::indicators::{ensure_positive, IndicatorResult};

/// 최대 낙폭 결과.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawdownResult {
    /// 최대 낙폭 (비율, 0 이하). 예: -0.23 = -23%
    pub mdd_value: Decimal,
    /// 저점 이전 구간에서 종가가 가장 높았던 위치
    pub peak_index: usize,
    /// 낙폭이 가장 컸던 위치
    pub trough_index: usize,
}

impl DrawdownResult {
    /// 최대 낙폭 (%).
    pub fn mdd_pct(&self) -> Percentage {
        self.mdd_value.to_pct()
    }

    /// 낙폭이 한 번도 발생하지 않았는지 여부.
    pub fn is_flat(&self) -> bool {
        self.mdd_value.is_zero()
    }
}

/// 최대 낙폭 분석기.
#[derive(Debug, Default)]
pub struct DrawdownAnalyzer;

impl DrawdownAnalyzer {
    /// 새로운 분석기 생성.
    pub fn new() -> Self {
        Self
    }

    /// 종가 열에서 최대 낙폭과 고점/저점 위치를 계산합니다.
    ///
    /// 누적 최고가와 그 위치를 한 번의 순회로 유지합니다 (O(N)).
    ///
    /// # Errors
    /// - 빈 입력: `EmptyInput`
    /// - 0 이하의 종가: `NonPositivePrice`
    pub fn analyze(&self, closes: &[Decimal]) -> IndicatorResult<DrawdownResult> {
        ensure_positive(closes)?;

        let mut running_max = closes[0];
        let mut running_max_index = 0;
        let mut result = DrawdownResult {
            mdd_value: Decimal::ZERO,
            peak_index: 0,
            trough_index: 0,
        };

        for (i, close) in closes.iter().enumerate().skip(1) {
            if *close > running_max {
                running_max = *close;
                running_max_index = i;
                continue;
            }

            let drawdown = *close / running_max - Decimal::ONE;
            if drawdown < result.mdd_value {
                result = DrawdownResult {
                    mdd_value: drawdown,
                    peak_index: running_max_index,
                    trough_index: i,
                };
            }
        }

        debug!(
            mdd = %result.mdd_value,
            peak = result.peak_index,
            trough = result.trough_index,
            "drawdown analyzed"
        );

        Ok(result)
    }
}
