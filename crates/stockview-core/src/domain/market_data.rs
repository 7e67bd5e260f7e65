//! 일봉 시세 데이터.
//!
//! - `RawBar` - 외부 데이터 소스가 돌려주는 검증 전 행
//! - `DailyBar` - 검증된 일봉 (OHLCV)
//! - `PriceSeries` - 한 종목의 날짜 오름차순 일봉 시계열
//! - `DateRange` - 조회 기간

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{ViewerError, ViewerResult};
use crate::types::Price;

/// 외부 소스에서 받은 검증 전 일봉 행.
///
/// 종가가 비어 있거나 거래량이 음수일 수 있으며, `PriceSeries::from_raw`에서 걸러집니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawBar {
    pub date: NaiveDate,
    pub open: Option<Price>,
    pub high: Option<Price>,
    pub low: Option<Price>,
    pub close: Option<Price>,
    pub volume: Option<i64>,
}

/// 일봉 (OHLCV).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyBar {
    /// 거래일
    pub date: NaiveDate,
    /// 시가
    pub open: Price,
    /// 고가
    pub high: Price,
    /// 저가
    pub low: Price,
    /// 종가
    pub close: Price,
    /// 거래량 (소스가 제공하지 않으면 None)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<u64>,
}

impl DailyBar {
    /// 새 일봉을 생성합니다.
    pub fn new(
        date: NaiveDate,
        open: Price,
        high: Price,
        low: Price,
        close: Price,
        volume: Option<u64>,
    ) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// 종가만 있는 일봉을 생성합니다 (시가/고가/저가 = 종가).
    pub fn from_close(date: NaiveDate, close: Price) -> Self {
        Self::new(date, close, close, close, close, None)
    }

    /// 거래량을 설정합니다.
    pub fn with_volume(mut self, volume: u64) -> Self {
        self.volume = Some(volume);
        self
    }
}

impl TryFrom<RawBar> for DailyBar {
    type Error = ViewerError;

    /// 빠진 시가/고가/저가는 종가로 채웁니다. 종가는 반드시 있어야 합니다.
    fn try_from(raw: RawBar) -> Result<Self, Self::Error> {
        let close = raw
            .close
            .ok_or(ViewerError::MissingClose { date: raw.date })?;

        let volume = match raw.volume {
            Some(v) if v < 0 => {
                return Err(ViewerError::NegativeVolume {
                    date: raw.date,
                    volume: v,
                })
            }
            Some(v) => Some(v as u64),
            None => None,
        };

        Ok(Self {
            date: raw.date,
            open: raw.open.unwrap_or(close),
            high: raw.high.unwrap_or(close),
            low: raw.low.unwrap_or(close),
            close,
            volume,
        })
    }
}

/// 한 종목의 일봉 시계열.
///
/// 생성 후에는 변경할 수 없으며 다음을 보장합니다:
/// - 길이 1 이상
/// - 날짜가 엄격하게 증가
/// - 모든 종가 > 0
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceSeries {
    bars: Vec<DailyBar>,
    #[serde(skip)]
    closes: Vec<Price>,
    has_volume: bool,
}

impl PriceSeries {
    /// 검증된 시계열을 생성합니다.
    ///
    /// 정렬하지 않습니다. 순서가 잘못된 입력은 에러입니다.
    pub fn new(bars: Vec<DailyBar>) -> ViewerResult<Self> {
        if bars.is_empty() {
            return Err(ViewerError::EmptySeries);
        }

        for pair in bars.windows(2) {
            if pair[1].date <= pair[0].date {
                return Err(ViewerError::UnsortedDates {
                    previous: pair[0].date,
                    current: pair[1].date,
                });
            }
        }

        if let Some(bad) = bars.iter().find(|b| b.close <= Decimal::ZERO) {
            return Err(ViewerError::NonPositiveClose {
                date: bad.date,
                close: bad.close,
            });
        }

        let closes = bars.iter().map(|b| b.close).collect();
        let has_volume = bars.iter().any(|b| b.volume.is_some());

        Ok(Self {
            bars,
            closes,
            has_volume,
        })
    }

    /// 외부 소스의 행에서 시계열을 생성합니다.
    pub fn from_raw(rows: Vec<RawBar>) -> ViewerResult<Self> {
        let bars = rows
            .into_iter()
            .map(DailyBar::try_from)
            .collect::<ViewerResult<Vec<_>>>()?;
        Self::new(bars)
    }

    /// 일봉 목록.
    pub fn bars(&self) -> &[DailyBar] {
        &self.bars
    }

    /// 종가 열.
    pub fn closes(&self) -> &[Price] {
        &self.closes
    }

    /// 날짜 열.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.bars.iter().map(|b| b.date).collect()
    }

    /// 거래량 열 (없는 값은 None).
    pub fn volumes(&self) -> Vec<Option<u64>> {
        self.bars.iter().map(|b| b.volume).collect()
    }

    /// 거래량 열이 존재하는지 여부.
    pub fn has_volume(&self) -> bool {
        self.has_volume
    }

    /// 일봉 개수 (항상 1 이상).
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// 항상 false (빈 시계열은 생성할 수 없음).
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// 첫 일봉.
    pub fn first(&self) -> &DailyBar {
        &self.bars[0]
    }

    /// 마지막 일봉.
    pub fn last(&self) -> &DailyBar {
        &self.bars[self.bars.len() - 1]
    }
}

/// 조회 기간 (양 끝 포함).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// 기간을 생성합니다. 시작일이 종료일보다 늦으면 에러입니다.
    pub fn new(start: NaiveDate, end: NaiveDate) -> ViewerResult<Self> {
        if start > end {
            return Err(ViewerError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// 시작일.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// 종료일.
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// 날짜가 기간 안에 있는지 확인합니다.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}
