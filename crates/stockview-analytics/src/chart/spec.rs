//! 차트 명세 값 객체.
//!
//! 특정 차트 라이브러리에 의존하지 않는 선언적 차트 설명입니다.
//! 렌더러는 여기 담긴 값만으로 그릴 수 있어야 하며, 수치를 다시 계산하지 않습니다.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::animation::AnimationSpec;

/// 트레이스 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceKind {
    Line,
    Bar,
}

/// Y축.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// 가격 축
    Primary,
    /// 거래량 보조축 (오른쪽)
    Secondary,
}

/// 트레이스가 나타내는 시계열.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "series", rename_all = "snake_case")]
pub enum TraceRole {
    Close,
    MovingAverage { window: usize },
    Volume,
}

/// 툴팁 항목.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoverField {
    /// 날짜 (굵게, `YYYY-MM-DD`)
    Date,
    /// 종가 (천 단위 구분)
    Close,
    /// 거래량 (천 단위 구분, 없으면 `-`)
    Volume,
}

/// 툴팁 구성.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoverTemplate {
    pub fields: Vec<HoverField>,
}

impl HoverTemplate {
    /// 날짜/종가/거래량을 한 툴팁에 묶은 종가 툴팁.
    pub fn close_bundle() -> Self {
        Self {
            fields: vec![HoverField::Date, HoverField::Close, HoverField::Volume],
        }
    }
}

/// 툴팁 모드.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoverMode {
    /// 같은 x 위치의 모든 보이는 트레이스를 하나의 툴팁으로 통합
    XUnified,
}

/// 렌더링 가능한 데이터 시계열 하나.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace {
    pub role: TraceRole,
    /// 범례 이름 (`Close`, `MA20`, `Volume`)
    pub name: String,
    pub kind: TraceKind,
    pub axis: Axis,
    /// 꺼진 트레이스도 정의는 유지하고 보이지만 않게 함
    pub visible: bool,
    pub x: Vec<NaiveDate>,
    /// None은 선을 끊는 빈 구간
    pub y: Vec<Option<Decimal>>,
    /// 툴팁 (None이면 이 트레이스 자체 툴팁 없음)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover: Option<HoverTemplate>,
    /// 툴팁용 부가 데이터 (종가 트레이스의 거래량)
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub custom_volume: Vec<Option<u64>>,
}

/// 마커 모양.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MarkerSymbol {
    TriangleUp,
    TriangleDown,
}

/// 점 마커 (MDD 고점/저점).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointMarker {
    /// 범례 이름 (`MDD Peak`)
    pub name: String,
    pub x: NaiveDate,
    pub y: Decimal,
    /// 마커 옆 텍스트 (`Peak\n12,345`)
    pub text: String,
    pub symbol: MarkerSymbol,
}

/// 최대 낙폭 구간 강조.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightRegion {
    /// 고점 날짜
    pub x0: NaiveDate,
    /// 저점 날짜
    pub x1: NaiveDate,
    /// `MDD -23.45%`
    pub label: String,
    pub peak_point: PointMarker,
    pub trough_point: PointMarker,
}

/// 레이아웃 메타데이터.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub title: String,
    pub x_axis_title: String,
    pub y_axis_title: String,
    pub y2_axis_title: String,
    pub hover_mode: HoverMode,
    pub height: u32,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            title: String::new(),
            x_axis_title: "Date".to_string(),
            y_axis_title: "Price".to_string(),
            y2_axis_title: "Volume".to_string(),
            hover_mode: HoverMode::XUnified,
            height: 560,
        }
    }
}

/// 차트 명세.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub layout: ChartLayout,
    pub traces: Vec<Trace>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight: Option<HighlightRegion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation: Option<AnimationSpec>,
}

impl ChartSpec {
    /// 역할로 트레이스를 찾습니다.
    pub fn trace(&self, role: TraceRole) -> Option<&Trace> {
        self.traces.iter().find(|t| t.role == role)
    }

    /// 보이는 트레이스 목록.
    pub fn visible_traces(&self) -> impl Iterator<Item = &Trace> {
        self.traces.iter().filter(|t| t.visible)
    }

    /// 트레이스 표시 여부를 바꿉니다. 명세를 다시 만들 필요가 없습니다.
    ///
    /// 해당 역할의 트레이스가 없으면 false를 반환합니다.
    pub fn set_visible(&mut self, role: TraceRole, visible: bool) -> bool {
        match self.traces.iter_mut().find(|t| t.role == role) {
            Some(trace) => {
                trace.visible = visible;
                true
            }
            None => false,
        }
    }
}
