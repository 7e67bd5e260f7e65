//! 차트 명세 빌더.
//!
//! 이미 계산된 시계열과 지표만 받아 `ChartSpec`을 조립합니다.
//! 같은 입력이면 항상 같은 명세를 만듭니다.
//!
//! 낙폭 구간은 빌더가 같은 시계열에서 직접 계산하므로 고점/저점 위치가
//! 항상 시계열 안에 있습니다. 이동평균 값은 시계열과 길이가 다르면 `build`가 거부합니다.

use rust_decimal::Decimal;
use stockview_core::{PriceSeries, ViewerError, ViewerResult};

use super::animation::AnimationFrameGenerator;
use super::spec::{
    Axis, ChartLayout, ChartSpec, HighlightRegion, HoverTemplate, MarkerSymbol, PointMarker,
    Trace, TraceKind, TraceRole,
};
use crate::drawdown::{DrawdownAnalyzer, DrawdownResult};
use crate::format::{format_pct, format_price};

/// 이동평균 라인 입력.
#[derive(Debug, Clone, Copy)]
struct MovingAverageLine<'a> {
    window: usize,
    values: &'a [Option<Decimal>],
    visible: bool,
}

/// `ChartSpec` 빌더.
///
/// ```ignore
/// let spec = ChartSpecBuilder::new(&series)
///     .title("삼성전자 추이")
///     .moving_average(20, &ma20, true)
///     .volume(false)
///     .highlight_drawdown(true)
///     .build()?;
/// ```
#[derive(Debug, Clone)]
pub struct ChartSpecBuilder<'a> {
    series: &'a PriceSeries,
    layout: ChartLayout,
    show_close: bool,
    moving_averages: Vec<MovingAverageLine<'a>>,
    show_volume: bool,
    highlight_drawdown: bool,
    animation: Option<AnimationFrameGenerator>,
}

impl<'a> ChartSpecBuilder<'a> {
    /// 새로운 빌더. 종가 라인은 기본으로 보입니다.
    pub fn new(series: &'a PriceSeries) -> Self {
        Self {
            series,
            layout: ChartLayout::default(),
            show_close: true,
            moving_averages: Vec::new(),
            show_volume: false,
            highlight_drawdown: false,
            animation: None,
        }
    }

    /// 차트 제목.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.layout.title = title.into();
        self
    }

    /// 종가 라인 표시 여부.
    pub fn show_close(mut self, visible: bool) -> Self {
        self.show_close = visible;
        self
    }

    /// 이동평균 라인 추가. `values`는 종가와 같은 길이여야 합니다.
    pub fn moving_average(
        mut self,
        window: usize,
        values: &'a [Option<Decimal>],
        visible: bool,
    ) -> Self {
        self.moving_averages.push(MovingAverageLine {
            window,
            values,
            visible,
        });
        self
    }

    /// 거래량 막대 표시 여부. 거래량 데이터가 없으면 무시됩니다.
    pub fn volume(mut self, visible: bool) -> Self {
        self.show_volume = visible;
        self
    }

    /// 최대 낙폭 구간 강조 여부.
    pub fn highlight_drawdown(mut self, enabled: bool) -> Self {
        self.highlight_drawdown = enabled;
        self
    }

    /// 종가 애니메이션 추가.
    pub fn animate(mut self, generator: AnimationFrameGenerator) -> Self {
        self.animation = Some(generator);
        self
    }

    /// 명세를 만듭니다.
    ///
    /// # Errors
    /// 이동평균 값의 길이가 시계열과 다르면 `LengthMismatch`.
    pub fn build(self) -> ViewerResult<ChartSpec> {
        let series = self.series;
        for ma in &self.moving_averages {
            if ma.values.len() != series.len() {
                return Err(ViewerError::LengthMismatch {
                    name: format!("MA{}", ma.window),
                    expected: series.len(),
                    actual: ma.values.len(),
                });
            }
        }

        let dates = series.dates();
        let mut traces = Vec::with_capacity(2 + self.moving_averages.len());

        traces.push(Trace {
            role: TraceRole::Close,
            name: "Close".to_string(),
            kind: TraceKind::Line,
            axis: Axis::Primary,
            visible: self.show_close,
            x: dates.clone(),
            y: series.closes().iter().map(|c| Some(*c)).collect(),
            hover: Some(HoverTemplate::close_bundle()),
            custom_volume: series.volumes(),
        });

        for ma in &self.moving_averages {
            traces.push(Trace {
                role: TraceRole::MovingAverage { window: ma.window },
                name: format!("MA{}", ma.window),
                kind: TraceKind::Line,
                axis: Axis::Primary,
                visible: ma.visible,
                x: dates.clone(),
                y: ma.values.to_vec(),
                hover: None,
                custom_volume: Vec::new(),
            });
        }

        if series.has_volume() {
            traces.push(Trace {
                role: TraceRole::Volume,
                name: "Volume".to_string(),
                kind: TraceKind::Bar,
                axis: Axis::Secondary,
                visible: self.show_volume,
                x: dates,
                y: series
                    .volumes()
                    .into_iter()
                    .map(|v| v.map(Decimal::from))
                    .collect(),
                hover: None,
                custom_volume: Vec::new(),
            });
        }

        let highlight = if self.highlight_drawdown {
            let drawdown = DrawdownAnalyzer::new().analyze(series.closes())?;
            Some(highlight_region(series, &drawdown))
        } else {
            None
        };

        let animation = self.animation.and_then(|generator| {
            let ma_values: Vec<&[Option<Decimal>]> =
                self.moving_averages.iter().map(|ma| ma.values).collect();
            let spec = generator.generate(series, &ma_values);
            (!spec.is_empty()).then_some(spec)
        });

        Ok(ChartSpec {
            layout: self.layout,
            traces,
            highlight,
            animation,
        })
    }
}

/// 고점→저점 구간과 양 끝 마커. `drawdown`은 `series`의 종가로 계산된 값이어야 합니다.
fn highlight_region(series: &PriceSeries, drawdown: &DrawdownResult) -> HighlightRegion {
    let bars = series.bars();
    let peak = &bars[drawdown.peak_index];
    let trough = &bars[drawdown.trough_index];

    HighlightRegion {
        x0: peak.date,
        x1: trough.date,
        label: format!("MDD {}", format_pct(drawdown.mdd_pct())),
        peak_point: PointMarker {
            name: "MDD Peak".to_string(),
            x: peak.date,
            y: peak.close,
            text: format!("Peak\n{}", format_price(peak.close)),
            symbol: MarkerSymbol::TriangleUp,
        },
        trough_point: PointMarker {
            name: "MDD Trough".to_string(),
            x: trough.date,
            y: trough.close,
            text: format!("Trough\n{}", format_price(trough.close)),
            symbol: MarkerSymbol::TriangleDown,
        },
    }
}
