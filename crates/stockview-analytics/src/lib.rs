//! 주가 시계열 분석 엔진.
//!
//! 이 크레이트는 다음을 제공합니다:
//! - 최대 낙폭(MDD)과 고점/저점 위치
//! - 이동평균, 기간 수익률, 실현 변동성
//! - 요약 보고서
//! - 렌더러에 독립적인 차트 명세와 종가 애니메이션
//! - 화면 표시용 포맷 함수
//!
//! 모든 계산은 입력을 바꾸지 않는 순수 함수이며 I/O와 캐시를 사용하지 않습니다.
//!
//! # Re-exports
//!
//! - [`analysis`]: 요청 처리기 (`analyze`, AnalysisOptions, AnalysisReport)
//! - [`chart`]: 차트 명세 (ChartSpec, ChartSpecBuilder, AnimationSpec 등)
//! - [`indicators`]: 기술적 지표 (SMA, 수익률, 변동성)

pub mod analysis;
pub mod chart;
pub mod drawdown;
pub mod format;
pub mod indicators;
pub mod summary;

pub use analysis::{analyze, AnalysisOptions, AnalysisReport, Notice};
pub use chart::{
    AnimationFrame, AnimationFrameGenerator, AnimationPoint, AnimationSpec, Axis, ChartLayout,
    ChartSpec, ChartSpecBuilder, HighlightRegion, HoverField, HoverMode, HoverTemplate,
    MarkerSymbol, PointMarker, Trace, TraceKind, TraceRole,
};
pub use drawdown::{DrawdownAnalyzer, DrawdownResult};
pub use indicators::{
    IndicatorEngine, IndicatorError, IndicatorResult, IndicatorSeries, ReturnIndicators,
    SmaParams, TrendIndicators, VolatilityIndicators,
};
pub use summary::{RecentReturns, SummaryReport};
