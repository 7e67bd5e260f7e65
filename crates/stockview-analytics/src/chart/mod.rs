//! 차트 명세 생성.
//!
//! 종가/이동평균/거래량 트레이스와 MDD 강조 구간, 종가 애니메이션을
//! 렌더러에 독립적인 값으로 표현합니다.

pub mod animation;
pub mod builder;
pub mod spec;

pub use animation::{AnimationFrame, AnimationFrameGenerator, AnimationPoint, AnimationSpec};
pub use builder::ChartSpecBuilder;
pub use spec::{
    Axis, ChartLayout, ChartSpec, HighlightRegion, HoverField, HoverMode, HoverTemplate,
    MarkerSymbol, PointMarker, Trace, TraceKind, TraceRole,
};
