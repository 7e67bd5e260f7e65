//! 분석 요청 처리기.
//!
//! 검증된 시계열과 옵션을 받아 요약 보고서와 차트 명세를 한 번에 만듭니다.
//! 상태가 없으며 같은 입력이면 항상 같은 결과를 반환합니다.
//!
//! ```ignore
//! let options = AnalysisOptions::from_config(&config.analysis)
//!     .with_company("삼성전자")
//!     .with_long_ma(true);
//! let report = analyze(&series, &options)?;
//! println!("MDD {}", format_pct(report.summary.mdd_pct));
//! ```

use serde::{Deserialize, Serialize};
use stockview_core::{AnalysisConfig, PriceSeries, ReturnLookbacks, ViewerError, ViewerResult};
use tracing::{info, instrument};

use crate::chart::{AnimationFrameGenerator, ChartSpec, ChartSpecBuilder};
use crate::drawdown::DrawdownAnalyzer;
use crate::indicators::trend::is_all_undefined;
use crate::indicators::{SmaParams, TrendIndicators};
use crate::summary::SummaryReport;

/// 분석 옵션 (화면 토글 + 파라미터).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisOptions {
    /// 차트 제목에 쓰는 회사명
    pub company: Option<String>,
    pub show_close: bool,
    /// 단기 이동평균 (기본 MA20)
    pub show_short_ma: bool,
    /// 장기 이동평균 (기본 MA60)
    pub show_long_ma: bool,
    pub show_volume: bool,
    pub highlight_drawdown: bool,
    pub animate: bool,
    pub short_ma_window: usize,
    pub long_ma_window: usize,
    pub return_lookbacks: ReturnLookbacks,
    pub animation_max_points: usize,
    pub animation_min_points: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self::from_config(&AnalysisConfig::default())
    }
}

impl AnalysisOptions {
    /// 설정 파라미터와 기본 토글로 옵션을 만듭니다.
    ///
    /// 기본 토글: 종가/MA20/MDD 강조 켜짐, MA60/거래량/애니메이션 꺼짐.
    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self {
            company: None,
            show_close: true,
            show_short_ma: true,
            show_long_ma: false,
            show_volume: false,
            highlight_drawdown: true,
            animate: false,
            short_ma_window: config.short_ma_window,
            long_ma_window: config.long_ma_window,
            return_lookbacks: config.return_lookbacks,
            animation_max_points: config.animation_max_points,
            animation_min_points: config.animation_min_points,
        }
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    pub fn with_close(mut self, enabled: bool) -> Self {
        self.show_close = enabled;
        self
    }

    pub fn with_short_ma(mut self, enabled: bool) -> Self {
        self.show_short_ma = enabled;
        self
    }

    pub fn with_long_ma(mut self, enabled: bool) -> Self {
        self.show_long_ma = enabled;
        self
    }

    pub fn with_volume(mut self, enabled: bool) -> Self {
        self.show_volume = enabled;
        self
    }

    pub fn with_drawdown_highlight(mut self, enabled: bool) -> Self {
        self.highlight_drawdown = enabled;
        self
    }

    pub fn with_animation(mut self, enabled: bool) -> Self {
        self.animate = enabled;
        self
    }

    /// 차트 제목 (`<회사명> 추이`).
    pub fn chart_title(&self) -> String {
        match &self.company {
            Some(name) => format!("{name} 추이"),
            None => "추이".to_string(),
        }
    }

    fn animation_generator(&self) -> AnimationFrameGenerator {
        AnimationFrameGenerator::new(self.animation_max_points, self.animation_min_points)
    }
}

/// 분석 중 사용자에게 알릴 사항. 분석은 계속 진행됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notice {
    /// 데이터가 기간보다 짧아 이동평균을 끔
    IndicatorDisabled { name: String, window: usize },
    /// 포인트가 부족해 애니메이션을 만들지 않음
    AnimationSkipped { points: usize },
}

impl Notice {
    /// 사용자 안내 문구.
    pub fn message(&self) -> String {
        match self {
            Notice::IndicatorDisabled { name, window } => {
                format!("데이터가 {window}일보다 짧아 {name}를 표시할 수 없습니다.")
            }
            Notice::AnimationSkipped { points } => {
                format!("애니메이션을 만들기에 데이터가 너무 적습니다 ({points}개).")
            }
        }
    }
}

/// 분석 결과.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub summary: SummaryReport,
    pub chart: ChartSpec,
    #[serde(default)]
    pub notices: Vec<Notice>,
}

/// 시계열을 분석합니다.
///
/// # Errors
/// - 종가/이동평균이 모두 꺼져 있으면 `EmptySelection`
/// - 이동평균 기간이 0이면 `Config`
/// - 종가가 너무 커서 합계나 수익률을 표현할 수 없으면 `Overflow`
#[instrument(skip_all, fields(points = series.len(), company = ?options.company))]
pub fn analyze(series: &PriceSeries, options: &AnalysisOptions) -> ViewerResult<AnalysisReport> {
    let closes = series.closes();
    let mut notices = Vec::new();

    let trend = TrendIndicators::new();
    let short_params = SmaParams {
        period: options.short_ma_window,
    };
    let long_params = SmaParams {
        period: options.long_ma_window,
    };
    let short_ma = trend.sma(closes, short_params)?;
    let long_ma = trend.sma(closes, long_params)?;

    let mut show_short_ma = options.show_short_ma;
    let mut show_long_ma = options.show_long_ma;
    for (enabled, params, values) in [
        (&mut show_short_ma, short_params, &short_ma),
        (&mut show_long_ma, long_params, &long_ma),
    ] {
        if *enabled && is_all_undefined(values) {
            *enabled = false;
            info!(window = params.period, "not enough data, moving average disabled");
            notices.push(Notice::IndicatorDisabled {
                name: params.label(),
                window: params.period,
            });
        }
    }

    if !(options.show_close || show_short_ma || show_long_ma) {
        return Err(ViewerError::EmptySelection);
    }

    let drawdown = DrawdownAnalyzer::new().analyze(closes)?;
    let summary = SummaryReport::build(series, &drawdown, options.return_lookbacks)?;

    let mut builder = ChartSpecBuilder::new(series)
        .title(options.chart_title())
        .show_close(options.show_close)
        .moving_average(short_params.period, &short_ma, show_short_ma)
        .moving_average(long_params.period, &long_ma, show_long_ma)
        .volume(options.show_volume)
        .highlight_drawdown(options.highlight_drawdown);
    if options.animate {
        builder = builder.animate(options.animation_generator());
    }
    let chart = builder.build()?;

    if options.animate && chart.animation.is_none() {
        info!(points = series.len(), "not enough data, animation skipped");
        notices.push(Notice::AnimationSkipped {
            points: series.len(),
        });
    }

    Ok(AnalysisReport {
        summary,
        chart,
        notices,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::TraceRole;
    use chrono::{Duration, NaiveDate};
    use rust_decimal::Decimal;
    use stockview_core::{DailyBar, ErrorKind};

    fn series(n: usize) -> PriceSeries {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        PriceSeries::new(
            (0..n)
                .map(|i| {
                    let close = Decimal::from(1000 + (i as i64 % 7) * 10 - (i as i64 % 3) * 25);
                    DailyBar::from_close(start + Duration::days(i as i64), close)
                        .with_volume(10_000 + i as u64)
                })
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_default_options() {
        let options = AnalysisOptions::default();
        assert!(options.show_close);
        assert!(options.show_short_ma);
        assert!(!options.show_long_ma);
        assert!(!options.show_volume);
        assert!(options.highlight_drawdown);
        assert!(!options.animate);
        assert_eq!(options.short_ma_window, 20);
        assert_eq!(options.long_ma_window, 60);
    }

    #[test]
    fn test_short_series_disables_moving_averages() {
        let options = AnalysisOptions::default().with_long_ma(true);
        let report = analyze(&series(15), &options).unwrap();

        assert_eq!(
            report.notices,
            vec![
                Notice::IndicatorDisabled {
                    name: "MA20".to_string(),
                    window: 20
                },
                Notice::IndicatorDisabled {
                    name: "MA60".to_string(),
                    window: 60
                },
            ]
        );
        let ma20 = report
            .chart
            .trace(TraceRole::MovingAverage { window: 20 })
            .unwrap();
        assert!(!ma20.visible);
        assert!(ma20.y.iter().all(Option::is_none));
    }

    #[test]
    fn test_disabled_indicator_without_request_has_no_notice() {
        let report = analyze(&series(30), &AnalysisOptions::default()).unwrap();
        assert!(report.notices.is_empty());
        assert!(report
            .chart
            .trace(TraceRole::MovingAverage { window: 20 })
            .unwrap()
            .visible);
    }

    #[test]
    fn test_empty_selection_rejected() {
        let options = AnalysisOptions::default()
            .with_close(false)
            .with_short_ma(false);
        let err = analyze(&series(30), &options).unwrap_err();
        assert!(matches!(err, ViewerError::EmptySelection));
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_auto_disable_can_empty_selection() {
        // 종가를 끄고 MA20만 요청했는데 데이터가 부족한 경우
        let options = AnalysisOptions::default().with_close(false);
        let err = analyze(&series(5), &options).unwrap_err();
        assert!(matches!(err, ViewerError::EmptySelection));
    }

    #[test]
    fn test_animation_skipped_notice() {
        let options = AnalysisOptions::default().with_animation(true);
        let report = analyze(&series(9), &options).unwrap();
        assert!(report.chart.animation.is_none());
        assert!(report
            .notices
            .contains(&Notice::AnimationSkipped { points: 9 }));
    }

    #[test]
    fn test_highlight_toggle() {
        let off = AnalysisOptions::default().with_drawdown_highlight(false);
        assert!(analyze(&series(30), &off).unwrap().chart.highlight.is_none());

        let on = AnalysisOptions::default();
        assert!(analyze(&series(30), &on).unwrap().chart.highlight.is_some());
    }

    #[test]
    fn test_chart_title_uses_company() {
        let options = AnalysisOptions::default().with_company("삼성전자");
        let report = analyze(&series(3), &options).unwrap();
        assert_eq!(report.chart.layout.title, "삼성전자 추이");
    }

    #[test]
    fn test_notice_message() {
        let notice = Notice::IndicatorDisabled {
            name: "MA60".to_string(),
            window: 60,
        };
        assert!(notice.message().contains("MA60"));
    }

    #[test]
    fn test_extreme_closes_fail_without_panic() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let s = PriceSeries::new(vec![
            DailyBar::from_close(start, Decimal::MAX),
            DailyBar::from_close(start + Duration::days(1), Decimal::MAX),
        ])
        .unwrap();

        let err = analyze(&s, &AnalysisOptions::default()).unwrap_err();
        assert!(matches!(err, ViewerError::Overflow { .. }));
        assert_eq!(err.kind(), ErrorKind::Data);
    }
}
