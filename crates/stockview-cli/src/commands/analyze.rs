//! 종목 분석 명령.
//!
//! 종목코드 검증 → 기간 검증 → 일봉 조회 → 분석 → 출력 순서로 진행합니다.
//! 종목코드와 기간은 조회 전에 검증하므로 잘못된 입력은 데이터 소스까지 가지 않습니다.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::ValueEnum;
use stockview_analytics::format::{
    format_change, format_optional_pct, format_pct, format_price, format_return, format_volume,
};
use stockview_analytics::{analyze, AnalysisOptions, AnalysisReport};
use stockview_core::{analysis_span, AppConfig, DateRange, PriceSeries, StockCode};
use stockview_data::{CompanyDirectory, PriceSource};
use tracing::{info, warn};

/// 표에 보여줄 최근 거래일 수.
const RECENT_ROWS: usize = 10;

/// 출력 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// 요약 카드 + 최근 일봉 표
    #[default]
    Table,
    /// 분석 결과 전체 (JSON)
    Json,
}

/// 분석 요청.
#[derive(Debug, Clone)]
pub struct AnalyzeConfig {
    pub code: String,
    pub from: String,
    pub to: String,
    pub show_close: bool,
    pub show_short_ma: bool,
    pub show_long_ma: bool,
    pub show_volume: bool,
    pub highlight_drawdown: bool,
    pub animate: bool,
    pub format: OutputFormat,
}

/// 날짜 문자열 파싱 (YYYY-MM-DD).
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid date format: {}. Expected YYYY-MM-DD", s))
}

/// 분석을 실행하고 출력할 문자열을 반환합니다.
pub async fn run_analyze<P, D>(
    app: &AppConfig,
    prices: &P,
    directory: &D,
    request: &AnalyzeConfig,
) -> Result<String>
where
    P: PriceSource,
    D: CompanyDirectory,
{
    let code = StockCode::parse(&request.code)?;
    let range = DateRange::new(parse_date(&request.from)?, parse_date(&request.to)?)?;

    let company = lookup_company_name(directory, &code).await;
    let display_name = company.clone().unwrap_or_else(|| code.to_string());

    let rows = prices
        .fetch_price_history(&code, range)
        .await
        .with_context(|| format!("{display_name} ({code}) 주가 데이터를 불러오지 못했습니다"))?;
    let series = PriceSeries::from_raw(rows)?;

    let options = AnalysisOptions::from_config(&app.analysis)
        .with_company(display_name.clone())
        .with_close(request.show_close)
        .with_short_ma(request.show_short_ma)
        .with_long_ma(request.show_long_ma)
        .with_volume(request.show_volume)
        .with_drawdown_highlight(request.highlight_drawdown)
        .with_animation(request.animate);

    let report = {
        let span = analysis_span!("analyze", code, display_name);
        let _guard = span.enter();
        analyze(&series, &options)?
    };
    info!(code = %code, points = series.len(), "analysis completed");

    match request.format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&report)?),
        OutputFormat::Table => Ok(render_table(&display_name, &code, range, &series, &report)),
    }
}

/// 상장사 목록에서 회사명을 찾습니다. 목록을 불러오지 못해도 분석은 계속합니다.
async fn lookup_company_name<D: CompanyDirectory>(directory: &D, code: &StockCode) -> Option<String> {
    match directory.list_companies().await {
        Ok(companies) => companies
            .into_iter()
            .find(|c| &c.code == code)
            .map(|c| c.name),
        Err(e) => {
            warn!(error = %e, "상장사 목록 로딩 실패");
            None
        }
    }
}

/// 요약 카드, 최근 흐름, 최근 일봉 표를 텍스트로 그립니다.
pub fn render_table(
    name: &str,
    code: &StockCode,
    range: DateRange,
    series: &PriceSeries,
    report: &AnalysisReport,
) -> String {
    let summary = &report.summary;
    let mut out = String::new();

    out.push_str(&format!(
        "[{name}] 주가 데이터 (코드: {code})  {} ~ {}\n\n",
        range.start(),
        range.end()
    ));

    let cards = [
        (
            "현재가",
            format!(
                "{}  {}",
                format_price(summary.last_close),
                format_change(summary.day_over_day_change, summary.day_over_day_change_pct)
            ),
        ),
        ("기간 수익률", format_pct(summary.period_return_pct)),
        ("최고가(종가)", format_price(summary.max_close)),
        ("최저가(종가)", format_price(summary.min_close)),
        ("최대낙폭(MDD)", format_pct(summary.mdd_pct)),
        ("변동성(일간)", format_optional_pct(summary.volatility_pct)),
    ];
    for (label, value) in cards {
        out.push_str(&format!("{label:<14}{value}\n"));
    }

    out.push_str("\n최근 흐름 요약\n");
    out.push_str(&format!(
        "1주일 {}  |  1개월 {}  |  3개월 {}\n",
        format_return(summary.recent.return_1w),
        format_return(summary.recent.return_1m),
        format_return(summary.recent.return_3m),
    ));

    if let Some(region) = &report.chart.highlight {
        out.push_str(&format!(
            "\n{}: {} → {}\n",
            region.label, region.x0, region.x1
        ));
    }

    out.push_str("\n날짜        시가      고가      저가      종가      거래량\n");
    let bars = series.bars();
    for bar in &bars[bars.len().saturating_sub(RECENT_ROWS)..] {
        out.push_str(&format!(
            "{}  {:>8}  {:>8}  {:>8}  {:>8}  {:>12}\n",
            bar.date,
            format_price(bar.open),
            format_price(bar.high),
            format_price(bar.low),
            format_price(bar.close),
            format_volume(bar.volume),
        ));
    }

    if let Some(animation) = &report.chart.animation {
        out.push_str(&format!("\n{}\n", animation.note));
    }

    for notice in &report.notices {
        out.push_str(&format!("\n⚠ {}", notice.message()));
    }
    if !report.notices.is_empty() {
        out.push('\n');
    }

    out
}
