//! 주가 분석 CLI.
//!
//! # 사용 예시
//!
//! ```bash
//! # 삼성전자 2024년 분석 (MA20 + MDD 구간)
//! stockview analyze -c 005930 -f 2024-01-01 -t 2024-12-31
//!
//! # MA60과 거래량까지, JSON으로
//! stockview analyze -c 5930 -f 2024-01-01 -t 2024-12-31 --ma60 --volume --format json
//!
//! # 회사 검색
//! stockview search -k 삼성
//! ```

use std::path::PathBuf;

use anyhow::anyhow;
use clap::{Parser, Subcommand};
use stockview_cli::{run_analyze, run_search, AnalyzeConfig, OutputFormat};
use stockview_core::{init_logging, AppConfig, LogConfig};
use stockview_data::{
    CachedCompanyDirectory, CachedPriceSource, CsvCompanyDirectory, CsvPriceSource,
};
use tracing::error;

#[derive(Parser)]
#[command(name = "stockview")]
#[command(about = "주가 조회 - 요약 지표, 이동평균, 최대낙폭 분석", long_about = None)]
#[command(version)]
struct Cli {
    /// 설정 파일 경로
    #[arg(long, global = true, default_value = "config/default.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 종목 분석
    Analyze {
        /// 종목 코드 (예: 005930, 5930)
        #[arg(short, long)]
        code: String,

        /// 시작 날짜 (YYYY-MM-DD)
        #[arg(short = 'f', long)]
        from: String,

        /// 종료 날짜 (YYYY-MM-DD)
        #[arg(short, long)]
        to: String,

        /// 종가 라인 숨기기
        #[arg(long)]
        no_close: bool,

        /// MA20 숨기기
        #[arg(long)]
        no_ma20: bool,

        /// MA60 표시
        #[arg(long)]
        ma60: bool,

        /// 거래량 표시 (보조축)
        #[arg(long)]
        volume: bool,

        /// MDD 구간 강조 끄기
        #[arg(long)]
        no_mdd: bool,

        /// 종가 애니메이션 (최근 약 1년)
        #[arg(long)]
        animate: bool,

        /// 출력 형식
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// 회사 검색
    Search {
        /// 회사명 검색어 (비우면 목록 앞쪽 200개)
        #[arg(short, long, default_value = "")]
        keyword: String,

        /// 최대 결과 수
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)?;

    init_logging(LogConfig::from_settings(&config.logging)).map_err(|e| anyhow!("{e}"))?;

    let directory = CachedCompanyDirectory::from_config(
        CsvCompanyDirectory::from_config(&config.data),
        &config.cache,
    );

    let result = match cli.command {
        Commands::Analyze {
            code,
            from,
            to,
            no_close,
            no_ma20,
            ma60,
            volume,
            no_mdd,
            animate,
            format,
        } => {
            let prices = CachedPriceSource::from_config(
                CsvPriceSource::from_config(&config.data),
                &config.cache,
            );
            let request = AnalyzeConfig {
                code,
                from,
                to,
                show_close: !no_close,
                show_short_ma: !no_ma20,
                show_long_ma: ma60,
                show_volume: volume,
                highlight_drawdown: !no_mdd,
                animate,
                format,
            };
            run_analyze(&config, &prices, &directory, &request).await
        }
        Commands::Search { keyword, limit } => run_search(&directory, &keyword, limit).await,
    };

    match result {
        Ok(output) => {
            print!("{output}");
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "command failed");
            Err(e)
        }
    }
}
