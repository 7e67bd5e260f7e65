//! 설정 관리.
//!
//! TOML 파일을 읽고 `STOCKVIEW__<SECTION>__<KEY>` 환경 변수로 덮어씁니다.
//! 모든 섹션은 기본값을 가지므로 파일 없이도 `AppConfig::default()`를 사용할 수 있습니다.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 애플리케이션 설정.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// 로깅 설정
    #[serde(default)]
    pub logging: LoggingConfig,
    /// 분석 파라미터
    #[serde(default)]
    pub analysis: AnalysisConfig,
    /// 외부 데이터 캐시 TTL
    #[serde(default)]
    pub cache: CacheConfig,
    /// 로컬 데이터 위치
    #[serde(default)]
    pub data: DataConfig,
    /// 뉴스 헤드라인 설정
    #[serde(default)]
    pub news: NewsConfig,
}

/// 로깅 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 로그 레벨
    pub level: String,
    /// 로그 형식 (pretty, json, compact)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// 최근 흐름 요약에 쓰이는 조회 기간 (거래일 수).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ReturnLookbacks {
    /// 1주일
    pub week: usize,
    /// 1개월
    pub month: usize,
    /// 3개월
    pub quarter: usize,
}

impl Default for ReturnLookbacks {
    fn default() -> Self {
        Self {
            week: 5,
            month: 20,
            quarter: 60,
        }
    }
}

/// 분석 파라미터.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalysisConfig {
    /// 단기 이동평균 기간
    #[serde(default = "default_short_ma")]
    pub short_ma_window: usize,
    /// 장기 이동평균 기간
    #[serde(default = "default_long_ma")]
    pub long_ma_window: usize,
    /// 기간 수익률 조회 기간
    #[serde(default)]
    pub return_lookbacks: ReturnLookbacks,
    /// 애니메이션에 사용할 최대 포인트 수 (최근 약 1년)
    #[serde(default = "default_animation_max_points")]
    pub animation_max_points: usize,
    /// 첫 프레임의 포인트 수
    #[serde(default = "default_animation_min_points")]
    pub animation_min_points: usize,
}

fn default_short_ma() -> usize {
    20
}
fn default_long_ma() -> usize {
    60
}
fn default_animation_max_points() -> usize {
    260
}
fn default_animation_min_points() -> usize {
    10
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            short_ma_window: default_short_ma(),
            long_ma_window: default_long_ma(),
            return_lookbacks: ReturnLookbacks::default(),
            animation_max_points: default_animation_max_points(),
            animation_min_points: default_animation_min_points(),
        }
    }
}

/// 외부 호출 메모이제이션 TTL (초).
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CacheConfig {
    /// 가격 이력
    pub price_ttl_secs: u64,
    /// 상장사 목록
    pub company_list_ttl_secs: u64,
    /// 뉴스 헤드라인
    pub news_ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            price_ttl_secs: 600,
            company_list_ttl_secs: 3600,
            news_ttl_secs: 600,
        }
    }
}

/// 로컬 데이터 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DataConfig {
    /// 종목별 CSV(`<code>.csv`)가 있는 디렉토리
    pub data_dir: PathBuf,
    /// 상장사 목록 CSV 파일명 (`data_dir` 기준)
    pub company_list_file: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            company_list_file: "krx_companies.csv".to_string(),
        }
    }
}

impl DataConfig {
    /// 상장사 목록 파일의 전체 경로.
    pub fn company_list_path(&self) -> PathBuf {
        self.data_dir.join(&self.company_list_file)
    }
}

/// 뉴스 헤드라인 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct NewsConfig {
    /// 쿼리당 가져올 최대 헤드라인 수
    pub limit: usize,
    /// 이 개수 이상이면 해당 쿼리 결과로 확정
    pub min_results: usize,
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            limit: 10,
            min_results: 5,
        }
    }
}

impl AppConfig {
    /// 파일과 환경 변수에서 설정을 로드합니다.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(
                config::Environment::with_prefix("STOCKVIEW")
                    .separator("__")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }

    /// 파일이 있으면 로드하고, 없으면 환경 변수만 적용한 기본값을 사용합니다.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, config::ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            return Self::load(path);
        }

        tracing::debug!(path = %path.display(), "설정 파일이 없어 기본값을 사용합니다");
        config::Config::builder()
            .add_source(
                config::Environment::with_prefix("STOCKVIEW")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// 기본 경로에서 설정을 로드합니다.
    pub fn load_default() -> Result<Self, config::ConfigError> {
        Self::load("config/default.toml")
    }
}
