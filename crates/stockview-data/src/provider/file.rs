//! CSV 파일 기반 제공자.
//!
//! - 일봉: `<data_dir>/<종목코드>.csv`, 헤더 `date,open,high,low,close,volume`
//! - 상장사 목록: 헤더 `name,code` (또는 `회사명,종목코드`)
//!
//! 헤더 이름은 대소문자를 구분하지 않으며 열 순서는 자유입니다.
//! `volume` 열은 생략할 수 있고, 빈 칸은 값 없음으로 읽습니다.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use stockview_core::{Company, DataConfig, DateRange, RawBar, StockCode};
use tracing::{debug, instrument};

use super::{CompanyDirectory, PriceSource};
use crate::error::{Result, SourceError};

/// 헤더에서 열 위치를 찾습니다 (대소문자 무시, 후보 이름 중 첫 일치).
fn column_index(headers: &csv::StringRecord, names: &[&str]) -> Option<usize> {
    headers.iter().position(|h| {
        let h = h.trim();
        names.iter().any(|name| h.eq_ignore_ascii_case(name))
    })
}

fn required_column(headers: &csv::StringRecord, names: &[&str]) -> Result<usize> {
    column_index(headers, names)
        .ok_or_else(|| SourceError::Csv(format!("missing column '{}'", names[0])))
}

/// 빈 칸은 None, 그 외에는 Decimal로 파싱합니다.
fn parse_decimal(raw: Option<&str>, column: &str, line: u64) -> Result<Option<Decimal>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => Decimal::from_str(value).map(Some).map_err(|_| {
            SourceError::Parse(format!("{column} '{value}' at line {line}"))
        }),
    }
}

fn parse_volume(raw: Option<&str>, line: u64) -> Result<Option<i64>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<i64>()
            .map(Some)
            .map_err(|_| SourceError::Parse(format!("volume '{value}' at line {line}"))),
    }
}

/// CSV 파일에서 기간 내 일봉을 읽습니다. 파일 순서를 그대로 유지합니다.
pub fn read_price_csv<P: AsRef<Path>>(path: P, range: DateRange) -> Result<Vec<RawBar>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(path.as_ref())?;

    let headers = reader.headers()?.clone();
    let date_col = required_column(&headers, &["date", "날짜"])?;
    let close_col = required_column(&headers, &["close", "종가"])?;
    let open_col = column_index(&headers, &["open", "시가"]);
    let high_col = column_index(&headers, &["high", "고가"]);
    let low_col = column_index(&headers, &["low", "저가"]);
    let volume_col = column_index(&headers, &["volume", "거래량"]);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let field = |col: Option<usize>| col.and_then(|c| record.get(c));

        let raw_date = record.get(date_col).unwrap_or_default();
        let date = NaiveDate::parse_from_str(raw_date, "%Y-%m-%d")
            .map_err(|_| SourceError::Parse(format!("date '{raw_date}' at line {line}")))?;
        if !range.contains(date) {
            continue;
        }

        rows.push(RawBar {
            date,
            open: parse_decimal(field(open_col), "open", line)?,
            high: parse_decimal(field(high_col), "high", line)?,
            low: parse_decimal(field(low_col), "low", line)?,
            close: parse_decimal(field(Some(close_col)), "close", line)?,
            volume: parse_volume(field(volume_col), line)?,
        });
    }

    Ok(rows)
}

/// 상장사 목록 CSV를 읽습니다.
///
/// 숫자로만 된 종목코드만 남기고 6자리로 맞춥니다. 6자리를 넘는 코드와
/// 회사명이 빈 행은 건너뜁니다.
pub fn read_company_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Company>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(path.as_ref())?;

    let headers = reader.headers()?.clone();
    let name_col = required_column(&headers, &["name", "회사명"])?;
    let code_col = required_column(&headers, &["code", "종목코드"])?;

    let mut companies = Vec::new();
    let mut skipped = 0usize;
    for record in reader.records() {
        let record = record?;
        let name = record.get(name_col).unwrap_or_default();
        let code = record.get(code_col).unwrap_or_default();

        match StockCode::parse(code) {
            Ok(code) if !name.is_empty() => companies.push(Company::new(name, code)),
            _ => skipped += 1,
        }
    }

    debug!(count = companies.len(), skipped, "company list loaded");
    Ok(companies)
}

/// 로컬 CSV 디렉터리에서 일봉을 읽는 제공자.
#[derive(Debug, Clone)]
pub struct CsvPriceSource {
    data_dir: PathBuf,
}

impl CsvPriceSource {
    /// 새로운 제공자 생성.
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    /// 데이터 설정에서 생성.
    pub fn from_config(config: &DataConfig) -> Self {
        Self::new(&config.data_dir)
    }

    /// 종목 파일 경로 (`<data_dir>/005930.csv`).
    pub fn file_path(&self, code: &StockCode) -> PathBuf {
        self.data_dir.join(format!("{}.csv", code.as_str()))
    }
}

#[async_trait]
impl PriceSource for CsvPriceSource {
    #[instrument(skip(self, code), fields(code = %code))]
    async fn fetch_price_history(
        &self,
        code: &StockCode,
        range: DateRange,
    ) -> Result<Vec<RawBar>> {
        let path = self.file_path(code);
        if !path.exists() {
            return Err(SourceError::NotFound(format!(
                "no price data for {code} ({})",
                path.display()
            )));
        }

        let rows = tokio::task::spawn_blocking(move || read_price_csv(path, range))
            .await
            .map_err(|e| SourceError::Io(e.to_string()))??;

        debug!(rows = rows.len(), "price history loaded");
        Ok(rows)
    }
}

/// 로컬 CSV 파일에서 상장사 목록을 읽는 제공자.
#[derive(Debug, Clone)]
pub struct CsvCompanyDirectory {
    path: PathBuf,
}

impl CsvCompanyDirectory {
    /// 새로운 제공자 생성.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// 데이터 설정에서 생성.
    pub fn from_config(config: &DataConfig) -> Self {
        Self::new(config.company_list_path())
    }
}

#[async_trait]
impl CompanyDirectory for CsvCompanyDirectory {
    async fn list_companies(&self) -> Result<Vec<Company>> {
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || read_company_csv(path))
            .await
            .map_err(|e| SourceError::Io(e.to_string()))?
    }
}
