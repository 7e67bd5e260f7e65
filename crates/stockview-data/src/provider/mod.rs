//! 외부 데이터 제공자 추상화.
//!
//! 분석 코어가 소비하는 데이터(일봉, 상장사 목록, 뉴스 헤드라인)를
//! 데이터 소스 중립적인 인터페이스로 제공합니다.
//! 각 소스별로 이 trait들을 구현하면 분석 코드는 그대로 사용할 수 있습니다.

pub mod file;

use async_trait::async_trait;
use stockview_core::{Company, DateRange, Headline, RawBar, StockCode};

use crate::error::Result;

pub use file::{CsvCompanyDirectory, CsvPriceSource};

/// 일봉 가격 제공자.
///
/// # 구현 예시
///
/// ```ignore
/// pub struct KrxPriceSource {
///     client: Arc<KrxClient>,
/// }
///
/// #[async_trait]
/// impl PriceSource for KrxPriceSource {
///     async fn fetch_price_history(&self, code: &StockCode, range: DateRange) -> Result<Vec<RawBar>> {
///         // API 호출 및 변환
///     }
/// }
/// ```
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// 기간 내 일봉 조회.
    ///
    /// 날짜 오름차순으로 반환해야 합니다. 이 계층은 정렬하지 않으며
    /// 순서가 잘못된 데이터는 시계열 생성 시 에러가 됩니다.
    ///
    /// # Errors
    ///
    /// - `SourceError::NotFound`: 종목 데이터 없음
    /// - `SourceError::Network` / `SourceError::Timeout`: 재시도 가능한 실패
    async fn fetch_price_history(&self, code: &StockCode, range: DateRange)
        -> Result<Vec<RawBar>>;
}

/// 상장사 목록 제공자.
#[async_trait]
pub trait CompanyDirectory: Send + Sync {
    /// 전체 상장사 목록 조회.
    async fn list_companies(&self) -> Result<Vec<Company>>;
}

/// 뉴스 헤드라인 제공자.
///
/// 검색어 구성은 호출자의 몫이며 제공자는 받은 검색어로 조회만 합니다.
#[async_trait]
pub trait NewsSource: Send + Sync {
    /// 최근 헤드라인 최대 `limit`개 조회. 결과가 없으면 빈 벡터.
    async fn fetch_headlines(&self, query: &str, limit: usize) -> Result<Vec<Headline>>;
}
