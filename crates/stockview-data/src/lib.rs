//! 외부 데이터 접근.
//!
//! 이 crate는 다음을 제공합니다:
//! - 일봉/상장사/뉴스 제공자 trait
//! - 로컬 CSV 기반 일봉 및 상장사 목록 제공자
//! - 시간 제한 메모이제이션 캐시 (제공자 래퍼)
//! - 뉴스 검색어 순차 조회
//! - 상장사 검색

pub mod cache;
pub mod error;
pub mod news;
pub mod provider;
pub mod search;

pub use error::{Result, SourceError};

pub use cache::{
    CacheStats, CachedCompanyDirectory, CachedNewsSource, CachedPriceSource, TtlCache,
};
pub use news::{fetch_first_sufficient, HeadlineSelection};
pub use provider::{CompanyDirectory, CsvCompanyDirectory, CsvPriceSource, NewsSource, PriceSource};
pub use search::{search_companies, BROWSE_LIMIT};
