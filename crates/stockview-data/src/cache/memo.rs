//! 제공자 메모이제이션 래퍼.
//!
//! 성공한 결과만 캐시합니다. 실패는 캐시하지 않으므로 다음 호출이 다시 시도합니다.

use async_trait::async_trait;
use stockview_core::{CacheConfig, Company, DateRange, Headline, RawBar, StockCode};
use tracing::debug;

use super::{CacheStats, TtlCache};
use crate::error::Result;
use crate::provider::{CompanyDirectory, NewsSource, PriceSource};

/// 일봉 조회 캐시 (키: 종목코드 + 기간).
pub struct CachedPriceSource<S> {
    inner: S,
    cache: TtlCache<(StockCode, DateRange), Vec<RawBar>>,
}

impl<S: PriceSource> CachedPriceSource<S> {
    /// 초 단위 TTL로 감쌉니다.
    pub fn new(inner: S, ttl_secs: u64) -> Self {
        Self {
            inner,
            cache: TtlCache::with_ttl_secs(ttl_secs),
        }
    }

    /// 캐시 설정의 가격 TTL로 감쌉니다.
    pub fn from_config(inner: S, config: &CacheConfig) -> Self {
        Self::new(inner, config.price_ttl_secs)
    }

    pub fn stats(&self) -> CacheStats {
        self.cache.stats()
    }
}

#[async_trait]
impl<S: PriceSource> PriceSource for CachedPriceSource<S> {
    async fn fetch_price_history(
        &self,
        code: &StockCode,
        range: DateRange,
    ) -> Result<Vec<RawBar>> {
        let key = (code.clone(), range);
        if let Some(rows) = self.cache.get(&key).await {
            debug!(code = %code, "price history cache hit");
            return Ok(rows);
        }

        let rows = self.inner.fetch_price_history(code, range).await?;
        self.cache.insert(key, rows.clone()).await;
        Ok(rows)
    }
}

/// 상장사 목록 캐시.
pub struct CachedCompanyDirectory<D> {
    inner: D,
    cache: TtlCache<(), Vec<Company>>,
}

impl<D: CompanyDirectory> CachedCompanyDirectory<D> {
    pub fn new(inner: D, ttl_secs: u64) -> Self {
        Self {
            inner,
            cache: TtlCache::with_ttl_secs(ttl_secs),
        }
    }

    pub fn from_config(inner: D, config: &CacheConfig) -> Self {
        Self::new(inner, config.company_list_ttl_secs)
    }

    pub fn stats(&self) -> CacheStats {
        self.cache.stats()
    }
}

#[async_trait]
impl<D: CompanyDirectory> CompanyDirectory for CachedCompanyDirectory<D> {
    async fn list_companies(&self) -> Result<Vec<Company>> {
        if let Some(companies) = self.cache.get(&()).await {
            return Ok(companies);
        }

        let companies = self.inner.list_companies().await?;
        self.cache.insert((), companies.clone()).await;
        Ok(companies)
    }
}

/// 뉴스 헤드라인 캐시 (키: 검색어 + 개수).
pub struct CachedNewsSource<N> {
    inner: N,
    cache: TtlCache<(String, usize), Vec<Headline>>,
}

impl<N: NewsSource> CachedNewsSource<N> {
    pub fn new(inner: N, ttl_secs: u64) -> Self {
        Self {
            inner,
            cache: TtlCache::with_ttl_secs(ttl_secs),
        }
    }

    pub fn from_config(inner: N, config: &CacheConfig) -> Self {
        Self::new(inner, config.news_ttl_secs)
    }

    pub fn stats(&self) -> CacheStats {
        self.cache.stats()
    }
}

#[async_trait]
impl<N: NewsSource> NewsSource for CachedNewsSource<N> {
    async fn fetch_headlines(&self, query: &str, limit: usize) -> Result<Vec<Headline>> {
        let key = (query.to_string(), limit);
        if let Some(headlines) = self.cache.get(&key).await {
            return Ok(headlines);
        }

        let headlines = self.inner.fetch_headlines(query, limit).await?;
        self.cache.insert(key, headlines.clone()).await;
        Ok(headlines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SourceError;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    /// 호출 횟수를 세는 가짜 제공자.
    #[derive(Default)]
    struct CountingSource {
        calls: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl PriceSource for CountingSource {
        async fn fetch_price_history(
            &self,
            _code: &StockCode,
            range: DateRange,
        ) -> Result<Vec<RawBar>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(SourceError::Network("connection reset".to_string()));
            }
            Ok(vec![RawBar {
                date: range.start(),
                open: None,
                high: None,
                low: None,
                close: Some(dec!(100)),
                volume: None,
            }])
        }
    }

    #[async_trait]
    impl NewsSource for CountingSource {
        async fn fetch_headlines(&self, query: &str, _limit: usize) -> Result<Vec<Headline>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![Headline {
                title: format!("{query} 실적 발표"),
                link: "https://example.com/news/1".to_string(),
                source: String::new(),
                published_at: None,
            }])
        }
    }

    fn range(day: u32) -> DateRange {
        let start = NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
        DateRange::new(start, start).unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn test_price_cache_keyed_by_parameters() {
        let source = CachedPriceSource::new(CountingSource::default(), 600);
        let code = StockCode::parse("005930").unwrap();

        source.fetch_price_history(&code, range(2)).await.unwrap();
        source.fetch_price_history(&code, range(2)).await.unwrap();
        assert_eq!(source.inner.calls.load(Ordering::SeqCst), 1);

        // 다른 기간은 다른 키
        source.fetch_price_history(&code, range(3)).await.unwrap();
        assert_eq!(source.inner.calls.load(Ordering::SeqCst), 2);

        tokio::time::advance(Duration::from_secs(601)).await;
        source.fetch_price_history(&code, range(2)).await.unwrap();
        assert_eq!(source.inner.calls.load(Ordering::SeqCst), 3);
        assert_eq!(source.stats().hits, 1);
    }

    #[tokio::test]
    async fn test_failures_are_not_cached() {
        let source = CachedPriceSource::new(
            CountingSource {
                fail: true,
                ..Default::default()
            },
            600,
        );
        let code = StockCode::parse("660").unwrap();

        assert!(source.fetch_price_history(&code, range(2)).await.is_err());
        assert!(source.fetch_price_history(&code, range(2)).await.is_err());
        assert_eq!(source.inner.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_news_cache() {
        let news = CachedNewsSource::new(CountingSource::default(), 600);
        let first = news.fetch_headlines("삼성전자", 10).await.unwrap();
        let second = news.fetch_headlines("삼성전자", 10).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(news.inner.calls.load(Ordering::SeqCst), 1);
    }
}
