//! 뉴스 헤드라인 선택.
//!
//! 호출자가 준 검색어를 순서대로 조회하고, 결과가 `min_results`개 이상인
//! 첫 검색어에서 멈춥니다. 끝까지 충분한 결과가 없으면 마지막으로 조회한
//! 검색어의 결과를 그대로 씁니다.

use stockview_core::{Headline, NewsConfig};
use tracing::{debug, warn};

use crate::provider::NewsSource;

/// 선택된 헤드라인과 그 검색어.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadlineSelection {
    /// 마지막으로 조회한 검색어 (검색어가 없었으면 None)
    pub query: Option<String>,
    pub headlines: Vec<Headline>,
}

impl HeadlineSelection {
    pub fn is_empty(&self) -> bool {
        self.headlines.is_empty()
    }
}

/// 충분한 결과가 나올 때까지 검색어를 차례로 조회합니다.
///
/// 조회 실패는 경고만 남기고 결과 없음으로 취급해 다음 검색어로 넘어갑니다.
pub async fn fetch_first_sufficient<N>(
    source: &N,
    queries: &[String],
    config: &NewsConfig,
) -> HeadlineSelection
where
    N: NewsSource + ?Sized,
{
    let mut selection = HeadlineSelection::default();

    for query in queries {
        let headlines = match source.fetch_headlines(query, config.limit).await {
            Ok(headlines) => headlines,
            Err(e) => {
                warn!(query = %query, error = %e, "headline fetch failed");
                Vec::new()
            }
        };
        debug!(query = %query, found = headlines.len(), "headlines fetched");

        selection = HeadlineSelection {
            query: Some(query.clone()),
            headlines,
        };
        if selection.headlines.len() >= config.min_results {
            break;
        }
    }

    selection
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CachedNewsSource;
    use crate::error::{Result, SourceError};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use stockview_core::CacheConfig;

    /// 검색어별로 정해진 개수의 헤드라인을 돌려주는 제공자.
    #[derive(Default)]
    struct ScriptedNews {
        counts: HashMap<String, usize>,
        failing: Vec<String>,
        calls: AtomicUsize,
    }

    impl ScriptedNews {
        fn with(mut self, query: &str, count: usize) -> Self {
            self.counts.insert(query.to_string(), count);
            self
        }

        fn failing(mut self, query: &str) -> Self {
            self.failing.push(query.to_string());
            self
        }
    }

    #[async_trait]
    impl NewsSource for ScriptedNews {
        async fn fetch_headlines(&self, query: &str, limit: usize) -> Result<Vec<Headline>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.failing.iter().any(|q| q == query) {
                return Err(SourceError::Timeout(query.to_string()));
            }
            let count = self.counts.get(query).copied().unwrap_or(0).min(limit);
            Ok((0..count)
                .map(|i| Headline {
                    title: format!("{query} {i}"),
                    link: format!("https://example.com/{i}"),
                    source: String::new(),
                    published_at: None,
                })
                .collect())
        }
    }

    fn queries(list: &[&str]) -> Vec<String> {
        list.iter().map(|q| q.to_string()).collect()
    }

    #[tokio::test]
    async fn test_stops_at_first_sufficient_query() {
        let source = ScriptedNews::default()
            .with("삼성전자 주가", 2)
            .with("삼성전자", 7)
            .with("005930", 9);

        let selection = fetch_first_sufficient(
            &source,
            &queries(&["삼성전자 주가", "삼성전자", "005930"]),
            &NewsConfig::default(),
        )
        .await;

        assert_eq!(selection.query.as_deref(), Some("삼성전자"));
        assert_eq!(selection.headlines.len(), 7);
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_keeps_last_query_when_none_sufficient() {
        let source = ScriptedNews::default().with("a", 4).with("b", 1);

        let selection =
            fetch_first_sufficient(&source, &queries(&["a", "b"]), &NewsConfig::default()).await;

        assert_eq!(selection.query.as_deref(), Some("b"));
        assert_eq!(selection.headlines.len(), 1);
    }

    #[tokio::test]
    async fn test_limit_passed_to_source() {
        let source = ScriptedNews::default().with("a", 50);
        let config = NewsConfig {
            limit: 3,
            min_results: 3,
        };

        let selection = fetch_first_sufficient(&source, &queries(&["a"]), &config).await;
        assert_eq!(selection.headlines.len(), 3);
    }

    #[tokio::test]
    async fn test_failed_query_falls_through() {
        let source = ScriptedNews::default().failing("a").with("b", 5);

        let selection =
            fetch_first_sufficient(&source, &queries(&["a", "b"]), &NewsConfig::default()).await;
        assert_eq!(selection.query.as_deref(), Some("b"));
        assert_eq!(selection.headlines.len(), 5);
    }

    #[tokio::test]
    async fn test_no_queries_gives_empty_selection() {
        let selection =
            fetch_first_sufficient(&ScriptedNews::default(), &[], &NewsConfig::default()).await;
        assert!(selection.is_empty());
        assert!(selection.query.is_none());
    }

    #[tokio::test]
    async fn test_repeated_selection_served_from_cache() {
        let news = CachedNewsSource::from_config(
            ScriptedNews::default().with("a", 6),
            &CacheConfig::default(),
        );
        let qs = queries(&["a"]);

        fetch_first_sufficient(&news, &qs, &NewsConfig::default()).await;
        let selection = fetch_first_sufficient(&news, &qs, &NewsConfig::default()).await;

        assert_eq!(selection.headlines.len(), 6);
        assert_eq!(news.stats().hits, 1);
        assert_eq!(news.stats().misses, 1);
    }
}
