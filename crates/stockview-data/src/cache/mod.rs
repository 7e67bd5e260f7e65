//! 시간 제한 메모이제이션 캐시.
//!
//! 외부 호출 결과를 `(작업, 파라미터)` 키로 보관하고 항목마다 만료 시각을 둡니다.
//! 분석 코어는 캐시를 사용하지 않으며, 이 계층은 데이터 제공자 바깥을 감쌉니다.
//!
//! 만료 시각은 `tokio::time::Instant` 기준이므로 테스트에서 시간을 멈추고 앞당길 수 있습니다.

pub mod memo;

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use serde::Serialize;
use tokio::sync::RwLock;
use tokio::time::Instant;

pub use memo::{CachedCompanyDirectory, CachedNewsSource, CachedPriceSource};

/// 캐시 통계.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub hit_rate: f64,
}

#[derive(Debug, Clone)]
struct Entry<V> {
    value: V,
    expires_at: Instant,
}

/// 항목별 만료 시각을 가진 메모리 캐시.
#[derive(Debug)]
pub struct TtlCache<K, V> {
    ttl: Duration,
    entries: RwLock<HashMap<K, Entry<V>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    /// 새로운 캐시 생성.
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// 초 단위 TTL로 생성.
    pub fn with_ttl_secs(secs: u64) -> Self {
        Self::new(Duration::from_secs(secs))
    }

    /// 항목 유효 기간.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// 만료되지 않은 값을 반환합니다.
    pub async fn get(&self, key: &K) -> Option<V> {
        let now = Instant::now();
        let entries = self.entries.read().await;
        match entries.get(key) {
            Some(entry) if entry.expires_at > now => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Some(entry.value.clone())
            }
            _ => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    /// 값을 저장합니다. 같은 키의 기존 값은 교체됩니다.
    pub async fn insert(&self, key: K, value: V) {
        let now = Instant::now();
        let mut entries = self.entries.write().await;
        entries.retain(|_, entry| entry.expires_at > now);
        entries.insert(
            key,
            Entry {
                value,
                expires_at: now + self.ttl,
            },
        );
    }

    /// 키 하나를 무효화합니다.
    pub async fn invalidate(&self, key: &K) {
        self.entries.write().await.remove(key);
    }

    /// 모든 항목을 비웁니다.
    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }

    /// 만료되지 않은 항목 수.
    pub async fn len(&self) -> usize {
        let now = Instant::now();
        self.entries
            .read()
            .await
            .values()
            .filter(|entry| entry.expires_at > now)
            .count()
    }

    /// 유효한 항목이 없는지 여부.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// 캐시 통계.
    pub fn stats(&self) -> CacheStats {
        let hits = self.hits.load(Ordering::Relaxed);
        let misses = self.misses.load(Ordering::Relaxed);
        let total = hits + misses;
        CacheStats {
            hits,
            misses,
            hit_rate: if total > 0 {
                hits as f64 / total as f64
            } else {
                0.0
            },
        }
    }
}
