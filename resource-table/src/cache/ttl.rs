//! Single-value cache with TTL support

use std::future::Future;
use std::time::Duration;

use chrono::DateTime;
use chrono::Utc;
use tokio::sync::Mutex;

/// Default time-to-live: 5 minutes.
pub const DEFAULT_TTL: Duration = Duration::from_secs(300);

/// A cached value with metadata about when it was fetched and when it expires.
#[derive(Debug, Clone)]
pub struct CachedValue<T> {
    /// The cached value.
    pub value: T,
    /// When this value was fetched.
    pub fetched_at: DateTime<Utc>,
    /// When this value expires and should no longer be returned.
    pub expires_at: DateTime<Utc>,
}

impl<T> CachedValue<T> {
    /// Creates a new cached value fetched now, living for `ttl`.
    pub fn with_ttl(value: T, ttl: Duration) -> Self {
        let now = Utc::now();
        let expires_at = now + chrono::Duration::from_std(ttl).unwrap_or(chrono::Duration::zero());
        Self {
            value,
            fetched_at: now,
            expires_at,
        }
    }

    /// Returns `true` if this cached value has expired.
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}

/// Cache for one value with a time-based expiry.
///
/// Concurrent `get_or_fetch` calls are serialised, so at most one fetch runs
/// at a time and later callers reuse its result.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use resource_table::cache::TtlCache;
///
/// # tokio_test_block(async {
/// let profile = TtlCache::new(Duration::from_secs(300));
/// let name: Result<String, ()> = profile.get_or_fetch(|| async { Ok("Abebe".to_string()) }).await;
/// assert_eq!(name.unwrap(), "Abebe");
/// # });
/// # fn tokio_test_block(f: impl std::future::Future<Output = ()>) {
/// #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
/// # }
/// ```
#[derive(Debug)]
pub struct TtlCache<T> {
    ttl: Duration,
    slot: Mutex<Option<CachedValue<T>>>,
}

impl<T: Clone> TtlCache<T> {
    /// Creates an empty cache whose entries live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            slot: Mutex::new(None),
        }
    }

    /// Returns the configured time-to-live.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns the cached value unless it is missing or expired.
    pub async fn get(&self) -> Option<T> {
        let slot = self.slot.lock().await;
        slot.as_ref()
            .filter(|cached| !cached.is_expired())
            .map(|cached| cached.value.clone())
    }

    /// Stores a freshly fetched value.
    pub async fn set(&self, value: T) {
        *self.slot.lock().await = Some(CachedValue::with_ttl(value, self.ttl));
    }

    /// Drops the cached value, forcing the next read to fetch.
    pub async fn invalidate(&self) {
        *self.slot.lock().await = None;
    }

    /// Returns the cached value, or runs `fetch` and caches its result.
    ///
    /// Failed fetches are not cached.
    pub async fn get_or_fetch<F, Fut, E>(&self, fetch: F) -> Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let mut slot = self.slot.lock().await;
        if let Some(cached) = slot.as_ref().filter(|cached| !cached.is_expired()) {
            return Ok(cached.value.clone());
        }

        let value = fetch().await?;
        *slot = Some(CachedValue::with_ttl(value.clone(), self.ttl));
        Ok(value)
    }
}

impl<T: Clone> Default for TtlCache<T> {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;
    use std::sync::atomic::Ordering;

    use super::*;

    #[tokio::test]
    async fn test_get_or_fetch_reuses_fresh_value() {
        let cache = TtlCache::new(Duration::from_secs(60));
        let calls = AtomicUsize::new(0);

        for _ in 0..3 {
            let value: Result<u32, ()> = cache
                .get_or_fetch(|| async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok(7)
                })
                .await;
            assert_eq!(value, Ok(7));
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_zero_ttl_always_refetches() {
        let cache = TtlCache::new(Duration::ZERO);
        cache.set(1).await;
        assert_eq!(cache.get().await, None);

        let value: Result<u32, ()> = cache.get_or_fetch(|| async { Ok(2) }).await;
        assert_eq!(value, Ok(2));
    }

    #[tokio::test]
    async fn test_failed_fetch_is_not_cached() {
        let cache: TtlCache<u32> = TtlCache::default();
        let failed: Result<u32, &str> = cache.get_or_fetch(|| async { Err("offline") }).await;
        assert_eq!(failed, Err("offline"));
        assert_eq!(cache.get().await, None);
    }

    #[tokio::test]
    async fn test_invalidate() {
        let cache = TtlCache::default();
        cache.set("profile").await;
        assert_eq!(cache.get().await, Some("profile"));
        cache.invalidate().await;
        assert_eq!(cache.get().await, None);
    }
}
