//! Read-through TTL cache over the catalog source.
//!
//! Freshness is checked when a caller asks for rows; there is no background
//! refresh task. The cached state is swapped as a whole `Arc<CacheState>`, so
//! readers see either the previous load or the next one, never a mix.
//!
//! Concurrent callers that all observe a stale state each fetch the source.
//! The last fetch to complete wins.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::csv::{Row, parse_rows};
use crate::Error;

/// Supplies the raw CSV text of the catalog.
#[async_trait]
pub trait CsvSource: Send + Sync {
    /// Fetch the current CSV text, failing with a transport error.
    async fn fetch_csv(&self) -> Result<String, Error>;
}

/// Wall-clock source in whole seconds since the Unix epoch.
pub trait Clock: Send + Sync {
    fn now(&self) -> i64;
}

/// [`Clock`] backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        Utc::now().timestamp()
    }
}

/// Snapshot of the last successful load.
#[derive(Debug, Clone, Default)]
pub struct CacheState {
    /// Seconds since epoch of the load, `0` when never loaded.
    pub loaded_at: i64,
    pub rows: Arc<Vec<Row>>,
}

impl CacheState {
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Whether `state` must be reloaded at `now` under `ttl_seconds`.
///
/// An empty catalog is always stale, as is any state once a zero or negative TTL applies.
pub fn is_stale(state: &CacheState, ttl_seconds: i64, now: i64) -> bool {
    state.rows.is_empty() || now.saturating_sub(state.loaded_at) >= ttl_seconds
}

/// Lazily refreshed catalog rows.
pub struct FreshnessCache {
    state: RwLock<Arc<CacheState>>,
    source: Arc<dyn CsvSource>,
    clock: Arc<dyn Clock>,
    ttl_seconds: i64,
}

impl FreshnessCache {
    /// Create an empty cache reading the system clock.
    pub fn new(source: Arc<dyn CsvSource>, ttl_seconds: i64) -> Self {
        Self::with_clock(source, ttl_seconds, Arc::new(SystemClock))
    }

    /// Create an empty cache with an injected clock.
    pub fn with_clock(source: Arc<dyn CsvSource>, ttl_seconds: i64, clock: Arc<dyn Clock>) -> Self {
        Self { state: RwLock::new(Arc::new(CacheState::empty())), source, clock, ttl_seconds }
    }

    pub fn ttl_seconds(&self) -> i64 {
        self.ttl_seconds
    }

    /// Current state without touching the source.
    pub async fn snapshot(&self) -> Arc<CacheState> {
        self.state.read().await.clone()
    }

    /// Return the current rows, reloading from the source first if they are stale.
    ///
    /// # Errors
    ///
    /// Returns the source error if a reload was needed and the fetch failed.
    /// The cached state is left as it was.
    pub async fn ensure_fresh(&self) -> Result<Arc<Vec<Row>>, Error> {
        let now = self.clock.now();
        let current = self.snapshot().await;

        if !is_stale(&current, self.ttl_seconds, now) {
            tracing::debug!(
                age_seconds = now - current.loaded_at,
                rows = current.rows.len(),
                "catalog cache hit"
            );
            return Ok(current.rows.clone());
        }

        self.reload(now).await
    }

    /// Reload from the source regardless of age.
    ///
    /// # Errors
    ///
    /// Same failure semantics as [`FreshnessCache::ensure_fresh`].
    pub async fn refresh(&self) -> Result<Arc<Vec<Row>>, Error> {
        let now = self.clock.now();
        self.reload(now).await
    }

    async fn reload(&self, now: i64) -> Result<Arc<Vec<Row>>, Error> {
        let csv_text = self.source.fetch_csv().await.inspect_err(|e| {
            tracing::warn!(error = %e, "catalog reload failed; keeping previous state");
        })?;

        let rows = Arc::new(parse_rows(&csv_text));
        let next = Arc::new(CacheState { loaded_at: now, rows: rows.clone() });

        *self.state.write().await = next;

        tracing::info!(rows = rows.len(), loaded_at = now, "catalog reloaded");
        Ok(rows)
    }
}
