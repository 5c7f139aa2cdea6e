//! Cache-or-fetch resolution
//!
//! A cached copy always wins. On a miss the resource is fetched once and
//! written back. Cache failures never fail a resolve: an unreadable entry
//! counts as a miss and a failed write is logged and skipped.

use super::cache::CacheStore;
use super::fetch::{FetchError, Fetcher, Resource};

/// Resolves resources through a cache in front of a fetcher
pub struct Resolver<C, F> {
    cache: C,
    fetcher: F,
}

impl<C: CacheStore, F: Fetcher> Resolver<C, F> {
    pub fn new(cache: C, fetcher: F) -> Self {
        Self { cache, fetcher }
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    /// Returns the resource body, making at most one network request
    pub fn resolve(&self, resource: &Resource) -> Result<Vec<u8>, FetchError> {
        let key = resource.cache_key();

        match self.cache.get(&key) {
            Ok(Some(content)) => {
                tracing::debug!(key = %key, bytes = content.len(), "cache hit for {resource}");
                return Ok(content);
            }
            Ok(None) => tracing::debug!(key = %key, "cache miss for {resource}"),
            Err(e) => tracing::warn!(key = %key, "cache read failed, fetching {resource}: {e}"),
        }

        let content = self.fetcher.fetch(resource)?;

        if let Err(e) = self.cache.put(&key, &content) {
            tracing::warn!(key = %key, "could not cache {resource}: {e}");
        }

        Ok(content)
    }
}
