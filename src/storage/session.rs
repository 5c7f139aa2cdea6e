//! Session setup
//!
//! Resolves configuration and the cache directory once per process and
//! provides access to the repositories.

use std::path::PathBuf;

use super::cache::DirCache;
use super::config::{CacheDirSources, Config};
use super::fetch::{DocumentFormat, FetchError, HttpFetcher};
use super::repository::{self, ContentRepository, RepositoryError};
use super::resolver::Resolver;
use crate::domain::{Rfc, SelectOptions};

/// Resolved settings for one run of the tool
#[derive(Debug, Clone)]
pub struct Session {
    config: Config,
    cache_dir: Option<PathBuf>,
}

impl Session {
    /// Opens a session, resolving the cache directory from `explicit`,
    /// the config and the environment
    ///
    /// An unresolvable cache directory is not an error: every resource is
    /// then fetched from the network.
    pub fn open(config: Config, explicit_cache_dir: Option<PathBuf>) -> Self {
        let sources = CacheDirSources::from_env(explicit_cache_dir, &config);
        let cache_dir = match sources.resolve() {
            Ok(dir) => Some(dir),
            Err(e) => {
                tracing::warn!("{e}; caching is disabled");
                None
            }
        };
        Self::with_cache_dir(config, cache_dir)
    }

    /// Opens a session with an already resolved cache directory
    pub fn with_cache_dir(config: Config, cache_dir: Option<PathBuf>) -> Self {
        tracing::debug!(cache_dir = ?cache_dir, "session opened");
        Self { config, cache_dir }
    }

    /// Returns a cache store over the resolved directory
    pub fn cache(&self) -> DirCache {
        match &self.cache_dir {
            Some(dir) => DirCache::new(dir),
            None => DirCache::unavailable(),
        }
    }

    fn resolver(&self) -> Result<Resolver<DirCache, HttpFetcher>, FetchError> {
        let fetcher = HttpFetcher::new(self.config.remote.clone())?;
        Ok(Resolver::new(self.cache(), fetcher))
    }

    /// Runs a query against the index
    pub fn list(&self, options: &SelectOptions) -> Result<Vec<Rfc>, RepositoryError> {
        repository::list(options, &self.resolver()?)
    }

    /// Returns a repository for document bodies in `format`
    pub fn content_repository(
        &self,
        format: DocumentFormat,
    ) -> Result<ContentRepository<DirCache, HttpFetcher>, FetchError> {
        Ok(ContentRepository::with_format(self.resolver()?, format))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::config::RemoteConfig;
    use std::fs;
    use tempfile::TempDir;

    const INDEX: &str = "<rfc-index>
  <rfc-entry>
    <doc-id>RFC0768</doc-id>
    <title>User Datagram Protocol</title>
    <date><month>August</month><day>28</day><year>1980</year></date>
    <current-status>INTERNET STANDARD</current-status>
    <publication-status>INTERNET STANDARD</publication-status>
    <stream>Legacy</stream>
  </rfc-entry>
</rfc-index>";

    /// Points the remote at an unroutable address so any fetch fails fast
    fn offline_config() -> Config {
        Config {
            remote: RemoteConfig {
                index_base_url: "http://127.0.0.1:9".to_string(),
                document_base_url: "http://127.0.0.1:9".to_string(),
                timeout_secs: 1,
            },
            ..Config::default()
        }
    }

    #[test]
    fn explicit_cache_dir_is_used() {
        let dir = TempDir::new().unwrap();
        let session = Session::open(Config::default(), Some(dir.path().to_path_buf()));

        assert_eq!(session.cache().path(), Some(dir.path()));
    }

    #[test]
    fn missing_cache_dir_gives_unavailable_cache() {
        let session = Session::with_cache_dir(Config::default(), None);

        assert!(session.cache().path().is_none());
    }

    #[test]
    fn list_reads_seeded_cache() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("rfc-index.xml"), INDEX).unwrap();
        let session = Session::with_cache_dir(offline_config(), Some(dir.path().to_path_buf()));

        let rfcs = session.list(&SelectOptions::default()).unwrap();

        assert_eq!(rfcs.len(), 1);
        assert_eq!(rfcs[0].document_id, "RFC0768");
    }

    #[test]
    fn content_reads_seeded_cache() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("768"), "User Datagram Protocol").unwrap();
        let session = Session::with_cache_dir(offline_config(), Some(dir.path().to_path_buf()));

        let content = session
            .content_repository(DocumentFormat::Text)
            .unwrap()
            .find_by_number(768)
            .unwrap();

        assert_eq!(content, b"User Datagram Protocol");
    }

    #[test]
    fn cold_cache_offline_fails_with_fetch_error() {
        let dir = TempDir::new().unwrap();
        let session = Session::with_cache_dir(offline_config(), Some(dir.path().to_path_buf()));

        assert!(matches!(
            session.list(&SelectOptions::default()),
            Err(RepositoryError::Fetch(_))
        ));
        assert!(!dir.path().join("rfc-index.xml").exists());
    }
}
