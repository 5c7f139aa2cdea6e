//! Repositories over the cached remote corpus
//!
//! [`IndexRepository`] answers metadata queries from the parsed index.
//! [`ContentRepository`] returns document bodies. Both sit on a
//! [`Resolver`], so a warm cache serves them without network access.

use thiserror::Error;

use super::cache::CacheStore;
use super::fetch::{DocumentFormat, FetchError, Fetcher, IndexFormat, Resource};
use super::parser::{parse_index, ParseError};
use super::resolver::Resolver;
use crate::domain::{Rfc, RfcIndex, SelectOptions, ValidationError};

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Failed to fetch the RFC index: {0}")]
    Fetch(#[from] FetchError),

    #[error("Failed to parse the RFC index: {0}")]
    Parse(#[from] ParseError),
}

/// Query facade over a parsed index
#[derive(Debug, Clone)]
pub struct IndexRepository {
    index: RfcIndex,
}

impl IndexRepository {
    pub fn new(index: RfcIndex) -> Self {
        Self { index }
    }

    /// Resolves the XML index through the cache and parses it
    pub fn load<C: CacheStore, F: Fetcher>(
        resolver: &Resolver<C, F>,
    ) -> Result<Self, RepositoryError> {
        let document = resolver.resolve(&Resource::Index(IndexFormat::Xml))?;
        let index = parse_index(&document)?;
        Ok(Self::new(index))
    }

    pub fn index(&self) -> &RfcIndex {
        &self.index
    }
}

/// Validates `options`, loads the index, and runs the query
///
/// Validation happens before the resolver is touched, so a bad category or
/// stream costs no cache read and no network request.
pub fn list<C: CacheStore, F: Fetcher>(
    options: &SelectOptions,
    resolver: &Resolver<C, F>,
) -> Result<Vec<Rfc>, RepositoryError> {
    let selector = options.selector()?;
    let repository = IndexRepository::load(resolver)?;
    tracing::debug!(?selector, "running query");
    Ok(selector.apply(repository.index()))
}

/// Document bodies by RFC number
pub struct ContentRepository<C, F> {
    resolver: Resolver<C, F>,
    format: DocumentFormat,
}

impl<C: CacheStore, F: Fetcher> ContentRepository<C, F> {
    pub fn with_format(resolver: Resolver<C, F>, format: DocumentFormat) -> Self {
        Self { resolver, format }
    }

    /// Returns the raw document body
    pub fn find_by_number(&self, number: u32) -> Result<Vec<u8>, FetchError> {
        self.resolver
            .resolve(&Resource::document(number, self.format))
    }
}
