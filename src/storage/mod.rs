//! # Storage Layer
//!
//! Local cache, remote fetching and index parsing for rfcs.
//!
//! ## Cache Layout
//!
//! Index and documents share one flat directory:
//!
//! | Resource | Cache file | Remote |
//! |----------|------------|--------|
//! | XML index | `rfc-index.xml` | `{index_base_url}/rfc-index.xml` |
//! | ASCII index | `rfc-index.txt` | `{index_base_url}/rfc-index.txt` |
//! | RFC text | `{n}` | `{document_base_url}/rfc{n}.txt` |
//! | RFC PostScript | `{n}.ps` | `{document_base_url}/rfc{n}.ps` |
//! | RFC PDF | `{n}.pdf` | `{document_base_url}/rfc{n}.pdf` |
//!
//! Entries never expire. Writes are atomic (temp file + rename), so a
//! concurrent reader sees either nothing or the whole file.
//!
//! ## Key Types
//!
//! - [`Session`] - Entry point wiring config, cache and fetcher
//! - [`Resolver`] - Cache-or-fetch lookup
//! - [`IndexRepository`] - Metadata queries over the parsed index
//! - [`ContentRepository`] - Document bodies by number
//! - [`Config`] - User configuration

mod cache;
mod config;
mod fetch;
mod parser;
mod repository;
mod resolver;
mod session;

pub use cache::{CacheError, CacheStore, DirCache};
pub use config::{CacheDirSources, Config, ConfigError, OutputFormat, RemoteConfig};
pub use fetch::{DocumentFormat, FetchError, Fetcher, HttpFetcher, IndexFormat, Resource};
pub use parser::{parse_index, ParseError};
pub use repository::{list, ContentRepository, IndexRepository, RepositoryError};
pub use resolver::Resolver;
pub use session::Session;
