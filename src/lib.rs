//! rfcs - Query the RFC Editor's index and read RFCs offline
//!
//! The index and documents are fetched from the RFC Editor once and kept
//! in a local cache directory; later queries are answered from the cache.
//! Entries can be selected by obsoletes/updates relationships, by
//! STD/BCP/FYI group, by status category or by stream.

pub mod domain;
pub mod storage;
pub mod cli;

pub use domain::{Category, DocumentId, PublicationDate, Rfc, RfcIndex, SelectOptions, Stream};
pub use storage::{ContentRepository, IndexRepository, Session};
