//! Domain models for the RFC index
//!
//! Contains the entity model and query logic without any I/O concerns.

mod classification;
mod date;
mod entry;
mod id;
mod index;
mod query;

pub use classification::{Category, Stream, ValidationError};
pub use date::{parse_month, DateError, PublicationDate};
pub use entry::{sort_by_publication_date, DocumentEntry, Entry, GroupEntry, Rfc};
pub use id::{DocumentId, IdError, Series};
pub use index::{EntryCollection, RfcIndex};
pub use query::{QuerySelector, SelectOptions};
