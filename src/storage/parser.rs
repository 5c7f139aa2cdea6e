//! Parser for `rfc-index.xml`
//!
//! The document is deserialized into raw serde structs mirroring the
//! schema, then validated into the domain model. Elements the model does
//! not use (`rfc-not-issued-entry`, `author`, `format`, `abstract`, ...)
//! are skipped.

use serde::Deserialize;
use thiserror::Error;

use crate::domain::{
    parse_month, DateError, DocumentEntry, DocumentId, GroupEntry, IdError, PublicationDate,
    RfcIndex, Series,
};

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Malformed index document: {0}")]
    Xml(#[from] quick_xml::DeError),

    #[error("Invalid identifier in {context}: {source}")]
    Id {
        context: String,
        #[source]
        source: IdError,
    },

    #[error("Entry {id} does not belong in the {collection} collection")]
    WrongSeries { id: String, collection: Series },

    #[error("Invalid date for {id}: {source}")]
    Date {
        id: String,
        #[source]
        source: DateError,
    },
}

#[derive(Debug, Deserialize)]
struct RawIndex {
    #[serde(rename = "bcp-entry", default)]
    bcp_entries: Vec<RawGroupEntry>,
    #[serde(rename = "fyi-entry", default)]
    fyi_entries: Vec<RawGroupEntry>,
    #[serde(rename = "rfc-entry", default)]
    rfc_entries: Vec<RawRfcEntry>,
    #[serde(rename = "std-entry", default)]
    std_entries: Vec<RawGroupEntry>,
}

#[derive(Debug, Deserialize)]
struct RawDocumentRef {
    #[serde(rename = "doc-id", default)]
    doc_ids: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawGroupEntry {
    #[serde(rename = "doc-id")]
    doc_id: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(rename = "is-also", default)]
    is_also: Option<RawDocumentRef>,
}

#[derive(Debug, Deserialize)]
struct RawDate {
    month: String,
    #[serde(default)]
    day: Option<u32>,
    year: i32,
}

#[derive(Debug, Deserialize)]
struct RawRfcEntry {
    #[serde(rename = "doc-id")]
    doc_id: String,
    title: String,
    date: RawDate,
    #[serde(default)]
    obsoletes: Option<RawDocumentRef>,
    #[serde(rename = "obsoleted-by", default)]
    obsoleted_by: Option<RawDocumentRef>,
    #[serde(default)]
    updates: Option<RawDocumentRef>,
    #[serde(rename = "updated-by", default)]
    updated_by: Option<RawDocumentRef>,
    #[serde(rename = "current-status")]
    current_status: String,
    #[serde(rename = "publication-status")]
    publication_status: String,
    #[serde(default)]
    stream: Option<String>,
}

/// Parses the XML index into an [`RfcIndex`]
///
/// Any malformed entry fails the whole parse; no partial index is returned.
pub fn parse_index(document: &[u8]) -> Result<RfcIndex, ParseError> {
    let raw: RawIndex = quick_xml::de::from_reader(document)?;

    let documents = raw
        .rfc_entries
        .into_iter()
        .map(convert_rfc_entry)
        .collect::<Result<Vec<_>, _>>()?;
    let standards = convert_groups(raw.std_entries, Series::Std)?;
    let best_current_practices = convert_groups(raw.bcp_entries, Series::Bcp)?;
    let for_your_information = convert_groups(raw.fyi_entries, Series::Fyi)?;

    let index = RfcIndex::new(
        documents,
        standards,
        best_current_practices,
        for_your_information,
    );
    tracing::debug!(
        documents = index.documents().len(),
        "parsed RFC index"
    );
    Ok(index)
}

fn parse_id(raw: &str, expected: Series) -> Result<DocumentId, ParseError> {
    let id: DocumentId = raw.parse().map_err(|source| ParseError::Id {
        context: format!("{expected} entry"),
        source,
    })?;
    if id.series() != expected {
        return Err(ParseError::WrongSeries {
            id: id.to_string(),
            collection: expected,
        });
    }
    Ok(id)
}

fn parse_refs(refs: Option<RawDocumentRef>, owner: &DocumentId) -> Result<Vec<DocumentId>, ParseError> {
    refs.map(|refs| refs.doc_ids)
        .unwrap_or_default()
        .iter()
        .map(|raw| {
            raw.parse().map_err(|source| ParseError::Id {
                context: owner.to_string(),
                source,
            })
        })
        .collect()
}

fn convert_rfc_entry(raw: RawRfcEntry) -> Result<DocumentEntry, ParseError> {
    let id = parse_id(&raw.doc_id, Series::Rfc)?;

    let date = parse_month(raw.date.month.trim())
        .and_then(|month| PublicationDate::new(raw.date.year, month, raw.date.day.unwrap_or(0)))
        .map_err(|source| ParseError::Date {
            id: id.to_string(),
            source,
        })?;

    Ok(DocumentEntry {
        obsoletes: parse_refs(raw.obsoletes, &id)?,
        obsoleted_by: parse_refs(raw.obsoleted_by, &id)?,
        updates: parse_refs(raw.updates, &id)?,
        updated_by: parse_refs(raw.updated_by, &id)?,
        current_status: raw.current_status,
        publication_status: raw.publication_status,
        stream: raw.stream,
        ..DocumentEntry::new(id, raw.title, date)
    })
}

fn convert_groups(raw: Vec<RawGroupEntry>, series: Series) -> Result<Vec<GroupEntry>, ParseError> {
    raw.into_iter()
        .map(|raw| {
            let id = parse_id(&raw.doc_id, series)?;
            Ok(GroupEntry {
                members: parse_refs(raw.is_also, &id)?,
                title: raw.title,
                id,
            })
        })
        .collect()
}
