//! Index entries and the public RFC projection

use serde::Serialize;

use super::date::PublicationDate;
use super::id::DocumentId;

/// Anything stored in an index collection, keyed by its identifier
pub trait Entry {
    fn id(&self) -> &DocumentId;
}

/// One RFC as described by the index
///
/// Relationship lists are taken verbatim from the source. They are not
/// symmetric: `A.obsoleted_by` containing `B` says nothing about whether
/// `B.obsoletes` contains `A`.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentEntry {
    pub id: DocumentId,
    pub title: String,
    pub date: PublicationDate,
    pub obsoletes: Vec<DocumentId>,
    pub obsoleted_by: Vec<DocumentId>,
    pub updates: Vec<DocumentId>,
    pub updated_by: Vec<DocumentId>,
    /// Raw `current-status` label, e.g. `PROPOSED STANDARD`
    pub current_status: String,
    /// Raw `publication-status` label
    pub publication_status: String,
    /// Raw `stream` label, e.g. `IETF` or `Legacy`
    pub stream: Option<String>,
}

impl DocumentEntry {
    /// Creates an entry with no relationships and unknown status
    pub fn new(id: DocumentId, title: impl Into<String>, date: PublicationDate) -> Self {
        Self {
            id,
            title: title.into(),
            date,
            obsoletes: Vec::new(),
            obsoleted_by: Vec::new(),
            updates: Vec::new(),
            updated_by: Vec::new(),
            current_status: "UNKNOWN".to_string(),
            publication_status: "UNKNOWN".to_string(),
            stream: None,
        }
    }

    /// Returns true if any document obsoletes this one
    pub fn is_obsolete(&self) -> bool {
        !self.obsoleted_by.is_empty()
    }

    /// Returns true if `other` appears in this entry's `obsoleted_by` list
    pub fn is_obsoleted_by(&self, other: &DocumentEntry) -> bool {
        self.obsoleted_by.contains(&other.id)
    }

    /// Returns true if `other` appears in this entry's `updated_by` list
    pub fn is_updated_by(&self, other: &DocumentEntry) -> bool {
        self.updated_by.contains(&other.id)
    }

    /// Projects the entry into its public summary
    pub fn to_rfc(&self) -> Rfc {
        Rfc {
            number: self.id.number(),
            document_id: self.id.to_string(),
            title: self.title.clone(),
            publication_date: self.date,
        }
    }
}

impl Entry for DocumentEntry {
    fn id(&self) -> &DocumentId {
        &self.id
    }
}

/// A STD, BCP or FYI label and the RFCs that carry it
#[derive(Debug, Clone, PartialEq)]
pub struct GroupEntry {
    pub id: DocumentId,
    pub title: Option<String>,
    /// The `is-also` list
    pub members: Vec<DocumentId>,
}

impl GroupEntry {
    /// Returns true if the document is a member of this group
    pub fn includes(&self, entry: &DocumentEntry) -> bool {
        self.members.contains(&entry.id)
    }
}

impl Entry for GroupEntry {
    fn id(&self) -> &DocumentId {
        &self.id
    }
}

/// Public summary of an RFC returned by queries
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rfc {
    pub number: u32,
    pub document_id: String,
    pub title: String,
    pub publication_date: PublicationDate,
}

/// Stable sort by publication date, oldest first
pub fn sort_by_publication_date(rfcs: &mut [Rfc]) {
    rfcs.sort_by(|a, b| a.publication_date.cmp(&b.publication_date));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Series;
    use chrono::Month;

    fn entry(number: u32) -> DocumentEntry {
        DocumentEntry::new(
            DocumentId::rfc(number),
            format!("RFC {number}"),
            PublicationDate::month_only(1981, Month::September),
        )
    }

    #[test]
    fn obsolescence_is_directional() {
        let old = DocumentEntry {
            obsoleted_by: vec![DocumentId::rfc(2)],
            ..entry(1)
        };
        let new = entry(2);

        assert!(old.is_obsolete());
        assert!(old.is_obsoleted_by(&new));
        assert!(!new.is_obsolete());
        assert!(!new.is_obsoleted_by(&old));
    }

    #[test]
    fn update_is_directional() {
        let base = DocumentEntry {
            updated_by: vec![DocumentId::rfc(20)],
            ..entry(10)
        };
        let update = entry(20);

        assert!(base.is_updated_by(&update));
        assert!(!update.is_updated_by(&base));
    }

    #[test]
    fn group_membership() {
        let group = GroupEntry {
            id: DocumentId::new(Series::Std, 5),
            title: Some("Internet Protocol".to_string()),
            members: vec![DocumentId::rfc(791), DocumentId::rfc(792)],
        };

        assert!(group.includes(&entry(791)));
        assert!(!group.includes(&entry(793)));
    }

    #[test]
    fn projection_copies_fields() {
        let rfc = entry(791).to_rfc();
        assert_eq!(rfc.number, 791);
        assert_eq!(rfc.document_id, "RFC0791");
        assert_eq!(rfc.title, "RFC 791");
        assert_eq!(
            rfc.publication_date,
            PublicationDate::month_only(1981, Month::September)
        );
    }

    #[test]
    fn sort_is_stable_for_equal_dates() {
        let same = PublicationDate::month_only(1981, Month::September);
        let earlier = PublicationDate::month_only(1980, Month::August);
        let mut rfcs = vec![
            DocumentEntry::new(DocumentId::rfc(791), "IP", same).to_rfc(),
            DocumentEntry::new(DocumentId::rfc(768), "UDP", earlier).to_rfc(),
            DocumentEntry::new(DocumentId::rfc(793), "TCP", same).to_rfc(),
            DocumentEntry::new(DocumentId::rfc(792), "ICMP", same).to_rfc(),
        ];

        sort_by_publication_date(&mut rfcs);

        let order: Vec<_> = rfcs.iter().map(|r| r.number).collect();
        assert_eq!(order, vec![768, 791, 793, 792]);
    }
}
