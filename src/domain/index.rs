//! The in-memory RFC index
//!
//! Built once from the index document and never mutated afterwards. Every
//! query selects entries with a predicate over an immutable collection and
//! returns fresh [`Rfc`] projections in index order.

use std::collections::HashMap;

use super::classification::{Category, Stream};
use super::entry::{DocumentEntry, Entry, GroupEntry, Rfc};
use super::id::{DocumentId, Series};

/// Entries of one kind in source order, with lookup by identifier
#[derive(Debug, Clone)]
pub struct EntryCollection<T> {
    entries: Vec<T>,
    positions: HashMap<DocumentId, usize>,
}

impl<T: Entry> EntryCollection<T> {
    pub fn new(entries: Vec<T>) -> Self {
        let mut positions = HashMap::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            // First occurrence wins lookups
            positions.entry(entry.id().clone()).or_insert(position);
        }
        Self { entries, positions }
    }

    pub fn get(&self, id: &DocumentId) -> Option<&T> {
        self.positions.get(id).map(|&position| &self.entries[position])
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entries matching `predicate`, preserving order
    pub fn select<P>(&self, predicate: P) -> Vec<&T>
    where
        P: Fn(&T) -> bool,
    {
        self.iter().filter(|entry| predicate(*entry)).collect()
    }
}

impl<T: Entry> Default for EntryCollection<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

/// Root aggregate of the parsed index
#[derive(Debug, Clone, Default)]
pub struct RfcIndex {
    documents: EntryCollection<DocumentEntry>,
    standards: EntryCollection<GroupEntry>,
    best_current_practices: EntryCollection<GroupEntry>,
    for_your_information: EntryCollection<GroupEntry>,
}

fn to_rfcs(entries: Vec<&DocumentEntry>) -> Vec<Rfc> {
    entries.into_iter().map(DocumentEntry::to_rfc).collect()
}

impl RfcIndex {
    pub fn new(
        documents: Vec<DocumentEntry>,
        standards: Vec<GroupEntry>,
        best_current_practices: Vec<GroupEntry>,
        for_your_information: Vec<GroupEntry>,
    ) -> Self {
        Self {
            documents: EntryCollection::new(documents),
            standards: EntryCollection::new(standards),
            best_current_practices: EntryCollection::new(best_current_practices),
            for_your_information: EntryCollection::new(for_your_information),
        }
    }

    pub fn documents(&self) -> &EntryCollection<DocumentEntry> {
        &self.documents
    }

    /// Returns the group collection for a group series, `None` for `RFC`
    pub fn groups(&self, series: Series) -> Option<&EntryCollection<GroupEntry>> {
        match series {
            Series::Rfc => None,
            Series::Std => Some(&self.standards),
            Series::Bcp => Some(&self.best_current_practices),
            Series::Fyi => Some(&self.for_your_information),
        }
    }

    pub fn document(&self, number: u32) -> Option<&DocumentEntry> {
        self.documents.get(&DocumentId::rfc(number))
    }

    pub fn find_all(&self) -> Vec<Rfc> {
        to_rfcs(self.documents.select(|_| true))
    }

    pub fn find_non_obsolete(&self) -> Vec<Rfc> {
        to_rfcs(self.documents.select(|entry| !entry.is_obsolete()))
    }

    /// RFCs that RFC `number` obsoletes: entries listing it in their
    /// `obsoleted_by`
    pub fn find_obsoleted_by(&self, number: u32) -> Vec<Rfc> {
        let Some(target) = self.document(number) else {
            return Vec::new();
        };
        to_rfcs(self.documents.select(|entry| entry.is_obsoleted_by(target)))
    }

    /// RFCs that obsolete RFC `number`: entries named in its `obsoleted_by`
    pub fn find_obsolete(&self, number: u32) -> Vec<Rfc> {
        let Some(target) = self.document(number) else {
            return Vec::new();
        };
        to_rfcs(self.documents.select(|entry| target.is_obsoleted_by(entry)))
    }

    /// RFCs that RFC `number` updates: entries listing it in their
    /// `updated_by`
    pub fn find_updated_by(&self, number: u32) -> Vec<Rfc> {
        let Some(target) = self.document(number) else {
            return Vec::new();
        };
        to_rfcs(self.documents.select(|entry| entry.is_updated_by(target)))
    }

    /// RFCs that update RFC `number`: entries named in its `updated_by`
    pub fn find_update(&self, number: u32) -> Vec<Rfc> {
        let Some(target) = self.document(number) else {
            return Vec::new();
        };
        to_rfcs(self.documents.select(|entry| target.is_updated_by(entry)))
    }

    /// RFCs that are members of the group `{series}{number}`
    pub fn find_by_group(&self, series: Series, number: u32) -> Vec<Rfc> {
        let Some(group) = self
            .groups(series)
            .and_then(|groups| groups.get(&DocumentId::new(series, number)))
        else {
            return Vec::new();
        };
        to_rfcs(self.documents.select(|entry| group.includes(entry)))
    }

    pub fn find_by_category(&self, category: Category) -> Vec<Rfc> {
        let label = category.label();
        to_rfcs(self.documents.select(|entry| entry.current_status == label))
    }

    pub fn find_by_stream(&self, stream: Stream) -> Vec<Rfc> {
        let label = stream.label();
        to_rfcs(
            self.documents
                .select(|entry| entry.stream.as_deref() == Some(label)),
        )
    }
}
