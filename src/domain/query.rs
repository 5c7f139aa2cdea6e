//! Query selection
//!
//! [`QuerySelector`] names exactly one query shape. [`SelectOptions`] is
//! the flag bag filled in by the command line; converting it picks the
//! first selector that is set, in this order: exclude-obsolete,
//! obsoleted-by, obsolete, updated-by, update, std, bcp, fyi, category,
//! stream. With nothing set the query lists every RFC. A number of `0`
//! counts as not set.

use super::classification::{Category, Stream, ValidationError};
use super::entry::Rfc;
use super::id::Series;
use super::index::RfcIndex;

/// A single query over the index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuerySelector {
    All,
    ExcludeObsolete,
    /// RFCs obsoleted by the given RFC
    ObsoletedBy(u32),
    /// RFCs that obsolete the given RFC
    Obsolete(u32),
    /// RFCs updated by the given RFC
    UpdatedBy(u32),
    /// RFCs that update the given RFC
    Update(u32),
    Std(u32),
    Bcp(u32),
    Fyi(u32),
    Category(Category),
    Stream(Stream),
}

impl QuerySelector {
    /// Runs the query against an index
    pub fn apply(&self, index: &RfcIndex) -> Vec<Rfc> {
        match *self {
            QuerySelector::All => index.find_all(),
            QuerySelector::ExcludeObsolete => index.find_non_obsolete(),
            QuerySelector::ObsoletedBy(number) => index.find_obsoleted_by(number),
            QuerySelector::Obsolete(number) => index.find_obsolete(number),
            QuerySelector::UpdatedBy(number) => index.find_updated_by(number),
            QuerySelector::Update(number) => index.find_update(number),
            QuerySelector::Std(number) => index.find_by_group(Series::Std, number),
            QuerySelector::Bcp(number) => index.find_by_group(Series::Bcp, number),
            QuerySelector::Fyi(number) => index.find_by_group(Series::Fyi, number),
            QuerySelector::Category(category) => index.find_by_category(category),
            QuerySelector::Stream(stream) => index.find_by_stream(stream),
        }
    }
}

/// Raw selection flags as supplied by a user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectOptions {
    pub exclude_obsolete: bool,
    pub obsoleted_by: Option<u32>,
    pub obsolete: Option<u32>,
    pub updated_by: Option<u32>,
    pub update: Option<u32>,
    pub std: Option<u32>,
    pub bcp: Option<u32>,
    pub fyi: Option<u32>,
    pub category: Option<String>,
    pub stream: Option<String>,
}

impl SelectOptions {
    /// Validates the options and picks the selector with highest precedence
    ///
    /// Category and stream names are validated even when a higher-precedence
    /// flag wins, so a typo is never silently ignored.
    pub fn selector(&self) -> Result<QuerySelector, ValidationError> {
        let category = self
            .category
            .as_deref()
            .map(str::parse::<Category>)
            .transpose()?;
        let stream = self
            .stream
            .as_deref()
            .map(str::parse::<Stream>)
            .transpose()?;

        let selector = if self.exclude_obsolete {
            QuerySelector::ExcludeObsolete
        } else if let Some(number) = non_zero(self.obsoleted_by) {
            QuerySelector::ObsoletedBy(number)
        } else if let Some(number) = non_zero(self.obsolete) {
            QuerySelector::Obsolete(number)
        } else if let Some(number) = non_zero(self.updated_by) {
            QuerySelector::UpdatedBy(number)
        } else if let Some(number) = non_zero(self.update) {
            QuerySelector::Update(number)
        } else if let Some(number) = non_zero(self.std) {
            QuerySelector::Std(number)
        } else if let Some(number) = non_zero(self.bcp) {
            QuerySelector::Bcp(number)
        } else if let Some(number) = non_zero(self.fyi) {
            QuerySelector::Fyi(number)
        } else if let Some(category) = category {
            QuerySelector::Category(category)
        } else if let Some(stream) = stream {
            QuerySelector::Stream(stream)
        } else {
            QuerySelector::All
        };

        Ok(selector)
    }
}

fn non_zero(number: Option<u32>) -> Option<u32> {
    number.filter(|&number| number != 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_options_select_all() {
        assert_eq!(SelectOptions::default().selector(), Ok(QuerySelector::All));
    }

    #[test]
    fn precedence_follows_flag_order() {
        let options = SelectOptions {
            exclude_obsolete: true,
            obsoleted_by: Some(1),
            std: Some(5),
            ..Default::default()
        };
        assert_eq!(options.selector(), Ok(QuerySelector::ExcludeObsolete));

        let options = SelectOptions {
            obsolete: Some(2),
            update: Some(3),
            ..Default::default()
        };
        assert_eq!(options.selector(), Ok(QuerySelector::Obsolete(2)));

        let options = SelectOptions {
            fyi: Some(36),
            category: Some("informational".to_string()),
            ..Default::default()
        };
        assert_eq!(options.selector(), Ok(QuerySelector::Fyi(36)));

        let options = SelectOptions {
            category: Some("historic".to_string()),
            stream: Some("legacy".to_string()),
            ..Default::default()
        };
        assert_eq!(
            options.selector(),
            Ok(QuerySelector::Category(Category::Historic))
        );
    }

    #[test]
    fn zero_numbers_fall_through() {
        let options = SelectOptions {
            std: Some(0),
            category: Some("historic".to_string()),
            ..Default::default()
        };
        assert_eq!(
            options.selector(),
            Ok(QuerySelector::Category(Category::Historic))
        );

        let options = SelectOptions {
            obsoleted_by: Some(0),
            update: Some(0),
            bcp: Some(14),
            ..Default::default()
        };
        assert_eq!(options.selector(), Ok(QuerySelector::Bcp(14)));

        let options = SelectOptions {
            fyi: Some(0),
            ..Default::default()
        };
        assert_eq!(options.selector(), Ok(QuerySelector::All));
    }

    #[test]
    fn stream_selector() {
        let options = SelectOptions {
            stream: Some("irtf".to_string()),
            ..Default::default()
        };
        assert_eq!(options.selector(), Ok(QuerySelector::Stream(Stream::Irtf)));
    }

    #[test]
    fn invalid_category_is_rejected_even_when_shadowed() {
        let options = SelectOptions {
            exclude_obsolete: true,
            category: Some("standards-track".to_string()),
            ..Default::default()
        };
        assert_eq!(
            options.selector(),
            Err(ValidationError::UnknownCategory("standards-track".to_string()))
        );
    }
}
