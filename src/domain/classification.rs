//! Categories and publication streams
//!
//! Both enums map one-to-one onto the labels used by the index. Their
//! `FromStr` impls accept the lowercase command-line names and are the only
//! place unrecognised values are rejected.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Unknown category: '{0}' (expected one of: {names})", names = Category::NAMES.join(", "))]
    UnknownCategory(String),

    #[error("Unknown stream: '{0}' (expected one of: {names})", names = Stream::NAMES.join(", "))]
    UnknownStream(String),
}

/// Current status category of an RFC
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    ProposedStandard,
    DraftStandard,
    InternetStandard,
    Experimental,
    Informational,
    Historic,
    BestCurrentPractice,
    Unknown,
}

impl Category {
    pub const NAMES: [&'static str; 8] = [
        "proposed-standard",
        "draft-standard",
        "internet-standard",
        "experimental",
        "informational",
        "historic",
        "bcp",
        "unknown",
    ];

    /// Returns the `current-status` label used in the index
    pub fn label(&self) -> &'static str {
        match self {
            Category::ProposedStandard => "PROPOSED STANDARD",
            Category::DraftStandard => "DRAFT STANDARD",
            Category::InternetStandard => "INTERNET STANDARD",
            Category::Experimental => "EXPERIMENTAL",
            Category::Informational => "INFORMATIONAL",
            Category::Historic => "HISTORIC",
            Category::BestCurrentPractice => "BEST CURRENT PRACTICE",
            Category::Unknown => "UNKNOWN",
        }
    }

    /// Returns the command-line name
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::ProposedStandard => "proposed-standard",
            Category::DraftStandard => "draft-standard",
            Category::InternetStandard => "internet-standard",
            Category::Experimental => "experimental",
            Category::Informational => "informational",
            Category::Historic => "historic",
            Category::BestCurrentPractice => "bcp",
            Category::Unknown => "unknown",
        }
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "proposed-standard" => Ok(Category::ProposedStandard),
            "draft-standard" => Ok(Category::DraftStandard),
            "internet-standard" => Ok(Category::InternetStandard),
            "experimental" => Ok(Category::Experimental),
            "informational" => Ok(Category::Informational),
            "historic" => Ok(Category::Historic),
            "bcp" => Ok(Category::BestCurrentPractice),
            "unknown" => Ok(Category::Unknown),
            other => Err(ValidationError::UnknownCategory(other.to_string())),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Document stream an RFC was published through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stream {
    Ietf,
    Iab,
    Irtf,
    Independent,
    Legacy,
}

impl Stream {
    pub const NAMES: [&'static str; 5] = ["ietf", "iab", "irtf", "independent", "legacy"];

    /// Returns the `stream` label used in the index
    pub fn label(&self) -> &'static str {
        match self {
            Stream::Ietf => "IETF",
            Stream::Iab => "IAB",
            Stream::Irtf => "IRTF",
            Stream::Independent => "INDEPENDENT",
            Stream::Legacy => "Legacy",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Stream::Ietf => "ietf",
            Stream::Iab => "iab",
            Stream::Irtf => "irtf",
            Stream::Independent => "independent",
            Stream::Legacy => "legacy",
        }
    }
}

impl FromStr for Stream {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ietf" => Ok(Stream::Ietf),
            "iab" => Ok(Stream::Iab),
            "irtf" => Ok(Stream::Irtf),
            "independent" => Ok(Stream::Independent),
            "legacy" => Ok(Stream::Legacy),
            other => Err(ValidationError::UnknownStream(other.to_string())),
        }
    }
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_name_parses_back() {
        for name in Category::NAMES {
            let category: Category = name.parse().unwrap();
            assert_eq!(category.as_str(), name);
        }
    }

    #[test]
    fn every_stream_name_parses_back() {
        for name in Stream::NAMES {
            let stream: Stream = name.parse().unwrap();
            assert_eq!(stream.as_str(), name);
        }
    }

    #[test]
    fn category_labels() {
        assert_eq!(Category::BestCurrentPractice.label(), "BEST CURRENT PRACTICE");
        assert_eq!(Category::ProposedStandard.label(), "PROPOSED STANDARD");
    }

    #[test]
    fn legacy_stream_label_is_mixed_case() {
        assert_eq!(Stream::Legacy.label(), "Legacy");
        assert_eq!(Stream::Independent.label(), "INDEPENDENT");
    }

    #[test]
    fn rejects_unknown_values() {
        assert_eq!(
            "standard".parse::<Category>(),
            Err(ValidationError::UnknownCategory("standard".to_string()))
        );
        assert_eq!(
            "IETF".parse::<Stream>(),
            Err(ValidationError::UnknownStream("IETF".to_string()))
        );
    }

    #[test]
    fn validation_message_lists_choices() {
        let err = "nope".parse::<Stream>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unknown stream: 'nope' (expected one of: ietf, iab, irtf, independent, legacy)"
        );
    }
}
