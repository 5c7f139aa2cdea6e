//! Document identifiers
//!
//! ID Format: `{series}{number}` where series is one of `RFC`, `STD`, `BCP`
//! or `FYI` and the number is zero-padded to at least four digits
//! (e.g., `RFC0791`, `STD0005`, `RFC10000`).
//!
//! Identifiers compare by their string form. `RFC791` and `RFC0791` are
//! different identifiers even though they carry the same number.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum IdError {
    #[error("Invalid document ID: expected 'RFC', 'STD', 'BCP' or 'FYI' prefix, got '{0}'")]
    UnknownSeries(String),

    #[error("Invalid document ID: '{0}' does not end in a number")]
    InvalidNumber(String),
}

/// The document series an identifier belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Series {
    Rfc,
    Std,
    Bcp,
    Fyi,
}

impl Series {
    pub const ALL: [Series; 4] = [Series::Rfc, Series::Std, Series::Bcp, Series::Fyi];

    /// Returns the three-letter prefix used in identifiers
    pub fn prefix(&self) -> &'static str {
        match self {
            Series::Rfc => "RFC",
            Series::Std => "STD",
            Series::Bcp => "BCP",
            Series::Fyi => "FYI",
        }
    }
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// A document identifier such as `RFC0791`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DocumentId {
    raw: String,
    series: Series,
    number: u32,
}

impl DocumentId {
    /// Builds the canonical identifier for a series and number
    pub fn new(series: Series, number: u32) -> Self {
        Self {
            raw: format!("{}{:04}", series.prefix(), number),
            series,
            number,
        }
    }

    /// Shorthand for `DocumentId::new(Series::Rfc, number)`
    pub fn rfc(number: u32) -> Self {
        Self::new(Series::Rfc, number)
    }

    pub fn series(&self) -> Series {
        self.series
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for DocumentId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let series = Series::ALL
            .into_iter()
            .find(|series| s.starts_with(series.prefix()))
            .ok_or_else(|| IdError::UnknownSeries(s.to_string()))?;

        let digits = &s[series.prefix().len()..];
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(IdError::InvalidNumber(s.to_string()));
        }
        let number = digits
            .parse()
            .map_err(|_| IdError::InvalidNumber(s.to_string()))?;

        Ok(Self {
            raw: s.to_string(),
            series,
            number,
        })
    }
}

impl TryFrom<String> for DocumentId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DocumentId> for String {
    fn from(id: DocumentId) -> Self {
        id.raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_pads_to_four_digits() {
        assert_eq!(DocumentId::rfc(791).to_string(), "RFC0791");
        assert_eq!(DocumentId::new(Series::Std, 5).to_string(), "STD0005");
        assert_eq!(DocumentId::rfc(10000).to_string(), "RFC10000");
    }

    #[test]
    fn parses_series_and_number() {
        let id: DocumentId = "BCP0014".parse().unwrap();
        assert_eq!(id.series(), Series::Bcp);
        assert_eq!(id.number(), 14);
        assert_eq!(id.as_str(), "BCP0014");
    }

    #[test]
    fn equality_is_by_string_form() {
        let padded: DocumentId = "RFC0791".parse().unwrap();
        let unpadded: DocumentId = "RFC791".parse().unwrap();
        assert_eq!(padded.number(), unpadded.number());
        assert_ne!(padded, unpadded);
        assert_eq!(padded, DocumentId::rfc(791));
    }

    #[test]
    fn rejects_unknown_series() {
        assert_eq!(
            "IEN0001".parse::<DocumentId>(),
            Err(IdError::UnknownSeries("IEN0001".to_string()))
        );
        assert!("".parse::<DocumentId>().is_err());
    }

    #[test]
    fn rejects_non_numeric_suffix() {
        assert!("RFC".parse::<DocumentId>().is_err());
        assert!("RFC07a1".parse::<DocumentId>().is_err());
        assert!("RFC-791".parse::<DocumentId>().is_err());
        assert!("RFC99999999999".parse::<DocumentId>().is_err());
    }

    #[test]
    fn serde_roundtrip_document_id() {
        let original = DocumentId::rfc(2119);
        let json = serde_json::to_string(&original).unwrap();
        assert_eq!(json, "\"RFC2119\"");
        let parsed: DocumentId = serde_json::from_str(&json).unwrap();
        assert_eq!(original, parsed);
    }
}
