//! Publication dates
//!
//! The index records most dates with month precision only. A day of `0`
//! stands for "no day given" and sorts before every real day of the same
//! month.

use chrono::Month;
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum DateError {
    #[error("Unrecognized month name: '{0}'")]
    InvalidMonth(String),

    #[error("Day of month out of range (0-31): {0}")]
    InvalidDay(u32),
}

/// Parses a full English month name as written in the index (`January`)
pub fn parse_month(name: &str) -> Result<Month, DateError> {
    (1..=12u8)
        .filter_map(|n| Month::try_from(n).ok())
        .find(|month| month.name() == name)
        .ok_or_else(|| DateError::InvalidMonth(name.to_string()))
}

/// Date an RFC was published
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PublicationDate {
    year: i32,
    #[serde(serialize_with = "serialize_month")]
    month: Month,
    /// `0` when only the month is known
    day: u32,
}

impl PublicationDate {
    pub fn new(year: i32, month: Month, day: u32) -> Result<Self, DateError> {
        if day > 31 {
            return Err(DateError::InvalidDay(day));
        }
        Ok(Self { year, month, day })
    }

    /// Creates a month-precision date
    pub fn month_only(year: i32, month: Month) -> Self {
        Self { year, month, day: 0 }
    }

    fn sort_key(&self) -> (i32, u32, u32) {
        (self.year, self.month.number_from_month(), self.day)
    }
}

impl Ord for PublicationDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl PartialOrd for PublicationDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for PublicationDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.day == 0 {
            write!(f, "{} {}", self.month.name(), self.year)
        } else {
            write!(f, "{} {} {}", self.day, self.month.name(), self.year)
        }
    }
}

fn serialize_month<S: Serializer>(month: &Month, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(month.name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(year: i32, month: Month, day: u32) -> PublicationDate {
        PublicationDate::new(year, month, day).unwrap()
    }

    #[test]
    fn parses_full_month_names() {
        assert_eq!(parse_month("January"), Ok(Month::January));
        assert_eq!(parse_month("September"), Ok(Month::September));
        assert_eq!(parse_month("December"), Ok(Month::December));
    }

    #[test]
    fn rejects_other_month_tokens() {
        for token in ["Jan", "january", "JANUARY", "", "Smarch", "1"] {
            assert_eq!(
                parse_month(token),
                Err(DateError::InvalidMonth(token.to_string())),
                "token {token:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_day_out_of_range() {
        assert_eq!(
            PublicationDate::new(1981, Month::January, 32),
            Err(DateError::InvalidDay(32))
        );
        assert!(PublicationDate::new(1981, Month::January, 31).is_ok());
    }

    #[test]
    fn month_only_sorts_before_days() {
        let month_only = date(1981, Month::January, 0);
        let mid_month = date(1981, Month::January, 15);
        let next_month = date(1981, Month::February, 1);

        assert!(month_only < mid_month);
        assert!(mid_month < next_month);
        assert!(month_only < next_month);
    }

    #[test]
    fn year_dominates_month() {
        assert!(date(1980, Month::December, 31) < date(1981, Month::January, 0));
    }

    #[test]
    fn display_formats() {
        assert_eq!(date(1981, Month::September, 0).to_string(), "September 1981");
        assert_eq!(date(1981, Month::September, 1).to_string(), "1 September 1981");
    }

    #[test]
    fn serializes_month_by_name() {
        let json = serde_json::to_value(date(1997, Month::March, 0)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"year": 1997, "month": "March", "day": 0})
        );
    }

    proptest! {
        #[test]
        fn ordering_matches_field_tuple(
            y1 in 1969i32..2100, m1 in 1u8..=12, d1 in 0u32..=31,
            y2 in 1969i32..2100, m2 in 1u8..=12, d2 in 0u32..=31,
        ) {
            let a = date(y1, Month::try_from(m1).unwrap(), d1);
            let b = date(y2, Month::try_from(m2).unwrap(), d2);
            prop_assert_eq!(a.cmp(&b), (y1, m1, d1).cmp(&(y2, m2, d2)));
        }
    }
}
