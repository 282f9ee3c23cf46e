use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::error::{Error, Result};

const ISO_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");
const INTACCT_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[month]/[day]/[year]");

/// A calendar date as the Intacct XML API expects it.
///
/// Built from an ISO `YYYY-MM-DD` string and rendered as `MM/DD/YYYY`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateType(Date);

impl DateType {
    /// Parses an ISO formatted date (`YYYY-MM-DD`).
    pub fn parse(value: &str) -> Result<Self> {
        Date::parse(value, ISO_FORMAT)
            .map(Self)
            .map_err(|source| Error::InvalidDate {
                value: value.to_string(),
                source,
            })
    }

    #[must_use]
    pub fn date(&self) -> Date {
        self.0
    }

    /// The `MM/DD/YYYY` form written into request documents.
    pub fn format(&self) -> Result<String> {
        Ok(self.0.format(INTACCT_FORMAT)?)
    }

    /// The ISO `YYYY-MM-DD` form accepted by [`DateType::parse`].
    pub fn format_iso(&self) -> Result<String> {
        Ok(self.0.format(ISO_FORMAT)?)
    }
}

impl From<Date> for DateType {
    fn from(date: Date) -> Self {
        Self(date)
    }
}

impl FromStr for DateType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for DateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let formatted = self.format().map_err(|_| fmt::Error)?;
        f.write_str(&formatted)
    }
}

// Serialized in ISO form so a serialized record reads back unchanged
impl Serialize for DateType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let formatted = self
            .0
            .format(ISO_FORMAT)
            .map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&formatted)
    }
}

impl<'de> Deserialize<'de> for DateType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let date_str = String::deserialize(deserializer)?;
        Self::parse(&date_str).map_err(serde::de::Error::custom)
    }
}
