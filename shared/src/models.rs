use chrono::{DateTime, Datelike, FixedOffset, ParseError};
use serde::Deserialize;

/// One element of the `/users/{id}/items` response, as sent by Qiita.
///
/// Only the fields the calendar needs are kept; everything else in the
/// payload is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QiitaItem {
    pub title: String,
    pub url: String,
    pub created_at: String,
}

impl QiitaItem {
    /// Parse `created_at` as an RFC 3339 timestamp, keeping its UTC offset.
    pub fn parse_created_at(&self) -> Result<DateTime<FixedOffset>, ParseError> {
        DateTime::parse_from_rfc3339(&self.created_at)
    }
}

/// An authored post that falls inside the calendar window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    pub url: String,
    pub created_at: DateTime<FixedOffset>,
}

impl Article {
    /// Day of month in the offset the timestamp was published with.
    pub fn day_of_month(&self) -> u32 {
        self.created_at.day()
    }
}
