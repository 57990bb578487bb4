//! Timestamp conversion between the API and the domain.
//!
//! The API carries timestamps with the client's offset; the domain keeps UTC.
//! Conversion preserves the instant.

use chrono::{DateTime, FixedOffset, Utc};

pub fn as_utc(value: Option<DateTime<FixedOffset>>) -> Option<DateTime<Utc>> {
    value.map(|ts| ts.with_timezone(&Utc))
}

pub fn as_offset(value: Option<DateTime<Utc>>) -> Option<DateTime<FixedOffset>> {
    value.map(|ts| ts.fixed_offset())
}
