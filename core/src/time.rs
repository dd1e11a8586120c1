//! Time related utils.
//!
//! Nothing here reads the system clock: callers pass in the instants they
//! want to format.

use chrono::{SecondsFormat, Utc};

/// DateTime is the alias for chrono::DateTime<Utc>.
pub type DateTime = chrono::DateTime<Utc>;

/// Format time into ISO 8601 with a `Z` suffix and second precision: "2022-03-13T07:20:04Z"
///
/// This is the layout the storage service expects in `st` and `se`.
pub fn format_iso8601(t: DateTime) -> String {
    t.to_rfc3339_opts(SecondsFormat::Secs, true)
}
