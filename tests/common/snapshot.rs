//! Snapshot testing utilities using insta.
//!
//! Created tickets carry today's date, so snapshots normalize calendar dates
//! that are not part of the fixture data.
//!
//! ```ignore
//! insta::with_settings!({
//!     filters => date_filters(),
//! }, {
//!     insta::assert_snapshot!(output, @"...");
//! });
//! ```

#![allow(dead_code)]

/// Insta filters replacing dates other than the 2024 fixture dates with `[DATE]`
pub fn date_filters() -> Vec<(&'static str, &'static str)> {
    vec![(r"20(?:2[5-9]|[3-9]\d)-\d{2}-\d{2}", "[DATE]")]
}
