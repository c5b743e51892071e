//! Submission timestamp helper
//!
//! Submission times are captured in WIB (UTC+7) and stored as fixed-offset
//! ISO-8601 strings so they read the same regardless of server locale.

use chrono::{FixedOffset, SecondsFormat, Utc};

const WIB_OFFSET_SECS: i32 = 7 * 3600;

/// Current wall-clock time rendered at the +07:00 offset, e.g.
/// `2026-08-24T21:15:03.512+07:00`.
#[must_use]
pub fn wib_now() -> String {
    let offset = FixedOffset::east_opt(WIB_OFFSET_SECS).expect("WIB offset is in range");
    Utc::now()
        .with_timezone(&offset)
        .to_rfc3339_opts(SecondsFormat::Millis, false)
}
