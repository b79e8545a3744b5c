use chrono::{DateTime, NaiveDate, Utc};
use log::debug;
use regex::Regex;
use std::sync::LazyLock;

static ORDINAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)(st|nd|rd|th)").expect("ordinal pattern is valid"));

/// Slots offered when the availability webhook cannot be reached.
pub const FALLBACK_TIME_BLOCKS: [&str; 8] = [
    "Saturday November 29th, 2025 - 10:00 A.M. to 5:00 P.M.",
    "Saturday December 6th, 2025 - 10:00 A.M. to 5:00 P.M.",
    "Saturday December 13th, 2025 - 10:00 A.M. to 5:00 P.M.",
    "Saturday December 20th, 2025 - 10:00 A.M. to 5:00 P.M.",
    "Saturday December 27th, 2025 - 10:00 A.M. to 5:00 P.M.",
    "Saturday January 3rd, 2026 - 10:00 A.M. to 5:00 P.M.",
    "Saturday January 10th, 2026 - 10:00 A.M. to 5:00 P.M.",
    "Saturday January 17th, 2026 - 10:00 A.M. to 5:00 P.M.",
];

pub fn fallback_time_blocks() -> Vec<String> {
    FALLBACK_TIME_BLOCKS.iter().map(|s| s.to_string()).collect()
}

/// `"Saturday November 29th, 2025 - 10:00 A.M. to 5:00 P.M."` -> midnight UTC.
pub fn normalize_time_block(display: &str) -> Option<DateTime<Utc>> {
    let date_part = display.split(" - ").next()?.trim();
    let (_weekday, rest) = date_part.split_once(' ')?;
    let cleaned = ORDINAL.replace(rest.trim(), "$1");

    match NaiveDate::parse_from_str(&cleaned, "%B %d, %Y") {
        Ok(date) => date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc()),
        Err(e) => {
            debug!("time block {:?} not normalized: {}", display, e);
            None
        }
    }
}
