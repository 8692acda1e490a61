//! Timestamp parsing and duration formatting.
//!
//! An invalid timestamp is represented as `None` rather than a numeric
//! sentinel. Every downstream comparison treats `None` as incomparable.

use log::warn;

/// Seconds since midnight (timestamps) or between two timestamps (durations)
pub type Seconds = i64;

const SECS_PER_HOUR: Seconds = 3600;
const SECS_PER_MINUTE: Seconds = 60;

/// Parse an `HH:MM:SS` string into total seconds
///
/// Returns `None` when the string does not have exactly three `:`-separated
/// components, when any component is not an integer, or when the total
/// overflows.
///
/// # Example
/// ```
/// use log_interval_report::parser::parse_time_to_seconds;
///
/// assert_eq!(parse_time_to_seconds("01:02:03"), Some(3723));
/// assert_eq!(parse_time_to_seconds("25:00"), None);
/// ```
pub fn parse_time_to_seconds(time_str: &str) -> Option<Seconds> {
    let parts: Vec<&str> = time_str.split(':').collect();
    if parts.len() != 3 {
        warn!("Invalid time format: {}", time_str);
        return None;
    }

    let mut components: [Seconds; 3] = [0; 3];
    for (slot, part) in components.iter_mut().zip(&parts) {
        match part.trim().parse::<Seconds>() {
            Ok(value) => *slot = value,
            Err(_) => {
                warn!("Invalid time components: {}", time_str);
                return None;
            }
        }
    }

    let [hours, minutes, seconds] = components;
    hours
        .checked_mul(SECS_PER_HOUR)
        .and_then(|h| minutes.checked_mul(SECS_PER_MINUTE).and_then(|m| h.checked_add(m)))
        .and_then(|hm| hm.checked_add(seconds))
}

/// Format a duration as `"<raw seconds> <HH:MM:SS>"`
///
/// The raw seconds keep their sign; the clock part is computed from the
/// magnitude, so `-30` renders as `"-30 00:00:30"`. Hours are not wrapped at
/// 24 and widen past two digits when needed.
pub fn format_duration(seconds: Seconds) -> String {
    let magnitude = seconds.unsigned_abs();
    let h = magnitude / SECS_PER_HOUR as u64;
    let m = (magnitude % SECS_PER_HOUR as u64) / SECS_PER_MINUTE as u64;
    let s = magnitude % SECS_PER_MINUTE as u64;
    format!("{} {:02}:{:02}:{:02}", seconds, h, m, s)
}
