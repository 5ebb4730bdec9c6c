//! Timestamp formatting for transcript lines.

/// Format a non-negative number of seconds as a zero-padded `HH:MM:SS` string.
///
/// The fractional part is discarded, not rounded: `59.9` formats as
/// `"00:00:59"`. Hours do not wrap at 24, so multi-day offsets keep growing
/// (`90000.0` formats as `"25:00:00"`). Negative input is out of contract;
/// callers only ever pass segment times plus a non-negative offset.
pub fn format_timestamp(seconds: f64) -> String {
    debug_assert!(seconds >= 0.0, "timestamps are never negative");
    let total = seconds as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}
