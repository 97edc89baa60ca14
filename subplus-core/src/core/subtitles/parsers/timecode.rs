use chrono::{DateTime, NaiveTime};
use regex::Captures;

/// Calculate the playback seconds for a matched timestamp with a three-digit
/// millisecond group, reading four capture groups from the given offset.
pub fn seconds_from_millis_groups(captures: &Captures, offset: usize) -> f64 {
    group_value(captures, offset) * 3600.0
        + group_value(captures, offset + 1) * 60.0
        + group_value(captures, offset + 2)
        + group_value(captures, offset + 3) / 1000.0
}

/// Calculate the playback seconds for a matched timestamp with a two-digit
/// centisecond group, reading four capture groups from the given offset.
pub fn seconds_from_centis_groups(captures: &Captures, offset: usize) -> f64 {
    group_value(captures, offset) * 3600.0
        + group_value(captures, offset + 1) * 60.0
        + group_value(captures, offset + 2)
        + group_value(captures, offset + 3) / 100.0
}

/// Derive the wall-clock time for the given playback offset in seconds.
/// The offset is truncated to whole seconds, sub-second precision is dropped
/// as the exporters hard-code the millisecond field.
pub fn time_from_seconds(seconds: f64) -> NaiveTime {
    DateTime::from_timestamp(seconds as i64, 0)
        .expect("Time went in the past")
        .time()
}

fn group_value(captures: &Captures, index: usize) -> f64 {
    captures
        .get(index)
        .map(|e| e.as_str())
        .and_then(|e| e.parse::<f64>().ok())
        .unwrap_or(0.0)
}
