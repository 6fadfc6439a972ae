/*
# Timecode Module

 Provides conversions between timestamp strings and whole seconds, shared by the
 timeline parser, the range extractor, and the synthetic timeline builder.
 Parsing is deliberately permissive: transcripts are uncontrolled third-party
 text, so a malformed timestamp coerces to 0 instead of failing the pipeline.

 Key components:
 - `parse_time_to_seconds()`: `MM:SS` / `HH:MM:SS` strings to seconds
 - `seconds_to_time_string()`: seconds to zero-padded `MM:SS`
 - `range_label()`: the `"MM:SS - MM:SS"` label attached to range results
*/

/// Convert a `MM:SS` or `HH:MM:SS` string to whole seconds.
///
/// Any other group count, or a group that is not an unsigned number, yields 0.
/// Components are not range-checked ("75:00" is 4500 seconds) and the math
/// saturates, so arbitrary input never panics.
pub fn parse_time_to_seconds(time_str: &str) -> u64 {
    fn numeric(part: &str) -> Option<u64> {
        part.trim().parse::<u64>().ok()
    }

    let parts: Vec<&str> = time_str.trim().split(':').collect();

    match parts.as_slice() {
        [minutes, seconds] => match (numeric(minutes), numeric(seconds)) {
            (Some(m), Some(s)) => m.saturating_mul(60).saturating_add(s),
            _ => 0,
        },
        [hours, minutes, seconds] => {
            match (numeric(hours), numeric(minutes), numeric(seconds)) {
                (Some(h), Some(m), Some(s)) => h
                    .saturating_mul(3600)
                    .saturating_add(m.saturating_mul(60))
                    .saturating_add(s),
                _ => 0,
            }
        }
        _ => 0,
    }
}

/// Format whole seconds as zero-padded `MM:SS`.
///
/// Minutes are not rolled over into hours, so 3661 seconds formats as
/// "61:01". Synthetic timestamps and range labels depend on this shape.
pub fn seconds_to_time_string(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Render the `"MM:SS - MM:SS"` label describing an extraction window.
pub fn range_label(start_seconds: u64, end_seconds: u64) -> String {
    format!(
        "{} - {}",
        seconds_to_time_string(start_seconds),
        seconds_to_time_string(end_seconds)
    )
}
