use super::parser::parse_transcript_timestamps;
use super::synthesizer::{build_synthetic_timeline, extract_from_synthetic_timeline};
use super::types::{
    RangeSegment, TimeRangeText, TimelineConfig, TimelineEntry, TimestampedSegment,
    TranscriptTimeline,
};
use super::utils::{overlaps_window, truncate_chars};
use crate::errors::{TranscriptParserError, TranscriptParserResult};
use crate::timecode::{parse_time_to_seconds, range_label, seconds_to_time_string};
use log::{debug, info};

/// Build the navigable timeline for a transcript.
///
/// Transcripts with recognizable markers get one entry per parsed segment;
/// anything else falls back to a synthesized timeline with a disclosure note.
pub fn build_transcript_timeline(
    transcript: &str,
    config: &TimelineConfig,
) -> TranscriptParserResult<TranscriptTimeline> {
    let segments = parse_transcript_timestamps(transcript, config);

    if segments.is_empty() {
        info!("No timestamp markers found, synthesizing a timeline");
        return build_synthetic_timeline(transcript, config);
    }

    let timeline: Vec<TimelineEntry> = segments
        .iter()
        .map(|segment| TimelineEntry {
            timestamp: segment.raw_timestamp.clone(),
            start_time: segment.start_time,
            end_time: segment.end_time,
            text_preview: truncate_chars(&segment.text, config.preview_chars),
            duration_seconds: segment.end_time.saturating_sub(segment.start_time),
        })
        .collect();

    let total_duration = segments.last().map_or(0, |segment| segment.end_time);

    debug!(
        "Built timeline with {} segments spanning {} seconds",
        timeline.len(),
        total_duration
    );

    Ok(TranscriptTimeline {
        total_segments: timeline.len(),
        timeline,
        total_duration_seconds: total_duration,
        total_duration_formatted: seconds_to_time_string(total_duration),
        has_timestamps: true,
        note: None,
    })
}

/// Extract the text spoken inside a `[start, end)` window.
///
/// `start_time` and `end_time` are `MM:SS` or `HH:MM:SS` strings. Segments
/// overlapping the window are included whole, never clipped, each prefixed
/// with its original marker. A window no segment overlaps is a valid result
/// with empty text, not an error.
pub fn extract_text_for_time_range(
    transcript: &str,
    start_time: &str,
    end_time: &str,
    config: &TimelineConfig,
) -> TranscriptParserResult<TimeRangeText> {
    let start_seconds = parse_time_to_seconds(start_time);
    let end_seconds = parse_time_to_seconds(end_time);

    if start_seconds >= end_seconds {
        return Err(TranscriptParserError::InvalidRange {
            start: start_time.to_string(),
            end: end_time.to_string(),
        });
    }

    let segments = parse_transcript_timestamps(transcript, config);

    if segments.is_empty() {
        info!("No timestamp markers found, extracting from a synthetic timeline");
        return extract_from_synthetic_timeline(transcript, start_seconds, end_seconds, config);
    }

    let selected: Vec<&TimestampedSegment> = segments
        .iter()
        .filter(|segment| {
            overlaps_window(segment.start_time, segment.end_time, start_seconds, end_seconds)
        })
        .collect();

    debug!(
        "{} of {} segments overlap the {} window",
        selected.len(),
        segments.len(),
        range_label(start_seconds, end_seconds)
    );

    if selected.is_empty() {
        return Ok(TimeRangeText {
            text: String::new(),
            segments: Vec::new(),
            duration: range_label(start_seconds, end_seconds),
            segment_count: 0,
            note: None,
        });
    }

    let combined: Vec<String> = selected
        .iter()
        .map(|segment| format!("[{}] {}", segment.raw_timestamp, segment.text))
        .collect();

    let range_segments: Vec<RangeSegment> = selected
        .iter()
        .map(|segment| RangeSegment {
            timestamp: segment.raw_timestamp.clone(),
            start_time: segment.start_time,
            end_time: segment.end_time,
            text: segment.text.clone(),
        })
        .collect();

    Ok(TimeRangeText {
        text: combined.join("\n\n"),
        segment_count: range_segments.len(),
        segments: range_segments,
        duration: range_label(start_seconds, end_seconds),
        note: None,
    })
}
