use super::types::{
    RangeSegment, TimeRangeText, TimelineConfig, TimelineEntry, TranscriptTimeline,
};
use super::utils::{byte_offset_for_char, overlaps_window, truncate_chars};
use crate::errors::{ExtractionError, TranscriptParserError, TranscriptParserResult};
use crate::timecode::{range_label, seconds_to_time_string};
use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;

/// Disclosure attached to every synthesized timeline.
pub(crate) const SYNTHETIC_TIMELINE_NOTE: &str =
    "This transcript does not contain original timestamps. Segments are artificially created for navigation purposes.";

/// Disclosure attached to every range extraction answered synthetically.
pub(crate) const SYNTHETIC_RANGE_NOTE: &str =
    "This transcript does not contain original timestamps. Content extracted using artificial timeline.";

/// Placeholder text for a window no synthetic segment overlaps.
pub(crate) const NO_CONTENT_TEXT: &str = "No content found in the selected time range.";

/// Sentence boundary: terminal punctuation followed by whitespace.
static SENTENCE_SPLIT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+\s+").unwrap());

/// Build an evenly spaced timeline for a transcript with no markers at all.
///
/// The text is split into units (sentences, falling back to paragraphs, then
/// to single lines), the units are grouped toward a target entry count, and
/// each group is pinned to a fixed-width grid starting at 00:00.
pub fn build_synthetic_timeline(
    transcript: &str,
    config: &TimelineConfig,
) -> TranscriptParserResult<TranscriptTimeline> {
    let text = transcript.trim();
    if text.is_empty() {
        return Err(TranscriptParserError::EmptyTranscript);
    }

    let units = split_into_units(text)?;

    let mut group_size = (units.len() / config.target_segment_count.max(1)).max(1);
    if group_size > config.max_sentences_per_group {
        group_size = config.max_sentences_per_group;
    }

    let mut timeline = Vec::new();
    let mut current_time: u64 = 0;

    for group in units.chunks(group_size) {
        let preview = truncate_chars(&group.join(". "), config.synthetic_preview_chars);

        timeline.push(TimelineEntry {
            timestamp: seconds_to_time_string(current_time),
            start_time: current_time,
            end_time: current_time.saturating_add(config.synthetic_segment_secs),
            text_preview: preview,
            duration_seconds: config.synthetic_segment_secs,
        });

        current_time = current_time.saturating_add(config.synthetic_segment_secs);
    }

    debug!(
        "Synthesized {} timeline entries from {} text units",
        timeline.len(),
        units.len()
    );

    let total_segments = timeline.len();

    Ok(TranscriptTimeline {
        timeline,
        total_segments,
        total_duration_seconds: current_time,
        total_duration_formatted: seconds_to_time_string(current_time),
        has_timestamps: false,
        note: Some(SYNTHETIC_TIMELINE_NOTE.to_string()),
    })
}

/// Answer a range query against a transcript that has no real markers.
///
/// The window text is a length-proportional estimate: character offsets
/// scaled by the requested share of the synthetic duration, trimmed to word
/// boundaries at each cut edge. Results carry the synthetic disclosure note.
pub fn extract_from_synthetic_timeline(
    transcript: &str,
    start_seconds: u64,
    end_seconds: u64,
    config: &TimelineConfig,
) -> TranscriptParserResult<TimeRangeText> {
    let timeline = build_synthetic_timeline(transcript, config)?;
    let total_duration = timeline.total_duration_seconds;

    let selected: Vec<&TimelineEntry> = timeline
        .timeline
        .iter()
        .filter(|entry| {
            overlaps_window(entry.start_time, entry.end_time, start_seconds, end_seconds)
        })
        .collect();

    if selected.is_empty() {
        return Ok(TimeRangeText {
            text: NO_CONTENT_TEXT.to_string(),
            segments: Vec::new(),
            duration: range_label(start_seconds, end_seconds),
            segment_count: 0,
            note: Some(SYNTHETIC_RANGE_NOTE.to_string()),
        });
    }

    let text = proportional_slice(transcript, start_seconds, end_seconds, total_duration);

    let segments: Vec<RangeSegment> = selected
        .iter()
        .map(|entry| RangeSegment {
            timestamp: entry.timestamp.clone(),
            start_time: entry.start_time,
            end_time: entry.end_time,
            text: entry.text_preview.clone(),
        })
        .collect();
    let segment_count = segments.len();

    Ok(TimeRangeText {
        text,
        segments,
        duration: range_label(start_seconds, end_seconds),
        segment_count,
        note: Some(SYNTHETIC_RANGE_NOTE.to_string()),
    })
}

/// Split text into the units the synthetic grid groups: sentences first,
/// then blank-line paragraphs, then single lines. The first tier yielding at
/// least one non-empty unit wins.
fn split_into_units(text: &str) -> TranscriptParserResult<Vec<String>> {
    let sentences: Vec<String> = SENTENCE_SPLIT_REGEX
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    if !sentences.is_empty() {
        return Ok(sentences);
    }

    let paragraphs: Vec<String> = text
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect();
    if !paragraphs.is_empty() {
        return Ok(paragraphs);
    }

    let lines: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect();
    if !lines.is_empty() {
        return Ok(lines);
    }

    warn!("All split tiers came back empty for a non-empty transcript");
    Err(ExtractionError::new("Transcript could not be split into segments").into())
}

/// Estimate the slice of `transcript` covering `[start, end)` by scaling
/// character offsets against the synthetic duration, then trim the partial
/// word at each cut edge.
fn proportional_slice(
    transcript: &str,
    start_seconds: u64,
    end_seconds: u64,
    total_duration: u64,
) -> String {
    let total_chars = transcript.chars().count();
    let denominator = total_duration.max(1) as f64;

    let start_ratio = start_seconds as f64 / denominator;
    let end_ratio = (end_seconds as f64 / denominator).min(1.0);

    let start_char = (start_ratio * total_chars as f64) as usize;
    let end_char = (end_ratio * total_chars as f64) as usize;

    let start_byte = byte_offset_for_char(transcript, start_char);
    let end_byte = byte_offset_for_char(transcript, end_char.max(start_char));

    let mut selected = transcript[start_byte..end_byte].trim().to_string();

    // Drop the partial word left behind by a mid-text start cut.
    if start_char > 0 {
        if let Some(space) = selected.find(' ') {
            selected = selected[space + 1..].to_string();
        }
    }

    // Drop the partial word left behind by a mid-text end cut.
    if end_char < total_chars {
        if let Some(space) = selected.rfind(' ') {
            selected.truncate(space);
        }
    }

    selected
}
