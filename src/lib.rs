pub mod timecode;
pub use timecode::{parse_time_to_seconds, range_label, seconds_to_time_string};

pub mod timeline;
pub use timeline::{
    RangeSegment, TimeRangeText, TimelineConfig, TimelineEntry, TimestampedSegment,
    TranscriptTimeline,
};

pub mod formatter;
pub use formatter::{format_plain_transcript, format_timestamped_chunks, TranscriptChunk};

pub mod errors;
pub use errors::{ExtractionError, TranscriptParserError, TranscriptParserResult};

/// Build the navigable timeline for a transcript using the default settings.
///
/// Transcripts carrying `[MM:SS]` or `[HH:MM:SS]` markers get one entry per
/// parsed segment; plain text falls back to a synthesized timeline flagged
/// with `has_timestamps: false`.
pub fn extract_timeline(transcript: &str) -> TranscriptParserResult<TranscriptTimeline> {
    timeline::build_transcript_timeline(transcript, &TimelineConfig::default())
}

/// Extract the text spoken inside a `[start, end)` window using the default
/// settings. `start_time` and `end_time` are `MM:SS` or `HH:MM:SS` strings.
pub fn extract_time_range(
    transcript: &str,
    start_time: &str,
    end_time: &str,
) -> TranscriptParserResult<TimeRangeText> {
    timeline::extract_text_for_time_range(
        transcript,
        start_time,
        end_time,
        &TimelineConfig::default(),
    )
}
