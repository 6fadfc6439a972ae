use serde::Serialize;

/// A timestamped segment parsed out of transcript text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimestampedSegment {
    /// Offset from the start of the video, in whole seconds
    pub start_time: u64,
    /// Where the next segment begins, or `start_time` plus the default width
    pub end_time: u64,
    /// Accumulated segment text, lines joined with single spaces
    pub text: String,
    /// The marker exactly as it appeared, brackets stripped
    pub raw_timestamp: String,
}

/// One timeline entry, ready for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineEntry {
    pub timestamp: String,
    pub start_time: u64,
    pub end_time: u64,
    pub text_preview: String,
    pub duration_seconds: u64,
}

/// Navigable timeline for a whole transcript
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranscriptTimeline {
    pub timeline: Vec<TimelineEntry>,
    pub total_segments: usize,
    pub total_duration_seconds: u64,
    pub total_duration_formatted: String,
    /// False when the entries were synthesized from unmarked text
    pub has_timestamps: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// A segment contributing to a time-range extraction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeSegment {
    pub timestamp: String,
    pub start_time: u64,
    pub end_time: u64,
    pub text: String,
}

/// Text extracted for a `[start, end)` window, with the segments it came from
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeRangeText {
    pub text: String,
    pub segments: Vec<RangeSegment>,
    /// Human-readable `"MM:SS - MM:SS"` window label
    pub duration: String,
    pub segment_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Tunable widths and limits for timeline building.
///
/// The defaults reproduce the standard behavior; tests and embedders can
/// override individual fields.
#[derive(Debug, Clone)]
pub struct TimelineConfig {
    /// Width assumed for a segment no successor corrects
    pub default_segment_secs: u64,
    /// Grid step between synthesized entries
    pub synthetic_segment_secs: u64,
    /// Rough entry count a synthesized timeline aims for
    pub target_segment_count: usize,
    /// Hard cap on sentences grouped into one synthetic entry
    pub max_sentences_per_group: usize,
    /// Preview truncation for parsed timeline entries
    pub preview_chars: usize,
    /// Preview truncation for synthesized timeline entries
    pub synthetic_preview_chars: usize,
}

impl TimelineConfig {
    pub const DEFAULT_SEGMENT_SECS: u64 = 30;
    pub const SYNTHETIC_SEGMENT_SECS: u64 = 30;
    pub const TARGET_SEGMENT_COUNT: usize = 10;
    pub const MAX_SENTENCES_PER_GROUP: usize = 5;
    pub const PREVIEW_CHARS: usize = 100;
    pub const SYNTHETIC_PREVIEW_CHARS: usize = 200;
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            default_segment_secs: Self::DEFAULT_SEGMENT_SECS,
            synthetic_segment_secs: Self::SYNTHETIC_SEGMENT_SECS,
            target_segment_count: Self::TARGET_SEGMENT_COUNT,
            max_sentences_per_group: Self::MAX_SENTENCES_PER_GROUP,
            preview_chars: Self::PREVIEW_CHARS,
            synthetic_preview_chars: Self::SYNTHETIC_PREVIEW_CHARS,
        }
    }
}
