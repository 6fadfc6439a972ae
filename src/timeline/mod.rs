mod extractor;
mod parser;
mod synthesizer;
mod types;
mod utils;

pub use extractor::{build_transcript_timeline, extract_text_for_time_range};
pub use types::{
    RangeSegment, TimeRangeText, TimelineConfig, TimelineEntry, TimestampedSegment,
    TranscriptTimeline,
};

// Exports for testing
pub use parser::parse_transcript_timestamps;
pub use synthesizer::{build_synthetic_timeline, extract_from_synthetic_timeline};
