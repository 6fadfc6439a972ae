use super::types::{TimelineConfig, TimestampedSegment};
use crate::timecode::parse_time_to_seconds;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

/// Leading timestamp marker, brackets optional: "[MM:SS]", "MM:SS",
/// "[HH:MM:SS]", "HH:MM:SS", followed by the rest of the line.
static MARKER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[?(\d{1,2}:\d{2}(?::\d{2})?)\]?\s*(.*)$").unwrap());

/// Paragraph boundary: one or more blank lines.
static PARAGRAPH_SPLIT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n+").unwrap());

/// Line-scanning accumulator. A marker opens a segment; the next marker, the
/// end of the paragraph, or the end of input closes it.
enum SegmentState {
    Idle,
    Open {
        start_time: u64,
        raw_timestamp: String,
        buffer: Vec<String>,
    },
}

impl SegmentState {
    /// Close the open segment, emitting it only when some text accumulated.
    fn flush(&mut self, segments: &mut Vec<TimestampedSegment>, default_width: u64) {
        if let SegmentState::Open {
            start_time,
            raw_timestamp,
            buffer,
        } = std::mem::replace(self, SegmentState::Idle)
        {
            if !buffer.is_empty() {
                segments.push(TimestampedSegment {
                    start_time,
                    end_time: start_time.saturating_add(default_width),
                    text: buffer.join(" "),
                    raw_timestamp,
                });
            }
        }
    }
}

/// Parse a transcript into timestamped segments, kept in textual order.
///
/// Returns an empty vec when the text carries no recognizable markers, which
/// is the signal to fall back to a synthesized timeline. Lines appearing
/// before the first marker of a paragraph are discarded; a paragraph break
/// always closes the segment in progress.
pub fn parse_transcript_timestamps(
    transcript: &str,
    config: &TimelineConfig,
) -> Vec<TimestampedSegment> {
    let mut segments = Vec::new();

    for paragraph in PARAGRAPH_SPLIT_REGEX.split(transcript.trim()) {
        if paragraph.trim().is_empty() {
            continue;
        }

        let mut state = SegmentState::Idle;

        for line in paragraph.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match MARKER_REGEX.captures(line) {
                Some(caps) => {
                    // A new marker closes whatever was accumulating.
                    state.flush(&mut segments, config.default_segment_secs);

                    let raw_timestamp = caps[1].to_string();
                    let start_time = parse_time_to_seconds(&raw_timestamp);
                    let remainder = &caps[2];

                    let mut buffer = Vec::new();
                    if !remainder.is_empty() {
                        buffer.push(remainder.to_string());
                    }

                    state = SegmentState::Open {
                        start_time,
                        raw_timestamp,
                        buffer,
                    };
                }
                None => {
                    if let SegmentState::Open { buffer, .. } = &mut state {
                        buffer.push(line.to_string());
                    }
                }
            }
        }

        state.flush(&mut segments, config.default_segment_secs);
    }

    // Second pass: each segment ends where its successor starts. The final
    // segment keeps the default width, having no successor to correct it.
    for i in 1..segments.len() {
        let next_start = segments[i].start_time;
        segments[i - 1].end_time = next_start;
    }

    debug!("Parsed {} timestamped segments", segments.len());

    segments
}
