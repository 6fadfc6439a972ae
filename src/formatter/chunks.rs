use crate::timecode::seconds_to_time_string;
use serde::{Deserialize, Serialize};

/// Lines accumulated before a sentence-terminal line may close a paragraph.
const MIN_LINES_PER_PARAGRAPH: usize = 2;

/// Seconds assumed per spoken sentence before the word-count adjustment.
const BASE_SECONDS_PER_SENTENCE: u64 = 4;

/// One extra second is granted per this many words in a sentence.
const WORDS_PER_EXTRA_SECOND: usize = 3;

/// Sentences grouped per paragraph in the plain-text rendering.
const SENTENCES_PER_PARAGRAPH: usize = 3;

/// One transcript chunk as delivered by a captioning provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptChunk {
    #[serde(default)]
    pub text: String,
    /// Offset from the start of the video in milliseconds; providers send
    /// both integral and fractional values.
    #[serde(rename = "offset", default)]
    pub offset_ms: f64,
}

/// Render provider chunks as `[MM:SS]`-marked lines grouped into paragraphs.
///
/// Blank chunks are skipped and embedded newlines collapse to spaces. A
/// paragraph closes after a sentence-terminal line once it holds at least two
/// lines, so a marker stays attached to the sentence it opens.
pub fn format_timestamped_chunks(chunks: &[TranscriptChunk]) -> String {
    let mut lines = Vec::new();

    for chunk in chunks {
        let text = chunk.text.trim();
        if text.is_empty() {
            continue;
        }

        let seconds = (chunk.offset_ms / 1000.0) as u64;
        let flattened = text.replace('\n', " ");

        lines.push(format!(
            "[{}] {}",
            seconds_to_time_string(seconds),
            flattened.trim()
        ));
    }

    let mut paragraphs = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in &lines {
        current.push(line);

        let sentence_end =
            line.ends_with('.') || line.ends_with('!') || line.ends_with('?');
        if sentence_end && current.len() >= MIN_LINES_PER_PARAGRAPH {
            paragraphs.push(current.join("\n"));
            current.clear();
        }
    }

    if !current.is_empty() {
        paragraphs.push(current.join("\n"));
    }

    paragraphs.join("\n\n")
}

/// Add estimated `[MM:SS]` markers to plain prose and group it into
/// paragraphs.
///
/// Marker spacing is a speaking-rate estimate (four seconds per sentence plus
/// one per three words), good enough for navigation rather than alignment.
/// Paragraphs break every few sentences or at a discourse marker.
pub fn format_plain_transcript(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut lines = Vec::new();
    let mut current_time: u64 = 0;

    for sentence in text.split(". ") {
        let cleaned = sentence.trim();
        if cleaned.is_empty() {
            continue;
        }

        let mut line = format!("[{}] {}", seconds_to_time_string(current_time), cleaned);
        if !cleaned.ends_with('.') {
            line.push('.');
        }
        lines.push(line);

        let words = sentence.split_whitespace().count();
        current_time += BASE_SECONDS_PER_SENTENCE + (words / WORDS_PER_EXTRA_SECOND) as u64;
    }

    let mut paragraphs = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        current.push(line);

        let discourse_break =
            line.contains("Now") || line.split_whitespace().nth(1) == Some("So");
        if (i + 1) % SENTENCES_PER_PARAGRAPH == 0 || discourse_break {
            paragraphs.push(current.join("\n"));
            current.clear();
        }
    }

    if !current.is_empty() {
        paragraphs.push(current.join("\n"));
    }

    paragraphs.join("\n\n")
}
