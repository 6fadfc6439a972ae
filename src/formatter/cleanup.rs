use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static MARKER_RESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[(\d{1,2}:\d{2})\]\s*").unwrap());
static MULTI_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"  +").unwrap());

static EXCESS_BLANK_LINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());
static MARKER_TAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[(\d{1,2}:\d{2})\][ \t]*").unwrap());
static SPACE_BEFORE_PUNCT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]+([,.!?])").unwrap());
static JAMMED_SENTENCES: Lazy<Regex> = Lazy::new(|| Regex::new(r"([.!?])([A-Z])").unwrap());

/// Sentence boundary: terminal punctuation followed by whitespace.
static SENTENCE_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+\s+").unwrap());

/// Collapse every whitespace run (newlines included) to a single space and
/// re-space bracketed `[MM:SS]` markers, yielding one flat line of text.
pub fn normalize_whitespace(text: &str) -> String {
    let flattened = WHITESPACE_RUN.replace_all(text, " ");
    let respaced = MARKER_RESPACE.replace_all(&flattened, " [$1] ");
    MULTI_SPACE.replace_all(&respaced, " ").trim().to_string()
}

/// Final formatting pass over marked-up text: cap blank runs at one blank
/// line, pin `[MM:SS] ` marker spacing, and repair punctuation spacing.
///
/// Paragraph breaks survive this pass; only spaces and tabs are touched
/// around punctuation.
pub fn tidy_formatting(text: &str) -> String {
    let text = EXCESS_BLANK_LINES.replace_all(text, "\n\n");
    let text = MARKER_TAIL.replace_all(&text, "[$1] ");
    let text = SPACE_BEFORE_PUNCT.replace_all(&text, "$1");
    let text = JAMMED_SENTENCES.replace_all(&text, "$1 $2");
    MULTI_SPACE.replace_all(&text, " ").trim().to_string()
}

/// Regroup running prose into paragraphs of roughly
/// `sentences_per_paragraph` sentences, joined by blank lines.
pub fn group_into_paragraphs(text: &str, sentences_per_paragraph: usize) -> String {
    let per_paragraph = sentences_per_paragraph.max(1);
    let sentences = split_sentences(text);

    let mut paragraphs = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for sentence in sentences {
        current.push(sentence);

        if current.len() >= per_paragraph {
            paragraphs.push(current.join(" "));
            current.clear();
        }
    }

    if !current.is_empty() {
        paragraphs.push(current.join(" "));
    }

    paragraphs.join("\n\n")
}

/// Split on sentence boundaries, keeping the terminal punctuation run with
/// the sentence it closes.
fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut last = 0;

    for boundary in SENTENCE_BOUNDARY.find_iter(text) {
        let punctuation_len = boundary.as_str().trim_end().len();
        let sentence = text[last..boundary.start() + punctuation_len].trim();
        if !sentence.is_empty() {
            sentences.push(sentence);
        }
        last = boundary.end();
    }

    if last < text.len() {
        let tail = text[last..].trim();
        if !tail.is_empty() {
            sentences.push(tail);
        }
    }

    sentences
}
