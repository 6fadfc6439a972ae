use transcriptparser::extract_timeline;
use transcriptparser::formatter::{
    format_plain_transcript, format_timestamped_chunks, group_into_paragraphs,
    normalize_whitespace, tidy_formatting, TranscriptChunk,
};

fn chunk(text: &str, offset_ms: f64) -> TranscriptChunk {
    TranscriptChunk {
        text: text.to_string(),
        offset_ms,
    }
}

#[test]
fn test_formatted_chunks_feed_the_timeline_parser() {
    let chunks = vec![
        chunk("Welcome to the show.", 0.0),
        chunk("Today we cover parsing.", 32_000.0),
        chunk("Thanks for watching.", 65_500.0),
    ];

    let formatted = format_timestamped_chunks(&chunks);
    let timeline = extract_timeline(&formatted).unwrap();

    assert!(timeline.has_timestamps);
    assert_eq!(timeline.total_segments, 3);
    assert_eq!(timeline.timeline[0].timestamp, "00:00");
    assert_eq!(timeline.timeline[1].start_time, 32);
    assert_eq!(timeline.timeline[2].start_time, 65);
    assert_eq!(timeline.timeline[2].text_preview, "Thanks for watching.");
}

#[test]
fn test_chunks_parsed_from_provider_json() {
    let payload = r#"[
        {"text": "First part", "offset": 0},
        {"text": "second part.", "offset": 4500.25}
    ]"#;

    let chunks: Vec<TranscriptChunk> = serde_json::from_str(payload).unwrap();
    let formatted = format_timestamped_chunks(&chunks);

    assert_eq!(formatted, "[00:00] First part\n[00:04] second part.");
}

#[test]
fn test_plain_formatting_feeds_the_timeline_parser() {
    let prose = "We start simple. Things get deeper. A short recap follows. That is all.";

    let formatted = format_plain_transcript(prose);
    let timeline = extract_timeline(&formatted).unwrap();

    // The estimated markers are real markers once written out.
    assert!(timeline.has_timestamps);
    assert_eq!(timeline.total_segments, 4);
    assert_eq!(timeline.timeline[0].start_time, 0);
    assert!(timeline.timeline[1].start_time > 0);
}

#[test]
fn test_normalize_then_group_pipeline() {
    let messy = "One sentence here.   And\nanother one.\n\n\nA third. Then a fourth.";

    let flat = normalize_whitespace(messy);
    assert_eq!(
        flat,
        "One sentence here. And another one. A third. Then a fourth."
    );

    let grouped = group_into_paragraphs(&flat, 2);
    assert_eq!(
        grouped,
        "One sentence here. And another one.\n\nA third. Then a fourth."
    );
}

#[test]
fn test_tidy_formatting_repairs_spacing() {
    let rough = "[00:10]Intro text .It began\n\n\n\n[00:40] Later  on";
    assert_eq!(
        tidy_formatting(rough),
        "[00:10] Intro text. It began\n\n[00:40] Later on"
    );
}
