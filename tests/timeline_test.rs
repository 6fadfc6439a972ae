use transcriptparser::{extract_timeline, TranscriptParserError};

const MARKED: &str = "[00:00] Hello there.\n\n[00:30] This is a test.\n\n[01:00] Final words.";

#[test]
fn test_timeline_from_marked_transcript() {
    let timeline = extract_timeline(MARKED).unwrap();

    assert!(timeline.has_timestamps);
    assert!(timeline.note.is_none());
    assert_eq!(timeline.total_segments, 3);
    assert_eq!(timeline.total_duration_seconds, 90);
    assert_eq!(timeline.total_duration_formatted, "01:30");

    let first = &timeline.timeline[0];
    assert_eq!(first.timestamp, "00:00");
    assert_eq!(first.start_time, 0);
    assert_eq!(first.end_time, 30);
    assert_eq!(first.text_preview, "Hello there.");
    assert_eq!(first.duration_seconds, 30);

    // The last entry keeps the default width.
    let last = &timeline.timeline[2];
    assert_eq!(last.start_time, 60);
    assert_eq!(last.end_time, 90);
}

#[test]
fn test_timeline_previews_are_truncated() {
    let long_text = "word ".repeat(40);
    let transcript = format!("[00:00] {}\n\n[00:30] Short.", long_text.trim());

    let timeline = extract_timeline(&transcript).unwrap();
    let preview = &timeline.timeline[0].text_preview;

    assert!(preview.ends_with("..."));
    assert_eq!(preview.chars().count(), 103);
    assert_eq!(timeline.timeline[1].text_preview, "Short.");
}

#[test]
fn test_timeline_with_hour_markers() {
    let timeline = extract_timeline("[1:00:00] Late start.").unwrap();

    assert_eq!(timeline.timeline[0].start_time, 3600);
    assert_eq!(timeline.timeline[0].timestamp, "1:00:00");
    assert_eq!(timeline.total_duration_seconds, 3630);
    // Durations format as MM:SS even past the hour mark.
    assert_eq!(timeline.total_duration_formatted, "60:30");
}

#[test]
fn test_timeline_from_plain_text_is_synthesized() {
    let prose = (0..12)
        .map(|i| format!("Plain sentence number {}.", i))
        .collect::<Vec<_>>()
        .join(" ");

    let timeline = extract_timeline(&prose).unwrap();

    assert!(!timeline.has_timestamps);
    assert!(timeline.note.is_some());
    assert!(!timeline.timeline.is_empty());
    assert_eq!(
        timeline.total_duration_seconds,
        timeline.total_segments as u64 * 30
    );
    assert_eq!(timeline.timeline[0].timestamp, "00:00");
}

#[test]
fn test_timeline_from_empty_transcript_fails() {
    let err = extract_timeline("").unwrap_err();
    assert!(matches!(err, TranscriptParserError::EmptyTranscript));
    assert_eq!(err.to_string(), "Transcript is empty");

    let err = extract_timeline("   \n\n\t\n  ").unwrap_err();
    assert!(matches!(err, TranscriptParserError::EmptyTranscript));
}

#[test]
fn test_timeline_serialization_shape() {
    let value = serde_json::to_value(extract_timeline(MARKED).unwrap()).unwrap();

    assert!(value.get("timeline").is_some());
    assert_eq!(value["total_segments"], 3);
    assert_eq!(value["total_duration_seconds"], 90);
    assert_eq!(value["total_duration_formatted"], "01:30");
    assert_eq!(value["has_timestamps"], true);
    // The note only appears on synthesized timelines.
    assert!(value.get("note").is_none());

    let entry = &value["timeline"][1];
    assert_eq!(entry["timestamp"], "00:30");
    assert_eq!(entry["text_preview"], "This is a test.");

    let synthesized = extract_timeline("Just some plain words here.").unwrap();
    let value = serde_json::to_value(synthesized).unwrap();
    assert_eq!(value["has_timestamps"], false);
    assert!(value.get("note").is_some());
}
