mod chunks;
mod cleanup;

pub use chunks::{format_plain_transcript, format_timestamped_chunks, TranscriptChunk};
pub use cleanup::{group_into_paragraphs, normalize_whitespace, tidy_formatting};
