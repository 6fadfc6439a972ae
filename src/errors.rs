use std::error::Error;
use std::fmt;
use std::io;

/// Enumeration of all possible errors that can occur in the transcript parser
#[derive(Debug)]
pub enum TranscriptParserError {
    /// The requested window start does not come before its end
    InvalidRange { start: String, end: String },
    /// The transcript contains no usable text
    EmptyTranscript,
    /// Extraction failed for a reason described by the attached message
    Extraction(ExtractionError),
}

/// Extraction specific errors
#[derive(Debug)]
pub struct ExtractionError {
    pub message: String,
}

impl ExtractionError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for TranscriptParserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranscriptParserError::InvalidRange { start, end } => {
                write!(f, "Start time must be before end time ({} >= {})", start, end)
            }
            TranscriptParserError::EmptyTranscript => write!(f, "Transcript is empty"),
            TranscriptParserError::Extraction(err) => write!(f, "Extraction error: {}", err),
        }
    }
}

impl fmt::Display for ExtractionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for TranscriptParserError {}
impl Error for ExtractionError {}

// Conversion implementations
impl From<ExtractionError> for TranscriptParserError {
    fn from(err: ExtractionError) -> Self {
        TranscriptParserError::Extraction(err)
    }
}

// Conversion to io::Error for callers that funnel everything through std::io
impl From<TranscriptParserError> for io::Error {
    fn from(err: TranscriptParserError) -> Self {
        io::Error::other(err)
    }
}

impl From<ExtractionError> for io::Error {
    fn from(err: ExtractionError) -> Self {
        io::Error::other(err)
    }
}

// Type alias for Result with TranscriptParserError
pub type TranscriptParserResult<T> = Result<T, TranscriptParserError>;
