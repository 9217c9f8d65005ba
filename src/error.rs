//! Error types for keyword counting.

use std::path::PathBuf;

/// Result type alias for counting operations.
pub type Result<T> = std::result::Result<T, CountError>;

/// Errors that can occur while counting a keyword in a document.
#[derive(Debug, thiserror::Error)]
pub enum CountError {
    /// The keyword was the empty string
    #[error("Keyword must not be empty")]
    EmptyKeyword,

    /// The file could not be opened or read
    #[error("Failed to read '{}': {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was read but is not a parseable PDF
    #[error("Failed to parse '{}' as PDF: {source}", path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: lopdf::Error,
    },

    /// Text extraction failed on a single page (1-based page number)
    #[error("Failed to extract text from page {page}: {source}")]
    PageExtraction {
        page: u32,
        #[source]
        source: lopdf::Error,
    },

    /// A page index past the end of the document was requested
    #[error("Page index {index} out of range (document has {page_count} pages)")]
    PageOutOfRange { index: usize, page_count: usize },
}

impl CountError {
    /// Returns true for errors caused by how the program was invoked,
    /// false for errors caused by the document.
    pub fn is_usage(&self) -> bool {
        matches!(self, CountError::EmptyKeyword)
    }
}
