//! Case-insensitive keyword counting over the text of every page of a PDF.
//!
//! Parsing and text extraction are done by `lopdf`; this crate only walks the
//! pages and counts non-overlapping matches.

use std::path::Path;

pub mod arg_parser;
pub mod counter;
pub mod document;
pub mod error;

pub use counter::{count_occurrences, count_pages, Keyword, PageCount};
pub use document::{PageSource, PdfDocument};
pub use error::{CountError, Result};

/// Opens the PDF at `path` and returns the total number of occurrences of
/// `keyword` across all its pages. The document is closed before returning,
/// on success and on error.
pub fn count_keyword_in_pdf<P: AsRef<Path>>(path: P, keyword: &str) -> Result<usize> {
    let keyword = Keyword::new(keyword)?;
    let document = PdfDocument::open(path)?;

    let total = count_occurrences(&document, &keyword)?;
    document.close();

    Ok(total)
}
