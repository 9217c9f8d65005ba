use std::path::{Path, PathBuf};

use log::info;
use lopdf::Document;

use crate::error::{CountError, Result};

/// Anything that can hand out plain text one page at a time.
pub trait PageSource {
    fn page_count(&self) -> usize;

    /// Text of the page at `index` (0-based)
    fn page_text(&self, index: usize) -> Result<String>;
}

/// An opened PDF. There is no explicit `Drop` impl; the parsed document and
/// its buffers are freed when the value goes out of scope, on every path.
#[derive(Debug)]
pub struct PdfDocument {
    path: PathBuf,
    inner: Document,
    page_numbers: Vec<u32>,
}

impl PdfDocument {
    /// Reads and parses the PDF at `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        // Step 1: Read the file
        let bytes = std::fs::read(&path).map_err(|source| CountError::FileAccess {
            path: path.clone(),
            source,
        })?;

        // Step 2: Parse
        let inner = Document::load_mem(&bytes).map_err(|source| CountError::Format {
            path: path.clone(),
            source,
        })?;

        // get_pages is keyed by page number, so this is already in page order
        let page_numbers: Vec<u32> = inner.get_pages().into_keys().collect();
        info!("Loaded PDF {} ({} pages)", path.display(), page_numbers.len());

        return Ok(PdfDocument { path, inner, page_numbers });
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Ends use of the document. Consuming `self` drops it here
    /// instead of at the end of the caller's scope.
    pub fn close(self) {
        info!("Closing PDF {}", self.path().display());
    }
}

impl PageSource for PdfDocument {
    fn page_count(&self) -> usize {
        self.page_numbers.len()
    }

    fn page_text(&self, index: usize) -> Result<String> {
        let Some(&page) = self.page_numbers.get(index) else {
            return Err(CountError::PageOutOfRange {
                index,
                page_count: self.page_numbers.len(),
            });
        };

        self.inner
            .extract_text(&[page])
            .map_err(|source| CountError::PageExtraction { page, source })
    }
}

impl<T: AsRef<str>> PageSource for [T] {
    fn page_count(&self) -> usize {
        self.len()
    }

    fn page_text(&self, index: usize) -> Result<String> {
        self.get(index)
            .map(|page| page.as_ref().to_string())
            .ok_or(CountError::PageOutOfRange { index, page_count: self.len() })
    }
}

impl<T: AsRef<str>> PageSource for Vec<T> {
    fn page_count(&self) -> usize {
        self.as_slice().page_count()
    }

    fn page_text(&self, index: usize) -> Result<String> {
        self.as_slice().page_text(index)
    }
}
