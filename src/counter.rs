use log::debug;

use crate::document::PageSource;
use crate::error::{CountError, Result};

/// A non-empty search term, stored lower-cased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyword(String);

/// Occurrences found on a single page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCount {
    pub page_number: u32, // 1-based
    pub occurrences: usize,
}

impl Keyword {
    pub fn new(raw: &str) -> Result<Self> {
        if raw.is_empty() {
            return Err(CountError::EmptyKeyword);
        }
        Ok(Keyword(raw.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Counts non-overlapping, case-insensitive matches in `text`,
    /// scanning left to right
    pub fn occurrences_in(&self, text: &str) -> usize {
        text.to_lowercase().matches(self.0.as_str()).count()
    }
}

/// Counts the keyword page by page, in page order.
/// Stops at the first page that fails to yield text.
pub fn count_pages<S: PageSource + ?Sized>(source: &S, keyword: &Keyword) -> Result<Vec<PageCount>> {
    let mut counts = Vec::with_capacity(source.page_count());

    for index in 0..source.page_count() {
        let text = source.page_text(index)?;
        let occurrences = keyword.occurrences_in(&text);
        let page_number = index as u32 + 1;
        debug!("Page {page_number}: {occurrences} occurrence(s) of '{}'", keyword.as_str());
        counts.push(PageCount { page_number, occurrences });
    }

    Ok(counts)
}

/// Total occurrences of the keyword across every page of `source`
pub fn count_occurrences<S: PageSource + ?Sized>(source: &S, keyword: &Keyword) -> Result<usize> {
    let pages = count_pages(source, keyword)?;
    Ok(pages.iter().map(|p| p.occurrences).sum())
}
