//! Run summary types.

/// Summary of a complete run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of repositories returned by the listing.
    pub repositories_listed: usize,

    /// Number of repositories skipped because they are not Go.
    pub repositories_skipped: usize,

    /// Number of repositories pages were generated for.
    pub repositories_processed: usize,

    /// Number of pages written.
    pub pages_written: usize,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the outcome of listing an account.
    pub fn record_listing(&mut self, listed: usize, skipped: usize) {
        self.repositories_listed += listed;
        self.repositories_skipped += skipped;
    }

    /// Records the pages written for one repository.
    pub fn record_repository(&mut self, pages: usize) {
        self.repositories_processed += 1;
        self.record_pages(pages);
    }

    /// Records pages written outside any repository.
    pub fn record_pages(&mut self, pages: usize) {
        self.pages_written += pages;
    }

    /// Returns true if no page was written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages_written == 0
    }
}
