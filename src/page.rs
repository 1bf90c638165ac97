//! Bounded discovery result pages
//!
//! One response round of discovery delivers up to `N` records. The page
//! stores them in arrival order together with a read cursor tracking how far
//! the engine has consumed the page. Replacing the page resets the cursor;
//! the cursor never exceeds the entry count; input larger than the capacity
//! is rejected instead of truncated.

use crate::DiscoveryError;
use heapless::Vec;

/// Fixed-capacity ordered sequence of discovery records with a read cursor
#[derive(Debug, Default)]
pub struct ResultPage<T, const N: usize> {
    entries: Vec<T, N>,
    cursor: usize,
}

impl<T: Clone, const N: usize> ResultPage<T, N> {
    /// Create an empty page
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            cursor: 0,
        }
    }

    /// Replace the page contents with one response round of records
    ///
    /// Resets the read cursor to the start of the page.
    ///
    /// # Errors
    ///
    /// Returns `DiscoveryError::CapacityExceeded` if the response carries
    /// more records than the page can hold; the page is left cleared in that
    /// case, never partially filled.
    pub fn replace(&mut self, records: &[T]) -> Result<(), DiscoveryError> {
        self.entries.clear();
        self.cursor = 0;
        if records.len() > N {
            return Err(DiscoveryError::CapacityExceeded);
        }
        // Cannot fail after the length check
        self.entries.extend_from_slice(records).ok();
        Ok(())
    }

    /// Drop all records and reset the cursor
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = 0;
    }

    /// Number of records in the page
    #[must_use]
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the page holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current read cursor position
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Check whether every record has been read
    #[must_use]
    pub fn is_consumed(&self) -> bool {
        self.cursor >= self.entries.len()
    }

    /// Get the record at the cursor without advancing
    #[must_use]
    pub fn current(&self) -> Option<&T> {
        self.entries.get(self.cursor)
    }

    /// Get the record at the cursor and advance past it
    pub fn next_unread(&mut self) -> Option<&T> {
        if self.cursor < self.entries.len() {
            let index = self.cursor;
            self.cursor += 1;
            self.entries.get(index)
        } else {
            None
        }
    }

    /// Advance the cursor by one record, saturating at the entry count
    pub fn advance(&mut self) {
        if self.cursor < self.entries.len() {
            self.cursor += 1;
        }
    }

    /// Get the last record of the page
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.entries.last()
    }
}
