//! Offset pagination primitives shared by the job board endpoints.
//!
//! A [`PageRequest`] captures a one-based page number and a page size. Stores
//! translate it into `LIMIT`/`OFFSET` clauses through [`PageRequest::offset`]
//! and [`PageRequest::limit`], and callers wrap the returned rows in a
//! [`Page`] envelope whose [`PageMetadata`] carries the matching total and the
//! derived page count.
//!
//! # Examples
//! ```
//! use pagination::{Page, PageRequest};
//!
//! let request = PageRequest::new(2, 10).expect("valid page request");
//! assert_eq!(request.offset(), 10);
//!
//! let page = Page::new(vec!["a", "b"], request, 12);
//! assert_eq!(page.metadata().total_pages(), 2);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors raised when constructing a [`PageRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PageRequestError {
    /// Page numbers start at one.
    #[error("page must be at least 1")]
    ZeroPage,
    /// A page must hold at least one item.
    #[error("limit must be at least 1")]
    ZeroLimit,
}

/// One-based page number plus page size.
///
/// ## Invariants
/// - `page >= 1`
/// - `limit >= 1`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl PageRequest {
    /// Build a request, rejecting zero pages and zero-sized pages.
    ///
    /// # Errors
    /// Returns [`PageRequestError`] when either value is zero.
    pub const fn new(page: u32, limit: u32) -> Result<Self, PageRequestError> {
        if page == 0 {
            return Err(PageRequestError::ZeroPage);
        }
        if limit == 0 {
            return Err(PageRequestError::ZeroLimit);
        }
        Ok(Self { page, limit })
    }

    /// One-based page number.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Maximum number of items on the page.
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// Number of items skipped before this page starts.
    #[must_use]
    pub const fn offset(&self) -> u64 {
        (self.page as u64 - 1) * self.limit as u64
    }

    /// Number of pages needed to show `total` items at this page size.
    ///
    /// # Examples
    /// ```
    /// use pagination::PageRequest;
    ///
    /// let request = PageRequest::new(1, 6).expect("valid page request");
    /// assert_eq!(request.total_pages(0), 0);
    /// assert_eq!(request.total_pages(13), 3);
    /// ```
    #[must_use]
    pub const fn total_pages(&self, total: u64) -> u64 {
        total.div_ceil(self.limit as u64)
    }
}

/// Metadata describing where a page sits within the full result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    current_page: u32,
    per_page: u32,
    total: u64,
    total_pages: u64,
}

impl PageMetadata {
    /// Derive metadata for `request` given the number of matching items.
    #[must_use]
    pub const fn new(request: PageRequest, total: u64) -> Self {
        Self {
            current_page: request.page(),
            per_page: request.limit(),
            total,
            total_pages: request.total_pages(total),
        }
    }

    /// Page number that was requested.
    #[must_use]
    pub const fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Page size that was requested.
    #[must_use]
    pub const fn per_page(&self) -> u32 {
        self.per_page
    }

    /// Number of items matching the query, ignoring pagination.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// `ceil(total / per_page)`.
    #[must_use]
    pub const fn total_pages(&self) -> u64 {
        self.total_pages
    }
}

/// Page envelope serialised as `{"data": [...], "metadata": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    data: Vec<T>,
    metadata: PageMetadata,
}

impl<T> Page<T> {
    /// Wrap the items of one page together with its metadata.
    #[must_use]
    pub const fn new(data: Vec<T>, request: PageRequest, total: u64) -> Self {
        Self {
            data,
            metadata: PageMetadata::new(request, total),
        }
    }

    /// Items on this page.
    #[must_use]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Pagination metadata.
    #[must_use]
    pub const fn metadata(&self) -> &PageMetadata {
        &self.metadata
    }

    /// Convert every item while keeping the metadata.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            data: self.data.into_iter().map(f).collect(),
            metadata: self.metadata,
        }
    }

    /// Split the envelope into its items and metadata.
    #[must_use]
    pub fn into_parts(self) -> (Vec<T>, PageMetadata) {
        (self.data, self.metadata)
    }
}

#[cfg(test)]
mod tests {
    //! Unit coverage for offset arithmetic and envelope serialisation.

    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(0, 10, PageRequestError::ZeroPage)]
    #[case(1, 0, PageRequestError::ZeroLimit)]
    fn rejects_zero_values(#[case] page: u32, #[case] limit: u32, #[case] expected: PageRequestError) {
        assert_eq!(PageRequest::new(page, limit), Err(expected));
    }

    #[rstest]
    #[case(1, 10, 0)]
    #[case(2, 10, 10)]
    #[case(3, 6, 12)]
    fn offset_skips_previous_pages(#[case] page: u32, #[case] limit: u32, #[case] offset: u64) {
        let request = PageRequest::new(page, limit).expect("valid request");
        assert_eq!(request.offset(), offset);
    }

    #[rstest]
    #[case(0, 10, 0)]
    #[case(1, 10, 1)]
    #[case(10, 10, 1)]
    #[case(11, 10, 2)]
    #[case(13, 6, 3)]
    fn total_pages_rounds_up(#[case] total: u64, #[case] limit: u32, #[case] pages: u64) {
        let request = PageRequest::new(1, limit).expect("valid request");
        assert_eq!(request.total_pages(total), pages);
    }

    #[rstest]
    fn offset_does_not_overflow_for_large_pages() {
        let request = PageRequest::new(u32::MAX, u32::MAX).expect("valid request");
        assert_eq!(request.offset(), (u64::from(u32::MAX) - 1) * u64::from(u32::MAX));
    }

    #[rstest]
    fn page_serialises_data_and_metadata() {
        let request = PageRequest::new(2, 1).expect("valid request");
        let page = Page::new(vec!["second"], request, 3);

        let value = serde_json::to_value(&page).expect("serialise page");
        assert_eq!(
            value,
            json!({
                "data": ["second"],
                "metadata": {
                    "current_page": 2,
                    "per_page": 1,
                    "total": 3,
                    "total_pages": 3
                }
            })
        );
    }

    #[rstest]
    fn map_preserves_metadata() {
        let request = PageRequest::new(1, 2).expect("valid request");
        let page = Page::new(vec![1, 2], request, 5).map(|n| n * 10);

        assert_eq!(page.data(), &[10, 20]);
        assert_eq!(page.metadata().total(), 5);
        assert_eq!(page.metadata().total_pages(), 3);
    }
}
