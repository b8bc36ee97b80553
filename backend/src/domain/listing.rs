//! Listing request parsing.
//!
//! Raw query parameters arrive as optional strings. Parsing never fails:
//! a bad page number falls back to the first page and a bad page size falls
//! back to [`FALLBACK_PAGE_SIZE`], which deliberately differs from
//! [`DEFAULT_PAGE_SIZE`] used when the size is absent.

use pagination::PageRequest;

/// Page used when the parameter is absent or invalid.
pub const DEFAULT_PAGE: u32 = 1;
/// Page size used when the parameter is absent.
pub const DEFAULT_PAGE_SIZE: u32 = 10;
/// Page size used when the parameter is present but malformed or below one.
pub const FALLBACK_PAGE_SIZE: u32 = 6;

/// Parse a page number, clamping anything unusable to [`DEFAULT_PAGE`].
///
/// Values beyond `u32::MAX` saturate.
#[must_use]
pub fn parse_page(raw: Option<&str>) -> u32 {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .filter(|page| *page >= 1)
        .map_or(DEFAULT_PAGE, clamp_to_u32)
}

/// Parse a page size.
///
/// Absent values yield [`DEFAULT_PAGE_SIZE`]; malformed values or values
/// below one yield [`FALLBACK_PAGE_SIZE`]. Values beyond `u32::MAX`
/// saturate.
///
/// # Examples
/// ```
/// use jobboard::domain::listing::parse_limit;
///
/// assert_eq!(parse_limit(None), 10);
/// assert_eq!(parse_limit(Some("abc")), 6);
/// assert_eq!(parse_limit(Some("25")), 25);
/// ```
#[must_use]
pub fn parse_limit(raw: Option<&str>) -> u32 {
    let Some(value) = raw else {
        return DEFAULT_PAGE_SIZE;
    };
    value
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|limit| *limit >= 1)
        .map_or(FALLBACK_PAGE_SIZE, clamp_to_u32)
}

fn clamp_to_u32(value: i64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

/// Filtered, paginated listing request.
///
/// ## Invariants
/// - `title_filter`, when present, is trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingQuery {
    title_filter: Option<String>,
    page: PageRequest,
}

impl ListingQuery {
    /// Build a query from an optional filter and a page request.
    #[must_use]
    pub fn new(title_filter: Option<&str>, page: PageRequest) -> Self {
        let title_filter = title_filter
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map(str::to_owned);
        Self { title_filter, page }
    }

    /// Build a query from raw, unvalidated parameters.
    ///
    /// # Examples
    /// ```
    /// use jobboard::domain::ListingQuery;
    ///
    /// let query = ListingQuery::from_raw(Some("  "), Some("0"), Some("-3"));
    /// assert_eq!(query.title_filter(), None);
    /// assert_eq!(query.page().page(), 1);
    /// assert_eq!(query.page().limit(), 6);
    /// ```
    #[must_use]
    pub fn from_raw(title: Option<&str>, page: Option<&str>, limit: Option<&str>) -> Self {
        let request = PageRequest::new(parse_page(page), parse_limit(limit))
            .unwrap_or(DEFAULT_PAGE_REQUEST);
        Self::new(title, request)
    }

    /// Trimmed title substring, if any.
    #[must_use]
    pub fn title_filter(&self) -> Option<&str> {
        self.title_filter.as_deref()
    }

    /// Requested page.
    #[must_use]
    pub const fn page(&self) -> PageRequest {
        self.page
    }
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self::new(None, DEFAULT_PAGE_REQUEST)
    }
}

const DEFAULT_PAGE_REQUEST: PageRequest = match PageRequest::new(DEFAULT_PAGE, DEFAULT_PAGE_SIZE) {
    Ok(request) => request,
    Err(_) => panic!("default page request must be valid"),
};

/// Case-insensitive substring match used by in-process filtering.
#[must_use]
pub fn title_matches(title: &str, filter: &str) -> bool {
    title.to_lowercase().contains(&filter.to_lowercase())
}
