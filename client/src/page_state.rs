//! URL-driven paging state.
//!
//! The current page lives in the navigable URL's `page` query parameter,
//! not in in-memory state. [`PageQuery::from_url`] parses it leniently and
//! [`PageQuery::apply_to_url`] writes it back; a page change is therefore a
//! URL rewrite, and re-reading the URL restarts the fetch cycle.

use pagination::{DEFAULT_PAGE_SIZE, PageRequest, PageRequestError};
use url::Url;

/// One-based current page derived from a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    page: u32,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self { page: 1 }
    }
}

impl PageQuery {
    /// Parse the `page` parameter from a URL.
    ///
    /// Absent, unparsable, zero, or negative values all resolve to page 1.
    pub fn from_url(url: &Url) -> Self {
        let parsed = url
            .query_pairs()
            .find(|(key, _)| key == "page")
            .and_then(|(_, value)| value.parse::<i64>().ok());
        let page = match parsed {
            Some(n) if n >= 1 => u32::try_from(n).unwrap_or(u32::MAX),
            _ => 1,
        };
        Self { page }
    }

    /// One-based page for display.
    pub const fn page(self) -> u32 {
        self.page
    }

    /// Zero-based page number for the REST call: `page - 1`.
    pub const fn api_page_number(self) -> u32 {
        self.page - 1
    }

    /// Move to another page, clamping to at least 1.
    pub fn with_page(self, page: u32) -> Self {
        Self { page: page.max(1) }
    }

    /// The page request this state issues, at the given page size.
    ///
    /// # Errors
    /// Returns [`PageRequestError::ZeroPageSize`] when `page_size` is `0`.
    pub fn page_request(self, page_size: u32) -> Result<PageRequest, PageRequestError> {
        PageRequest::new(self.api_page_number(), page_size)
    }

    /// The page request at the service's default page size.
    pub fn default_page_request(self) -> PageRequest {
        // DEFAULT_PAGE_SIZE is a non-zero constant, so this cannot fail.
        self.page_request(DEFAULT_PAGE_SIZE)
            .unwrap_or_else(|err| panic!("default page size must be valid: {err}"))
    }

    /// Rewrite the URL's query string to carry this page.
    ///
    /// The whole query string is replaced, matching the original surface's
    /// page-change behavior.
    pub fn apply_to_url(self, url: &mut Url) {
        url.query_pairs_mut()
            .clear()
            .append_pair("page", &self.page.to_string());
    }
}
