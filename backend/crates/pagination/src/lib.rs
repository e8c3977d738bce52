//! Shared paging contract for the users/posts service.
//!
//! Both the backend query layer and the client paging state speak in terms
//! of the types defined here:
//!
//! - [`PageRequest`] bounds a listing query with a zero-based page number
//!   and a positive page size, and derives the row offset and limit.
//! - [`PageRequest::total_pages`] derives the page count from a total row
//!   count.
//! - [`page_items`] produces the page/ellipsis sequence rendered by a
//!   pagination control, and [`PaginationControls`] adds the Previous/Next
//!   affordance state on top of it.
//!
//! The windowing algorithm is part of the public contract and is covered by
//! exact-sequence tests rather than being an implementation detail.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Page size applied when a listing request does not specify one.
pub const DEFAULT_PAGE_SIZE: u32 = 4;

/// Rejections raised when constructing a [`PageRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PageRequestError {
    /// The page size was zero; listing queries require at least one row.
    #[error("page size must be at least 1")]
    ZeroPageSize,
}

/// A bounded listing request: zero-based page number and positive page size.
///
/// The page number is zero-based at this boundary. User interfaces count
/// pages from 1 and must convert before constructing a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageRequest {
    page_number: u32,
    page_size: u32,
}

impl PageRequest {
    /// Construct a request, rejecting a zero page size.
    ///
    /// # Errors
    /// Returns [`PageRequestError::ZeroPageSize`] when `page_size` is `0`.
    pub const fn new(page_number: u32, page_size: u32) -> Result<Self, PageRequestError> {
        if page_size == 0 {
            return Err(PageRequestError::ZeroPageSize);
        }
        Ok(Self {
            page_number,
            page_size,
        })
    }

    /// Zero-based page number.
    #[must_use]
    pub const fn page_number(self) -> u32 {
        self.page_number
    }

    /// Number of rows per page; always at least 1.
    #[must_use]
    pub const fn page_size(self) -> u32 {
        self.page_size
    }

    /// Row offset of the first row on this page: `page_number * page_size`.
    ///
    /// Widened to `u64` so the product cannot overflow.
    #[must_use]
    pub const fn offset(self) -> u64 {
        self.page_number as u64 * self.page_size as u64
    }

    /// Maximum number of rows returned for this page.
    #[must_use]
    pub const fn limit(self) -> u32 {
        self.page_size
    }

    /// Total number of pages needed to list `count` rows at this page size.
    ///
    /// Defined as `ceil(count / page_size)`; zero rows yield zero pages.
    #[must_use]
    pub const fn total_pages(self, count: u64) -> u64 {
        count.div_ceil(self.page_size as u64)
    }
}

/// One entry in the rendered page sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    /// A clickable page number (one-based).
    Page(u32),
    /// A non-interactive gap marker between page numbers.
    Ellipsis,
}

/// Compute the page/ellipsis sequence for a pagination control.
///
/// With five or fewer pages every page is listed. Otherwise the sequence
/// always contains page 1 and the last page, the contiguous window around
/// the current page, and ellipsis markers where pages are elided:
///
/// - an ellipsis after page 1 when `current_page > 3`;
/// - the window `max(2, current_page - 1) ..= min(total_pages - 1,
///   current_page + 1)`, skipping values already present;
/// - an ellipsis before the last page when
///   `current_page < total_pages - 2`.
#[must_use]
pub fn page_items(current_page: u32, total_pages: u32) -> Vec<PageItem> {
    if total_pages <= 5 {
        return (1..=total_pages).map(PageItem::Page).collect();
    }

    let mut items = vec![PageItem::Page(1)];
    let mut included = vec![1_u32];

    if current_page > 3 {
        items.push(PageItem::Ellipsis);
    }

    let start = current_page.saturating_sub(1).max(2);
    let end = current_page.saturating_add(1).min(total_pages - 1);
    for page in start..=end {
        if !included.contains(&page) {
            items.push(PageItem::Page(page));
            included.push(page);
        }
    }

    if current_page < total_pages - 2 {
        items.push(PageItem::Ellipsis);
    }

    if !included.contains(&total_pages) {
        items.push(PageItem::Page(total_pages));
    }

    items
}

/// Affordance state for a pagination control at a given position.
///
/// `current_page` is one-based; `total_pages` may be zero while the row
/// count is still loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationControls {
    current_page: u32,
    total_pages: u32,
}

impl PaginationControls {
    /// Construct the control state for the given position.
    #[must_use]
    pub const fn new(current_page: u32, total_pages: u32) -> Self {
        Self {
            current_page,
            total_pages,
        }
    }

    /// One-based page the control is positioned on.
    #[must_use]
    pub const fn current_page(self) -> u32 {
        self.current_page
    }

    /// Total number of pages the control navigates over.
    #[must_use]
    pub const fn total_pages(self) -> u32 {
        self.total_pages
    }

    /// Whether the Previous affordance is interactive.
    ///
    /// Disabled exactly when positioned on page 1.
    #[must_use]
    pub const fn previous_enabled(self) -> bool {
        self.current_page != 1
    }

    /// Whether the Next affordance is interactive.
    ///
    /// Disabled exactly when positioned on the last page.
    #[must_use]
    pub const fn next_enabled(self) -> bool {
        self.current_page != self.total_pages
    }

    /// Page-change target emitted by the Previous affordance.
    ///
    /// Computed regardless of the disabled state; saturates at zero rather
    /// than wrapping when already on page 1.
    #[must_use]
    pub const fn previous_target(self) -> u32 {
        self.current_page.saturating_sub(1)
    }

    /// Page-change target emitted by the Next affordance.
    ///
    /// Computed regardless of the disabled state.
    #[must_use]
    pub const fn next_target(self) -> u32 {
        self.current_page.saturating_add(1)
    }

    /// The page/ellipsis sequence to render at this position.
    #[must_use]
    pub fn items(self) -> Vec<PageItem> {
        page_items(self.current_page, self.total_pages)
    }
}
