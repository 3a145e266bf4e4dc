//! Page slicing and per-view browse state.
//!
//! Pages are 1-based. A view keeps a [`BrowseState`] (category, keyword and
//! current page); changing the category or keyword sends the view back to
//! page 1, and a page that falls off the end after the list shrinks also
//! resets to page 1 rather than clamping to the new last page.

use serde::Serialize;

use crate::model::Product;
use crate::query::{filter_by_category, narrow_by_keyword};

/// One page of a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

/// Number of pages needed for `len` items.
#[must_use]
pub const fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        0
    } else {
        len.div_ceil(page_size)
    }
}

/// Slice page `page` (1-based) out of `list`.
///
/// Pages past the end, page 0 and a zero page size all produce an empty page.
#[must_use]
pub fn paginate<T>(list: &[T], page: usize, page_size: usize) -> Page<'_, T> {
    let total_pages = total_pages(list.len(), page_size);
    let items: &[T] = if page == 0 || page_size == 0 {
        &[]
    } else {
        let start = (page - 1).saturating_mul(page_size).min(list.len());
        let end = start.saturating_add(page_size).min(list.len());
        list.get(start..end).unwrap_or_default()
    };

    Page {
        items,
        page,
        page_size,
        total_items: list.len(),
        total_pages,
    }
}

/// Filter state of a listing view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrowseState {
    category: Option<String>,
    keyword: String,
    current_page: usize,
    page_size: usize,
}

impl BrowseState {
    /// Fresh state on page 1 with no filters.
    #[must_use]
    pub const fn new(page_size: usize) -> Self {
        Self {
            category: None,
            keyword: String::new(),
            current_page: 1,
            page_size,
        }
    }

    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    #[must_use]
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Select a category (`None`, `""` or `"all"` for everything).
    pub fn set_category(&mut self, category: Option<&str>) {
        self.category = category.filter(|c| !c.is_empty()).map(str::to_owned);
        self.current_page = 1;
    }

    /// Replace the search keyword.
    pub fn set_keyword(&mut self, keyword: &str) {
        keyword.clone_into(&mut self.keyword);
        self.current_page = 1;
    }

    /// Move to `requested` if it is a valid page; otherwise leave the state
    /// unchanged. Returns whether the page changed.
    pub fn change_page(&mut self, requested: usize, total_pages: usize) -> bool {
        if requested < 1 || requested > total_pages {
            return false;
        }
        self.current_page = requested;
        true
    }

    /// Restore a page carried over from a previous request, before the list
    /// is known. Page 0 reads as 1; a page past the end is reset by
    /// [`page`](Self::page).
    pub fn restore_page(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    /// Reconcile the current page with a list that now has `total_pages`.
    pub fn sync_to(&mut self, total_pages: usize) {
        if self.current_page > total_pages {
            self.current_page = 1;
        }
    }

    /// Products visible under the current category and keyword, unpaged.
    #[must_use]
    pub fn filter<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        narrow_by_keyword(
            filter_by_category(products, self.category.as_deref()),
            &self.keyword,
        )
    }

    /// Number of pages `len` items need at this view's page size.
    #[must_use]
    pub const fn pages_for(&self, len: usize) -> usize {
        total_pages(len, self.page_size)
    }

    /// Page the already-filtered list, first resetting a page that no longer
    /// exists.
    pub fn page<'l, T>(&mut self, filtered: &'l [T]) -> Page<'l, T> {
        self.sync_to(self.pages_for(filtered.len()));
        paginate(filtered, self.current_page, self.page_size)
    }
}
