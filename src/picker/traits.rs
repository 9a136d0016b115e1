//! Pagination trait definition
//!
//! A generic trait for components that show a fixed-size window over a list.

/// A generic pagination trait over a slice of items
///
/// Implementors provide the items, the page size and storage for the current
/// page; the trait supplies bounds-checked navigation and page slicing.
///
/// # Example
///
/// ```ignore
/// struct Gallery {
///     items: Vec<String>,
///     page: usize,
/// }
///
/// impl Paginated for Gallery {
///     type Item = String;
///
///     fn items(&self) -> &[Self::Item] {
///         &self.items
///     }
///
///     fn page_size(&self) -> usize {
///         12
///     }
///
///     fn page(&self) -> usize {
///         self.page
///     }
///
///     fn set_page(&mut self, page: usize) {
///         self.page = page;
///     }
/// }
/// ```
pub trait Paginated {
    /// The type of items being paged
    type Item;

    /// Get the full list of items
    fn items(&self) -> &[Self::Item];

    /// Number of items on a full page
    fn page_size(&self) -> usize;

    /// Get the current zero-based page
    fn page(&self) -> usize;

    /// Set the current page
    fn set_page(&mut self, page: usize);

    /// Number of pages needed for all items (zero when there is nothing to show)
    fn total_pages(&self) -> usize {
        match self.page_size() {
            0 => 0,
            size => self.items().len().div_ceil(size),
        }
    }

    fn has_prev_page(&self) -> bool {
        self.page() > 0
    }

    fn has_next_page(&self) -> bool {
        self.page() + 1 < self.total_pages()
    }

    /// Move to the previous page. Returns false at the first page.
    fn prev_page(&mut self) -> bool {
        if !self.has_prev_page() {
            return false;
        }
        let page = self.page() - 1;
        self.set_page(page);
        true
    }

    /// Move to the next page. Returns false at the last page.
    fn next_page(&mut self) -> bool {
        if !self.has_next_page() {
            return false;
        }
        let page = self.page() + 1;
        self.set_page(page);
        true
    }

    /// Items on the current page (the last page may be short)
    fn page_items(&self) -> &[Self::Item] {
        let size = self.page_size();
        let items = self.items();
        let start = self.page().saturating_mul(size).min(items.len());
        let end = start.saturating_add(size).min(items.len());
        &items[start..end]
    }
}
