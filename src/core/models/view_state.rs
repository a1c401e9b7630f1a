use std::num::NonZeroUsize;

use crate::core::error::{AppError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Fav,
    Recent,
}

impl Filter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Fav => "fav",
            Filter::Recent => "recent",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Fav => "Favorites",
            Filter::Recent => "Recent",
        }
    }

    pub fn all() -> Vec<Filter> {
        vec![Filter::All, Filter::Fav, Filter::Recent]
    }
}

/// Filter, search and pagination parameters. Never persisted.
///
/// Changing the filter, the search term or the page size goes back to the first
/// page because the filtered set may have shrunk below the current one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub filter: Filter,
    pub search_term: String,
    pub page_index: usize,
    pub page_size: NonZeroUsize,
}

impl ViewState {
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            filter: Filter::All,
            search_term: String::new(),
            page_index: 0,
            page_size,
        }
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
        self.page_index = 0;
    }

    pub fn set_search_term(&mut self, term: String) {
        self.search_term = term;
        self.page_index = 0;
    }

    pub fn set_page_size(&mut self, page_size: NonZeroUsize) {
        self.page_size = page_size;
        self.page_index = 0;
    }

    /// Applies the raw value of the per-page input. Zero, negative and non-numeric
    /// values are rejected and leave the state untouched.
    pub fn set_page_size_input(&mut self, raw: &str) -> Result<NonZeroUsize> {
        let size = parse_page_size(raw)?;
        self.set_page_size(size);
        Ok(size)
    }

    pub fn prev_page(&mut self) {
        self.page_index = self.page_index.saturating_sub(1);
    }

    /// Moves forward; an index past the end is clamped by the next derivation.
    pub fn next_page(&mut self) {
        self.page_index = self.page_index.saturating_add(1);
    }

    /// Stores a clamped index handed back by the page derivation.
    /// Returns true when the index actually changed.
    pub fn clamp_to(&mut self, effective_index: usize) -> bool {
        if self.page_index == effective_index {
            return false;
        }
        self.page_index = effective_index;
        true
    }
}

pub fn parse_page_size(raw: &str) -> Result<NonZeroUsize> {
    raw.trim()
        .parse::<usize>()
        .ok()
        .and_then(NonZeroUsize::new)
        .ok_or_else(|| AppError::InvalidPageSize(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> ViewState {
        let mut s = ViewState::new(NonZeroUsize::new(4).unwrap());
        s.page_index = 3;
        s
    }

    #[test]
    fn filter_search_and_size_changes_reset_the_page() {
        let mut s = state();
        s.set_filter(Filter::Fav);
        assert_eq!(s.page_index, 0);

        let mut s = state();
        s.set_search_term("web".into());
        assert_eq!(s.page_index, 0);

        let mut s = state();
        s.set_page_size(NonZeroUsize::new(2).unwrap());
        assert_eq!(s.page_index, 0);
    }

    #[test]
    fn invalid_page_size_input_is_rejected() {
        let mut s = state();
        for raw in ["0", "-3", "abc", ""] {
            assert!(matches!(
                s.set_page_size_input(raw),
                Err(AppError::InvalidPageSize(_))
            ));
        }
        assert_eq!(s.page_size.get(), 4);
        assert_eq!(s.page_index, 3);

        assert_eq!(s.set_page_size_input(" 10 ").unwrap().get(), 10);
        assert_eq!(s.page_index, 0);
    }

    #[test]
    fn prev_page_saturates_at_zero() {
        let mut s = state();
        s.page_index = 0;
        s.prev_page();
        assert_eq!(s.page_index, 0);
        s.next_page();
        assert_eq!(s.page_index, 1);
    }

    #[test]
    fn clamp_reports_changes() {
        let mut s = state();
        assert!(s.clamp_to(1));
        assert!(!s.clamp_to(1));
        assert_eq!(s.page_index, 1);
    }
}
