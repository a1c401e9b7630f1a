//! Derives the visible page of project cards from the whole collection.

use chrono::Utc;

use crate::core::config::RECENT_WINDOW_MS;
use crate::core::models::{Filter, Project, ViewState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub current_page_index: usize,
    pub total_pages: usize,
    pub filtered_count: usize,
}

impl PageInfo {
    pub fn has_prev(&self) -> bool {
        self.current_page_index > 0
    }

    pub fn has_next(&self) -> bool {
        self.current_page_index + 1 < self.total_pages
    }

    /// One-based `"n / total"` label for the pager.
    pub fn label(&self) -> String {
        format!("{} / {}", self.current_page_index + 1, self.total_pages)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub items: Vec<Project>,
    pub info: PageInfo,
}

/// Derives the current page against the wall clock at call time.
pub fn derive_page(projects: &[Project], state: &ViewState) -> PageView {
    derive_page_at(projects, state, Utc::now().timestamp_millis())
}

/// Filter, then search, then paginate. Neither input is modified: the clamped page
/// index is returned in [`PageInfo`] for the caller to store back.
pub fn derive_page_at(projects: &[Project], state: &ViewState, now_ms: i64) -> PageView {
    let recent_cutoff = now_ms - RECENT_WINDOW_MS;
    let needle = state.search_term.to_lowercase();

    let filtered: Vec<&Project> = projects
        .iter()
        .filter(|p| match state.filter {
            Filter::All => true,
            Filter::Fav => p.fav,
            Filter::Recent => p.date >= recent_cutoff,
        })
        .filter(|p| needle.is_empty() || p.matches_search(&needle))
        .collect();

    let page_size = state.page_size.get();
    let total_pages = filtered.len().div_ceil(page_size).max(1);
    let current_page_index = state.page_index.min(total_pages - 1);

    let items = filtered
        .iter()
        .skip(current_page_index * page_size)
        .take(page_size)
        .map(|p| (*p).clone())
        .collect();

    PageView {
        items,
        info: PageInfo {
            current_page_index,
            total_pages,
            filtered_count: filtered.len(),
        },
    }
}
