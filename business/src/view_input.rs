//! User-controlled parameters of the directory view.
//!
//! The presentation layer only ever writes this state; the fetched snapshot is
//! owned by the provider.

use std::any::Any;

use directory_states::{State, state_assign_impl};
use log::warn;

use crate::pagination::{DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS, page_count};
use crate::pipeline::{SortDirection, SortKey};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewInput {
    search_text: String,
    sort_key: SortKey,
    sort_direction: SortDirection,
    page_index: usize,
    page_size: usize,
}

impl Default for ViewInput {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            sort_key: SortKey::default(),
            sort_direction: SortDirection::default(),
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ViewInput {
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Any edit to the search text goes back to the first page.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
        self.page_index = 0;
    }

    /// Header click: the active column flips direction, any other column
    /// becomes active in ascending order.
    pub fn request_sort(&mut self, key: SortKey) {
        if self.sort_key == key {
            self.sort_direction = self.sort_direction.toggled();
        } else {
            self.sort_key = key;
            self.sort_direction = SortDirection::Ascending;
        }
    }

    /// Only sizes from `PAGE_SIZE_OPTIONS` are accepted. Resets to page 0.
    pub fn set_page_size(&mut self, size: usize) -> bool {
        if !PAGE_SIZE_OPTIONS.contains(&size) {
            warn!("Rejected page size {size}, expected one of {PAGE_SIZE_OPTIONS:?}");
            return false;
        }
        self.page_size = size;
        self.page_index = 0;
        true
    }

    /// Move to `index`, clamped to the pages that exist for `total` rows.
    pub fn go_to_page(&mut self, index: usize, total: usize) {
        self.page_index = index.min(page_count(total, self.page_size) - 1);
    }

    pub fn next_page(&mut self, total: usize) {
        self.go_to_page(self.page_index + 1, total);
    }

    pub fn previous_page(&mut self) {
        self.page_index = self.page_index.saturating_sub(1);
    }
}

impl State for ViewInput {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}
