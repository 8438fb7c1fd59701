//! Pager State Store
//!
//! Uses Leptos reactive_stores for field-level reactivity over the
//! page controller's state.

use reactive_stores::Store;

use crate::models::{Todo, TodoPage};

/// The page controller's state: the current item set plus pagination
/// counters. Starts at page 0 of 0, so both navigation controls are
/// disabled until the first load lands.
#[derive(Clone, Debug, Default, Store)]
pub struct PagerState {
    /// Items of the page currently on screen
    pub todos: Vec<Todo>,
    /// 1-based page number reported by the server
    pub current_page: u32,
    /// Total page count reported by the server
    pub total_pages: u32,
}

impl PagerState {
    /// Replace the whole state from one page response. All three fields
    /// swap together; a response never partially lands.
    pub fn apply(&mut self, page: TodoPage) {
        self.todos = page.todos;
        self.current_page = page.current_page;
        self.total_pages = page.total_pages;
    }

    /// There is a page before this one
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// There is a page after this one
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// Type alias for the store
pub type PagerStore = Store<PagerState>;
