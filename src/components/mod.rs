//! UI Components
//!
//! Reusable Leptos components.

mod pager_nav;
mod todo_card;
mod todo_list;

pub use pager_nav::PagerNav;
pub use todo_card::TodoCard;
pub use todo_list::TodoList;
