//! Wire Models
//!
//! Data structures matching the listing endpoint's JSON.

use serde::Deserialize;

/// A single to-do item as served by the endpoint.
///
/// There is no id field; identity within a page is positional.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Todo {
    pub name: String,
    pub description: String,
    pub done: bool,
}

/// One page of the server-paginated listing
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoPage {
    pub todos: Vec<Todo>,
    pub current_page: u32,
    pub total_pages: u32,
}

/// Status text shown on a card
pub fn status_label(done: bool) -> &'static str {
    if done {
        "Done"
    } else {
        "Pending"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_page_response() {
        let body = r#"{
            "todos": [{"name": "Buy milk", "description": "2%", "done": false}],
            "currentPage": 2,
            "totalPages": 5
        }"#;

        let page: TodoPage = serde_json::from_str(body).unwrap();

        assert_eq!(page.current_page, 2);
        assert_eq!(page.total_pages, 5);
        assert_eq!(page.todos.len(), 1);
        assert_eq!(page.todos[0].name, "Buy milk");
        assert_eq!(page.todos[0].description, "2%");
        assert!(!page.todos[0].done);
    }

    #[test]
    fn test_decode_empty_page() {
        let body = r#"{"todos": [], "currentPage": 1, "totalPages": 1}"#;
        let page: TodoPage = serde_json::from_str(body).unwrap();
        assert!(page.todos.is_empty());
        assert_eq!(page.current_page, 1);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_status_label() {
        assert_eq!(status_label(false), "Pending");
        assert_eq!(status_label(true), "Done");
        // double flip lands back on the original label
        let done = false;
        assert_eq!(status_label(!!done), status_label(done));
    }
}
