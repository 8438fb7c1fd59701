//! HTTP Transport Adapter
//!
//! Thin wrapper over the browser fetch API: builds the request URL,
//! issues a GET and parses the JSON body.

use std::fmt;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// Everything outside the RFC 3986 unreserved set gets percent-encoded.
const QUERY_ENCODE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Failure kinds for one GET-and-parse round trip
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// The request never produced a response (network down, CORS, bad URL)
    Network(String),
    /// The response arrived but its body could not be read as text
    Body(String),
    /// The body was read but is not the expected JSON shape
    Json(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "network error: {}", msg),
            FetchError::Body(msg) => write!(f, "unreadable response body: {}", msg),
            FetchError::Json(msg) => write!(f, "malformed JSON body: {}", msg),
        }
    }
}

fn js_error_message(value: &wasm_bindgen::JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// GET client bound to a fixed base address
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Normalize an endpoint path to exactly one leading slash.
    /// Endpoints must be non-empty.
    pub fn format_endpoint(endpoint: &str) -> String {
        assert!(!endpoint.is_empty(), "endpoint must be a non-empty path");
        format!("/{}", endpoint.trim_start_matches('/'))
    }

    /// Full request URL for an endpoint plus query parameters.
    ///
    /// An empty parameter list produces a URL with no `?` at all.
    pub fn request_url(&self, endpoint: &str, queries: &[(&str, String)]) -> String {
        let mut url = format!("{}{}", self.base_url, Self::format_endpoint(endpoint));
        if !queries.is_empty() {
            let query_string = queries
                .iter()
                .map(|(name, value)| {
                    format!(
                        "{}={}",
                        utf8_percent_encode(name, QUERY_ENCODE),
                        utf8_percent_encode(value, QUERY_ENCODE)
                    )
                })
                .collect::<Vec<_>>()
                .join("&");
            url.push('?');
            url.push_str(&query_string);
        }
        url
    }

    /// Issue one GET and parse the body as JSON.
    ///
    /// The status code is deliberately not inspected; whatever body comes
    /// back is handed to the JSON parser. One network request per call,
    /// no caching, no retry, no timeout.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        queries: &[(&str, String)],
    ) -> Result<T, FetchError> {
        let url = self.request_url(endpoint, queries);

        let window =
            web_sys::window().ok_or_else(|| FetchError::Network("no window object".into()))?;
        let response: Response = JsFuture::from(window.fetch_with_str(&url))
            .await
            .map_err(|e| FetchError::Network(js_error_message(&e)))?
            .into();

        let text_promise = response
            .text()
            .map_err(|e| FetchError::Body(js_error_message(&e)))?;
        let text = JsFuture::from(text_promise)
            .await
            .map_err(|e| FetchError::Body(js_error_message(&e)))?
            .as_string()
            .ok_or_else(|| FetchError::Body("response text is not a string".into()))?;

        serde_json::from_str(&text).map_err(|e| FetchError::Json(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_gains_exactly_one_leading_slash() {
        assert_eq!(HttpClient::format_endpoint("todos"), "/todos");
        assert_eq!(HttpClient::format_endpoint("/todos"), "/todos");
        assert_eq!(HttpClient::format_endpoint("//todos"), "/todos");
        assert_eq!(HttpClient::format_endpoint("todos/archive"), "/todos/archive");
    }

    #[test]
    #[should_panic(expected = "non-empty")]
    fn test_empty_endpoint_is_rejected() {
        HttpClient::format_endpoint("");
    }

    #[test]
    fn test_url_without_queries_has_no_question_mark() {
        let client = HttpClient::default();
        assert_eq!(
            client.request_url("todos", &[]),
            "http://localhost:3000/todos"
        );
    }

    #[test]
    fn test_page_parameter_is_serialized() {
        let client = HttpClient::default();
        assert_eq!(
            client.request_url("/todos", &[("page", "3".to_string())]),
            "http://localhost:3000/todos?page=3"
        );
    }

    #[test]
    fn test_multiple_parameters_join_with_ampersand() {
        let client = HttpClient::new("https://api.example.com");
        assert_eq!(
            client.request_url("/todos", &[("page", "2".to_string()), ("limit", "10".to_string())]),
            "https://api.example.com/todos?page=2&limit=10"
        );
    }

    #[test]
    fn test_reserved_characters_are_percent_encoded() {
        let client = HttpClient::new("https://api.example.com");
        assert_eq!(
            client.request_url("search", &[("q", "milk & eggs".to_string())]),
            "https://api.example.com/search?q=milk%20%26%20eggs"
        );
    }

    #[test]
    fn test_fetch_error_display() {
        let err = FetchError::Json("expected value at line 1".into());
        assert_eq!(err.to_string(), "malformed JSON body: expected value at line 1");
    }
}
