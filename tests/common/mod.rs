//! Common test infrastructure
//!
//! Integration tests talk to a [`MockBackend`]: an axum server on a random
//! local port that records every request and answers through a closure.
//!
//! # Example
//!
//! ```no_run
//! mod common;
//! use common::{MockBackend, MockReply};
//!
//! #[tokio::test]
//! async fn test_menu() {
//!     let backend = MockBackend::spawn(|_| MockReply::json(serde_json::json!([]))).await;
//!     let client = backend.client();
//!     // ...
//!     assert_eq!(backend.requests().len(), 1);
//! }
//! ```

mod backend;

pub use backend::{MockBackend, MockReply, RecordedRequest};

use serde_json::Value;

/// Parse the `{"content": [...], "isError": bool}` value returned by the
/// tool registry into the decoded JSON payload and the error flag.
#[allow(dead_code)]
pub fn tool_output(result: &Value) -> (Value, bool) {
    let text = result["content"][0]["text"]
        .as_str()
        .expect("tool result has no text content");
    let is_error = result["isError"].as_bool().unwrap_or(false);
    let payload = serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()));
    (payload, is_error)
}
