//! Backend invocation layer.
//!
//! Everything the server knows about the restaurant backend goes through
//! [`BackendClient`]: one HTTP round trip per call, non-2xx mapped to
//! [`BackendError`].

mod client;
mod error;

pub use client::{BackendClient, BackendClientBuilder, default_headers};
pub use error::{BackendError, BackendResult};
