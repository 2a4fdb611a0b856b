//! Batch quote retrieval and field projection.

pub(crate) mod api;
mod project;
pub(crate) mod wire;

pub use project::project;

/// A single quote from a batch response: a mapping from provider field
/// name to raw JSON value, produced fresh per request.
pub type Quote = serde_json::Map<String, serde_json::Value>;
