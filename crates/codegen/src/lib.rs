//! envseed-codegen: turns a parsed [`EnvMap`](envseed_core::EnvMap) into an
//! Apps Script function that writes it into the Script Properties store.

pub mod snippet;

pub use snippet::{render_snippet, serialize_properties, SnippetConfig};

/// Error type for code generation operations.
#[derive(Debug, thiserror::Error)]
pub enum CodegenError {
    /// The mapping could not be serialized to JSON.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
