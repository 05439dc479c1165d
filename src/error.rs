//! Error types for scheme loading and merging.

use std::path::PathBuf;

/// Errors that can occur while loading, merging, or writing settings documents.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    /// A settings document could not be read or written.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A settings document is not valid JSON or JSONC.
    #[error("failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    /// The document has no top-level `schemes` field.
    #[error("{} has no `schemes` collection", path.display())]
    MissingSchemes { path: PathBuf },

    /// `schemes` exists but is neither a list nor a mapping.
    #[error("`schemes` in {} must be a list or a mapping, found {found}", path.display())]
    InvalidSchemes { path: PathBuf, found: &'static str },

    /// The defaults and the target disagree on the shape of `schemes`.
    #[error("`schemes` shape mismatch: defaults use a {defaults}, target uses a {target}")]
    ShapeMismatch {
        defaults: &'static str,
        target: &'static str,
    },

    /// A scheme in list form has no string `name` field.
    #[error("scheme #{index} in {} has no string `name` field", path.display())]
    UnnamedScheme { path: PathBuf, index: usize },

    /// The merged document could not be serialized.
    #[error("failed to serialize merged settings: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The serialized settings were not valid UTF-8.
    #[error("merged settings are not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Convenience alias for setup results.
pub type SetupResult<T> = Result<T, SetupError>;

/// Short name of a JSON value's type, used in shape errors.
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "mapping",
    }
}
