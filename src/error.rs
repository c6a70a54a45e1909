//! Error types for rendering operations.

use thiserror::Error;

/// Errors that can occur while rendering entries to Markdown.
#[derive(Error, Debug)]
pub enum Error {
    /// A renderer was invoked on an entry that does not carry its
    /// discriminator key. Normal dispatch never does this; it occurs when a
    /// renderer is called directly or registered under the wrong key.
    #[error("Entry is not a {0} entry.")]
    ShapeMismatch(&'static str),

    /// An entry carries more than one recognized discriminator key, so the
    /// intended construct is ambiguous.
    #[error("Entry carries multiple discriminator keys: {0}")]
    AmbiguousEntry(String),

    /// An entry has the right discriminator but is structurally unusable
    /// (e.g. a link without a source).
    #[error("Invalid entry: {0}")]
    InvalidEntry(String),

    /// Content appeared in a position that cannot hold it (e.g. block-level
    /// content inside a table cell).
    #[error("Unsupported shape: {0}")]
    UnsupportedShape(String),
}

pub type Result<T> = std::result::Result<T, Error>;
