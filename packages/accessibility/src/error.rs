//! Error types for XML conversion and entry parsing.
//!
//! The extraction engine and the metadata parsers never fail: missing data
//! resolves to `None`, an empty list or an empty nested value. Errors only
//! come from the edges that touch raw XML, files or output serialization.

use thiserror::Error;

/// Main error type for the library.
#[derive(Debug, Error)]
pub enum AccessibilityError {
    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// Missing required XML element.
    #[error("Missing required XML element: {element} in {context}")]
    MissingElement { element: String, context: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for fallible operations.
pub type Result<T> = std::result::Result<T, AccessibilityError>;
