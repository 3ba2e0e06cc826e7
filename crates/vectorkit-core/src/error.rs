//! Error handling for VectorKit
//!
//! Provides the error types used across the editing engine:
//! - Edit errors (rejected or failed document mutations)
//! - Color errors (malformed color strings)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Edit error type
///
/// Every engine operation either commits a whole new shape map or fails with
/// one of these. None of them is fatal: the document is left exactly as it
/// was before the operation started.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditError {
    /// Preconditions of the operation are not met
    #[error("Invalid operation: {reason}")]
    InvalidOperation {
        /// Why the operation was rejected.
        reason: String,
    },

    /// Polygon algebra failed or produced degenerate output
    #[error("Geometry computation failed: {reason}")]
    GeometryFailure {
        /// What went wrong while combining outlines.
        reason: String,
    },

    /// The operation refers to a shape that is not in the document
    #[error("Shape not found: {id}")]
    MissingReference {
        /// The missing shape id.
        id: String,
    },
}

impl EditError {
    /// Create an invalid-operation error
    pub fn invalid(reason: impl Into<String>) -> Self {
        EditError::InvalidOperation {
            reason: reason.into(),
        }
    }

    /// Create a geometry failure error
    pub fn geometry(reason: impl Into<String>) -> Self {
        EditError::GeometryFailure {
            reason: reason.into(),
        }
    }

    /// Create a missing-reference error
    pub fn missing(id: impl Into<String>) -> Self {
        EditError::MissingReference { id: id.into() }
    }

    /// Every edit error degrades to "nothing happened".
    pub fn is_recoverable(&self) -> bool {
        true
    }

    /// Check if this is a stale or unknown id
    pub fn is_missing_reference(&self) -> bool {
        matches!(self, EditError::MissingReference { .. })
    }

    /// Check if this is a geometry failure
    pub fn is_geometry_failure(&self) -> bool {
        matches!(self, EditError::GeometryFailure { .. })
    }
}

/// Color error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// The string is not a `#rgb` or `#rrggbb` hex color
    #[error("Invalid hex color: {value}")]
    InvalidHex {
        /// The rejected input.
        value: String,
    },
}

/// Main error type for VectorKit
///
/// A unified error type that can represent any error from all layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Edit error
    #[error(transparent)]
    Edit(#[from] EditError),

    /// Color error
    #[error(transparent)]
    Color(#[from] ColorError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is an edit error
    pub fn is_edit_error(&self) -> bool {
        matches!(self, Error::Edit(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;

/// Result type for engine operations
pub type EditResult<T> = std::result::Result<T, EditError>;
