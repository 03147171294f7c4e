//! Error types for the product-listing crate.
//!
//! Only the dataset boundary can fail. Unresolved references between records
//! are not errors; they surface as `None` after the join stage.

use std::fmt;

use camino::Utf8PathBuf;
use thiserror::Error;

/// The record collections held by a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// Entries of the `users` array.
    User,
    /// Entries of the `categories` array.
    Category,
    /// Entries of the `products` array.
    Product,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::User => "user",
            Self::Category => "category",
            Self::Product => "product",
        };
        f.write_str(label)
    }
}

/// Errors that can occur when loading or validating a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError {
    /// The dataset file could not be read.
    #[error("failed to read dataset file at '{path}': {message}")]
    IoError {
        /// Path to the dataset file.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The dataset JSON is malformed or missing required fields.
    #[error("invalid dataset JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The dataset version is not supported.
    #[error("unsupported dataset version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Actual version found in the dataset.
        actual: u32,
    },

    /// Two records of the same kind share an id.
    #[error("duplicate {kind} id {id}")]
    DuplicateId {
        /// Collection containing the duplicate.
        kind: RecordKind,
        /// The repeated id.
        id: u32,
    },
}
