//! Error types for the listing CLI.

use thiserror::Error;

use crate::config::ConfigError;
use crate::error::DatasetError;
use crate::sort::ParseSortKeyError;

/// Errors surfaced by the CLI parsing and listing flow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// A flag expected a value but none was provided.
    #[error("missing value for {flag}")]
    MissingValue {
        /// Flag that was missing its value.
        flag: &'static str,
    },
    /// An unsupported argument was supplied.
    #[error("unknown argument: {value}")]
    UnknownArgument {
        /// Argument value that was not recognised.
        value: String,
    },
    /// A `--sort` value did not name a column.
    #[error("invalid value for --sort: {source}")]
    InvalidSortKey {
        /// Underlying parse error.
        #[from]
        #[source]
        source: ParseSortKeyError,
    },
    /// The dataset path is not valid UTF-8.
    #[error("dataset path is not valid UTF-8: {path}")]
    NonUtf8Path {
        /// Lossy rendering of the path.
        path: String,
    },
    /// Configuration could not be loaded.
    #[error("configuration error: {source}")]
    Config {
        /// Underlying configuration error.
        #[from]
        #[source]
        source: ConfigError,
    },
    /// The dataset could not be loaded.
    #[error("dataset error: {source}")]
    Dataset {
        /// Underlying dataset error.
        #[from]
        #[source]
        source: DatasetError,
    },
}
