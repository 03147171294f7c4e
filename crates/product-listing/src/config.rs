//! Listing configuration loaded via OrthoConfig.

use std::ffi::OsString;
use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

fn default_dataset_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("catalogue.json")
}

/// Raised when a configuration source is present but unusable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to load configuration: {message}")]
pub struct ConfigError {
    /// Description of the failure.
    pub message: String,
}

/// Configuration values for the listing binary.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "PRODUCT_LISTING")]
pub struct ListingSettings {
    /// Optional dataset path override.
    pub dataset_path: Option<PathBuf>,
}

impl ListingSettings {
    /// Loads settings from the environment and configuration files, without
    /// reading command-line arguments.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a source is present but cannot be parsed.
    pub fn from_environment() -> Result<Self, ConfigError> {
        Self::load_from_iter([OsString::from(env!("CARGO_PKG_NAME"))]).map_err(|err| {
            ConfigError {
                message: err.to_string(),
            }
        })
    }

    /// Return the configured dataset path, falling back to the bundled
    /// fixture.
    #[must_use]
    pub fn dataset_path(&self) -> PathBuf {
        self.dataset_path
            .clone()
            .unwrap_or_else(default_dataset_path)
    }
}
