//! # CLI Error Type
//!
//! Unified error type for command execution.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Config file ──► Io / Toml / InvalidConfig ──┐                         │
//! │  --item args ──► InvalidItem ────────────────┤                         │
//! │  Core logic  ──► Core(CoreError) ────────────┼──► CliError ──► stderr  │
//! │  Output      ──► Json ───────────────────────┘         exit code 1     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use shopfront_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML for [`ShopConfig`](crate::config::ShopConfig).
    #[error("Invalid configuration file: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration parsed but breaks a rule (duplicate ids, bad product).
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A `--item` argument that is not `ID` or `ID=QUANTITY`.
    #[error("Invalid item '{0}': expected PRODUCT_ID or PRODUCT_ID=QUANTITY")]
    InvalidItem(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CliResult<T> = Result<T, CliError>;
