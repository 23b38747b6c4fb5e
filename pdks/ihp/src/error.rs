//! IHP generator errors.

use thiserror::Error as ThisError;

/// The result type returned by IHP generators.
pub type Result<T> = std::result::Result<T, Error>;

/// Possible generator errors.
#[derive(ThisError, Debug)]
pub enum Error {
    /// A bondpad shape name was not recognized.
    #[error("unknown bondpad shape `{0}` (expected octagon, square or circle)")]
    InvalidShape(String),
    /// A symbolic layer name was not recognized.
    #[error("unknown layer `{0}`")]
    UnknownLayer(String),
    /// Error assembling a layout cell.
    #[error("layout error: {0}")]
    Layout(#[from] layir::Error),
    /// Malformed TOML configuration.
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
    /// I/O error.
    #[error("io error")]
    Io(#[from] std::io::Error),
    /// Generator parameters could not be turned into a cache key.
    #[error("failed to serialize generator parameters")]
    CacheKey(#[from] flexbuffers::SerializationError),
}
