//! Layout IR errors.

use arcstr::ArcStr;
use thiserror::Error as ThisError;

/// The result type returned by layout IR construction.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while assembling a cell.
#[derive(ThisError, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A port with the same name was already added to the cell.
    #[error("duplicate port name `{0}`")]
    DuplicatePort(ArcStr),
    /// An instance with the same name was already added to the cell.
    #[error("duplicate instance name `{0}`")]
    DuplicateInstance(ArcStr),
}
