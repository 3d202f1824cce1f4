//! Error types for map operations.

use thiserror::Error;

use crate::order::OrderError;

/// Errors returned by [`MaximaMap`](crate::MaximaMap) operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The queried argument is not in the domain of the function.
    #[error("argument is not in the domain")]
    InvalidArgument,

    /// A user-supplied comparison failed.
    ///
    /// The operation that surfaced this has left the map exactly as it was
    /// before the call.
    #[error(transparent)]
    Comparator(#[from] OrderError),
}

/// Result alias for map operations.
pub type Result<T> = std::result::Result<T, Error>;
