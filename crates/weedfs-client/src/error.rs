//! Client error types.

use weedfs_types::FileIdError;

use crate::transport::TransportError;

/// Errors surfaced by client operations.
///
/// Mutating operations absorb transport failures into `Ok(false)`; an `Err`
/// from them always means bad caller data (an unusable path, or a malformed
/// chunk identifier inside an entry). Read operations that page through the
/// remote store (`list_entries`, `watch`) propagate transport failures
/// directly.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// A remote call failed at the transport level.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// A chunk identifier string did not parse; indicates corrupt data.
    #[error("invalid chunk identifier: {0}")]
    FileId(#[from] FileIdError),

    /// The operation needs a parent directory but the path has none.
    #[error("path {0:?} has no parent component")]
    InvalidPath(String),
}

/// Convenience result type.
pub type ClientResult<T> = std::result::Result<T, ClientError>;
