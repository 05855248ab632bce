//! Core identifier types shared across the weedfs workspace.
//!
//! Provides strongly-typed wrappers for volume ids, file keys and cookies,
//! and the `FileId` chunk identifier together with its compact string codec
//! (`"<volume>,<file key hex><cookie hex>"`).

#[macro_use]
pub mod strong_type;

pub mod file_id;
pub mod ids;

pub use file_id::{format_file_id, parse_file_id, FileId, FileIdError};
pub use ids::{Cookie, FileKey, VolumeId};
