//! Chunk identifier codec.
//!
//! A stored chunk is addressed by `{volume id, file key, cookie}`. The
//! compact string form used throughout the SeaweedFS ecosystem is
//! `"<volume id>,<file key hex><cookie hex>"` where the file key is printed
//! in lowercase hex without padding and the cookie in lowercase hex padded
//! to exactly 8 digits. The cookie is therefore always the final 8
//! characters of the part after the last comma.

use serde::{Deserialize, Serialize};

use crate::ids::{Cookie, FileKey, VolumeId};

/// Number of hex digits the cookie occupies in the string form.
pub const COOKIE_HEX_WIDTH: usize = 8;

/// Errors produced when parsing a file id string.
///
/// A malformed id indicates corrupt stored data, so these are never folded
/// into a silent `None`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FileIdError {
    #[error("file id {0:?} has no comma separator")]
    MissingSeparator(String),

    #[error("file id {0:?} has a non-decimal volume id")]
    InvalidVolumeId(String),

    #[error("file id {0:?} has fewer than 8 characters after the volume id")]
    TooShort(String),

    #[error("file id {0:?} has a non-hex file key")]
    InvalidFileKey(String),

    #[error("file id {0:?} has a non-hex cookie")]
    InvalidCookie(String),
}

/// Structured identifier of a stored chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FileId {
    pub volume_id: VolumeId,
    pub file_key: FileKey,
    pub cookie: Cookie,
}

impl FileId {
    pub fn new(volume_id: u32, file_key: u64, cookie: u32) -> Self {
        Self {
            volume_id: VolumeId(volume_id),
            file_key: FileKey(file_key),
            cookie: Cookie(cookie),
        }
    }

    /// Canonical string form, e.g. volume 3, key 0x10, cookie 1 is
    /// `"3,1000000001"`.
    pub fn to_fid_string(&self) -> String {
        format!("{},{:x}{:08x}", self.volume_id, self.file_key.0, self.cookie.0)
    }
}

impl std::fmt::Display for FileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_fid_string())
    }
}

impl std::str::FromStr for FileId {
    type Err = FileIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_file_id(s)? {
            Some(fid) => Ok(fid),
            None => Err(FileIdError::TooShort(s.to_string())),
        }
    }
}

/// Formats an optional structured id into its string form.
///
/// `None` passes through as `None`, mirroring the optional string slot on a
/// wire chunk.
pub fn format_file_id(fid: Option<&FileId>) -> Option<String> {
    fid.map(FileId::to_fid_string)
}

/// Parses a file id string into its structured form.
///
/// An empty string is an absent id and yields `Ok(None)`. Anything else must
/// parse completely: the split happens at the *last* comma, the final 8
/// characters of the remainder are the cookie, and everything in between is
/// the file key.
pub fn parse_file_id(s: &str) -> Result<Option<FileId>, FileIdError> {
    if s.is_empty() {
        return Ok(None);
    }
    let comma = s
        .rfind(',')
        .ok_or_else(|| FileIdError::MissingSeparator(s.to_string()))?;
    let volume_id: u32 = s[..comma]
        .parse()
        .map_err(|_| FileIdError::InvalidVolumeId(s.to_string()))?;

    let rest = &s[comma + 1..];
    if rest.len() < COOKIE_HEX_WIDTH {
        return Err(FileIdError::TooShort(s.to_string()));
    }
    let split = rest.len() - COOKIE_HEX_WIDTH;
    let file_key = u64::from_str_radix(&rest[..split], 16)
        .map_err(|_| FileIdError::InvalidFileKey(s.to_string()))?;
    let cookie = u32::from_str_radix(&rest[split..], 16)
        .map_err(|_| FileIdError::InvalidCookie(s.to_string()))?;

    Ok(Some(FileId::new(volume_id, file_key, cookie)))
}
