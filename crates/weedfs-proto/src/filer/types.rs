//! Filer namespace entities.
//!
//! Based on the `Entry`, `FuseAttributes`, `FileChunk` and
//! `EventNotification` messages in SeaweedFS `filer.proto`.

use serde::{Deserialize, Serialize};
use weedfs_types::FileId;

/// High bit of `file_mode` marking an entry as a directory.
pub const DIRECTORY_MODE_BIT: u32 = 1 << 31;

// ---------------------------------------------------------------------------
// Attributes
// ---------------------------------------------------------------------------

/// POSIX-style attributes attached to an entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FuseAttributes {
    pub file_size: u64,
    /// Modification time, seconds since Unix epoch.
    pub mtime: i64,
    /// Creation time, seconds since Unix epoch.
    pub crtime: i64,
    /// Permission bits; `DIRECTORY_MODE_BIT` set for directories.
    pub file_mode: u32,
    pub uid: u32,
    pub gid: u32,
    pub mime: String,
    pub ttl_sec: i32,
    pub user_name: String,
    pub group_names: Vec<String>,
}

// ---------------------------------------------------------------------------
// File chunk
// ---------------------------------------------------------------------------

/// Reference to one stored block of file data.
///
/// The chunk identifier lives in exactly one of two slots at a time: the
/// legacy string slot (`file_id`, empty when absent) or the structured slot
/// (`fid`). The same pair exists for the source chunk when this chunk was
/// copied or rewritten from another one. See [`crate::filer::chunks`] for
/// the normalization rules.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FileChunk {
    /// Legacy string identifier; empty means "not populated".
    pub file_id: String,
    /// Byte offset of this chunk within the file.
    pub offset: i64,
    pub size: u64,
    /// Last modification, nanoseconds since Unix epoch.
    pub modified_ts_ns: i64,
    pub e_tag: String,
    /// Legacy string identifier of the chunk this one was copied from.
    pub source_file_id: String,
    /// Structured identifier slot.
    pub fid: Option<FileId>,
    /// Structured identifier of the source chunk.
    pub source_fid: Option<FileId>,
}

// ---------------------------------------------------------------------------
// Entry
// ---------------------------------------------------------------------------

/// One node in the filer's namespace tree.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Entry {
    /// Leaf name, unique among siblings.
    pub name: String,
    pub is_directory: bool,
    /// Data chunks ordered by offset; always empty for directories.
    pub chunks: Vec<FileChunk>,
    pub attributes: FuseAttributes,
}

impl Entry {
    /// Builds a fully-formed directory entry. The directory bit is OR'd
    /// into `mode`, and both timestamps are set to `now` (seconds).
    pub fn directory(
        name: &str,
        mode: u32,
        uid: u32,
        gid: u32,
        user_name: &str,
        group_names: &[String],
        now: i64,
    ) -> Entry {
        Entry {
            name: name.to_string(),
            is_directory: true,
            chunks: Vec::new(),
            attributes: FuseAttributes {
                mtime: now,
                crtime: now,
                file_mode: mode | DIRECTORY_MODE_BIT,
                uid,
                gid,
                user_name: user_name.to_string(),
                group_names: group_names.to_vec(),
                ..FuseAttributes::default()
            },
        }
    }

    /// Builds a fully-formed file entry with no chunks. Both timestamps are
    /// set to `mtime` (seconds).
    pub fn file(
        name: &str,
        mtime: i64,
        mode: u32,
        uid: u32,
        gid: u32,
        user_name: &str,
        group_names: &[String],
    ) -> Entry {
        Entry {
            name: name.to_string(),
            is_directory: false,
            chunks: Vec::new(),
            attributes: FuseAttributes {
                mtime,
                crtime: mtime,
                file_mode: mode,
                uid,
                gid,
                user_name: user_name.to_string(),
                group_names: group_names.to_vec(),
                ..FuseAttributes::default()
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Metadata change events
// ---------------------------------------------------------------------------

/// One metadata change under a watched prefix.
///
/// Creation carries only `new_entry`, deletion only `old_entry`, updates
/// and renames both (`new_parent_path` set when the entry moved).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EventNotification {
    pub old_entry: Option<Entry>,
    pub new_entry: Option<Entry>,
    pub delete_chunks: bool,
    pub new_parent_path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_entry_sets_mode_bit() {
        let entry = Entry::directory("logs", 0o755, 1000, 100, "alice", &[], 1_700_000_000);
        assert!(entry.is_directory);
        assert!(entry.chunks.is_empty());
        assert_eq!(entry.attributes.file_mode, 0o755 | DIRECTORY_MODE_BIT);
        assert_eq!(entry.attributes.mtime, 1_700_000_000);
        assert_eq!(entry.attributes.crtime, 1_700_000_000);
        assert_eq!(entry.attributes.user_name, "alice");
    }

    #[test]
    fn test_file_entry_plain_mode() {
        let groups = vec!["staff".to_string()];
        let entry = Entry::file("a.txt", 42, 0o644, 1000, 100, "alice", &groups);
        assert!(!entry.is_directory);
        assert_eq!(entry.attributes.file_mode, 0o644);
        assert_eq!(entry.attributes.mtime, 42);
        assert_eq!(entry.attributes.crtime, 42);
        assert_eq!(entry.attributes.group_names, groups);
    }

    #[test]
    fn test_entry_serde_roundtrip() {
        let entry = Entry {
            name: "a.txt".into(),
            is_directory: false,
            chunks: vec![FileChunk {
                file_id: "3,1000000001".into(),
                offset: 0,
                size: 8,
                ..FileChunk::default()
            }],
            attributes: FuseAttributes {
                file_size: 8,
                mtime: 1,
                ..FuseAttributes::default()
            },
        };
        let json = serde_json::to_string(&entry).unwrap();
        let parsed: Entry = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, entry);
    }
}
