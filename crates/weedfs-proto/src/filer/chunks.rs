//! Chunk-list normalization between the legacy string identifier slot and
//! the structured identifier slot.
//!
//! In-process code always works with the string slot; the structured slot is
//! the wire representation. A chunk list is converted as a whole:
//! [`before_entry_serialization`] moves every id into the structured slot on
//! the way out, [`after_entry_deserialization`] moves every id back into the
//! string slot on the way in. Neither function mutates its input.

use weedfs_types::{format_file_id, parse_file_id, FileIdError};

use super::types::{Entry, FileChunk};

/// Converts a chunk list to wire form: every string identifier is decoded
/// into the structured slot and the string slots are cleared.
///
/// Malformed identifiers are an error; the ids come from the caller's own
/// entry, so a parse failure means corrupt data and must surface.
pub fn before_entry_serialization(chunks: &[FileChunk]) -> Result<Vec<FileChunk>, FileIdError> {
    let mut cleaned = Vec::with_capacity(chunks.len());
    for chunk in chunks {
        let fid = parse_file_id(&chunk.file_id)?;
        let source_fid = parse_file_id(&chunk.source_file_id)?;
        cleaned.push(FileChunk {
            file_id: String::new(),
            source_file_id: String::new(),
            fid,
            source_fid,
            ..chunk.clone()
        });
    }
    Ok(cleaned)
}

/// Converts an entry received from the wire to in-process form: every
/// structured identifier is encoded into the string slot and the structured
/// slots are cleared.
///
/// If the first chunk already carries a non-empty string id the entry is
/// returned unchanged. This is a cost-saving shortcut that assumes the whole
/// list is in legacy form, not a per-chunk guarantee.
pub fn after_entry_deserialization(entry: Entry) -> Entry {
    if entry.chunks.is_empty() {
        return entry;
    }
    if !entry.chunks[0].file_id.is_empty() {
        return entry;
    }

    let chunks = entry
        .chunks
        .iter()
        .map(|chunk| FileChunk {
            file_id: format_file_id(chunk.fid.as_ref()).unwrap_or_default(),
            source_file_id: format_file_id(chunk.source_fid.as_ref()).unwrap_or_default(),
            fid: None,
            source_fid: None,
            ..chunk.clone()
        })
        .collect();

    Entry { chunks, ..entry }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weedfs_types::FileId;

    fn structured_chunk(volume: u32, key: u64, cookie: u32, offset: i64) -> FileChunk {
        FileChunk {
            fid: Some(FileId::new(volume, key, cookie)),
            offset,
            size: 16,
            ..FileChunk::default()
        }
    }

    fn legacy_chunk(id: &str, offset: i64) -> FileChunk {
        FileChunk {
            file_id: id.to_string(),
            offset,
            size: 16,
            ..FileChunk::default()
        }
    }

    #[test]
    fn test_after_no_chunks_is_noop() {
        let entry = Entry {
            name: "empty".into(),
            ..Entry::default()
        };
        assert_eq!(after_entry_deserialization(entry.clone()), entry);
    }

    #[test]
    fn test_after_encodes_all_chunks_and_clears_fids() {
        let entry = Entry {
            name: "a.bin".into(),
            chunks: vec![
                structured_chunk(3, 0x10, 1, 0),
                structured_chunk(4, 0xab, 2, 16),
            ],
            ..Entry::default()
        };
        let converted = after_entry_deserialization(entry);
        assert_eq!(converted.chunks[0].file_id, "3,1000000001");
        assert_eq!(converted.chunks[1].file_id, "4,ab00000002");
        assert!(converted.chunks.iter().all(|c| c.fid.is_none()));
        // Offsets and sizes pass through untouched.
        assert_eq!(converted.chunks[1].offset, 16);
        assert_eq!(converted.chunks[1].size, 16);
    }

    #[test]
    fn test_after_maps_source_fid_when_present() {
        let mut chunk = structured_chunk(3, 0x10, 1, 0);
        chunk.source_fid = Some(FileId::new(5, 0x20, 9));
        let entry = Entry {
            chunks: vec![chunk],
            ..Entry::default()
        };
        let converted = after_entry_deserialization(entry);
        assert_eq!(converted.chunks[0].source_file_id, "5,2000000009");
        assert!(converted.chunks[0].source_fid.is_none());
    }

    #[test]
    fn test_after_first_chunk_string_short_circuits() {
        // First chunk already legacy: the whole entry is assumed converted,
        // so even a structured second chunk is left alone.
        let entry = Entry {
            chunks: vec![legacy_chunk("3,1000000001", 0), structured_chunk(4, 0xab, 2, 16)],
            ..Entry::default()
        };
        assert_eq!(after_entry_deserialization(entry.clone()), entry);
    }

    #[test]
    fn test_before_decodes_and_clears_strings() {
        let chunks = vec![legacy_chunk("3,1000000001", 0), legacy_chunk("4,ab00000002", 16)];
        let cleaned = before_entry_serialization(&chunks).unwrap();
        assert_eq!(cleaned[0].fid, Some(FileId::new(3, 0x10, 1)));
        assert_eq!(cleaned[1].fid, Some(FileId::new(4, 0xab, 2)));
        assert!(cleaned.iter().all(|c| c.file_id.is_empty()));
        // Input untouched.
        assert_eq!(chunks[0].file_id, "3,1000000001");
    }

    #[test]
    fn test_before_maps_source_only_when_present() {
        let mut chunk = legacy_chunk("3,1000000001", 0);
        chunk.source_file_id = "5,2000000009".to_string();
        let cleaned = before_entry_serialization(&[chunk]).unwrap();
        assert_eq!(cleaned[0].source_fid, Some(FileId::new(5, 0x20, 9)));
        assert!(cleaned[0].source_file_id.is_empty());

        let plain = legacy_chunk("3,1000000001", 0);
        let cleaned = before_entry_serialization(&[plain]).unwrap();
        assert_eq!(cleaned[0].source_fid, None);
    }

    #[test]
    fn test_before_propagates_malformed_id() {
        let chunks = vec![legacy_chunk("not-a-file-id", 0)];
        assert!(before_entry_serialization(&chunks).is_err());
    }

    #[test]
    fn test_roundtrip_through_both_forms() {
        let entry = Entry {
            chunks: vec![legacy_chunk("3,1000000001", 0)],
            ..Entry::default()
        };
        let wire = Entry {
            chunks: before_entry_serialization(&entry.chunks).unwrap(),
            ..entry.clone()
        };
        assert_eq!(after_entry_deserialization(wire), entry);
    }
}
