strong_type!(
    /// Identifier of a storage volume.
    VolumeId,
    u32
);
strong_type!(
    /// Key of a file block within its volume.
    FileKey,
    u64
);
strong_type!(
    /// Anti-guessing nonce attached to a file key.
    Cookie,
    u32
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_id() {
        let id = VolumeId(3);
        assert_eq!(id.0, 3u32);
        assert_eq!(format!("{}", id), "3");
    }

    #[test]
    fn test_file_key_ordering() {
        assert!(FileKey(0x10) < FileKey(0x20));
    }

    #[test]
    fn test_cookie_from() {
        let c: Cookie = 0xdeadu32.into();
        assert_eq!(c.0, 0xdead);
    }
}
