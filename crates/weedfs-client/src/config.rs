//! Client configuration.

use serde::{Deserialize, Serialize};

/// Configuration for [`crate::FilerClient`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilerClientConfig {
    /// Filer host name or address.
    pub host: String,

    /// Filer gRPC port (conventionally the HTTP port plus 10000).
    pub grpc_port: u16,

    /// Name reported to the server when subscribing to metadata events.
    pub client_name: String,

    /// Page size used by the unbounded listing loop.
    pub list_page_size: u32,

    /// Safety cap on the total number of entries the unbounded listing
    /// loop will accumulate.
    pub max_list_entries: usize,
}

impl FilerClientConfig {
    /// Endpoint string a transport implementation can dial.
    pub fn grpc_endpoint(&self) -> String {
        format!("http://{}:{}", self.host, self.grpc_port)
    }
}

impl Default for FilerClientConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            grpc_port: 18888,
            client_name: "weedfs-rs".to_string(),
            list_page_size: 1024,
            max_list_entries: i32::MAX as usize,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = FilerClientConfig::default();
        assert_eq!(cfg.list_page_size, 1024);
        assert_eq!(cfg.grpc_endpoint(), "http://localhost:18888");
    }

    #[test]
    fn test_serde_roundtrip() {
        let cfg = FilerClientConfig {
            host: "filer.lan".into(),
            grpc_port: 27777,
            ..FilerClientConfig::default()
        };
        let json = serde_json::to_string(&cfg).unwrap();
        let parsed: FilerClientConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.host, "filer.lan");
        assert_eq!(parsed.grpc_port, 27777);
        assert_eq!(parsed.list_page_size, cfg.list_page_size);
    }
}
