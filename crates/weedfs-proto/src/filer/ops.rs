//! Filer RPC request/response types.
//!
//! One pair per operation in SeaweedFS `filer.proto`. Responses that can
//! carry an application-level failure expose it as an `error` string;
//! empty means success.

use serde::{Deserialize, Serialize};

use super::types::{Entry, EventNotification};

// ---- LookupDirectoryEntry ----

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LookupDirectoryEntryRequest {
    pub directory: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LookupDirectoryEntryResponse {
    pub entry: Option<Entry>,
}

// ---- ListEntries ----

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ListEntriesRequest {
    pub directory: String,
    pub prefix: String,
    pub start_from_file_name: String,
    pub inclusive_start_from: bool,
    pub limit: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ListEntriesResponse {
    pub entries: Vec<Entry>,
}

// ---- CreateEntry ----

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CreateEntryRequest {
    pub directory: String,
    pub entry: Entry,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CreateEntryResponse {
    pub error: String,
}

// ---- UpdateEntry ----

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UpdateEntryRequest {
    pub directory: String,
    pub entry: Entry,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UpdateEntryResponse {}

// ---- DeleteEntry ----

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeleteEntryRequest {
    pub directory: String,
    pub name: String,
    /// Whether the referenced data chunks are deleted with the entry.
    pub is_delete_data: bool,
    pub is_recursive: bool,
    pub ignore_recursive_error: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeleteEntryResponse {
    pub error: String,
}

// ---- AtomicRenameEntry ----

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AtomicRenameEntryRequest {
    pub old_directory: String,
    pub old_name: String,
    pub new_directory: String,
    pub new_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AtomicRenameEntryResponse {}

// ---- SubscribeMetadata ----

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SubscribeMetadataRequest {
    pub client_name: String,
    pub path_prefix: String,
    /// Resume cursor: only events at or after this timestamp are streamed.
    pub since_ns: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SubscribeMetadataResponse {
    pub directory: String,
    pub event_notification: EventNotification,
    /// Server timestamp of the event, nanoseconds since Unix epoch.
    pub ts_ns: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_response_error_default_empty() {
        assert!(CreateEntryResponse::default().error.is_empty());
    }

    #[test]
    fn test_list_request_serde_roundtrip() {
        let req = ListEntriesRequest {
            directory: "/data".into(),
            prefix: "log-".into(),
            start_from_file_name: "log-0007".into(),
            inclusive_start_from: false,
            limit: 1024,
        };
        let json = serde_json::to_string(&req).unwrap();
        let parsed: ListEntriesRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, req);
    }

    #[test]
    fn test_subscribe_response_serde_roundtrip() {
        let rsp = SubscribeMetadataResponse {
            directory: "/data".into(),
            event_notification: EventNotification {
                new_entry: Some(Entry {
                    name: "a.txt".into(),
                    ..Entry::default()
                }),
                ..EventNotification::default()
            },
            ts_ns: 123,
        };
        let json = serde_json::to_string(&rsp).unwrap();
        let parsed: SubscribeMetadataResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, rsp);
    }
}
