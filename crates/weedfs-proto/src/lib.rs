//! Message types exchanged with the SeaweedFS filer service.
//!
//! Modeled on the `filer.proto` gRPC contract: directory entries, file
//! chunks, and the request/response pairs for the metadata operations.
//! The transport envelope (gRPC framing, protobuf encoding) is owned by
//! the transport layer; these types carry serde derives so they can be
//! logged, snapshotted, and mapped onto whatever codec the transport uses.

pub mod filer;
