//! Injected remote-call abstraction.
//!
//! The filer speaks gRPC, but this crate only depends on the shape of the
//! calls: one method per unary RPC plus one server-streaming subscription.
//! A concrete transport (tonic channel, test double, ...) implements
//! [`FilerTransport`]; connection management, authentication and retries
//! live behind it.

use std::pin::Pin;

use async_trait::async_trait;
use futures::Stream;
use weedfs_proto::filer::{
    AtomicRenameEntryRequest, AtomicRenameEntryResponse, CreateEntryRequest, CreateEntryResponse,
    DeleteEntryRequest, DeleteEntryResponse, ListEntriesRequest, ListEntriesResponse,
    LookupDirectoryEntryRequest, LookupDirectoryEntryResponse, SubscribeMetadataRequest,
    SubscribeMetadataResponse, UpdateEntryRequest, UpdateEntryResponse,
};

/// Errors reported by a transport implementation.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// No connection could be established or the channel is down.
    #[error("transport unavailable: {0}")]
    Unavailable(String),

    /// The remote side rejected the call; carries the server's message.
    #[error("remote error: {message}")]
    Remote { message: String },

    /// The connection dropped mid-call or mid-stream.
    #[error("connection closed")]
    ConnectionClosed,

    /// The call did not complete within the transport's deadline.
    #[error("request timed out")]
    Timeout,
}

/// Server-streamed sequence of metadata change events.
///
/// The stream is infinite until the server disconnects or the consumer
/// drops it; it does not reconnect by itself.
pub type MetadataStream =
    Pin<Box<dyn Stream<Item = Result<SubscribeMetadataResponse, TransportError>> + Send>>;

/// Remote-call surface of the filer service.
///
/// Each unary method is a single request/response interaction;
/// `list_entries` returns one page per call. Implementations must be safe
/// to share across concurrent in-flight operations.
#[async_trait]
pub trait FilerTransport: Send + Sync {
    async fn lookup_directory_entry(
        &self,
        request: LookupDirectoryEntryRequest,
    ) -> Result<LookupDirectoryEntryResponse, TransportError>;

    async fn list_entries(
        &self,
        request: ListEntriesRequest,
    ) -> Result<ListEntriesResponse, TransportError>;

    async fn create_entry(
        &self,
        request: CreateEntryRequest,
    ) -> Result<CreateEntryResponse, TransportError>;

    async fn update_entry(
        &self,
        request: UpdateEntryRequest,
    ) -> Result<UpdateEntryResponse, TransportError>;

    async fn delete_entry(
        &self,
        request: DeleteEntryRequest,
    ) -> Result<DeleteEntryResponse, TransportError>;

    async fn atomic_rename_entry(
        &self,
        request: AtomicRenameEntryRequest,
    ) -> Result<AtomicRenameEntryResponse, TransportError>;

    async fn subscribe_metadata(
        &self,
        request: SubscribeMetadataRequest,
    ) -> Result<MetadataStream, TransportError>;
}
