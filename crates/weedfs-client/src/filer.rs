//! Filer operation surface.
//!
//! `FilerClient` turns filesystem-style paths into parent/child remote
//! calls: recursive ancestor creation for `mkdirs`, a single atomic rename
//! for `mv`, paged listing, and a long-lived metadata subscription for
//! `watch`. Entries coming back from the wire pass through the chunk-list
//! normalization in `weedfs_proto::filer::chunks` before they reach the
//! caller.
//!
//! Error policy: transport failures on mutating operations are logged and
//! reported as `Ok(false)` so callers stay in a boolean-checking idiom;
//! malformed chunk identifiers and parentless paths are caller-data bugs
//! and come back as `Err`.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use futures::future::BoxFuture;
use futures::FutureExt;
use tracing::warn;
use weedfs_proto::filer::{
    after_entry_deserialization, before_entry_serialization, AtomicRenameEntryRequest,
    CreateEntryRequest, DeleteEntryRequest, Entry, ListEntriesRequest,
    LookupDirectoryEntryRequest, SubscribeMetadataRequest, UpdateEntryRequest,
};

use crate::config::FilerClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::identity::{IdentityProvider, ProcessIdentity};
use crate::path::split_path;
use crate::transport::{FilerTransport, TransportError};
use crate::watch::WatchStream;

/// Substring the server puts in its error message for a lookup miss.
const NOT_FOUND_MARKER: &str = "filer: no entry is found in filer store";

/// Result of a single lookup, with the transient-failure case kept apart
/// from a genuine miss.
///
/// [`FilerClient::lookup_entry`] folds `NotFound` and `TransientError`
/// into the same `None`; use [`FilerClient::lookup`] when the distinction
/// matters (for example to drive a retry policy).
#[derive(Debug)]
pub enum LookupOutcome {
    Found(Entry),
    NotFound,
    TransientError(TransportError),
}

impl LookupOutcome {
    /// The entry, discarding the miss/failure distinction.
    pub fn entry(self) -> Option<Entry> {
        match self {
            LookupOutcome::Found(entry) => Some(entry),
            LookupOutcome::NotFound | LookupOutcome::TransientError(_) => None,
        }
    }
}

/// Client for the filer metadata service.
///
/// Stateless apart from its configuration: every operation is an
/// independent remote interaction over the shared transport, and entries
/// are re-fetched on every read.
pub struct FilerClient {
    transport: Arc<dyn FilerTransport>,
    config: FilerClientConfig,
    identity: Arc<dyn IdentityProvider>,
}

impl FilerClient {
    /// Creates a client using the process environment for default identity.
    pub fn new(transport: Arc<dyn FilerTransport>, config: FilerClientConfig) -> Self {
        Self::with_identity(transport, config, Arc::new(ProcessIdentity))
    }

    /// Creates a client with an explicit default-identity provider.
    pub fn with_identity(
        transport: Arc<dyn FilerTransport>,
        config: FilerClientConfig,
        identity: Arc<dyn IdentityProvider>,
    ) -> Self {
        Self {
            transport,
            config,
            identity,
        }
    }

    pub fn config(&self) -> &FilerClientConfig {
        &self.config
    }

    // -----------------------------------------------------------------------
    // Path-level operations
    // -----------------------------------------------------------------------

    /// Creates a directory and all missing ancestors, owned by the default
    /// identity with uid/gid 0.
    pub async fn mkdirs(&self, path: &str, mode: u32) -> ClientResult<bool> {
        let user_name = self.identity.user_name();
        let group_names = self.identity.group_names();
        self.mkdirs_as(path, mode, 0, 0, &user_name, &group_names).await
    }

    /// Creates a directory and all missing ancestors.
    ///
    /// `"/"` always exists and costs no remote call. Ancestors are created
    /// first, one lookup-then-create per level, so re-running over an
    /// existing tree is idempotent. A failed ancestor create short-circuits
    /// the remaining levels.
    pub fn mkdirs_as<'a>(
        &'a self,
        path: &'a str,
        mode: u32,
        uid: u32,
        gid: u32,
        user_name: &'a str,
        group_names: &'a [String],
    ) -> BoxFuture<'a, ClientResult<bool>> {
        async move {
            if path == "/" {
                return Ok(true);
            }
            let (parent, name) =
                split_path(path).ok_or_else(|| ClientError::InvalidPath(path.to_string()))?;

            if !self
                .mkdirs_as(&parent, mode, uid, gid, user_name, group_names)
                .await?
            {
                return Ok(false);
            }

            if self.lookup_entry(&parent, &name).await.is_some() {
                return Ok(true);
            }
            let entry = Entry::directory(
                &name,
                mode,
                uid,
                gid,
                user_name,
                group_names,
                unix_now_secs(),
            );
            self.create_entry(&parent, &entry).await
        }
        .boxed()
    }

    /// Moves an entry with a single atomic rename on the server; no
    /// copy-then-delete emulation happens client-side.
    pub async fn mv(&self, old_path: &str, new_path: &str) -> ClientResult<bool> {
        let (old_parent, old_name) =
            split_path(old_path).ok_or_else(|| ClientError::InvalidPath(old_path.to_string()))?;
        let (new_parent, new_name) =
            split_path(new_path).ok_or_else(|| ClientError::InvalidPath(new_path.to_string()))?;
        self.atomic_rename_entry(&old_parent, &old_name, &new_parent, &new_name)
            .await
    }

    /// Whether an entry exists at `path`.
    ///
    /// A path with no parent component (the root, or a bare name) is looked
    /// up as `(path, "")`.
    pub async fn exists(&self, path: &str) -> bool {
        match split_path(path) {
            Some((parent, name)) => self.lookup_entry(&parent, &name).await.is_some(),
            None => self.lookup_entry(path, "").await.is_some(),
        }
    }

    /// Deletes the entry at `path`, always including its data chunks.
    pub async fn rm(
        &self,
        path: &str,
        is_recursive: bool,
        ignore_recursive_error: bool,
    ) -> ClientResult<bool> {
        let (parent, name) =
            split_path(path).ok_or_else(|| ClientError::InvalidPath(path.to_string()))?;
        self.delete_entry(&parent, &name, true, is_recursive, ignore_recursive_error)
            .await
    }

    /// Touches `path` with the current wall clock and the default identity.
    pub async fn touch(&self, path: &str, mode: u32) -> ClientResult<bool> {
        let user_name = self.identity.user_name();
        let group_names = self.identity.group_names();
        self.touch_as(path, unix_now_secs(), mode, 0, 0, &user_name, &group_names)
            .await
    }

    /// Creates the file if absent, else updates its attributes.
    ///
    /// On an existing entry `mtime`, `uid` and `gid` only change when
    /// positive, while `user_name` and `group_names` are overwritten
    /// unconditionally.
    pub async fn touch_as(
        &self,
        path: &str,
        mtime: i64,
        mode: u32,
        uid: u32,
        gid: u32,
        user_name: &str,
        group_names: &[String],
    ) -> ClientResult<bool> {
        let (parent, name) =
            split_path(path).ok_or_else(|| ClientError::InvalidPath(path.to_string()))?;

        let Some(mut entry) = self.lookup_entry(&parent, &name).await else {
            let entry = Entry::file(&name, mtime, mode, uid, gid, user_name, group_names);
            return self.create_entry(&parent, &entry).await;
        };

        let attr = &mut entry.attributes;
        if mtime > 0 {
            attr.mtime = mtime;
        }
        if uid > 0 {
            attr.uid = uid;
        }
        if gid > 0 {
            attr.gid = gid;
        }
        attr.user_name = user_name.to_string();
        attr.group_names = group_names.to_vec();

        self.update_entry(&parent, &entry).await
    }

    // -----------------------------------------------------------------------
    // Listing
    // -----------------------------------------------------------------------

    /// Fetches one page of entries under `directory`, normalized to the
    /// in-process chunk form.
    pub async fn list_entries(
        &self,
        directory: &str,
        prefix: &str,
        start_from: &str,
        limit: u32,
        inclusive_start: bool,
    ) -> ClientResult<Vec<Entry>> {
        let request = ListEntriesRequest {
            directory: directory.to_string(),
            prefix: prefix.to_string(),
            start_from_file_name: start_from.to_string(),
            inclusive_start_from: inclusive_start,
            limit,
        };
        let response = self.transport.list_entries(request).await?;
        Ok(response
            .entries
            .into_iter()
            .map(after_entry_deserialization)
            .collect())
    }

    /// Eagerly lists everything under `directory`, paging with the
    /// configured page size until a short page or the configured cap.
    ///
    /// The whole listing is materialized; fine for directories of bounded
    /// size, a known scaling limit for very large ones.
    pub async fn list_all(&self, directory: &str) -> ClientResult<Vec<Entry>> {
        let page_size = self.config.list_page_size;
        let mut results = Vec::new();
        let mut last_name = String::new();
        loop {
            let page = self
                .list_entries(directory, "", &last_name, page_size, false)
                .await?;
            let fetched = page.len();
            if let Some(last) = page.last() {
                last_name = last.name.clone();
            }
            results.extend(page);
            if fetched < page_size as usize || results.len() >= self.config.max_list_entries {
                break;
            }
        }
        Ok(results)
    }

    // -----------------------------------------------------------------------
    // Entry-level calls
    // -----------------------------------------------------------------------

    /// Looks up one entry, keeping miss and transient failure distinct.
    pub async fn lookup(&self, directory: &str, name: &str) -> LookupOutcome {
        let request = LookupDirectoryEntryRequest {
            directory: directory.to_string(),
            name: name.to_string(),
        };
        match self.transport.lookup_directory_entry(request).await {
            Ok(response) => match response.entry {
                Some(entry) => LookupOutcome::Found(after_entry_deserialization(entry)),
                None => LookupOutcome::NotFound,
            },
            Err(err) if err.to_string().contains(NOT_FOUND_MARKER) => LookupOutcome::NotFound,
            Err(err) => LookupOutcome::TransientError(err),
        }
    }

    /// Looks up one entry, folding "not found" and any transport failure
    /// into the same `None`.
    ///
    /// Callers that must tell the two apart (e.g. for retries) should use
    /// [`lookup`](Self::lookup) instead.
    pub async fn lookup_entry(&self, directory: &str, name: &str) -> Option<Entry> {
        match self.lookup(directory, name).await {
            LookupOutcome::Found(entry) => Some(entry),
            LookupOutcome::NotFound => None,
            LookupOutcome::TransientError(err) => {
                warn!("lookup_entry {}/{}: {}", directory, name, err);
                None
            }
        }
    }

    /// Creates `entry` under `parent`.
    ///
    /// Chunks are converted to wire form first; a malformed chunk id is an
    /// `Err`. A non-empty error string in an otherwise successful response
    /// counts as failure.
    pub async fn create_entry(&self, parent: &str, entry: &Entry) -> ClientResult<bool> {
        let chunks = before_entry_serialization(&entry.chunks)?;
        let request = CreateEntryRequest {
            directory: parent.to_string(),
            entry: Entry {
                chunks,
                ..entry.clone()
            },
        };
        match self.transport.create_entry(request).await {
            Ok(response) if response.error.is_empty() => Ok(true),
            Ok(response) => {
                warn!("create_entry {}/{} error: {}", parent, entry.name, response.error);
                Ok(false)
            }
            Err(err) => {
                warn!("create_entry {}/{}: {}", parent, entry.name, err);
                Ok(false)
            }
        }
    }

    /// Replaces `entry` under `parent`. Chunks are converted to wire form
    /// first; a malformed chunk id is an `Err`.
    pub async fn update_entry(&self, parent: &str, entry: &Entry) -> ClientResult<bool> {
        let chunks = before_entry_serialization(&entry.chunks)?;
        let request = UpdateEntryRequest {
            directory: parent.to_string(),
            entry: Entry {
                chunks,
                ..entry.clone()
            },
        };
        match self.transport.update_entry(request).await {
            Ok(_) => Ok(true),
            Err(err) => {
                warn!("update_entry {}/{}: {}", parent, entry.name, err);
                Ok(false)
            }
        }
    }

    /// Deletes `name` under `parent`.
    pub async fn delete_entry(
        &self,
        parent: &str,
        name: &str,
        is_delete_data: bool,
        is_recursive: bool,
        ignore_recursive_error: bool,
    ) -> ClientResult<bool> {
        let request = DeleteEntryRequest {
            directory: parent.to_string(),
            name: name.to_string(),
            is_delete_data,
            is_recursive,
            ignore_recursive_error,
        };
        match self.transport.delete_entry(request).await {
            Ok(_) => Ok(true),
            Err(err) => {
                warn!("delete_entry {}/{}: {}", parent, name, err);
                Ok(false)
            }
        }
    }

    /// Renames in one server-side atomic step.
    pub async fn atomic_rename_entry(
        &self,
        old_parent: &str,
        old_name: &str,
        new_parent: &str,
        new_name: &str,
    ) -> ClientResult<bool> {
        let request = AtomicRenameEntryRequest {
            old_directory: old_parent.to_string(),
            old_name: old_name.to_string(),
            new_directory: new_parent.to_string(),
            new_name: new_name.to_string(),
        };
        match self.transport.atomic_rename_entry(request).await {
            Ok(_) => Ok(true),
            Err(err) => {
                warn!(
                    "atomic_rename_entry {}/{} => {}/{}: {}",
                    old_parent, old_name, new_parent, new_name, err
                );
                Ok(false)
            }
        }
    }

    // -----------------------------------------------------------------------
    // Subscription
    // -----------------------------------------------------------------------

    /// Subscribes to metadata changes under `prefix` starting at `since_ns`.
    ///
    /// The returned stream lives until cancelled or disconnected and does
    /// not resubscribe on its own; on disconnect, call `watch` again with
    /// [`WatchStream::cursor_ns`] to resume.
    pub async fn watch(
        &self,
        prefix: &str,
        client_name: &str,
        since_ns: i64,
    ) -> ClientResult<WatchStream> {
        let request = SubscribeMetadataRequest {
            client_name: client_name.to_string(),
            path_prefix: prefix.to_string(),
            since_ns,
        };
        let stream = self.transport.subscribe_metadata(request).await?;
        Ok(WatchStream::new(stream, since_ns))
    }
}

fn unix_now_secs() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
