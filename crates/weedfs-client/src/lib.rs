//! Client-side API for the SeaweedFS filer metadata service.
//!
//! Translates filesystem-style operations (mkdirs, mv, rm, touch, list,
//! watch) into remote calls against the filer's tree-structured metadata
//! store. The remote-call layer is injected as a [`FilerTransport`], so the
//! client itself stays free of any particular channel implementation and
//! can be exercised against mocks.
//!
//! Remote failures on mutating operations are absorbed into `Ok(false)`
//! return values (with a log line); malformed chunk identifiers and
//! unusable paths surface as errors. See [`error::ClientError`].

pub mod config;
pub mod error;
pub mod filer;
pub mod identity;
pub mod path;
pub mod transport;
pub mod watch;

pub use config::FilerClientConfig;
pub use error::{ClientError, ClientResult};
pub use filer::{FilerClient, LookupOutcome};
pub use identity::{IdentityProvider, ProcessIdentity};
pub use transport::{FilerTransport, MetadataStream, TransportError};
pub use watch::WatchStream;
