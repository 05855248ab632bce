//! Filer metadata entities and RPC message types.

pub mod chunks;
pub mod ops;
pub mod types;

pub use chunks::{after_entry_deserialization, before_entry_serialization};
pub use ops::*;
pub use types::*;
