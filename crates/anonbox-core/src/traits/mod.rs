//! Store traits (ports) - define the interface to the external services

mod stores;

pub use stores::{BlobStore, MessageStore, StoreResult};
