#![forbid(unsafe_code)]

pub mod remote;
pub mod repository;
pub mod sqlite;

pub use remote::{RestShareRepository, RestStoreConfig};
pub use repository::{InMemoryRepository, ShareRecord, ShareRepository, Storage, StorageError};
