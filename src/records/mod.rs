pub mod backend;
pub mod store;

pub use backend::{FileBackend, MemoryBackend, StorageBackend};
pub use store::{MatchOutcome, MatchRecord, RecordStore, STORAGE_KEY};
