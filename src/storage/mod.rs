mod errors;
mod file_storage;
mod memory_storage;

pub use errors::StorageError;
pub use file_storage::FileStorage;
pub use memory_storage::MemoryStorage;

/// String key-value store for session state that outlives a single run.
pub trait Storage: Send + Sync + 'static {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: String);
}
