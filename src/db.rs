pub mod storage;
pub use storage::StorageAdapter;
pub mod store;
pub use store::Store;
