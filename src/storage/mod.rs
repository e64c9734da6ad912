pub mod file;
pub mod kv;
pub mod memory;

pub use file::FileStore;
pub use kv::KeyValueStore;
pub use kv::StoreKey;
pub use memory::MemoryStore;
