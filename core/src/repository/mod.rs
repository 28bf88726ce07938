pub mod file;
pub mod memory;
pub mod store;
pub mod traits;

// Re-export
pub use file::FileBlobStore;
pub use memory::MemoryBlobStore;
pub use store::StoreRepository;
pub use traits::{BlobStore, LifestyleRepository};
