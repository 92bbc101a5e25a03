// Tue Aug 25 2026 - Dan

pub mod error;
pub mod mmap;
pub mod traits;

pub use error::MemoryError;
pub use mmap::{MappedBuffer, MmapMapper};
pub use traits::FileMapper;
