// Tue Aug 25 2026 - Dan

use crate::memory::MemoryError;
use std::path::Path;

/// Seam between the session and the mapping backend. The buffer type owns
/// its bytes and releases them exactly once, when dropped.
pub trait FileMapper {
    type Buffer: AsRef<[u8]>;

    fn map(&self, path: &Path) -> Result<Self::Buffer, MemoryError>;
}
