// Tue Aug 25 2026 - Dan

use crate::memory::{FileMapper, MemoryError};
use memmap2::Mmap;
use std::fs::File;
use std::path::Path;

/// Read-only, zero-copy view over a file's full contents. The mapping is
/// released when the buffer is dropped, never earlier and never twice.
#[derive(Debug)]
pub struct MappedBuffer {
    mmap: Mmap,
}

impl MappedBuffer {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, MemoryError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| MemoryError::Open {
            path: path.to_path_buf(),
            source: e,
        })?;
        let size = file
            .metadata()
            .map_err(|e| MemoryError::Open {
                path: path.to_path_buf(),
                source: e,
            })?
            .len();
        // An empty file cannot be mapped; it is never a valid buffer.
        if size == 0 {
            return Err(MemoryError::Empty {
                path: path.to_path_buf(),
            });
        }
        let mmap = unsafe { Mmap::map(&file) }.map_err(|e| MemoryError::Map {
            path: path.to_path_buf(),
            source: e,
        })?;
        log::debug!("mapped {} ({} bytes)", path.display(), mmap.len());
        Ok(Self { mmap })
    }

    pub fn len(&self) -> usize {
        self.mmap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mmap.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        self.mmap.as_ref()
    }
}

impl AsRef<[u8]> for MappedBuffer {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

/// Production mapper: mmap-backed buffers.
#[derive(Debug, Clone, Copy, Default)]
pub struct MmapMapper;

impl FileMapper for MmapMapper {
    type Buffer = MappedBuffer;

    fn map(&self, path: &Path) -> Result<MappedBuffer, MemoryError> {
        MappedBuffer::from_file(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_map_file_exposes_contents() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"hello bytes").unwrap();

        let buffer = MappedBuffer::from_file(file.path()).unwrap();
        assert_eq!(buffer.len(), 11);
        assert_eq!(buffer.as_slice(), b"hello bytes");
    }

    #[test]
    fn test_buffer_is_debug_formattable() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"x").unwrap();

        let buffer = MappedBuffer::from_file(file.path()).unwrap();
        assert!(!format!("{:?}", buffer).is_empty());
    }

    #[test]
    fn test_empty_file_is_rejected() {
        let file = tempfile::NamedTempFile::new().unwrap();

        let err = MappedBuffer::from_file(file.path()).unwrap_err();
        assert!(matches!(err, MemoryError::Empty { .. }));
    }

    #[test]
    fn test_missing_file_is_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist.bin");

        let err = MappedBuffer::from_file(&path).unwrap_err();
        assert!(matches!(err, MemoryError::Open { .. }));
    }
}
