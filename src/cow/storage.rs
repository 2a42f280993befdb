//! Shared backing storage for copy-on-write buffers

/// The byte sequence collectively owned by every live handle referencing it
///
/// Storage is always held behind an `Arc`; the Arc's strong count is the
/// reference count of the original design, and it equals the number of
/// non-closed handles pointing at this storage. The byte length is fixed at
/// creation (boxed slice, no resize path) and the storage is reclaimed when
/// the last handle releases it.
#[derive(Debug)]
pub struct SharedStorage {
    /// Buffer contents, length immutable for the storage's lifetime
    bytes: Box<[u8]>,
}

impl SharedStorage {
    /// Create storage from the caller's bytes (possibly empty)
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into().into_boxed_slice(),
        }
    }

    /// Duplicate the storage for a writer that needs exclusive ownership
    pub fn fork(&self) -> Self {
        Self {
            bytes: self.bytes.clone(),
        }
    }

    /// Get the storage contents as a byte slice
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    /// Get the byte length
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check whether the storage holds zero bytes
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Write one byte at `index`
    ///
    /// Callers must have verified the index; reachable only through an
    /// exclusive reference, which `Arc::get_mut` hands out at strong count 1.
    pub(crate) fn set(&mut self, index: usize, value: u8) {
        self.bytes[index] = value;
    }
}

impl AsRef<[u8]> for SharedStorage {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}
