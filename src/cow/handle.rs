//! Per-owner buffer handle with copy-on-write mutation

use std::sync::Arc;

use log::trace;

use crate::{
    cow::{stats::CowBufferStats, storage::SharedStorage},
    error::{CowBufferError, Result},
};

/// A caller-visible owner of shared byte storage
///
/// Handles created from one another via [`try_clone`](CowBuffer::try_clone)
/// reference the same [`SharedStorage`] until one of them writes. The writer
/// pays for a private copy at that moment; every other handle keeps observing
/// the pre-write bytes. A closed handle holds no storage reference and
/// rejects everything except another (no-op) `close`.
#[derive(Debug)]
pub struct CowBuffer {
    /// Shared storage; `None` once the handle has been closed
    storage: Option<Arc<SharedStorage>>,
    /// Number of copy-on-write forks this handle has performed
    forks: u64,
}

impl CowBuffer {
    /// Create a buffer owning a fresh storage with the given contents
    ///
    /// An empty input yields an empty buffer, not an error.
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self {
            storage: Some(Arc::new(SharedStorage::new(data))),
            forks: 0,
        }
    }

    /// Create a second handle sharing this handle's storage
    ///
    /// The shared reference count increases by one; no bytes are copied.
    /// Fails with `InvalidHandle` on a closed handle. The `Clone` trait is
    /// intentionally not implemented: sharing must go through this checked
    /// path.
    pub fn try_clone(&self) -> Result<Self> {
        let storage = self
            .storage
            .as_ref()
            .ok_or_else(|| CowBufferError::invalid_handle("try_clone"))?;

        Ok(Self {
            storage: Some(Arc::clone(storage)),
            forks: 0,
        })
    }

    /// Release this handle's share of the storage
    ///
    /// Idempotent: closing an already-closed handle is a no-op and never
    /// double-decrements the shared count. If this was the last live handle
    /// the storage is reclaimed.
    pub fn close(&mut self) {
        if let Some(storage) = self.storage.take() {
            trace!(
                "closing handle, releasing share of {}-byte storage (refcount {})",
                storage.len(),
                Arc::strong_count(&storage)
            );
        }
    }

    /// Write one byte at `index`, forking the storage first if it is shared
    ///
    /// Returns `Ok(false)` without mutating when `index` is out of range;
    /// probing past the end is an expected outcome, not an error. Returns
    /// `Err(InvalidHandle)` on a closed handle. On success other handles
    /// that shared the storage are unaffected: the write lands either on
    /// storage this handle already owned exclusively, or on a private fork.
    pub fn update(&mut self, index: usize, value: u8) -> Result<bool> {
        let storage = self
            .storage
            .as_mut()
            .ok_or_else(|| CowBufferError::invalid_handle("update"))?;

        if index >= storage.len() {
            return Ok(false);
        }

        // Exclusive owner: mutate in place. `Arc::get_mut` only hands out
        // the mutable path at strong count 1.
        if let Some(exclusive) = Arc::get_mut(storage) {
            exclusive.set(index, value);
            return Ok(true);
        }

        // Shared: fork a private copy, write there, and release this
        // handle's share of the old storage.
        trace!(
            "copy-on-write fork of {}-byte storage (refcount {})",
            storage.len(),
            Arc::strong_count(storage)
        );
        let mut forked = storage.fork();
        forked.set(index, value);
        *storage = Arc::new(forked);
        self.forks += 1;

        Ok(true)
    }

    /// Borrow the buffer contents as a UTF-8 string slice, without copying
    ///
    /// Fails with `InvalidHandle` on a closed handle, `EmptyBuffer` on
    /// zero-length storage, and `InvalidText` when the bytes are not valid
    /// UTF-8. The returned view is a snapshot borrow; it cannot outlive the
    /// handle.
    pub fn as_text(&self) -> Result<&str> {
        let storage = self
            .storage
            .as_ref()
            .ok_or_else(|| CowBufferError::invalid_handle("as_text"))?;

        if storage.is_empty() {
            return Err(CowBufferError::empty_buffer("as_text"));
        }

        Ok(std::str::from_utf8(storage.as_slice())?)
    }

    /// Borrow the buffer contents as a byte slice
    pub fn as_slice(&self) -> Result<&[u8]> {
        let storage = self
            .storage
            .as_ref()
            .ok_or_else(|| CowBufferError::invalid_handle("as_slice"))?;

        Ok(storage.as_slice())
    }

    /// Get the byte length (0 once closed)
    pub fn len(&self) -> usize {
        self.storage.as_ref().map(|s| s.len()).unwrap_or(0)
    }

    /// Check whether the buffer holds zero bytes (true once closed)
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check whether this handle has been closed
    pub fn is_closed(&self) -> bool {
        self.storage.is_none()
    }

    /// Number of live handles currently sharing this handle's storage
    ///
    /// Returns 0 for a closed handle.
    pub fn ref_count(&self) -> usize {
        self.storage.as_ref().map(Arc::strong_count).unwrap_or(0)
    }

    /// Number of copy-on-write forks this handle has performed
    pub fn fork_count(&self) -> u64 {
        self.forks
    }

    /// Check whether two handles reference the same storage instance
    ///
    /// False if either handle is closed.
    pub fn shares_storage_with(&self, other: &CowBuffer) -> bool {
        match (&self.storage, &other.storage) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Snapshot of the handle's current state
    pub fn stats(&self) -> CowBufferStats {
        CowBufferStats {
            len: self.len(),
            ref_count: self.ref_count(),
            forks: self.forks,
        }
    }
}
