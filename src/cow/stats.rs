//! Buffer handle statistics

/// Point-in-time snapshot of a handle's sharing state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CowBufferStats {
    /// Byte length of the referenced storage (0 once closed)
    pub len: usize,
    /// Live handles sharing the storage, this one included (0 once closed)
    pub ref_count: usize,
    /// Copy-on-write forks performed by this handle
    pub forks: u64,
}

impl CowBufferStats {
    /// Check whether the storage is visible to more than one handle
    ///
    /// A write through a handle in this state pays for a fork.
    pub fn is_shared(&self) -> bool {
        self.ref_count > 1
    }

    /// Check whether the snapshot belongs to a closed handle
    pub fn is_closed(&self) -> bool {
        self.ref_count == 0
    }
}
