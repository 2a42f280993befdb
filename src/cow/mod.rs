//! Copy-on-write shared buffer core
//!
//! This module provides the buffer handle and its shared backing storage.
//! Handles share one storage freely for reads; a write through a shared
//! handle forks a private copy first, so no owner ever observes another
//! owner's mutation.

pub mod handle;
pub mod stats;
pub mod storage;

// Re-export main types
pub use handle::CowBuffer;
pub use stats::CowBufferStats;
pub use storage::SharedStorage;
