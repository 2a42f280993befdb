//! # cowbuffer - Copy-on-Write Shared Byte Buffers
//!
//! cowbuffer provides a byte container that multiple logical owners can
//! reference without duplicating storage. The backing bytes are duplicated
//! only at the moment a shared copy is mutated, so clones are cheap and
//! no owner ever observes another owner's writes.
//!
//! ## Features
//!
//! - **Cheap sharing**: cloning a handle shares storage, no byte copies
//! - **Copy-on-write isolation**: a write through a shared handle forks a
//!   private copy first; exactly the writer pays the copy cost
//! - **Explicit lifecycle**: handles are closed idempotently and reject
//!   further use once closed
//! - **Zero-copy views**: borrowed byte and UTF-8 text views over the
//!   current storage
//! - **Typed errors**: recoverable results instead of panics at the API
//!   boundary
//!
//! ## Example
//!
//! ```
//! use cowbuffer::CowBuffer;
//!
//! let original = CowBuffer::new(b"abcd".to_vec());
//! let mut copy = original.try_clone()?;
//! assert_eq!(original.ref_count(), 2);
//!
//! // The write forks a private storage; the original is untouched.
//! assert!(copy.update(0, b'g')?);
//! assert_eq!(copy.as_text()?, "gbcd");
//! assert_eq!(original.as_text()?, "abcd");
//! # Ok::<(), cowbuffer::CowBufferError>(())
//! ```
//!
//! The crate also carries a few small self-contained utilities with no
//! interface to the buffer core: byte-order helpers, a fixed-capacity
//! circular queue, and a BST-backed ordered map.

// Core modules
pub mod cow;
pub mod error;

// Standalone utilities
pub mod endian;
pub mod ordered_map;
pub mod queue;

// Main API re-exports
pub use cow::{CowBuffer, CowBufferStats, SharedStorage};
pub use error::{CowBufferError, Result};
pub use ordered_map::OrderedMap;
pub use queue::CircularQueue;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
