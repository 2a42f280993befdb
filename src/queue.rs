//! Fixed-capacity circular queue
//!
//! Standalone utility with no interface to the buffer core. Single-threaded;
//! rejection of a full or empty queue is an expected outcome, not an error.

use crate::error::{CowBufferError, Result};

/// Bounded FIFO queue over a fixed ring of slots
#[derive(Debug)]
pub struct CircularQueue<T> {
    /// Ring storage; `None` marks a free slot
    slots: Box<[Option<T>]>,
    /// Index of the front element
    head: usize,
    /// Number of occupied slots
    len: usize,
}

impl<T> CircularQueue<T> {
    /// Create a queue with room for `capacity` elements
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(CowBufferError::invalid_parameter(
                "capacity",
                "Capacity must be greater than 0",
            ));
        }

        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);

        Ok(Self {
            slots: slots.into_boxed_slice(),
            head: 0,
            len: 0,
        })
    }

    /// Append a value at the back; false if the queue is full
    pub fn push(&mut self, value: T) -> bool {
        if self.is_full() {
            return false;
        }

        let tail = (self.head + self.len) % self.slots.len();
        self.slots[tail] = Some(value);
        self.len += 1;
        true
    }

    /// Remove and return the front value; `None` if the queue is empty
    pub fn pop(&mut self) -> Option<T> {
        let value = self.slots[self.head].take()?;
        self.head = (self.head + 1) % self.slots.len();
        self.len -= 1;
        Some(value)
    }

    /// Peek at the front value
    pub fn front(&self) -> Option<&T> {
        self.slots[self.head].as_ref()
    }

    /// Peek at the back value
    pub fn back(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        let tail = (self.head + self.len - 1) % self.slots.len();
        self.slots[tail].as_ref()
    }

    /// Get the number of queued elements
    pub fn len(&self) -> usize {
        self.len
    }

    /// Get the fixed capacity
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Check if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check if the queue is full
    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }
}
