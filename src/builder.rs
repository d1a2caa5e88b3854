//! Builder pattern for constructing ring buffers.

use core::marker::PhantomData;

use crate::{error::Result, overflow::Overflow, ring::RingBuffer};

/// Builder for constructing a [`RingBuffer`].
///
/// Created via [`RingBuffer::builder()`]. Configure options with chained
/// methods, then call [`.build()`](Self::build) to construct the ring.
///
/// # Example
///
/// ```
/// use ring_buffer::{Overflow, RingBuffer};
///
/// // Capacity is required; overwrite on overflow by default.
/// let ring = RingBuffer::<u64>::builder().capacity(8).build().unwrap();
/// assert_eq!(ring.overflow(), Overflow::Overwrite);
///
/// // Reject incoming items once full.
/// let mut ring = RingBuffer::builder()
///     .capacity(1)
///     .overflow(Overflow::Reject)
///     .build()
///     .unwrap();
/// assert_eq!(ring.push(1), 0);
/// assert_eq!(ring.push(2), 1);
///
/// // A missing or zero capacity is an error.
/// assert!(RingBuffer::<u64>::builder().build().is_err());
/// ```
#[derive(Debug, Clone, Copy)]
#[must_use]
pub struct RingBufferBuilder<T> {
    capacity: usize,
    overflow: Overflow,
    _marker: PhantomData<fn() -> T>,
}

impl<T> RingBufferBuilder<T> {
    pub(crate) fn new() -> Self {
        Self {
            capacity: 0,
            overflow: Overflow::default(),
            _marker: PhantomData,
        }
    }

    /// Set the number of slots.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Set the policy used by [`RingBuffer::push`] and [`RingBuffer::push_all`].
    pub fn overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = overflow;
        self
    }

    /// Build the [`RingBuffer`].
    ///
    /// # Errors
    /// Returns [`RingError`](crate::RingError) if the capacity is zero or
    /// exceeds [`MAX_CAPACITY`](crate::MAX_CAPACITY).
    pub fn build(self) -> Result<RingBuffer<T>> {
        RingBuffer::with_overflow(self.capacity, self.overflow)
    }
}
