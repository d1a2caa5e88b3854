//! Fixed-capacity ring buffer with policy-driven overflow.

use alloc::{boxed::Box, vec::Vec};
use core::fmt;

use snafu::ensure;

use crate::{
    builder::RingBufferBuilder,
    error::{CapacityTooLargeSnafu, Result, ZeroCapacitySnafu},
    iter::{Drain, Iter},
    overflow::Overflow,
    traits::{RingConsumer, RingInfo, RingProducer},
};

/// Maximum supported capacity (2^20 = ~1 million slots).
/// Prevents accidental huge allocations from typos like `RingBuffer::new(1_000_000_000)`.
pub const MAX_CAPACITY: usize = 1 << 20;

/// Bounded FIFO queue over a fixed block of slots.
///
/// `head` is the slot the next push writes to, `tail` is the slot holding
/// the oldest live item. The live items are the `len()` slots starting at
/// `tail`, wrapping modulo `capacity()`. Cursors are never reset: once the
/// ring drains, `head == tail` at whatever slot they advanced to.
///
/// Not thread-safe by itself; share it behind a lock if needed.
#[derive(Clone)]
pub struct RingBuffer<T> {
    slots: Box<[Option<T>]>,
    head: usize,
    tail: usize,
    len: usize,
    overflow: Overflow,
}

impl<T> RingBuffer<T> {
    /// Create a builder for configuring a [`RingBuffer`].
    ///
    /// # Example
    ///
    /// ```
    /// use ring_buffer::{Overflow, RingBuffer};
    ///
    /// let ring = RingBuffer::<u64>::builder()
    ///     .capacity(256)
    ///     .overflow(Overflow::Evict)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(ring.capacity(), 256);
    /// ```
    pub fn builder() -> RingBufferBuilder<T> {
        RingBufferBuilder::new()
    }

    /// Create a ring with `capacity` slots and the default
    /// [`Overflow::Overwrite`] policy.
    ///
    /// # Panics
    /// Panics if `capacity` is zero or exceeds [`MAX_CAPACITY`].
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        match Self::try_new(capacity) {
            Ok(ring) => ring,
            Err(err) => panic!("{err}"),
        }
    }

    /// Create a ring with `capacity` slots, validating the capacity.
    ///
    /// # Errors
    /// Returns [`RingError::ZeroCapacity`](crate::RingError::ZeroCapacity) or
    /// [`RingError::CapacityTooLarge`](crate::RingError::CapacityTooLarge).
    pub fn try_new(capacity: usize) -> Result<Self> {
        Self::with_overflow(capacity, Overflow::default())
    }

    pub(crate) fn with_overflow(capacity: usize, overflow: Overflow) -> Result<Self> {
        ensure!(capacity > 0, ZeroCapacitySnafu);
        ensure!(
            capacity <= MAX_CAPACITY,
            CapacityTooLargeSnafu {
                requested: capacity,
                max: MAX_CAPACITY,
            }
        );

        tracing::debug!(capacity, ?overflow, "ring buffer created");

        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Ok(Self {
            slots: slots.into_boxed_slice(),
            head: 0,
            tail: 0,
            len: 0,
            overflow,
        })
    }

    #[inline]
    fn wrap(&self, idx: usize) -> usize {
        idx % self.slots.len()
    }

    /// Push an item using the ring's configured policy.
    ///
    /// Returns the number of incoming items dropped (0 or 1).
    #[inline]
    pub fn push(&mut self, item: T) -> usize {
        self.push_with(item, self.overflow)
    }

    /// Push an item using an explicit overflow policy.
    ///
    /// Returns the number of incoming items dropped: 1 only when the ring is
    /// full and `policy` is [`Overflow::Reject`].
    pub fn push_with(&mut self, item: T, policy: Overflow) -> usize {
        if self.is_full() {
            match policy {
                Overflow::Reject => {
                    tracing::trace!(head = self.head, tail = self.tail, "ring full, item rejected");
                    return 1;
                }
                Overflow::Evict => {
                    // Oldest slot is the one about to be written.
                    self.tail = self.wrap(self.tail + 1);
                    self.len -= 1;
                    tracing::trace!(head = self.head, tail = self.tail, "ring full, oldest evicted");
                }
                Overflow::Overwrite => {
                    let discarded = self.len;
                    self.discard_live();
                    self.tail = self.head;
                    tracing::trace!(
                        discarded,
                        head = self.head,
                        "ring full, restarting at write cursor"
                    );
                }
            }
        }

        let head = self.head;
        self.slots[head] = Some(item);
        self.head = self.wrap(head + 1);
        self.len += 1;
        0
    }

    /// Push every item using the ring's configured policy.
    ///
    /// Returns the total number of incoming items dropped.
    #[inline]
    pub fn push_all<I: IntoIterator<Item = T>>(&mut self, items: I) -> usize {
        self.push_all_with(items, self.overflow)
    }

    /// Push every item in order using an explicit overflow policy.
    ///
    /// Identical to calling [`push_with`](Self::push_with) once per item and
    /// summing the results.
    pub fn push_all_with<I: IntoIterator<Item = T>>(&mut self, items: I, policy: Overflow) -> usize {
        items
            .into_iter()
            .map(|item| self.push_with(item, policy))
            .sum()
    }

    /// Pop the oldest item.
    #[inline]
    #[must_use]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        let tail = self.tail;
        let item = self.slots[tail].take();
        debug_assert!(item.is_some(), "live slot {tail} is empty");
        self.tail = self.wrap(tail + 1);
        self.len -= 1;
        item
    }

    /// Pop exactly `amount` items, oldest first.
    ///
    /// All or nothing: returns `None` and leaves the ring untouched if fewer
    /// than `amount` items are queued.
    #[must_use]
    pub fn pop_many(&mut self, amount: usize) -> Option<Vec<T>> {
        if amount > self.len {
            return None;
        }
        Some((0..amount).filter_map(|_| self.pop()).collect())
    }

    /// Peek at the oldest item.
    #[inline]
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.get(0)
    }

    /// Peek at the newest item.
    #[inline]
    #[must_use]
    pub fn peek_back(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|last| self.get(last))
    }

    /// Get item by index (0 = oldest).
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        self.slots[self.wrap(self.tail + index)].as_ref()
    }

    /// Drop every queued item. Cursors stay where they are.
    pub fn clear(&mut self) {
        self.discard_live();
        self.tail = self.head;
    }

    fn discard_live(&mut self) {
        for offset in 0..self.len {
            let idx = self.wrap(self.tail + offset);
            self.slots[idx] = None;
        }
        self.len = 0;
    }

    /// Iterate oldest to newest.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Drain all items from the ring, returning an iterator.
    /// Items are removed oldest to newest.
    #[inline]
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain::new(self)
    }

    /// Number of items in buffer.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Buffer capacity.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Free slots left before the next push overflows.
    #[inline]
    #[must_use]
    pub fn available(&self) -> usize {
        self.slots.len() - self.len
    }

    /// True if empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True if full.
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    /// Slot the next push writes to.
    #[inline]
    #[must_use]
    pub fn head(&self) -> usize {
        self.head
    }

    /// Slot holding the oldest item (the next one popped).
    #[inline]
    #[must_use]
    pub fn tail(&self) -> usize {
        self.tail
    }

    /// Policy used by [`push`](Self::push) and [`push_all`](Self::push_all).
    #[inline]
    #[must_use]
    pub fn overflow(&self) -> Overflow {
        self.overflow
    }

    /// Change the policy used by [`push`](Self::push) and
    /// [`push_all`](Self::push_all).
    #[inline]
    pub fn set_overflow(&mut self, overflow: Overflow) {
        self.overflow = overflow;
    }
}

impl<T: fmt::Debug> fmt::Debug for RingBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Items<'a, T>(&'a RingBuffer<T>);

        impl<T: fmt::Debug> fmt::Debug for Items<'_, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_list().entries(self.0.iter()).finish()
            }
        }

        f.debug_struct("RingBuffer")
            .field("capacity", &self.capacity())
            .field("head", &self.head)
            .field("tail", &self.tail)
            .field("overflow", &self.overflow)
            .field("items", &Items(self))
            .finish()
    }
}

impl<T> core::iter::Extend<T> for RingBuffer<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.push_all(iter);
    }
}

impl<'a, T> IntoIterator for &'a RingBuffer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> RingInfo for RingBuffer<T> {
    #[inline]
    fn len(&self) -> usize {
        RingBuffer::len(self)
    }

    #[inline]
    fn capacity(&self) -> usize {
        RingBuffer::capacity(self)
    }
}

impl<T> RingProducer<T> for RingBuffer<T> {
    #[inline]
    fn try_push(&mut self, item: T) -> core::result::Result<(), T> {
        if self.is_full() {
            return Err(item);
        }
        self.push_with(item, Overflow::Reject);
        Ok(())
    }
}

impl<T> RingConsumer<T> for RingBuffer<T> {
    #[inline]
    fn try_pop(&mut self) -> Option<T> {
        self.pop()
    }

    #[inline]
    fn peek(&self) -> Option<&T> {
        RingBuffer::peek(self)
    }
}
