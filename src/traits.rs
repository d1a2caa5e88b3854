/// Common ring buffer properties.
/// Provides size and capacity information shared by both producers and consumers.
pub trait RingInfo {
    /// Returns the number of items currently in the ring.
    fn len(&self) -> usize;

    /// Returns the total capacity of the ring.
    fn capacity(&self) -> usize;

    /// Returns `true` if the ring contains no items.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if the ring has no available capacity.
    fn is_full(&self) -> bool {
        self.len() >= self.capacity()
    }

    /// Returns the number of free slots.
    fn available(&self) -> usize {
        self.capacity().saturating_sub(self.len())
    }
}

/// Producer side of a ring buffer.
///
/// See [`RingBuffer`](crate::RingBuffer) for the primary implementation,
/// whose inherent `push` methods apply an [`Overflow`](crate::Overflow)
/// policy instead of failing.
pub trait RingProducer<T>: RingInfo {
    /// Attempts to push an item into the ring without overflowing.
    ///
    /// # Errors
    /// Returns `Err(item)` if the ring is full, handing the item back.
    fn try_push(&mut self, item: T) -> Result<(), T>;
}

/// Consumer side of a ring buffer.
///
/// See [`RingBuffer`](crate::RingBuffer) for the primary implementation.
pub trait RingConsumer<T>: RingInfo {
    /// Attempts to pop the oldest item from the ring.
    ///
    /// Returns `Some(item)` if the ring was non-empty, or `None` if empty.
    #[must_use]
    fn try_pop(&mut self) -> Option<T>;

    /// Returns a reference to the oldest item without removing it.
    #[must_use]
    fn peek(&self) -> Option<&T>;
}

/// Combined producer and consumer trait.
///
/// Automatically implemented for any type that implements both
/// [`RingProducer`] and [`RingConsumer`].
pub trait RingTrait<T>: RingProducer<T> + RingConsumer<T> {}

impl<T, R: RingProducer<T> + RingConsumer<T>> RingTrait<T> for R {}
