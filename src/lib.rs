//! A fixed-capacity ring buffer with selectable overflow policies.
//!
//! [`RingBuffer`] stores up to `capacity` items in a single allocation made
//! at construction. Pushing into a full buffer never fails: the configured
//! [`Overflow`] policy decides whether the queued items are discarded, the
//! oldest one is evicted, or the incoming item is rejected. Each push reports
//! how many incoming items were dropped.
//!
//! ```
//! use ring_buffer::{Overflow, RingBuffer};
//!
//! let mut ring = RingBuffer::new(2);
//! assert_eq!(ring.push_with(1, Overflow::Reject), 0);
//! assert_eq!(ring.push_with(2, Overflow::Reject), 0);
//! assert_eq!(ring.push_with(3, Overflow::Reject), 1);
//!
//! assert_eq!(ring.pop(), Some(1));
//! assert_eq!(ring.pop_many(1), Some(vec![2]));
//! assert_eq!(ring.pop(), None);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod builder;
mod error;
mod iter;
mod overflow;
mod ring;
mod traits;

#[cfg(test)]
mod tests;

pub use builder::RingBufferBuilder;
pub use error::{Result, RingError};
pub use iter::{Drain, Iter};
pub use overflow::Overflow;
pub use ring::{MAX_CAPACITY, RingBuffer};
pub use traits::{RingConsumer, RingInfo, RingProducer, RingTrait};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        Overflow, RingBuffer, RingBufferBuilder, RingConsumer, RingError, RingInfo, RingProducer,
        RingTrait,
    };
}
