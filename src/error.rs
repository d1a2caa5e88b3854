//! Error types for ring construction.

use snafu::Snafu;

/// Error returned when a ring buffer cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub))]
pub enum RingError {
    /// Capacity of zero slots.
    #[snafu(display("capacity must be > 0"))]
    ZeroCapacity,

    /// Capacity above [`MAX_CAPACITY`](crate::MAX_CAPACITY).
    #[snafu(display("capacity {requested} exceeds maximum ({max})"))]
    CapacityTooLarge {
        /// Slots requested.
        requested: usize,
        /// Largest supported capacity.
        max: usize,
    },
}

/// Result type for ring construction.
pub type Result<T> = core::result::Result<T, RingError>;
