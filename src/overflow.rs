//! Overflow policies applied when pushing into a full ring.

/// What a push does when the ring is already full.
///
/// Every policy behaves the same on a ring with free slots: the item is
/// written at the head and the push reports zero dropped items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Overflow {
    /// Discard every queued item and restart the ring at the write cursor
    /// with the incoming item as its only element.
    ///
    /// The incoming item is stored, so the push reports zero dropped.
    #[default]
    Overwrite,

    /// Overwrite the oldest item. The ring stays full and keeps the most
    /// recent `capacity` items.
    Evict,

    /// Leave the ring untouched and discard the incoming item. The push
    /// reports one dropped item.
    Reject,
}

impl Overflow {
    /// True if the incoming item is discarded on a full ring.
    #[inline]
    pub const fn drops_incoming(self) -> bool {
        matches!(self, Self::Reject)
    }
}

/// Maps a `drop` flag onto a policy: `true` rejects, `false` overwrites.
impl From<bool> for Overflow {
    #[inline]
    fn from(drop: bool) -> Self {
        if drop { Self::Reject } else { Self::Overwrite }
    }
}
