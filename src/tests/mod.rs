extern crate std;

mod traits;

use crate::RingBuffer;

/// Checks the cursor bookkeeping that every operation must preserve.
pub(super) fn assert_invariants<T>(ring: &RingBuffer<T>) {
    let cap = ring.capacity();
    assert!(ring.len() <= cap, "len {} exceeds capacity {cap}", ring.len());
    assert!(ring.head() < cap, "head {} out of range", ring.head());
    assert!(ring.tail() < cap, "tail {} out of range", ring.tail());
    assert_eq!(ring.head(), (ring.tail() + ring.len()) % cap);
    assert_eq!(ring.available(), cap - ring.len());
    assert_eq!(ring.iter().count(), ring.len());
}
