use crate::RingBuffer;
use crate::traits::{RingConsumer, RingInfo, RingProducer, RingTrait};

#[test]
fn ring_producer_trait() {
    let mut ring: RingBuffer<i32> = RingBuffer::new(4);

    assert!(RingProducer::try_push(&mut ring, 1).is_ok());
    assert!(RingProducer::try_push(&mut ring, 2).is_ok());
    assert!(RingProducer::try_push(&mut ring, 3).is_ok());
    assert!(RingProducer::try_push(&mut ring, 4).is_ok());

    assert!(RingInfo::is_full(&ring));

    // try_push when full hands the item back
    assert_eq!(RingProducer::try_push(&mut ring, 5), Err(5));
    assert_eq!(ring.peek_back(), Some(&4));

    assert_eq!(RingInfo::capacity(&ring), 4);
    assert_eq!(RingInfo::len(&ring), 4);
    assert_eq!(RingInfo::available(&ring), 0);
    assert!(!RingInfo::is_empty(&ring));
}

#[test]
fn ring_consumer_trait() {
    let mut ring: RingBuffer<i32> = RingBuffer::new(4);
    ring.push(10);
    ring.push(20);

    assert_eq!(RingConsumer::peek(&ring), Some(&10));

    assert_eq!(RingConsumer::try_pop(&mut ring), Some(10));
    assert_eq!(RingConsumer::try_pop(&mut ring), Some(20));
    assert_eq!(RingConsumer::try_pop(&mut ring), None);

    assert!(RingInfo::is_empty(&ring));
    assert_eq!(RingInfo::len(&ring), 0);
    assert_eq!(RingInfo::available(&ring), 4);
}

fn relay<R: RingTrait<u8>>(ring: &mut R, items: &[u8]) -> usize {
    let mut moved = 0;
    for &item in items {
        if ring.try_push(item).is_err() {
            let _ = ring.try_pop();
            assert!(ring.try_push(item).is_ok());
        }
        moved += 1;
    }
    moved
}

#[test]
fn ring_trait_is_blanket_implemented() {
    let mut ring: RingBuffer<u8> = RingBuffer::new(2);
    assert_eq!(relay(&mut ring, &[1, 2, 3]), 3);
    assert_eq!(ring.pop(), Some(2));
    assert_eq!(ring.pop(), Some(3));
}
