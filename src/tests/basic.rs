use super::{contents, RingDeque};
use crate::{traits::*, MIN_CAPACITY};
use alloc::vec;

const A: usize = 0xa0;
const B: usize = 0xb0;
const C: usize = 0xc0;
const D: usize = 0xd0;
const E: usize = 0xe0;

#[test]
fn capacity() {
    assert_eq!(RingDeque::<usize>::new(0).capacity(), MIN_CAPACITY);
    assert_eq!(RingDeque::<usize>::new(16).capacity(), 16);
    assert_eq!(RingDeque::<usize>::new(100).capacity(), 128);
    assert_eq!(RingDeque::<usize>::default().capacity(), MIN_CAPACITY);
    assert_eq!(RingDeque::<usize>::default().min_capacity(), MIN_CAPACITY);
}

#[test]
fn push_peek_pop() {
    let mut rb = RingDeque::<usize>::new(16);
    for h in [A, B, C, D] {
        rb.push_back(h).unwrap();
    }

    assert_eq!(rb.front(), Some(A));
    assert_eq!(rb.back(), Some(D));
    assert_eq!(rb.get(2), Some(C));
    assert_eq!(rb.len(), 4);

    assert_eq!(rb.pop_front(), Some(A));
    rb.push_back(E).unwrap();
    assert_eq!(contents(&rb), vec![B, C, D, E]);
}

#[test]
fn pop_empty() {
    let mut rb = RingDeque::<usize>::default();

    assert_eq!(rb.pop_front(), None);
    assert_eq!(rb.pop_back(), None);
    assert_eq!(rb.front(), None);
    assert_eq!(rb.back(), None);
    assert!(rb.is_empty());
    assert_eq!(rb.len(), 0);
}

#[test]
fn fifo() {
    let mut rb = RingDeque::<usize>::default();
    for i in 0..10 {
        rb.push_back(i).unwrap();
    }
    for i in 0..10 {
        assert_eq!(rb.pop_front(), Some(i));
    }
    assert_eq!(rb.pop_front(), None);
}

#[test]
fn lifo() {
    let mut rb = RingDeque::<usize>::default();
    for i in 0..10 {
        rb.push_back(i).unwrap();
    }
    for i in (0..10).rev() {
        assert_eq!(rb.pop_back(), Some(i));
    }

    for i in 0..10 {
        rb.push_front(i).unwrap();
    }
    for i in (0..10).rev() {
        assert_eq!(rb.pop_front(), Some(i));
    }
    assert!(rb.is_empty());
}

#[test]
fn push_front_wraps() {
    let mut rb = RingDeque::<usize>::default();
    rb.push_front(B).unwrap();
    rb.push_front(A).unwrap();
    rb.push_back(C).unwrap();

    assert_eq!(rb.as_slices(), (&[A, B][..], &[C][..]));
    rb.assert_invariants();
    assert_eq!(contents(&rb), vec![A, B, C]);
    assert_eq!(rb.pop_back(), Some(C));
    assert_eq!(rb.pop_back(), Some(B));
    assert_eq!(rb.pop_back(), Some(A));
    assert_eq!(rb.pop_back(), None);
}

#[test]
fn clear() {
    let mut rb = RingDeque::<usize>::default();
    for i in 1..=40 {
        rb.push_back(i).unwrap();
    }
    let capacity = rb.capacity();
    assert_eq!(capacity, 64);

    rb.clear();

    assert_eq!(rb.len(), 0);
    assert!(rb.is_empty());
    assert_eq!(rb.capacity(), capacity);
    for i in 0..capacity {
        assert_eq!(rb.get(i), None);
    }
    assert_eq!(rb.as_slices(), (&[][..], &[][..]));

    rb.assert_invariants();

    rb.push_back(A).unwrap();
    assert_eq!(contents(&rb), vec![A]);
}

#[test]
fn clear_nulls_wrapped_slots() {
    let mut rb = RingDeque::<usize>::default();
    for i in 1..=3 {
        rb.push_front(i).unwrap();
    }
    rb.pop_back();
    rb.assert_invariants();
    rb.clear();
    rb.assert_invariants();
    assert_eq!(rb.capacity(), MIN_CAPACITY);
}

#[test]
fn set_min_capacity() {
    let mut rb = RingDeque::<usize>::default();
    rb.set_min_capacity(0);
    assert_eq!(rb.min_capacity(), MIN_CAPACITY);
    rb.set_min_capacity(10);
    assert_eq!(rb.min_capacity(), 1024);
    assert_eq!(rb.capacity(), MIN_CAPACITY);
}

#[test]
fn nonzero_handles() {
    use core::num::NonZeroUsize;

    let mut rb = RingDeque::<Option<NonZeroUsize>>::default();
    let h = NonZeroUsize::new(42);
    rb.push_back(h).unwrap();
    rb.push_back(None).unwrap();

    assert_eq!(rb.pop_front(), Some(h));
    assert_eq!(rb.pop_front(), Some(None));
    assert_eq!(rb.pop_front(), None);
}

#[test]
fn push_iter() {
    let mut rb = RingDeque::<usize>::default();
    assert_eq!(rb.push_iter(0..5), Ok(5));
    assert_eq!(contents(&rb), vec![0, 1, 2, 3, 4]);
}
