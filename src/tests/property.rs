#![cfg(feature = "std")]

use super::{contents, RingDeque};
use crate::{traits::*, Config, MIN_CAPACITY};
use alloc::{collections::VecDeque, vec::Vec};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    PushBack(usize),
    PushFront(usize),
    PopBack,
    PopFront,
    Rotate(isize),
    Clear,
    SetMinCapacity(u32),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<usize>().prop_map(Op::PushBack),
        4 => any::<usize>().prop_map(Op::PushFront),
        3 => Just(Op::PopBack),
        3 => Just(Op::PopFront),
        1 => (-100isize..100).prop_map(Op::Rotate),
        1 => Just(Op::Clear),
        1 => (0u32..9).prop_map(Op::SetMinCapacity),
    ]
}

fn rotate_model(model: &mut VecDeque<usize>, n: isize) {
    if model.len() > 1 {
        let forward = n.rem_euclid(model.len() as isize) as usize;
        model.rotate_left(forward);
    }
}

proptest! {
    #[test]
    fn matches_vec_deque(ops in proptest::collection::vec(op(), 0..400)) {
        let mut rb = RingDeque::<usize>::default();
        let mut model = VecDeque::new();

        for op in ops {
            let capacity = rb.capacity();
            match op {
                Op::PushBack(h) => {
                    rb.push_back(h).unwrap();
                    model.push_back(h);
                }
                Op::PushFront(h) => {
                    rb.push_front(h).unwrap();
                    model.push_front(h);
                }
                Op::PopBack => {
                    prop_assert_eq!(rb.pop_back(), model.pop_back());
                }
                Op::PopFront => {
                    prop_assert_eq!(rb.pop_front(), model.pop_front());
                }
                Op::Rotate(n) => {
                    rb.rotate(n);
                    rotate_model(&mut model, n);
                    prop_assert_eq!(rb.capacity(), capacity);
                }
                Op::Clear => {
                    rb.clear();
                    model.clear();
                    prop_assert_eq!(rb.capacity(), capacity);
                }
                Op::SetMinCapacity(bits) => rb.set_min_capacity(bits),
            }

            rb.assert_invariants();
            prop_assert_eq!(rb.len(), model.len());
            prop_assert_eq!(rb.front(), model.front().copied());
            prop_assert_eq!(rb.back(), model.back().copied());
            prop_assert_eq!(contents(&rb), model.iter().copied().collect::<Vec<_>>());
            if rb.capacity() < capacity {
                prop_assert!(rb.capacity() >= rb.min_capacity());
            }
        }
    }

    #[test]
    fn fifo_through_resizes(items in proptest::collection::vec(any::<usize>(), 0..300)) {
        let mut rb = RingDeque::<usize>::default();
        rb.push_iter(items.iter().copied()).unwrap();
        let popped = rb.pop_iter().collect::<Vec<_>>();
        prop_assert_eq!(popped, items);
        prop_assert_eq!(rb.capacity(), MIN_CAPACITY);
    }

    #[test]
    fn lifo_through_resizes(items in proptest::collection::vec(any::<usize>(), 0..300)) {
        let mut rb = RingDeque::<usize>::default();
        for &h in &items {
            rb.push_front(h).unwrap();
        }
        let popped = rb.pop_iter().collect::<Vec<_>>();
        prop_assert_eq!(popped, items.iter().rev().copied().collect::<Vec<_>>());
    }

    #[test]
    fn rotate_inverse(
        len in 1usize..80,
        offset in 0usize..40,
        n in (isize::MIN + 1)..=isize::MAX,
        bits in 4u32..8,
    ) {
        let mut rb = RingDeque::<usize>::with_config(Config::new().with_min_capacity_bits(bits));
        for i in 0..offset {
            rb.push_back(i).unwrap();
        }
        for _ in 0..offset {
            rb.pop_front();
        }
        rb.push_iter(0..len).unwrap();
        let before = contents(&rb);

        rb.rotate(n);
        rb.assert_invariants();
        rb.rotate(-n);
        prop_assert_eq!(contents(&rb), before);
    }

    #[test]
    fn len_accounting(pushes in 0usize..200, pops in 0usize..250) {
        let mut rb = RingDeque::<usize>::default();
        rb.push_iter(0..pushes).unwrap();
        let popped = rb.skip(pops);
        prop_assert_eq!(popped, pops.min(pushes));
        prop_assert_eq!(rb.len(), pushes - popped);
    }
}
