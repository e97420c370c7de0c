use crate::RingDeque;

mod basic;
mod property;

fn contents<H: crate::Handle>(rb: &RingDeque<H>) -> alloc::vec::Vec<H> {
    rb.iter().collect()
}
