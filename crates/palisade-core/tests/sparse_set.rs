//! SparseSet generational handle tests.

use palisade_core::alloc::sparse_set::{IndexSlot, SparseSet};

#[test]
fn test_push_and_get() {
    let mut set = SparseSet::new();

    let idx = set.push(42);
    assert_eq!(*set.get(idx), 42);

    let idx2 = set.push(100);
    assert_eq!(*set.get(idx2), 100);
    assert_eq!(*set.get(idx), 42);
}

#[test]
fn test_get_mut() {
    let mut set = SparseSet::new();

    let idx = set.push(42);
    *set.get_mut(idx) = 100;

    assert_eq!(*set.get(idx), 100);
}

#[test]
fn test_try_get_invalid_returns_none() {
    let set = SparseSet::<i32>::new();
    assert_eq!(set.try_get(IndexSlot::new(0, 999)), None);
}

#[test]
fn test_stale_handle_after_reuse() {
    let mut set = SparseSet::new();

    let old = set.push("old");
    set.remove(old);
    let new = set.push("new");

    assert_eq!(set.try_get(old), None);
    assert_eq!(set.try_get(new), Some(&"new"));
}

#[test]
#[should_panic(expected = "stale or foreign handle")]
fn test_double_remove_panics() {
    let mut set = SparseSet::new();
    let idx = set.push(1);
    set.remove(idx);
    set.remove(idx);
}

#[test]
fn test_slot_bit_packing() {
    let slot = IndexSlot::new(7, 3);
    assert_eq!(slot.generation(), 7);
    assert_eq!(slot.index(), 3);
    assert_eq!(slot.to_bits(), (7u64 << 32) | 4);
}
