//! SparseVec: an ordered vector whose slots may be holes.
//!
//! A hole is an index below [`SparseVec::len`] with no assigned value. Holes
//! appear when a slot is [deleted](SparseVec::delete), when the vector is
//! created with [`SparseVec::with_len`], or when [`SparseVec::set`] writes
//! past the end and the gap has to be filled.
//!
//! ```
//! use inmap_sparse_vec::SparseVec;
//!
//! let mut v = SparseVec::from(vec![1, 2, 3]);
//! assert_eq!(v.delete(1), Some(2));
//! assert!(v.is_hole(1));
//! assert_eq!(v.len(), 3);
//! assert_eq!(v.count_populated(), 2);
//! ```

#![cfg_attr(not(test), no_std)]

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SparseVec<T> {
    slots: Vec<Option<T>>,
}

static_assertions::assert_eq_size!(SparseVec<u64>, Vec<Option<u64>>);

impl<T> SparseVec<T> {
    pub const fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Creates a vector of `len` holes.
    pub fn with_len(len: usize) -> Self {
        let mut slots = Vec::with_capacity(len);
        slots.resize_with(len, || None);
        Self { slots }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn push(&mut self, value: T) {
        self.slots.push(Some(value));
    }

    pub fn push_hole(&mut self) {
        self.slots.push(None);
    }

    /// Returns `None` both for holes and for indices past the end.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index).and_then(Option::as_mut)
    }

    /// True if `index` is in range and has no value.
    pub fn is_hole(&self, index: usize) -> bool {
        matches!(self.slots.get(index), Some(None))
    }

    /// Assigns `value` at `index`, returning the previous value.
    ///
    /// Writing past the end extends the vector; the skipped slots become
    /// holes.
    pub fn set(&mut self, index: usize, value: T) -> Option<T> {
        if index >= self.slots.len() {
            self.slots.resize_with(index + 1, || None);
        }
        self.slots[index].replace(value)
    }

    /// Turns the slot at `index` into a hole without changing the length.
    pub fn delete(&mut self, index: usize) -> Option<T> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    pub fn truncate(&mut self, len: usize) {
        self.slots.truncate(len);
    }

    pub fn count_populated(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Option<&T>> + ExactSizeIterator {
        self.slots.iter().map(Option::as_ref)
    }
}

impl<T> Default for SparseVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for SparseVec<T> {
    fn from(values: Vec<T>) -> Self {
        Self {
            slots: values.into_iter().map(Some).collect(),
        }
    }
}

impl<T> FromIterator<Option<T>> for SparseVec<T> {
    fn from_iter<I: IntoIterator<Item = Option<T>>>(iter: I) -> Self {
        Self {
            slots: iter.into_iter().collect(),
        }
    }
}

// Holes print as `<empty>`, the way sparse arrays are usually shown.
impl<T: fmt::Debug> fmt::Debug for SparseVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Hole;

        impl fmt::Debug for Hole {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("<empty>")
            }
        }

        let mut list = f.debug_list();
        for slot in &self.slots {
            match slot {
                Some(value) => list.entry(value),
                None => list.entry(&Hole),
            };
        }
        list.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::{format, vec};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_vec() {
        let v = SparseVec::from(vec![1, 2, 3]);
        assert_eq!(v.len(), 3);
        assert_eq!(v.count_populated(), 3);
        assert_eq!(v.get(0), Some(&1));
        assert_eq!(v.get(2), Some(&3));
        assert_eq!(v.get(3), None);
    }

    #[test]
    fn test_with_len_is_all_holes() {
        let v: SparseVec<u8> = SparseVec::with_len(4);
        assert_eq!(v.len(), 4);
        assert_eq!(v.count_populated(), 0);
        assert!((0..4).all(|i| v.is_hole(i)));
        assert!(!v.is_hole(4));
    }

    #[test]
    fn test_delete_keeps_length() {
        let mut v = SparseVec::from(vec!['a', 'b', 'c']);
        assert_eq!(v.delete(1), Some('b'));
        assert_eq!(v.len(), 3);
        assert!(v.is_hole(1));
        assert_eq!(v.get(1), None);

        // Deleting a hole or an out-of-range index is a no-op.
        assert_eq!(v.delete(1), None);
        assert_eq!(v.delete(10), None);
        assert_eq!(v.len(), 3);
    }

    #[test]
    fn test_set_fills_hole() {
        let mut v = SparseVec::from(vec![1, 2, 3]);
        v.delete(0);
        assert_eq!(v.set(0, 7), None);
        assert_eq!(v.set(1, 8), Some(2));
        assert_eq!(v.iter().collect::<Vec<_>>(), vec![Some(&7), Some(&8), Some(&3)]);
    }

    #[test]
    fn test_set_past_end_leaves_holes() {
        let mut v = SparseVec::from(vec![1]);
        v.set(3, 4);
        assert_eq!(v.len(), 4);
        assert!(v.is_hole(1));
        assert!(v.is_hole(2));
        assert_eq!(v.get(3), Some(&4));
    }

    #[test]
    fn test_push_and_truncate() {
        let mut v = SparseVec::new();
        v.push(1);
        v.push_hole();
        v.push(3);
        assert_eq!(v.len(), 3);
        assert_eq!(v.count_populated(), 2);

        v.truncate(1);
        assert_eq!(v.len(), 1);
        assert_eq!(v.get(0), Some(&1));
        assert!(!v.is_hole(1));
    }

    #[test]
    fn test_get_mut() {
        let mut v = SparseVec::from(vec![1, 2]);
        *v.get_mut(1).unwrap() += 40;
        assert_eq!(v.get(1), Some(&42));
        v.delete(0);
        assert!(v.get_mut(0).is_none());
    }

    #[test]
    fn test_from_iter_and_eq() {
        let a: SparseVec<i32> = [Some(1), None, Some(3)].into_iter().collect();
        let mut b = SparseVec::from(vec![1, 2, 3]);
        b.delete(1);
        assert_eq!(a, b);
    }

    #[test]
    fn test_debug_shows_holes() {
        let v: SparseVec<i32> = [Some(1), None, Some(3)].into_iter().collect();
        assert_eq!(format!("{:?}", v), "[1, <empty>, 3]");
    }
}
