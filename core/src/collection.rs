//! Indexed, mutable collections the in-place mapper can walk.

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use inmap_sparse_vec::SparseVec;

/// An ordered, integer-indexed sequence whose slots can be read and
/// overwritten by position.
///
/// Reads hand out owned copies of the element: the mapper passes the value to
/// the callback together with `&mut` access to the collection itself, so it
/// cannot keep a borrow into the storage across the call.
///
/// Implementations may have holes (see [`SparseVec`]). A hole is an index
/// below [`len`](Self::len) for which [`is_populated`](Self::is_populated) is
/// false.
pub trait IndexedCollection {
    type Item;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True if `index` is in range and holds a value.
    fn is_populated(&self, index: usize) -> bool {
        index < self.len()
    }

    /// Returns a copy of the element at `index`, or `None` for holes and
    /// out-of-range indices.
    fn get(&self, index: usize) -> Option<Self::Item>;

    /// Overwrites the element at `index`.
    ///
    /// Callers must only pass indices for which `is_populated` holds;
    /// implementations are free to panic otherwise, like slice indexing does.
    fn set(&mut self, index: usize, value: Self::Item);
}

impl<T: Clone> IndexedCollection for [T] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<T> {
        <[T]>::get(self, index).cloned()
    }

    #[inline]
    fn set(&mut self, index: usize, value: T) {
        self[index] = value;
    }
}

impl<T: Clone, const N: usize> IndexedCollection for [T; N] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn get(&self, index: usize) -> Option<T> {
        self.as_slice().get(index).cloned()
    }

    #[inline]
    fn set(&mut self, index: usize, value: T) {
        self[index] = value;
    }
}

impl<T: Clone> IndexedCollection for Vec<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<T> {
        self.as_slice().get(index).cloned()
    }

    #[inline]
    fn set(&mut self, index: usize, value: T) {
        self[index] = value;
    }
}

impl<T: Clone> IndexedCollection for VecDeque<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<T> {
        VecDeque::get(self, index).cloned()
    }

    #[inline]
    fn set(&mut self, index: usize, value: T) {
        self[index] = value;
    }
}

#[cfg(feature = "smallvec")]
impl<A> IndexedCollection for smallvec::SmallVec<A>
where
    A: smallvec::Array,
    A::Item: Clone,
{
    type Item = A::Item;

    #[inline]
    fn len(&self) -> usize {
        smallvec::SmallVec::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<A::Item> {
        self.as_slice().get(index).cloned()
    }

    #[inline]
    fn set(&mut self, index: usize, value: A::Item) {
        self[index] = value;
    }
}

impl<T: Clone> IndexedCollection for SparseVec<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        SparseVec::len(self)
    }

    #[inline]
    fn is_populated(&self, index: usize) -> bool {
        SparseVec::get(self, index).is_some()
    }

    #[inline]
    fn get(&self, index: usize) -> Option<T> {
        SparseVec::get(self, index).cloned()
    }

    fn set(&mut self, index: usize, value: T) {
        debug_assert!(IndexedCollection::is_populated(self, index));
        SparseVec::set(self, index, value);
    }
}

#[cfg(test)]
#[path = "collection_test.rs"]
mod collection_test;
