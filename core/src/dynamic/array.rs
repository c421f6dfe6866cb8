//! Shared, mutable array values.

use super::Value;
use crate::collection::IndexedCollection;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;
use inmap_sparse_vec::SparseVec;

/// A reference to a mutable, possibly sparse array.
///
/// Cloning an `Array` clones the handle, not the contents: all clones see the
/// same elements, and [`ptr_eq`](Self::ptr_eq) tells whether two handles
/// point at the same storage.
#[derive(Clone, Default)]
pub struct Array(Rc<RefCell<SparseVec<Value>>>);

impl Array {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_values(values: impl IntoIterator<Item = Value>) -> Self {
        let values = values.into_iter().map(Some).collect();
        Self(Rc::new(RefCell::new(values)))
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// `None` for holes and out-of-range indices.
    pub fn get(&self, index: usize) -> Option<Value> {
        self.0.borrow().get(index).cloned()
    }

    pub fn is_hole(&self, index: usize) -> bool {
        self.0.borrow().is_hole(index)
    }

    /// Writing past the end grows the array, leaving holes in between.
    pub fn set(&self, index: usize, value: Value) -> Option<Value> {
        self.0.borrow_mut().set(index, value)
    }

    pub fn delete(&self, index: usize) -> Option<Value> {
        self.0.borrow_mut().delete(index)
    }

    pub fn push(&self, value: Value) {
        self.0.borrow_mut().push(value);
    }

    pub fn truncate(&self, len: usize) {
        self.0.borrow_mut().truncate(len);
    }

    pub fn ptr_eq(&self, other: &Array) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Copies the current contents out.
    pub fn snapshot(&self) -> SparseVec<Value> {
        self.0.borrow().clone()
    }

    /// Like [`snapshot`](Self::snapshot), with holes as `None`.
    pub fn to_vec(&self) -> Vec<Option<Value>> {
        self.0.borrow().iter().map(Option::<&Value>::cloned).collect()
    }
}

// Reads never fail here: a hole or an index past the end reads as
// `Undefined`, so callbacks still run for every index below the initial
// length. Write-back still checks `is_populated`.
impl IndexedCollection for Array {
    type Item = Value;

    fn len(&self) -> usize {
        Array::len(self)
    }

    fn is_populated(&self, index: usize) -> bool {
        self.0.borrow().get(index).is_some()
    }

    fn get(&self, index: usize) -> Option<Value> {
        Some(Array::get(self, index).unwrap_or(Value::Undefined))
    }

    fn set(&mut self, index: usize, value: Value) {
        Array::set(self, index, value);
    }
}

impl fmt::Debug for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&Nested { array: self, parents: &[] }, f)
    }
}

type Storage = RefCell<SparseVec<Value>>;

// Formats an array while remembering the arrays enclosing it, so an array
// that contains itself prints `[<cycle>]` instead of recursing forever.
struct Nested<'a> {
    array: &'a Array,
    parents: &'a [*const Storage],
}

impl fmt::Debug for Nested<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Hole;

        impl fmt::Debug for Hole {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("<empty>")
            }
        }

        let ptr = Rc::as_ptr(&self.array.0);
        if self.parents.contains(&ptr) {
            return f.write_str("[<cycle>]");
        }
        let Ok(values) = self.array.0.try_borrow() else {
            return f.write_str("[<borrowed>]");
        };

        let mut parents = Vec::with_capacity(self.parents.len() + 1);
        parents.extend_from_slice(self.parents);
        parents.push(ptr);

        let mut list = f.debug_list();
        for slot in values.iter() {
            match slot {
                Some(Value::Array(inner)) => list.entry(&Tagged(Nested {
                    array: inner,
                    parents: &parents,
                })),
                Some(value) => list.entry(value),
                None => list.entry(&Hole),
            };
        }
        list.finish()
    }
}

// Prints a nested array the way `Value`'s derived `Debug` would.
struct Tagged<'a>(Nested<'a>);

impl fmt::Debug for Tagged<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Array").field(&self.0).finish()
    }
}
