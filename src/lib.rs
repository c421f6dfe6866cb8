//! inmap - map a collection in place
//!
//! # Overview
//!
//! [`inmap`] walks a collection by index, calls a function for each element
//! and stores what it returns at the same position. The collection passed in
//! is the collection handed back.
//!
//! The function may declare any prefix of `(value, index, collection)`:
//!
//! ```
//! use inmap::inmap;
//!
//! let mut arr = vec![1, 2, 3, 4];
//! let out = inmap(&mut arr, |value: i32, index: usize| value * index as i32);
//! assert_eq!(out, &[0, 2, 6, 12]);
//! ```
//!
//! # Resizing during the pass
//!
//! The length is read once, before the first call. Each result is held until
//! its call returns and is written only if its slot still exists, so a
//! function that shrinks the collection or deletes its own element does not
//! see that element come back:
//!
//! ```
//! use inmap::inmap;
//!
//! let mut arr = vec![1, 2, 3, 4];
//! inmap(&mut arr, |v: i32, i: usize, c: &mut Vec<i32>| {
//!     if i == 1 {
//!         c.truncate(2);
//!     }
//!     v * 10
//! });
//! assert_eq!(arr, [10, 20]);
//! ```
//!
//! # API Tiers
//!
//! 1. **Typed API** ([`inmap`], [`inmap_with`], [`try_inmap`],
//!    [`try_inmap_with`]): checked by the compiler, works with any
//!    [`IndexedCollection`].
//! 2. **Dynamic API** ([`dynamic::inmap`]): collection and function are
//!    runtime values; wrong kinds are reported as [`Error::InvalidArgument`].

pub use inmap_core::{
    Bound, Callback, CallbackError, Error, Free, IndexedCollection, SparseVec, inmap, inmap_with,
    try_inmap, try_inmap_with,
};

pub use inmap_core::{callback, collection, dynamic};
