//! In-place mapping over indexed collections.
//!
//! [`inmap`] calls a function once per element of a collection and stores the
//! result back at the same index, returning the collection it was given. The
//! result of each call is held until the call returns; if the call removed
//! the element it was computed for, the result is dropped instead of
//! re-inserting it.
//!
//! Two tiers are provided:
//!
//! 1. **Typed API** ([`inmap`], [`inmap_with`], [`try_inmap`],
//!    [`try_inmap_with`]): any [`IndexedCollection`], any closure taking a
//!    prefix of (value, index, collection).
//! 2. **Dynamic API** ([`dynamic::inmap`]): collection and transform as
//!    runtime values, with argument kinds checked at the call.

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

extern crate alloc;

pub mod callback;
pub mod collection;
pub mod dynamic;
pub mod error;
mod inmap;

pub use callback::{Bound, Callback, Free};
pub use collection::IndexedCollection;
pub use error::{CallbackError, Error};
pub use inmap::{inmap, inmap_with, try_inmap, try_inmap_with};
pub use inmap_sparse_vec::SparseVec;
