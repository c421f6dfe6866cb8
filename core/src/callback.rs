//! Arity-polymorphic callbacks.
//!
//! The mapper always has four things to offer a callback: the receiver bound
//! with [`inmap_with`](crate::inmap_with), the current element, its index, and
//! the collection itself. A callback only takes the prefix it cares about:
//!
//! | closure shape                              | marker     |
//! |--------------------------------------------|------------|
//! | `FnMut() -> O`                             | `Free<0>`  |
//! | `FnMut(T) -> O`                            | `Free<1>`  |
//! | `FnMut(T, usize) -> O`                     | `Free<2>`  |
//! | `FnMut(T, usize, &mut C) -> O`             | `Free<3>`  |
//! | `FnMut(&X) -> O`                           | `Bound<0>` |
//! | `FnMut(&X, T) -> O`                        | `Bound<1>` |
//! | `FnMut(&X, T, usize) -> O`                 | `Bound<2>` |
//! | `FnMut(&X, T, usize, &mut C) -> O`         | `Bound<3>` |
//!
//! The marker is inferred: a closure implements exactly one `FnMut`
//! signature, so exactly one impl applies. Because the signature is not known
//! up front, closure parameters need type annotations:
//!
//! ```
//! let mut v = vec![1, 2, 3, 4];
//! inmap_core::inmap(&mut v, |x: i32, i: usize| x * i as i32);
//! assert_eq!(v, [0, 2, 6, 12]);
//! ```

use crate::collection::IndexedCollection;

/// Marker for callbacks that ignore the receiver and take the first `N` of
/// (value, index, collection).
pub struct Free<const N: usize>;

/// Marker for callbacks that take the receiver followed by the first `N` of
/// (value, index, collection).
pub struct Bound<const N: usize>;

/// Something the mapper can invoke once per element of a `C`.
///
/// `X` is the receiver type, `()` when no context was bound. `Marker` is one
/// of [`Free`] or [`Bound`] and only exists to keep the blanket impls apart.
pub trait Callback<X: ?Sized, C: IndexedCollection + ?Sized, Marker> {
    type Output;

    /// How many of (value, index, collection) the callback declares.
    const ARITY: usize;

    fn call(&mut self, this: &X, value: C::Item, index: usize, collection: &mut C) -> Self::Output;
}

impl<F, X, C, O> Callback<X, C, Free<0>> for F
where
    X: ?Sized,
    C: IndexedCollection + ?Sized,
    F: FnMut() -> O,
{
    type Output = O;
    const ARITY: usize = 0;

    #[inline]
    fn call(&mut self, _this: &X, _value: C::Item, _index: usize, _collection: &mut C) -> O {
        (self)()
    }
}

impl<F, X, C, O> Callback<X, C, Free<1>> for F
where
    X: ?Sized,
    C: IndexedCollection + ?Sized,
    F: FnMut(C::Item) -> O,
{
    type Output = O;
    const ARITY: usize = 1;

    #[inline]
    fn call(&mut self, _this: &X, value: C::Item, _index: usize, _collection: &mut C) -> O {
        (self)(value)
    }
}

impl<F, X, C, O> Callback<X, C, Free<2>> for F
where
    X: ?Sized,
    C: IndexedCollection + ?Sized,
    F: FnMut(C::Item, usize) -> O,
{
    type Output = O;
    const ARITY: usize = 2;

    #[inline]
    fn call(&mut self, _this: &X, value: C::Item, index: usize, _collection: &mut C) -> O {
        (self)(value, index)
    }
}

impl<F, X, C, O> Callback<X, C, Free<3>> for F
where
    X: ?Sized,
    C: IndexedCollection + ?Sized,
    F: FnMut(C::Item, usize, &mut C) -> O,
{
    type Output = O;
    const ARITY: usize = 3;

    #[inline]
    fn call(&mut self, _this: &X, value: C::Item, index: usize, collection: &mut C) -> O {
        (self)(value, index, collection)
    }
}

impl<F, X, C, O> Callback<X, C, Bound<0>> for F
where
    X: ?Sized,
    C: IndexedCollection + ?Sized,
    F: FnMut(&X) -> O,
{
    type Output = O;
    const ARITY: usize = 0;

    #[inline]
    fn call(&mut self, this: &X, _value: C::Item, _index: usize, _collection: &mut C) -> O {
        (self)(this)
    }
}

impl<F, X, C, O> Callback<X, C, Bound<1>> for F
where
    X: ?Sized,
    C: IndexedCollection + ?Sized,
    F: FnMut(&X, C::Item) -> O,
{
    type Output = O;
    const ARITY: usize = 1;

    #[inline]
    fn call(&mut self, this: &X, value: C::Item, _index: usize, _collection: &mut C) -> O {
        (self)(this, value)
    }
}

impl<F, X, C, O> Callback<X, C, Bound<2>> for F
where
    X: ?Sized,
    C: IndexedCollection + ?Sized,
    F: FnMut(&X, C::Item, usize) -> O,
{
    type Output = O;
    const ARITY: usize = 2;

    #[inline]
    fn call(&mut self, this: &X, value: C::Item, index: usize, _collection: &mut C) -> O {
        (self)(this, value, index)
    }
}

impl<F, X, C, O> Callback<X, C, Bound<3>> for F
where
    X: ?Sized,
    C: IndexedCollection + ?Sized,
    F: FnMut(&X, C::Item, usize, &mut C) -> O,
{
    type Output = O;
    const ARITY: usize = 3;

    #[inline]
    fn call(&mut self, this: &X, value: C::Item, index: usize, collection: &mut C) -> O {
        (self)(this, value, index, collection)
    }
}

#[cfg(test)]
#[path = "callback_test.rs"]
mod callback_test;
