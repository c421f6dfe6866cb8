//! The in-place mapper.
//!
//! Every entry point makes the same single pass:
//!
//! 1. The length is read once; elements appended later are never visited.
//! 2. For each index below that bound, the current element is read. If there
//!    is nothing to read (the collection shrank, or the slot is a hole) the
//!    index is passed over.
//! 3. The callback runs and its result is held.
//! 4. The result is written back only if the slot is still in range and
//!    populated. A callback that removed its own element does not get it
//!    back.
//!
//! Step 2 treats holes already present before the pass the same way as slots
//! that vanish during it: the callback is not called for them.
//!
//! A failing callback stops the pass at once. Elements already written stay
//! written.

use crate::callback::Callback;
use crate::collection::IndexedCollection;

/// Replaces each element of `collection` with `callback`'s result and
/// returns the same collection.
///
/// ```
/// use inmap_core::inmap;
///
/// let mut arr = vec![1, 2, 3, 4];
/// let out = inmap(&mut arr, |value: i32, index: usize| value * index as i32);
/// assert_eq!(out, &[0, 2, 6, 12]);
/// ```
pub fn inmap<C, F, M>(collection: &mut C, callback: F) -> &mut C
where
    C: IndexedCollection + ?Sized,
    F: Callback<(), C, M, Output = C::Item>,
{
    inmap_with(collection, callback, &())
}

/// Like [`inmap`], with `this` handed to callbacks that take a receiver as
/// their first parameter.
///
/// ```
/// use inmap_core::inmap_with;
///
/// struct Scale(i32);
///
/// let mut arr = [1, 2, 3];
/// inmap_with(&mut arr, |s: &Scale, v: i32| v * s.0, &Scale(10));
/// assert_eq!(arr, [10, 20, 30]);
/// ```
pub fn inmap_with<'c, C, X, F, M>(collection: &'c mut C, mut callback: F, this: &X) -> &'c mut C
where
    C: IndexedCollection + ?Sized,
    X: ?Sized,
    F: Callback<X, C, M, Output = C::Item>,
{
    let Ok(()) = map_in_place(collection, F::ARITY, |value, index, collection| {
        Ok::<_, core::convert::Infallible>(callback.call(this, value, index, collection))
    });
    collection
}

/// Fallible [`inmap`]. The first error the callback returns is handed back
/// unchanged; elements before it keep their new values.
///
/// ```
/// use inmap_core::try_inmap;
///
/// let mut arr = vec!["1", "2", "x", "4"];
/// let err = try_inmap(&mut arr, |s: &str| s.parse::<u8>().map(|_| "ok")).unwrap_err();
/// assert_eq!(err.to_string(), "invalid digit found in string");
/// assert_eq!(arr, ["ok", "ok", "x", "4"]);
/// ```
pub fn try_inmap<C, F, M, E>(collection: &mut C, callback: F) -> Result<&mut C, E>
where
    C: IndexedCollection + ?Sized,
    F: Callback<(), C, M, Output = Result<C::Item, E>>,
{
    try_inmap_with(collection, callback, &())
}

/// Fallible [`inmap_with`].
pub fn try_inmap_with<'c, C, X, F, M, E>(
    collection: &'c mut C,
    mut callback: F,
    this: &X,
) -> Result<&'c mut C, E>
where
    C: IndexedCollection + ?Sized,
    X: ?Sized,
    F: Callback<X, C, M, Output = Result<C::Item, E>>,
{
    map_in_place(collection, F::ARITY, |value, index, collection| {
        callback.call(this, value, index, collection)
    })?;
    Ok(collection)
}

fn map_in_place<C, E>(
    collection: &mut C,
    arity: usize,
    mut invoke: impl FnMut(C::Item, usize, &mut C) -> Result<C::Item, E>,
) -> Result<(), E>
where
    C: IndexedCollection + ?Sized,
{
    let len = collection.len();
    tracing::debug!(len, arity, "in-place map");

    for index in 0..len {
        let Some(value) = collection.get(index) else {
            tracing::trace!(index, "nothing to read, skipping");
            continue;
        };

        let out = invoke(value, index, collection)?;

        if collection.is_populated(index) {
            collection.set(index, out);
        } else {
            tracing::trace!(
                index,
                len = collection.len(),
                "slot vanished during callback, discarding result"
            );
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "inmap_test.rs"]
mod inmap_test;
