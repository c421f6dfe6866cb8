//! Tests for arity-based callback dispatch

use super::Callback;
use alloc::{vec, vec::Vec};
use pretty_assertions::assert_eq;

fn arity_of<X, C, M, F>(_f: &F) -> usize
where
    X: ?Sized,
    C: crate::IndexedCollection + ?Sized,
    F: Callback<X, C, M>,
{
    <F as Callback<X, C, M>>::ARITY
}

#[test]
fn test_free_arities() {
    assert_eq!(arity_of::<(), Vec<i32>, _, _>(&|| 0), 0);
    assert_eq!(arity_of::<(), Vec<i32>, _, _>(&|v: i32| v), 1);
    assert_eq!(arity_of::<(), Vec<i32>, _, _>(&|v: i32, _i: usize| v), 2);
    assert_eq!(
        arity_of::<(), Vec<i32>, _, _>(&|v: i32, _i: usize, _c: &mut Vec<i32>| v),
        3
    );
}

#[test]
fn test_bound_arities() {
    assert_eq!(arity_of::<i32, Vec<i32>, _, _>(&|this: &i32| *this), 0);
    assert_eq!(arity_of::<i32, Vec<i32>, _, _>(&|this: &i32, v: i32| *this + v), 1);
    assert_eq!(
        arity_of::<i32, Vec<i32>, _, _>(&|this: &i32, v: i32, _i: usize| *this + v),
        2
    );
    assert_eq!(
        arity_of::<i32, Vec<i32>, _, _>(&|this: &i32, v: i32, _i: usize, _c: &mut Vec<i32>| {
            *this + v
        }),
        3
    );
}

#[test]
fn test_call_passes_only_declared_arguments() {
    let mut c = vec![5, 6];

    let mut unary = |v: i32| v * 2;
    assert_eq!(Callback::<(), Vec<i32>, _>::call(&mut unary, &(), 5, 0, &mut c), 10);

    let mut binary = |v: i32, i: usize| v + i as i32;
    assert_eq!(Callback::<(), Vec<i32>, _>::call(&mut binary, &(), 6, 1, &mut c), 7);

    let mut ternary = |v: i32, i: usize, c: &mut Vec<i32>| v + i as i32 + c.len() as i32;
    assert_eq!(Callback::<(), Vec<i32>, _>::call(&mut ternary, &(), 6, 1, &mut c), 9);

    let mut bound = |this: &i32, v: i32| this * v;
    assert_eq!(Callback::<i32, Vec<i32>, _>::call(&mut bound, &3, 6, 1, &mut c), 18);
}

#[test]
fn test_nullary_state_advances() {
    let mut calls = 0;
    let mut counter = || {
        calls += 1;
        calls
    };
    let mut c = vec![0, 0, 0];
    for i in 0..3 {
        let _ = Callback::<(), Vec<i32>, _>::call(&mut counter, &(), 0, i, &mut c);
    }
    assert_eq!(calls, 3);
}
