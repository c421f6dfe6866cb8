//! The facade crate exposes the same API as `inmap-core`.

use inmap::dynamic::{Array, Function, Value};
use inmap::{SparseVec, inmap, inmap_with, try_inmap_with};
use pretty_assertions::assert_eq;

#[test]
fn test_typed_entry_points() {
    let mut v = vec![2, 4, 6];
    inmap(&mut v, |x: i32| x / 2);
    assert_eq!(v, vec![1, 2, 3]);

    inmap_with(&mut v, |k: &i32, x: i32, i: usize| x * k + i as i32, &10);
    assert_eq!(v, vec![10, 21, 32]);

    let res: Result<_, &str> = try_inmap_with(
        &mut v,
        |max: &i32, x: i32| if x <= *max { Ok(0) } else { Err("too big") },
        &20,
    )
    .map(|out| out.len());
    assert_eq!(res, Err("too big"));
    assert_eq!(v, vec![0, 21, 32]);
}

#[test]
fn test_sparse_vec_is_reexported() {
    let mut s = SparseVec::from(vec![1, 2]);
    s.push_hole();
    inmap(&mut s, |x: i32| x + 1);
    assert_eq!(s.iter().collect::<Vec<_>>(), vec![Some(&2), Some(&3), None]);
}

#[test]
fn test_dynamic_entry_point() {
    let arr = Array::from_values([Value::Bool(true), Value::Bool(false)]);
    let not = Function::new("not", 1, |_this, args| {
        Ok(Value::Bool(!args[0].as_bool().ok_or("expected bool")?))
    });

    let out = inmap::dynamic::inmap(&arr.clone().into(), &not.into(), None).unwrap();

    assert_eq!(out, Value::Array(arr.clone()));
    assert_eq!(
        arr.to_vec(),
        vec![Some(Value::Bool(false)), Some(Value::Bool(true))]
    );
}
