//! Runtime-typed in-place mapping.
//!
//! Here the collection and the transform are plain [`Value`]s, so their kinds
//! are checked when [`inmap`] is called rather than by the compiler. Arrays
//! are shared handles: the value returned by `inmap` is the very array that
//! was passed in.
//!
//! ```
//! use inmap_core::dynamic::{self, Array, Function, Value};
//!
//! let arr = Array::from_values([1, 2, 3, 4].map(Value::Int));
//! let scale = Function::new("scale", 2, |_this, args| {
//!     let value = args[0].as_int().unwrap_or(0);
//!     let index = args[1].as_int().unwrap_or(0);
//!     Ok(Value::Int(value * index))
//! });
//!
//! let input = Value::Array(arr.clone());
//! let out = dynamic::inmap(&input, &Value::Function(scale), None).unwrap();
//! assert_eq!(out, input);
//! assert_eq!(arr.get(3), Some(Value::Int(12)));
//! ```

mod array;
mod function;
mod value;

pub use array::Array;
pub use function::Function;
pub use value::Value;

use crate::error::Error;

/// Calls `transform` for each index of `collection` below its current
/// length and writes the results back in place.
///
/// `transform` receives the first `arity` of (value, index, array), with
/// `this` (or `Value::Undefined`) as its receiver. Holes and indices the
/// array no longer reaches are read as `Value::Undefined`, and their results
/// are discarded.
pub fn inmap(collection: &Value, transform: &Value, this: Option<&Value>) -> Result<Value, Error> {
    let array = collection.as_array().ok_or(Error::InvalidArgument {
        argument: "collection",
        expected: "array",
        found: collection.type_name(),
    })?;
    let function = transform.as_function().ok_or(Error::InvalidArgument {
        argument: "transform",
        expected: "function",
        found: transform.type_name(),
    })?;
    let this = this.cloned().unwrap_or_default();
    let argc = function.arity().min(3);

    let mut handle = array.clone();
    crate::try_inmap_with(
        &mut handle,
        |this: &Value, value: Value, index: usize, array: &mut Array| {
            let args = [value, Value::Int(index as i64), Value::Array(array.clone())];
            function
                .call(this, &args[..argc])
                .map_err(Error::Callback)
        },
        &this,
    )?;

    Ok(Value::Array(handle))
}
