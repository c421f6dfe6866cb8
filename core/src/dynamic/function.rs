//! Native function values.

use super::Value;
use crate::error::CallbackError;
use alloc::rc::Rc;
use core::fmt;

type NativeFn = dyn Fn(&Value, &[Value]) -> Result<Value, CallbackError>;

/// A callable value with a declared arity.
///
/// The arity plays the role of a declared parameter list: callers that have
/// more arguments to offer pass only the first `arity` of them.
#[derive(Clone)]
pub struct Function {
    name: Rc<str>,
    arity: usize,
    ptr: Rc<NativeFn>,
}

impl Function {
    /// Wraps `f`. It receives the bound receiver (`Value::Undefined` when
    /// there is none) and the argument slice.
    pub fn new<F>(name: &str, arity: usize, f: F) -> Self
    where
        F: Fn(&Value, &[Value]) -> Result<Value, CallbackError> + 'static,
    {
        Self {
            name: Rc::from(name),
            arity,
            ptr: Rc::new(f),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.arity
    }

    pub fn call(&self, this: &Value, args: &[Value]) -> Result<Value, CallbackError> {
        (self.ptr)(this, args)
    }

    /// Identity comparison.
    pub fn ptr_eq(&self, other: &Function) -> bool {
        Rc::ptr_eq(&self.ptr, &other.ptr)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}
