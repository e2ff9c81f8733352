//! Minimal closure runtime.
//!
//! A [`Closure`] captures cells, not values. The body reads its captures
//! through [`Frame::captured`] on every call, so a closure can be built over
//! an Empty cell and becomes usable once that cell is populated.

use core::fmt;

use crate::cell::IndirectionCell;
use crate::error::{CellError, CellResult};

use super::value::Value;

type Body = dyn Fn(&Frame<'_>) -> CellResult<Value>;

/// A callable value whose free variables are cells.
pub struct Closure {
    name: String,
    arity: usize,
    captures: Vec<IndirectionCell<Value>>,
    body: Box<Body>,
}

/// Call-time view handed to a closure body.
pub struct Frame<'a> {
    closure: &'a Closure,
    args: &'a [Value],
}

impl<'a> Frame<'a> {
    /// The closure being run.
    pub fn callee(&self) -> &'a Closure {
        self.closure
    }

    /// Positional arguments.
    pub fn args(&self) -> &'a [Value] {
        self.args
    }

    /// Argument `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below the closure's arity.
    pub fn arg(&self, index: usize) -> &'a Value {
        &self.args[index]
    }

    /// Current content of capture `index`, resolved now rather than when the
    /// closure was built.
    ///
    /// # Errors
    ///
    /// [`CellError::UnboundCell`] if that capture is still Empty.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range for the capture list.
    pub fn captured(&self, index: usize) -> CellResult<Value> {
        self.closure.captures[index].get()
    }
}

impl Closure {
    /// Builds a closure named `name` taking `arity` arguments, capturing
    /// `captures` by reference.
    pub fn new<F>(name: impl Into<String>, arity: usize, captures: Vec<IndirectionCell<Value>>, body: F) -> Self
    where
        F: Fn(&Frame<'_>) -> CellResult<Value> + 'static,
    {
        Self {
            name: name.into(),
            arity,
            captures,
            body: Box::new(body),
        }
    }

    /// Name given at construction.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared number of arguments.
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Captured cells, in capture order.
    pub fn captures(&self) -> &[IndirectionCell<Value>] {
        &self.captures
    }

    /// Invokes the closure.
    ///
    /// # Errors
    ///
    /// [`CellError::ArityMismatch`] on a wrong argument count, otherwise
    /// whatever the body returns.
    pub fn call(&self, args: &[Value]) -> CellResult<Value> {
        if args.len() != self.arity {
            debug_event!(closure = %self.name, expected = self.arity, found = args.len(), "arity mismatch");
            return Err(CellError::ArityMismatch {
                name: self.name.clone(),
                expected: self.arity,
                found: args.len(),
            });
        }
        trace_event!(closure = %self.name, "call");
        (self.body)(&Frame { closure: self, args })
    }
}

impl fmt::Debug for Closure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Closure")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .field("captures", &self.captures)
            .finish_non_exhaustive()
    }
}

/// Calls `callee` if it is a closure.
///
/// # Errors
///
/// [`CellError::NotCallable`] for non-closures, otherwise as [`Closure::call`].
pub fn call_value(callee: &Value, args: &[Value]) -> CellResult<Value> {
    callee.as_closure()?.call(args)
}
