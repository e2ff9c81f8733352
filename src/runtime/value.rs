//! Dynamic host values.
//!
//! The serialization engine sees every object as a `Value`; cells are one kind
//! among several, which is what makes `WrongArgumentType` reachable.

use core::fmt;
use std::rc::Rc;

use crate::cell::IndirectionCell;
use crate::error::{CellError, CellResult};

use super::closure::Closure;

/// Kind name reported for cells.
pub const CELL_TYPE_NAME: &str = "cell";

/// A host value. Heap kinds are reference-counted handles.
#[derive(Clone)]
pub enum Value {
    /// The empty value.
    Unit,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A float.
    Float(f64),
    /// An immutable string.
    Str(Rc<str>),
    /// A callable built by the closure runtime.
    Closure(Rc<Closure>),
    /// A late-binding cell.
    Cell(IndirectionCell<Value>),
}

impl Value {
    /// Name of this value's kind.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Unit => "unit",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::Closure(_) => "closure",
            Value::Cell(_) => CELL_TYPE_NAME,
        }
    }

    /// Reference identity: heap kinds compare by allocation, immediates by
    /// value (floats bitwise).
    pub fn is(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Unit, Value::Unit) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
            (Value::Str(a), Value::Str(b)) => Rc::ptr_eq(a, b),
            (Value::Closure(a), Value::Closure(b)) => Rc::ptr_eq(a, b),
            (Value::Cell(a), Value::Cell(b)) => a.ptr_eq(b),
            _ => false,
        }
    }

    /// Borrows the cell inside this value.
    ///
    /// # Errors
    ///
    /// [`CellError::WrongArgumentType`] if this is not a cell.
    pub fn as_cell(&self) -> CellResult<&IndirectionCell<Value>> {
        match self {
            Value::Cell(cell) => Ok(cell),
            other => Err(CellError::WrongArgumentType {
                expected: CELL_TYPE_NAME,
                found: other.type_name(),
            }),
        }
    }

    /// Borrows the closure inside this value.
    ///
    /// # Errors
    ///
    /// [`CellError::NotCallable`] if this is not a closure.
    pub fn as_closure(&self) -> CellResult<&Rc<Closure>> {
        match self {
            Value::Closure(closure) => Ok(closure),
            other => Err(CellError::NotCallable {
                found: other.type_name(),
            }),
        }
    }

    /// Reads an integer.
    ///
    /// # Errors
    ///
    /// [`CellError::WrongArgumentType`] if this is not an int.
    pub fn as_int(&self) -> CellResult<i64> {
        match self {
            Value::Int(n) => Ok(*n),
            other => Err(CellError::WrongArgumentType {
                expected: "int",
                found: other.type_name(),
            }),
        }
    }

    /// Reads a boolean.
    ///
    /// # Errors
    ///
    /// [`CellError::WrongArgumentType`] if this is not a bool.
    pub fn as_bool(&self) -> CellResult<bool> {
        match self {
            Value::Bool(b) => Ok(*b),
            other => Err(CellError::WrongArgumentType {
                expected: "bool",
                found: other.type_name(),
            }),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Unit => f.write_str("()"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x:?}"),
            Value::Str(s) => write!(f, "{s:?}"),
            Value::Closure(closure) => write!(f, "<closure {}>", closure.name()),
            Value::Cell(cell) => fmt::Debug::fmt(cell, f),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(Rc::from(s))
    }
}

impl From<Closure> for Value {
    fn from(closure: Closure) -> Self {
        Value::Closure(Rc::new(closure))
    }
}

impl From<IndirectionCell<Value>> for Value {
    fn from(cell: IndirectionCell<Value>) -> Self {
        Value::Cell(cell)
    }
}
