//! Dynamic layer used by the serialization engine.
//!
//! - `value` is the host value model; cells are one kind of value.
//! - `ops` exposes create/get/set over values with kind checking.
//! - `closure` builds callables that capture cells by reference.
//! - `binding` drives the two-pass reconstruction of recursive definitions.

pub mod binding;
pub mod closure;
pub mod ops;
pub mod value;

pub use binding::LateBinding;
pub use closure::{call_value, Closure, Frame};
pub use ops::{create_cell, get_cell_value, is_cell, set_cell_value};
pub use value::{Value, CELL_TYPE_NAME};
