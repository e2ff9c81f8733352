//! # `cellwork` - Late-Binding Cells
//!
//! A mutable indirection cell that lets a closure be constructed before the
//! value it captures is known. This is the primitive a function pickler needs
//! to rebuild self-referential and mutually-recursive definitions: the cycle
//! cannot be closed in one pass, so the closure captures an Empty cell and the
//! cell is populated once the referent exists.
//!
//! ## Guarantees
//!
//! - **Shared by identity**: cloning a cell adds a holder; a `set` through any
//!   holder is observed by all of them.
//! - **No silent defaults**: reading an Empty cell is
//!   [`CellError::UnboundCell`], never a default or `None`.
//! - **Exact reads**: `get` returns the handle last installed, not a copy of
//!   what it points at.
//! - **Single-threaded**: handles are `!Send + !Sync`.
//!
//! ## Layers
//!
//! 1. **Typed cell** ([`IndirectionCell<T>`], [`WeakCell<T>`]): the primitive.
//! 2. **Dynamic values** ([`Value`], [`create_cell`], [`get_cell_value`],
//!    [`set_cell_value`]): the surface the serialization engine calls, where a
//!    non-cell argument is reported as
//!    [`CellError::WrongArgumentType`].
//! 3. **Closure runtime** ([`Closure`], [`LateBinding`]): builds callables
//!    that capture cells and resolve them at call time.
//!
//! ## Example
//!
//! ```rust
//! use cellwork::{Closure, IndirectionCell, Value};
//!
//! // A countdown that calls itself through its own cell.
//! let slot = IndirectionCell::empty();
//! let countdown = Closure::new("countdown", 1, vec![slot.clone()], |frame| {
//!     let n = frame.arg(0).as_int()?;
//!     if n == 0 {
//!         return Ok(Value::Int(0));
//!     }
//!     let me = frame.captured(0)?;
//!     cellwork::call_value(&me, &[Value::Int(n - 1)])
//! });
//!
//! let countdown = Value::from(countdown);
//! slot.set(countdown.clone());
//!
//! assert!(slot.get().unwrap().is(&countdown));
//! assert_eq!(cellwork::call_value(&countdown, &[Value::Int(5)]).unwrap().as_int(), Ok(0));
//! # slot.take();
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

#[macro_use]
mod trace;

pub mod cell;
pub mod error;
pub mod runtime;

pub use cell::{CellId, IndirectionCell, WeakCell};
pub use error::{CellError, CellResult};
pub use runtime::{
    call_value, create_cell, get_cell_value, is_cell, set_cell_value, Closure, Frame, LateBinding, Value,
    CELL_TYPE_NAME,
};

// Compile-time assertions for handle layout
const _: () = {
    use core::mem;

    // A holder is a single pointer.
    assert!(mem::size_of::<IndirectionCell<u64>>() == mem::size_of::<usize>());
    assert!(mem::size_of::<WeakCell<u64>>() == mem::size_of::<usize>());

    // Niche in the handle keeps `Option<IndirectionCell<_>>` pointer-sized.
    assert!(mem::size_of::<Option<IndirectionCell<u64>>>() == mem::size_of::<usize>());
};
