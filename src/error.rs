//! Error taxonomy shared by the typed cell and the dynamic value layer.
//!
//! Misuse of the API (`WrongArgumentType`, `ArityMismatch`, `NotCallable`) is
//! kept apart from sequencing problems (`UnboundCell`, `UnboundBinding`), so a
//! caller can tell "you passed the wrong thing" from "the cell is not ready yet".

use thiserror::Error;

/// Errors raised by cell operations and the closure runtime built on them.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CellError {
    /// An operation received a value of the wrong kind, e.g. a non-cell where a
    /// cell was required.
    #[error("wrong argument type: expected {expected}, found {found}")]
    WrongArgumentType {
        /// Kind the operation required.
        expected: &'static str,
        /// Kind that was actually supplied.
        found: &'static str,
    },

    /// A read was attempted on a cell that has no content.
    #[error("cell is empty: read before it was populated")]
    UnboundCell,

    /// A named late binding was never populated.
    #[error("late binding `{name}` was never populated")]
    UnboundBinding {
        /// Name of the binding left empty.
        name: String,
    },

    /// A closure was called with the wrong number of arguments.
    #[error("`{name}` takes {expected} argument(s), {found} given")]
    ArityMismatch {
        /// Name of the callee.
        name: String,
        /// Declared arity.
        expected: usize,
        /// Arguments supplied.
        found: usize,
    },

    /// A call was attempted on a value that is not a closure.
    #[error("value of kind {found} is not callable")]
    NotCallable {
        /// Kind of the value that was called.
        found: &'static str,
    },
}

impl CellError {
    /// `true` for errors caused by reading a cell (or binding) before it was
    /// populated, as opposed to passing the wrong kind of argument.
    pub fn is_unbound(&self) -> bool {
        matches!(self, CellError::UnboundCell | CellError::UnboundBinding { .. })
    }
}

/// Convenience alias used throughout the crate.
pub type CellResult<T> = Result<T, CellError>;
