//! Cell operations as the serialization engine calls them.
//!
//! These take and return [`Value`]s, so passing something that is not a cell
//! is a runtime error rather than a type error.

use crate::cell::IndirectionCell;
use crate::error::CellResult;

use super::value::Value;

/// Allocates a new cell, Populated with `initial` if given, Empty otherwise.
pub fn create_cell(initial: Option<Value>) -> Value {
    let cell = IndirectionCell::from_option(initial);
    trace_event!(cell = %cell.id(), populated = cell.is_populated(), "create cell");
    Value::Cell(cell)
}

/// Returns the current content of `cell`.
///
/// # Errors
///
/// - [`WrongArgumentType`](crate::CellError::WrongArgumentType) if `cell` is
///   not a cell.
/// - [`UnboundCell`](crate::CellError::UnboundCell) if the cell is Empty.
pub fn get_cell_value(cell: &Value) -> CellResult<Value> {
    let cell = cell.as_cell().map_err(|err| {
        debug_event!(error = %err, "get on non-cell");
        err
    })?;
    cell.get().map_err(|err| {
        debug_event!(cell = %cell.id(), "read of empty cell");
        err
    })
}

/// Installs `value` in `cell`; every holder sees it on its next read.
///
/// # Errors
///
/// [`WrongArgumentType`](crate::CellError::WrongArgumentType) if `cell` is not
/// a cell. Nothing is modified in that case.
pub fn set_cell_value(cell: &Value, value: Value) -> CellResult<()> {
    let cell = cell.as_cell().map_err(|err| {
        debug_event!(error = %err, "set on non-cell");
        err
    })?;
    trace_event!(cell = %cell.id(), kind = value.type_name(), "populate cell");
    cell.set(value);
    Ok(())
}

/// `true` if `value` is a cell.
pub fn is_cell(value: &Value) -> bool {
    matches!(value, Value::Cell(_))
}
