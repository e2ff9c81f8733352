//! Two-pass reconstruction of mutually-referring definitions.
//!
//! 1. [`declare`](LateBinding::declare) an Empty cell per name.
//! 2. Build closures over those cells; they may refer to any declared name,
//!    themselves included.
//! 3. [`bind`](LateBinding::bind) each name to its finished value.
//!
//! [`finish`](LateBinding::finish) checks that nothing was left Empty.

use std::collections::BTreeMap;

use crate::cell::IndirectionCell;
use crate::error::{CellError, CellResult};

use super::value::Value;

/// Named late-bound cells for one reconstruction pass.
#[derive(Debug, Default)]
pub struct LateBinding {
    cells: BTreeMap<String, IndirectionCell<Value>>,
}

impl LateBinding {
    /// An empty set of bindings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cell for `name`, creating it Empty on first use.
    ///
    /// Repeated calls hand out holders of the same cell.
    pub fn declare(&mut self, name: &str) -> IndirectionCell<Value> {
        if let Some(cell) = self.cells.get(name) {
            return cell.clone();
        }
        let cell = IndirectionCell::empty();
        trace_event!(binding = name, cell = %cell.id(), "declare");
        self.cells.insert(name.to_owned(), cell.clone());
        cell
    }

    /// The cell for `name`, if declared.
    pub fn cell(&self, name: &str) -> Option<&IndirectionCell<Value>> {
        self.cells.get(name)
    }

    /// Populates `name`, declaring it if needed. Rebinding replaces the value
    /// for every closure that captured the cell.
    pub fn bind(&mut self, name: &str, value: Value) {
        trace_event!(binding = name, kind = value.type_name(), "bind");
        self.declare(name).set(value);
    }

    /// Current value of `name`.
    ///
    /// # Errors
    ///
    /// [`CellError::UnboundBinding`] if `name` is undeclared or still Empty.
    pub fn resolve(&self, name: &str) -> CellResult<Value> {
        self.cells
            .get(name)
            .and_then(|cell| cell.get().ok())
            .ok_or_else(|| CellError::UnboundBinding { name: name.to_owned() })
    }

    /// Names declared but not yet bound, in name order.
    pub fn unbound(&self) -> Vec<&str> {
        self.cells
            .iter()
            .filter(|(_, cell)| !cell.is_populated())
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Number of declared names.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// `true` if nothing was declared.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Resolves every binding.
    ///
    /// # Errors
    ///
    /// [`CellError::UnboundBinding`] naming the first (in name order) binding
    /// still Empty.
    pub fn finish(self) -> CellResult<BTreeMap<String, Value>> {
        let mut resolved = BTreeMap::new();
        for (name, cell) in self.cells {
            match cell.get() {
                Ok(value) => {
                    resolved.insert(name, value);
                }
                Err(_) => {
                    debug_event!(binding = %name, "finish with unbound name");
                    return Err(CellError::UnboundBinding { name });
                }
            }
        }
        Ok(resolved)
    }
}
