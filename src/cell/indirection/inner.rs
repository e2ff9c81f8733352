use core::cell::RefCell;

/// Shared slot behind every holder of one cell. `None` is the Empty state.
pub(in crate::cell) struct Inner<T> {
    pub(in crate::cell) value: RefCell<Option<T>>,
}

impl<T> Inner<T> {
    pub(in crate::cell) const fn new(value: Option<T>) -> Self {
        Self {
            value: RefCell::new(value),
        }
    }
}
