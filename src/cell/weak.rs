//! `WeakCell` — a non-owning holder of an [`IndirectionCell`].
//!
//! A closure that captures its own cell forms an ownership cycle
//! (cell → closure → cell) under reference counting. Hosts that want the pair
//! to be released without an explicit `take` capture a `WeakCell` instead and
//! upgrade it at call time.

use core::fmt;
use std::rc::Weak;

use super::indirection::{IndirectionCell, Inner};

/// Weak handle to a cell; does not keep the cell or its content alive.
pub struct WeakCell<T> {
    slot: Weak<Inner<T>>,
}

impl<T> WeakCell<T> {
    /// A weak handle that never upgrades.
    pub fn new() -> Self {
        Self { slot: Weak::new() }
    }

    pub(super) fn from_weak(slot: Weak<Inner<T>>) -> Self {
        Self { slot }
    }

    /// Returns a strong holder if the cell is still alive.
    #[inline]
    pub fn upgrade(&self) -> Option<IndirectionCell<T>> {
        self.slot.upgrade().map(IndirectionCell::from_slot)
    }

    /// `true` if both handles point at the same cell allocation.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.slot.ptr_eq(&other.slot)
    }

    /// `true` if this handle refers to `cell`.
    #[inline]
    pub fn refers_to(&self, cell: &IndirectionCell<T>) -> bool {
        self.ptr_eq(&cell.downgrade())
    }
}

impl<T> Clone for WeakCell<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Weak::clone(&self.slot),
        }
    }
}

impl<T> Default for WeakCell<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for WeakCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let alive = self.slot.strong_count() > 0;
        f.debug_struct("WeakCell").field("alive", &alive).finish()
    }
}
