//! `IndirectionCell` — a shared, late-bound single-slot cell.
//!
//! A cell is a reference-counted slot that is either *Empty* or *Populated*.
//! Cloning an `IndirectionCell` does not copy the content: it creates another
//! holder of the same slot, so a `set` through any holder is seen by every
//! other holder on its next read.
//!
//! ## State machine
//!
//! - `Empty --set--> Populated`
//! - `Populated --set--> Populated` (last write wins)
//! - `get` never changes state; `get` on `Empty` fails with
//!   [`CellError::UnboundCell`].
//!
//! ## Identity
//!
//! Equality and hashing use allocation identity. Two cells holding equal values
//! are still different cells; two holders of one cell are always equal.
//!
//! ## Threading
//!
//! The handle is `!Send + !Sync`. Sharing across threads is rejected at compile
//! time rather than guarded at runtime.

pub(in crate::cell) mod inner;

use core::{
    fmt,
    hash::{Hash, Hasher},
};
use std::rc::Rc;

use crate::error::{CellError, CellResult};
pub(in crate::cell) use inner::Inner;

use super::weak::WeakCell;

/// Identity key of a cell, stable for as long as any strong holder is alive.
///
/// An id may be reused by a new allocation once every holder of the original
/// cell has been dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellId(usize);

impl CellId {
    /// Raw address-derived value, useful as a memo key in encoders.
    #[inline(always)]
    pub fn as_usize(self) -> usize {
        self.0
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:x}", self.0)
    }
}

/// A mutable indirection cell shared by identity among its holders.
///
/// # Examples
///
/// ```
/// use cellwork::IndirectionCell;
///
/// let cell: IndirectionCell<u32> = IndirectionCell::empty();
/// let holder = cell.clone();
///
/// assert!(holder.get().is_err());
/// cell.set(7);
/// assert_eq!(holder.get(), Ok(7));
/// ```
pub struct IndirectionCell<T> {
    slot: Rc<Inner<T>>,
}

impl<T> IndirectionCell<T> {
    /// Creates a cell populated with `value`.
    #[inline]
    pub fn new(value: T) -> Self {
        Self::from_option(Some(value))
    }

    /// Creates an Empty cell.
    #[inline]
    pub fn empty() -> Self {
        Self::from_option(None)
    }

    /// Creates a cell that is Populated for `Some` and Empty for `None`.
    #[inline]
    pub fn from_option(value: Option<T>) -> Self {
        Self {
            slot: Rc::new(Inner::new(value)),
        }
    }

    pub(in crate::cell) fn from_slot(slot: Rc<Inner<T>>) -> Self {
        Self { slot }
    }

    /// Returns `true` if the cell currently holds a value.
    #[inline]
    pub fn is_populated(&self) -> bool {
        self.slot.value.borrow().is_some()
    }

    /// Returns a clone of the current content.
    ///
    /// For handle types (`Rc`, `IndirectionCell`, ...) the clone is the same
    /// reference that was installed, not a deep copy.
    ///
    /// # Errors
    ///
    /// [`CellError::UnboundCell`] if the cell is Empty. The state is unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `T::clone` mutates this same cell.
    #[inline]
    pub fn get(&self) -> CellResult<T>
    where
        T: Clone,
    {
        self.with(T::clone)
    }

    /// Runs `f` on a borrow of the current content.
    ///
    /// # Errors
    ///
    /// [`CellError::UnboundCell`] if the cell is Empty; `f` is not called.
    ///
    /// # Panics
    ///
    /// Panics if `f` calls [`set`](Self::set), [`replace`](Self::replace) or
    /// [`take`](Self::take) on the same cell.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> CellResult<R> {
        let value = self.slot.value.borrow();
        match value.as_ref() {
            Some(value) => Ok(f(value)),
            None => Err(CellError::UnboundCell),
        }
    }

    /// Installs `value`, releasing any previous content.
    ///
    /// Every holder of this cell observes `value` on its next read.
    ///
    /// # Panics
    ///
    /// Panics if the content is currently borrowed through [`with`](Self::with).
    #[inline]
    pub fn set(&self, value: T) {
        // the old content is dropped after the slot borrow is released, so its
        // destructor may touch this cell again
        drop(self.replace(value));
    }

    /// Installs `value` and returns the previous content, if any.
    ///
    /// # Panics
    ///
    /// Panics if the content is currently borrowed through [`with`](Self::with).
    #[inline]
    pub fn replace(&self, value: T) -> Option<T> {
        self.slot.value.replace(Some(value))
    }

    /// Moves the content out, leaving the cell Empty.
    ///
    /// # Panics
    ///
    /// Panics if the content is currently borrowed through [`with`](Self::with).
    #[inline]
    pub fn take(&self) -> Option<T> {
        self.slot.value.take()
    }

    /// Returns `true` if both handles refer to the same cell.
    #[inline(always)]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.slot, &other.slot)
    }

    /// Identity key of this cell.
    #[inline(always)]
    pub fn id(&self) -> CellId {
        CellId(Rc::as_ptr(&self.slot).cast::<()>() as usize)
    }

    /// Number of strong holders of this cell, including `self`.
    #[inline]
    pub fn holders(&self) -> usize {
        Rc::strong_count(&self.slot)
    }

    /// Creates a non-owning holder that does not keep the content alive.
    #[inline]
    pub fn downgrade(&self) -> WeakCell<T> {
        WeakCell::from_weak(Rc::downgrade(&self.slot))
    }
}

impl<T> Clone for IndirectionCell<T> {
    /// Adds a holder of the same cell; the content is not cloned.
    #[inline]
    fn clone(&self) -> Self {
        Self {
            slot: Rc::clone(&self.slot),
        }
    }
}

impl<T> Default for IndirectionCell<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<T> for IndirectionCell<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T> PartialEq for IndirectionCell<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl<T> Eq for IndirectionCell<T> {}

impl<T> Hash for IndirectionCell<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl<T> fmt::Debug for IndirectionCell<T> {
    // Content is not printed: a populated cell commonly holds a closure that
    // captures the cell itself.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.slot.value.try_borrow() {
            Ok(value) if value.is_some() => "populated",
            Ok(_) => "empty",
            Err(_) => "<mutating>",
        };
        f.debug_struct("IndirectionCell")
            .field("id", &self.id())
            .field("state", &state)
            .finish()
    }
}
