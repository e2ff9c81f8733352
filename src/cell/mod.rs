//! Late-binding cell family.
//!
//! - `indirection` is the shared single-slot cell itself.
//! - `weak` holds a cell without keeping it alive.
//! - `encode` carries the serde hooks.

pub mod encode;
pub mod indirection;
pub mod weak;

pub use indirection::{CellId, IndirectionCell};
pub use weak::WeakCell;
