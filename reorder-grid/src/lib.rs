//! A headless drag-to-reorder engine for grids of fixed-size cells.
//!
//! For adapter-level utilities (tweens, long-press detection, an animation driver), see the
//! `reorder-grid-adapter` crate.
//!
//! This crate owns the state that makes drag-to-reorder work: the key ↔ order permutation, the
//! slot geometry of a row-major grid, the nearest-slot search while a drag is active, the shift
//! that ripples intervening items (skipping non-reorderable ones), and the diff that reconciles
//! tracked items with a freshly supplied collection.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - the measured width/height of the grid container
//! - the item collection, plus a stable key for each item
//! - pointer gestures (start/move/release) once a long press has armed a drag
//!
//! and to draw each item at the position the engine reports, tweening when asked to.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod drag;
mod error;
mod geometry;
mod grid;
mod key;
mod options;
mod order;
mod reconcile;
mod registry;
mod types;

#[cfg(test)]
mod tests;

pub use drag::{DragSession, clamp_drag_position};
pub use error::{GridError, GridResult};
pub use geometry::{row_count, slot_position};
pub use grid::DraggableGrid;
pub use key::GridKey;
pub use options::{
    DEFAULT_LIFT_DURATION_MS, DEFAULT_LIFT_SCALE, DEFAULT_LONG_PRESS_DELAY_MS,
    DEFAULT_MOVE_DURATION_MS, DraggingCallback, GetKeyCallback, GridOptions, ItemCallback,
    ItemPredicate, SortedCallback,
};
pub use reconcile::ReconcileSummary;
pub use registry::{AnimatedPosition, ItemRecord};
pub use types::{CellSize, GestureState, GridLayout, Point, RenderItem, Transition};
