//! Adapter utilities for the `reorder-grid` crate.
//!
//! The `reorder-grid` crate is UI-agnostic and focuses on ordering, geometry and drag state. It
//! describes motion as position commands (jump here, or tween there over N ms). This crate
//! provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - Tweens with a few easing curves, sampled against an adapter clock
//! - Long-press detection that turns a held press into a drag
//! - A `Controller` that plays back the grid's position commands and the lift effect frame by
//!   frame
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod controller;
mod key;
mod press;
mod tween;


pub use controller::{Controller, FrameItem};
pub use press::{PressEnd, PressTracker};
pub use tween::{Easing, PointTween, Tween};
