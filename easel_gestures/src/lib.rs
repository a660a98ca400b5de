// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=easel_gestures --heading-base-level=0

//! Easel Gestures: the input state machine driving the easel viewport.
//!
//! This crate interprets normalized pointer/wheel/pinch samples as pan and
//! zoom gestures on an [`easel_view2d::ViewTransform`]. It provides:
//!
//! - [`GestureController`]: owns the viewport transform and a
//!   [`DragState`], exposes the canonical entry points
//!   (`on_pointer_down`/`move`/`up`/`leave`, `on_scroll`, `on_pinch`), and
//!   enforces the zoom bounds and focal-point semantics.
//! - [`InputEvent`]: the normalized input vocabulary platform adapters
//!   translate their native mouse/touch/wheel events into, so the state
//!   machine never sees a platform event shape.
//! - [`ViewEvent`]: state-change notifications returned to the host, as a
//!   pan event carrying the new absolute origin or a zoom event carrying
//!   the new bounded scale.
//!
//! ## Gesture semantics
//!
//! - **Drag to pan**: pointer-down anchors the drag; each move pans by the
//!   delta since the anchor and re-anchors. Zero-delta moves report
//!   nothing. Pointer-up/leave end the drag unconditionally; a move that
//!   arrives afterwards only updates the tracked pointer position.
//! - **Wheel to zoom**: a positive delta zooms in by the configured step
//!   (default ×1.1), a negative delta zooms out by the reciprocal, about
//!   the pointer position (falling back to the last known pointer
//!   position, then the surface center).
//! - **Pinch to zoom**: each update multiplies the current scale by the
//!   reported factor about the pinch center.
//! - **Bounds**: every zoom clamps `scale × multiplier` into the
//!   configured range first and feeds the applied value into the
//!   focal-point correction, so the point under the cursor stays put even
//!   when a bound truncates the step. A request already at a bound still
//!   completes (and still reports the bounded scale).
//!
//! ## Minimal example
//!
//! ```rust
//! use easel_gestures::{GestureConfig, GestureController, ViewEvent};
//! use easel_surface_ref::RecordingSurface;
//! use kurbo::Point;
//!
//! let surface = RecordingSurface::new(800.0, 600.0);
//! let mut gestures = GestureController::new(surface, GestureConfig::default())?;
//!
//! // Drag from (10, 10) to (30, 25): the viewport pans by (20, 15).
//! gestures.on_pointer_down(Point::new(10.0, 10.0));
//! let event = gestures.on_pointer_move(Point::new(30.0, 25.0));
//! assert_eq!(
//!     event,
//!     Some(ViewEvent::PanMoved {
//!         origin: Point::new(20.0, 15.0),
//!     })
//! );
//! gestures.on_pointer_up();
//!
//! // One wheel tick in: scale 1.0 → 1.1, anchored under the pointer.
//! let event = gestures.on_scroll(1.0, Some(Point::new(100.0, 100.0)));
//! assert_eq!(event, Some(ViewEvent::Zoomed { scale: 1.1 }));
//! # Ok::<(), easel_gestures::GestureError>(())
//! ```
//!
//! ## Design notes
//!
//! - The controller is single-threaded and synchronous: every call runs to
//!   completion before the next input sample is processed, and surface
//!   side effects fire in invocation order.
//! - Notifications are plain return values; how a host fans them out is
//!   out of scope here.
//! - Malformed input (NaN or infinite coordinates, deltas, factors) is
//!   ignored rather than allowed to corrupt the transform.
//!
//! This crate is `no_std`.

#![no_std]

mod controller;
mod drag;
mod events;

pub use controller::{GestureConfig, GestureController, GestureError};
pub use drag::DragState;
pub use events::{InputEvent, ViewEvent};
