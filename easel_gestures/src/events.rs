// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

/// A normalized input sample.
///
/// Platform adapters translate their native pointer/touch/wheel events
/// into this vocabulary before handing them to
/// [`GestureController::handle`](crate::GestureController::handle), which
/// keeps the gesture state machine platform-agnostic. Positions are pixel
/// coordinates relative to the surface viewport; scroll deltas and pinch
/// factors are already normalized by the adapter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Primary pointer (mouse button or touch) went down.
    PointerDown {
        /// Pointer position in surface pixels.
        pos: Point,
    },
    /// Pointer moved.
    PointerMove {
        /// Pointer position in surface pixels.
        pos: Point,
    },
    /// Primary pointer was released.
    PointerUp,
    /// Pointer left the surface.
    PointerLeave,
    /// Wheel/scroll input.
    Scroll {
        /// Signed scroll amount; positive zooms in, negative zooms out,
        /// zero is ignored. Only the sign is interpreted.
        delta: f64,
        /// Pointer position at scroll time, if the platform reports one.
        /// When absent the last known pointer position is used.
        pos: Option<Point>,
    },
    /// One pinch gesture update.
    Pinch {
        /// Multiplicative scale factor for this update.
        factor: f64,
        /// Pinch center in surface pixels.
        center: Point,
    },
}

/// A viewport state change reported back to the host.
///
/// Produced only by completed pan steps and explicit zoom requests; input
/// samples with no effect (zero-delta moves, zero scroll, pointer-up while
/// idle) produce nothing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewEvent {
    /// A pan step completed.
    PanMoved {
        /// New absolute origin in surface pixels.
        origin: Point,
    },
    /// A zoom request completed.
    Zoomed {
        /// New bounded scale value. Reported even when clamping left the
        /// scale unchanged.
        scale: f64,
    },
}
