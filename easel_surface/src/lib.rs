// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=easel_surface --heading-base-level=0

//! Easel Surface: the backend-agnostic draw-surface capability.
//!
//! This crate defines the small contract the easel viewport core requires
//! from a rendering backend: a fixed-size pixel surface whose internal
//! coordinate frame can be translated, cleared, and drawn into with a
//! handful of primitives. It sits between the headless viewport/gesture
//! crates and concrete backends (an HTML canvas, a GPU renderer, a test
//! recorder, etc.).
//!
//! # Core concepts
//!
//! - **[`DrawSurface`]**: the capability trait. The viewport core calls
//!   [`translate`](DrawSurface::translate) and
//!   [`clear_region`](DrawSurface::clear_region) itself; the drawing
//!   primitives take coordinates the caller has already multiplied by the
//!   viewport scale.
//! - **[`SurfaceOp`]**: a plain-old-data vocabulary mirroring every trait
//!   method. Recorders log it, tests assert on it, and
//!   [`DrawSurface::apply`] replays it.
//!
//! The surface's translation is **cumulative and order-dependent**: each
//! `translate` call shifts the frame relative to where the previous calls
//! left it, so operations must be applied in the order they were issued.
//!
//! Styling uses [`peniko::Brush`], shared by many backends in this
//! ecosystem; a backend that only supports solid colors can match on
//! [`Brush::Solid`] and ignore the rest.
//!
//! # Example
//!
//! A minimal surface that counts draw calls:
//!
//! ```
//! use easel_surface::{DrawSurface, SurfaceOp};
//! use peniko::Brush;
//!
//! struct Counter {
//!     draws: u32,
//! }
//!
//! impl DrawSurface for Counter {
//!     fn width(&self) -> f64 {
//!         800.0
//!     }
//!     fn height(&self) -> f64 {
//!         600.0
//!     }
//!     fn translate(&mut self, _dx: f64, _dy: f64) {}
//!     fn clear_region(&mut self, _x: f64, _y: f64, _width: f64, _height: f64) {}
//!     fn fill_rect(&mut self, _x: f64, _y: f64, _width: f64, _height: f64) {
//!         self.draws += 1;
//!     }
//!     fn stroke_line(&mut self, _x0: f64, _y0: f64, _x1: f64, _y1: f64) {
//!         self.draws += 1;
//!     }
//!     fn stroke_circle(&mut self, _cx: f64, _cy: f64, _radius: f64) {
//!         self.draws += 1;
//!     }
//!     fn fill_circle(&mut self, _cx: f64, _cy: f64, _radius: f64) {
//!         self.draws += 1;
//!     }
//!     fn set_fill_brush(&mut self, _brush: Brush) {}
//!     fn set_stroke_brush(&mut self, _brush: Brush) {}
//!     fn set_stroke_width(&mut self, _width: f64) {}
//! }
//!
//! let mut surface = Counter { draws: 0 };
//! surface.apply(SurfaceOp::FillCircle {
//!     cx: 10.0,
//!     cy: 10.0,
//!     radius: 4.0,
//! });
//! assert_eq!(surface.draws, 1);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use peniko::Brush;

/// A fixed-size pixel surface the viewport core can command.
///
/// Implementations own a drawing target with a mutable internal coordinate
/// frame. The viewport core keeps that frame in lockstep with its pan
/// offset by issuing one [`translate`](Self::translate) per origin change,
/// so implementations must apply translations immediately and cumulatively.
///
/// Drawing primitives receive coordinates **already expressed in the
/// surface's current frame**; callers are responsible for multiplying
/// logical coordinates by the viewport scale first.
pub trait DrawSurface {
    /// Width of the surface viewport in pixels.
    fn width(&self) -> f64;

    /// Height of the surface viewport in pixels.
    fn height(&self) -> f64;

    /// Shifts the surface's internal coordinate frame by `(dx, dy)` pixels.
    ///
    /// Translations accumulate; the effective offset is the sum of every
    /// delta received so far.
    fn translate(&mut self, dx: f64, dy: f64);

    /// Clears the axis-aligned region with origin `(x, y)` and the given
    /// size, expressed in the current (translated) frame.
    fn clear_region(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Fills the axis-aligned rectangle with the current fill brush.
    ///
    /// Single-pixel rectangles are the conventional representation of
    /// plotted points.
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Strokes a line segment from `(x0, y0)` to `(x1, y1)` with the
    /// current stroke brush and width.
    fn stroke_line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64);

    /// Strokes the outline of a circle with the current stroke brush and
    /// width.
    fn stroke_circle(&mut self, cx: f64, cy: f64, radius: f64);

    /// Fills a circle with the current fill brush.
    fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64);

    /// Sets the brush used by subsequent fill operations.
    fn set_fill_brush(&mut self, brush: Brush);

    /// Sets the brush used by subsequent stroke operations.
    fn set_stroke_brush(&mut self, brush: Brush);

    /// Sets the width used by subsequent stroke operations, in pixels.
    fn set_stroke_width(&mut self, width: f64);

    /// Applies a single recorded operation.
    ///
    /// This dispatches to the corresponding trait method, which makes
    /// replaying a recorded op sequence onto another surface a plain loop.
    #[inline]
    fn apply(&mut self, op: SurfaceOp) {
        match op {
            SurfaceOp::Translate { dx, dy } => self.translate(dx, dy),
            SurfaceOp::ClearRegion {
                x,
                y,
                width,
                height,
            } => self.clear_region(x, y, width, height),
            SurfaceOp::FillRect {
                x,
                y,
                width,
                height,
            } => self.fill_rect(x, y, width, height),
            SurfaceOp::StrokeLine { x0, y0, x1, y1 } => self.stroke_line(x0, y0, x1, y1),
            SurfaceOp::StrokeCircle { cx, cy, radius } => self.stroke_circle(cx, cy, radius),
            SurfaceOp::FillCircle { cx, cy, radius } => self.fill_circle(cx, cy, radius),
            SurfaceOp::SetFillBrush(brush) => self.set_fill_brush(brush),
            SurfaceOp::SetStrokeBrush(brush) => self.set_stroke_brush(brush),
            SurfaceOp::SetStrokeWidth(width) => self.set_stroke_width(width),
        }
    }
}

/// One surface operation, mirroring the [`DrawSurface`] methods.
///
/// The variants split into *state* operations that mutate the surface's
/// frame or styling ([`Translate`](Self::Translate), the brush and stroke
/// setters) and *draw* operations that produce pixels (everything else).
/// [`SurfaceOp::is_state`] reflects that split.
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceOp {
    /// Shift the coordinate frame by `(dx, dy)`.
    Translate {
        /// Horizontal shift in pixels.
        dx: f64,
        /// Vertical shift in pixels.
        dy: f64,
    },
    /// Clear an axis-aligned region in the current frame.
    ClearRegion {
        /// Minimum X of the region.
        x: f64,
        /// Minimum Y of the region.
        y: f64,
        /// Region width in pixels.
        width: f64,
        /// Region height in pixels.
        height: f64,
    },
    /// Fill an axis-aligned rectangle with the current fill brush.
    FillRect {
        /// Minimum X of the rectangle.
        x: f64,
        /// Minimum Y of the rectangle.
        y: f64,
        /// Rectangle width in pixels.
        width: f64,
        /// Rectangle height in pixels.
        height: f64,
    },
    /// Stroke a line segment with the current stroke brush and width.
    StrokeLine {
        /// Start X.
        x0: f64,
        /// Start Y.
        y0: f64,
        /// End X.
        x1: f64,
        /// End Y.
        y1: f64,
    },
    /// Stroke the outline of a circle.
    StrokeCircle {
        /// Center X.
        cx: f64,
        /// Center Y.
        cy: f64,
        /// Circle radius in pixels.
        radius: f64,
    },
    /// Fill a circle with the current fill brush.
    FillCircle {
        /// Center X.
        cx: f64,
        /// Center Y.
        cy: f64,
        /// Circle radius in pixels.
        radius: f64,
    },
    /// Set the brush used by subsequent fill operations.
    SetFillBrush(Brush),
    /// Set the brush used by subsequent stroke operations.
    SetStrokeBrush(Brush),
    /// Set the stroke width in pixels.
    SetStrokeWidth(f64),
}

impl SurfaceOp {
    /// Returns `true` for operations that mutate surface state rather than
    /// producing pixels.
    #[must_use]
    pub fn is_state(&self) -> bool {
        matches!(
            self,
            Self::Translate { .. }
                | Self::SetFillBrush(_)
                | Self::SetStrokeBrush(_)
                | Self::SetStrokeWidth(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{DrawSurface, SurfaceOp};
    use peniko::{Brush, Color};

    struct Probe {
        translates: u32,
        draws: u32,
        last_fill: Option<Brush>,
    }

    impl Probe {
        fn new() -> Self {
            Self {
                translates: 0,
                draws: 0,
                last_fill: None,
            }
        }
    }

    impl DrawSurface for Probe {
        fn width(&self) -> f64 {
            100.0
        }
        fn height(&self) -> f64 {
            50.0
        }
        fn translate(&mut self, _dx: f64, _dy: f64) {
            self.translates += 1;
        }
        fn clear_region(&mut self, _x: f64, _y: f64, _width: f64, _height: f64) {}
        fn fill_rect(&mut self, _x: f64, _y: f64, _width: f64, _height: f64) {
            self.draws += 1;
        }
        fn stroke_line(&mut self, _x0: f64, _y0: f64, _x1: f64, _y1: f64) {
            self.draws += 1;
        }
        fn stroke_circle(&mut self, _cx: f64, _cy: f64, _radius: f64) {
            self.draws += 1;
        }
        fn fill_circle(&mut self, _cx: f64, _cy: f64, _radius: f64) {
            self.draws += 1;
        }
        fn set_fill_brush(&mut self, brush: Brush) {
            self.last_fill = Some(brush);
        }
        fn set_stroke_brush(&mut self, _brush: Brush) {}
        fn set_stroke_width(&mut self, _width: f64) {}
    }

    #[test]
    fn apply_dispatches_to_trait_methods() {
        let mut probe = Probe::new();

        probe.apply(SurfaceOp::Translate { dx: 3.0, dy: -2.0 });
        probe.apply(SurfaceOp::FillRect {
            x: 0.0,
            y: 0.0,
            width: 1.0,
            height: 1.0,
        });
        probe.apply(SurfaceOp::StrokeLine {
            x0: 0.0,
            y0: 0.0,
            x1: 5.0,
            y1: 5.0,
        });
        probe.apply(SurfaceOp::SetFillBrush(Brush::Solid(Color::WHITE)));

        assert_eq!(probe.translates, 1);
        assert_eq!(probe.draws, 2);
        assert_eq!(probe.last_fill, Some(Brush::Solid(Color::WHITE)));
    }

    #[test]
    fn state_ops_are_classified() {
        assert!(SurfaceOp::Translate { dx: 0.0, dy: 0.0 }.is_state());
        assert!(SurfaceOp::SetStrokeWidth(2.0).is_state());
        assert!(
            !SurfaceOp::ClearRegion {
                x: 0.0,
                y: 0.0,
                width: 1.0,
                height: 1.0,
            }
            .is_state()
        );
        assert!(
            !SurfaceOp::FillCircle {
                cx: 0.0,
                cy: 0.0,
                radius: 1.0,
            }
            .is_state()
        );
    }
}
