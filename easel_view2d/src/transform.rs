// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};

use easel_surface::DrawSurface;
use peniko::Brush;

use crate::config::{ViewportConfig, ViewportError};

/// Extra pixels cleared on every side of the visible area by
/// [`ViewTransform::clear`].
///
/// Sized to exceed any single-step pan distance, so panning never reveals
/// stale pixels before the next repaint.
pub const CLEAR_MARGIN: f64 = 5000.0;

/// Pan+zoom transform from an infinite logical plane onto a pixel surface.
///
/// `ViewTransform` owns a [`DrawSurface`] and two pieces of state: the
/// `origin` (the pixel point logical `(0, 0)` currently maps to) and the
/// `scale` (logical distance × scale = pixel distance). Every conversion
/// satisfies `pixel = origin + logical * scale`, and `scale` always stays
/// within the configured bounds.
///
/// Origin mutations keep the surface's coordinate frame in lockstep by
/// issuing exactly one [`DrawSurface::translate`] per change. The surface
/// frame is assumed to start aligned with the configured initial origin
/// (for the default origin `(0, 0)`, an untranslated surface).
#[derive(Clone, Debug)]
pub struct ViewTransform<S> {
    surface: S,
    origin: Point,
    scale: f64,
    min_scale: f64,
    max_scale: f64,
}

impl<S: DrawSurface> ViewTransform<S> {
    /// Creates a transform over `surface` with the given configuration.
    ///
    /// Fails if the surface reports degenerate dimensions or the
    /// configuration is invalid; see [`ViewportError`]. The initial scale
    /// is clamped into the configured range.
    pub fn new(surface: S, config: ViewportConfig) -> Result<Self, ViewportError> {
        let width = surface.width();
        let height = surface.height();
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(ViewportError::InvalidSurface { width, height });
        }

        let ViewportConfig {
            min_scale,
            max_scale,
            initial_scale,
            initial_origin,
        } = config;
        if !min_scale.is_finite() || !max_scale.is_finite() || min_scale <= 0.0 {
            return Err(ViewportError::InvalidScaleBounds {
                min_scale,
                max_scale,
            });
        }
        if min_scale > max_scale {
            return Err(ViewportError::InvalidScaleBounds {
                min_scale,
                max_scale,
            });
        }
        if !initial_scale.is_finite() || initial_scale <= 0.0 {
            return Err(ViewportError::InvalidInitialScale {
                scale: initial_scale,
            });
        }
        if !initial_origin.is_finite() {
            return Err(ViewportError::NonFiniteOrigin {
                x: initial_origin.x,
                y: initial_origin.y,
            });
        }

        Ok(Self {
            surface,
            origin: initial_origin,
            scale: initial_scale.clamp(min_scale, max_scale),
            min_scale,
            max_scale,
        })
    }

    /// Returns the pixel point logical `(0, 0)` currently maps to.
    #[must_use]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Returns the current scale factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns the smallest allowed scale factor.
    #[must_use]
    pub fn min_scale(&self) -> f64 {
        self.min_scale
    }

    /// Returns the largest allowed scale factor.
    #[must_use]
    pub fn max_scale(&self) -> f64 {
        self.max_scale
    }

    /// Returns a shared reference to the owned draw surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Returns a mutable reference to the owned draw surface.
    ///
    /// Callers drawing through this reference are responsible for scaling
    /// logical coordinates by [`scale`](Self::scale) themselves, the way
    /// the paint helpers do.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Converts a logical-plane point into pixel space.
    #[must_use]
    pub fn logical_to_pixel(&self, p: Point) -> Point {
        self.origin + p.to_vec2() * self.scale
    }

    /// Converts a pixel-space point into the logical plane.
    ///
    /// Total: the scale bound invariant keeps `scale` strictly positive.
    #[must_use]
    pub fn pixel_to_logical(&self, p: Point) -> Point {
        ((p - self.origin) / self.scale).to_point()
    }

    /// Returns the logical-plane rectangle currently visible through the
    /// surface viewport.
    #[must_use]
    pub fn visible_logical_rect(&self) -> Rect {
        let min = self.pixel_to_logical(Point::ZERO);
        let max = self.pixel_to_logical(Point::new(self.surface.width(), self.surface.height()));
        Rect::new(min.x, min.y, max.x, max.y)
    }

    /// Moves the origin to the absolute pixel point `(x, y)`.
    ///
    /// Issues exactly one surface translate carrying the net delta from
    /// the previous origin. Non-finite coordinates are ignored.
    pub fn set_origin(&mut self, x: f64, y: f64) {
        if !x.is_finite() || !y.is_finite() {
            return;
        }
        let target = Point::new(x, y);
        let delta = target - self.origin;
        self.origin = target;
        self.surface.translate(delta.x, delta.y);
    }

    /// Pans the origin by a relative pixel delta.
    ///
    /// Equivalent to [`set_origin`](Self::set_origin) at
    /// `origin + (dx, dy)`.
    pub fn shift_origin(&mut self, dx: f64, dy: f64) {
        if !dx.is_finite() || !dy.is_finite() {
            return;
        }
        self.set_origin(self.origin.x + dx, self.origin.y + dy);
    }

    /// Moves the origin so that logical `p` maps to the pixel center of
    /// the surface viewport at the current scale.
    pub fn center_on(&mut self, p: Point) {
        if !p.is_finite() {
            return;
        }
        let center = Point::new(self.surface.width() / 2.0, self.surface.height() / 2.0);
        self.set_origin(center.x - p.x * self.scale, center.y - p.y * self.scale);
    }

    /// Sets the scale factor, clamping it into the configured bounds.
    ///
    /// With a focal point, the logical point under `focal` before the
    /// change still maps to `focal` afterwards: the origin is shifted by
    /// the difference between the focal pixel and where that logical point
    /// lands under the clamped new scale. The correction always uses the
    /// actually-applied scale, so it degenerates to a zero shift when the
    /// request is already at a bound.
    ///
    /// Non-finite or non-positive scale requests, and non-finite focal
    /// points, are ignored.
    pub fn set_scale(&mut self, new_scale: f64, focal: Option<Point>) {
        if !new_scale.is_finite() || new_scale <= 0.0 {
            return;
        }
        if let Some(f) = focal {
            if !f.is_finite() {
                return;
            }
            let anchored = self.pixel_to_logical(f);
            self.scale = new_scale.clamp(self.min_scale, self.max_scale);
            let moved = self.logical_to_pixel(anchored);
            self.shift_origin(f.x - moved.x, f.y - moved.y);
        } else {
            self.scale = new_scale.clamp(self.min_scale, self.max_scale);
        }
    }

    /// Clears the visible viewport plus [`CLEAR_MARGIN`] pixels on every
    /// side, expressed in the surface's translated frame.
    pub fn clear(&mut self) {
        let width = self.surface.width();
        let height = self.surface.height();
        self.surface.clear_region(
            -self.origin.x - CLEAR_MARGIN,
            -self.origin.y - CLEAR_MARGIN,
            width + 2.0 * CLEAR_MARGIN,
            height + 2.0 * CLEAR_MARGIN,
        );
    }

    /// Paints a logical point as a single scaled pixel.
    pub fn paint_point(&mut self, p: Point) {
        self.surface
            .fill_rect(p.x * self.scale, p.y * self.scale, 1.0, 1.0);
    }

    /// Strokes a line between two logical points.
    pub fn paint_line(&mut self, start: Point, end: Point) {
        self.surface.stroke_line(
            start.x * self.scale,
            start.y * self.scale,
            end.x * self.scale,
            end.y * self.scale,
        );
    }

    /// Strokes the outline of a circle given in logical coordinates.
    pub fn paint_circle(&mut self, center: Point, radius: f64) {
        self.surface.stroke_circle(
            center.x * self.scale,
            center.y * self.scale,
            radius * self.scale,
        );
    }

    /// Fills a circle given in logical coordinates.
    pub fn paint_filled_circle(&mut self, center: Point, radius: f64) {
        self.surface.fill_circle(
            center.x * self.scale,
            center.y * self.scale,
            radius * self.scale,
        );
    }

    /// Sets the brush used by subsequent fill paints.
    pub fn set_fill_brush(&mut self, brush: Brush) {
        self.surface.set_fill_brush(brush);
    }

    /// Sets the brush used by subsequent stroke paints.
    pub fn set_stroke_brush(&mut self, brush: Brush) {
        self.surface.set_stroke_brush(brush);
    }

    /// Sets the width used by subsequent stroke paints, in pixels.
    pub fn set_stroke_width(&mut self, width: f64) {
        self.surface.set_stroke_width(width);
    }

    /// Snapshot of the current transform state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewTransformDebugInfo {
        ViewTransformDebugInfo {
            origin: self.origin,
            scale: self.scale,
            min_scale: self.min_scale,
            max_scale: self.max_scale,
            surface_width: self.surface.width(),
            surface_height: self.surface.height(),
            visible_logical_rect: self.visible_logical_rect(),
        }
    }
}

/// Debug snapshot of a [`ViewTransform`] state.
#[derive(Clone, Copy, Debug)]
pub struct ViewTransformDebugInfo {
    /// Pixel image of the logical origin.
    pub origin: Point,
    /// Current scale factor.
    pub scale: f64,
    /// Smallest allowed scale factor.
    pub min_scale: f64,
    /// Largest allowed scale factor.
    pub max_scale: f64,
    /// Surface viewport width in pixels.
    pub surface_width: f64,
    /// Surface viewport height in pixels.
    pub surface_height: f64,
    /// Logical-plane rectangle currently visible through the surface.
    pub visible_logical_rect: Rect,
}
