// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::Point;

use easel_surface::DrawSurface;
use easel_view2d::{ViewTransform, ViewportConfig, ViewportError};

use crate::drag::DragState;
use crate::events::{InputEvent, ViewEvent};

/// Static configuration for a [`GestureController`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    /// Multiplicative zoom step applied per wheel tick. Must be finite and
    /// strictly positive; `1.0` disables wheel zoom.
    pub wheel_step: f64,
    /// Configuration for the owned viewport transform.
    pub viewport: ViewportConfig,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            wheel_step: 1.1,
            viewport: ViewportConfig::default(),
        }
    }
}

/// Error returned when a gesture controller cannot be constructed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureError {
    /// The underlying viewport transform rejected the surface or its
    /// configuration.
    Viewport(ViewportError),
    /// The configured wheel step is non-finite or non-positive.
    InvalidWheelStep {
        /// Configured wheel step.
        step: f64,
    },
}

impl fmt::Display for GestureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Viewport(err) => write!(f, "viewport construction failed: {err}"),
            Self::InvalidWheelStep { step } => {
                write!(f, "wheel step {step} is not strictly positive")
            }
        }
    }
}

impl core::error::Error for GestureError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Viewport(err) => Some(err),
            Self::InvalidWheelStep { .. } => None,
        }
    }
}

impl From<ViewportError> for GestureError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}

/// Interprets normalized input samples as pan/zoom gestures on an owned
/// [`ViewTransform`].
///
/// The controller is a small state machine over [`DragState`]:
///
/// - **Idle → dragging** on pointer-down.
/// - **Dragging → dragging** on pointer-move, panning by the delta since
///   the anchor.
/// - **Dragging → idle** on pointer-up or pointer-leave, unconditionally.
///
/// Wheel and pinch input zoom about a focal pixel point with the scale
/// clamped into the viewport's bounds. Completed state changes are
/// reported as returned [`ViewEvent`]s; calls with no effect return
/// nothing. Events are processed strictly in arrival order and every call
/// runs to completion before the next.
#[derive(Clone, Debug)]
pub struct GestureController<S> {
    view: ViewTransform<S>,
    drag: DragState,
    /// Last known pointer position, the implicit wheel focal point.
    pointer_pos: Option<Point>,
    wheel_step: f64,
}

impl<S: DrawSurface> GestureController<S> {
    /// Creates a controller over `surface` with the given configuration.
    ///
    /// Fails if the wheel step is degenerate or the viewport transform
    /// rejects the surface/configuration; see [`GestureError`].
    pub fn new(surface: S, config: GestureConfig) -> Result<Self, GestureError> {
        if !config.wheel_step.is_finite() || config.wheel_step <= 0.0 {
            return Err(GestureError::InvalidWheelStep {
                step: config.wheel_step,
            });
        }
        let view = ViewTransform::new(surface, config.viewport)?;
        Ok(Self {
            view,
            drag: DragState::default(),
            pointer_pos: None,
            wheel_step: config.wheel_step,
        })
    }

    /// Returns a shared reference to the owned viewport transform.
    pub fn view(&self) -> &ViewTransform<S> {
        &self.view
    }

    /// Returns a mutable reference to the owned viewport transform, for
    /// host-driven operations such as centering or painting.
    pub fn view_mut(&mut self) -> &mut ViewTransform<S> {
        &mut self.view
    }

    /// Returns `true` while a drag gesture is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    /// Returns the last known pointer position, if any move has been seen.
    #[must_use]
    pub fn pointer_position(&self) -> Option<Point> {
        self.pointer_pos
    }

    /// Starts a drag anchored at `pos`.
    ///
    /// Non-finite positions are ignored.
    pub fn on_pointer_down(&mut self, pos: Point) {
        if !pos.is_finite() {
            return;
        }
        self.drag.start(pos);
    }

    /// Processes a pointer move.
    ///
    /// The position is always recorded as the implicit wheel focal point.
    /// While dragging, a non-zero delta since the anchor pans the viewport
    /// and reports the new origin; zero-delta moves produce nothing.
    /// Non-finite positions are ignored.
    pub fn on_pointer_move(&mut self, pos: Point) -> Option<ViewEvent> {
        if !pos.is_finite() {
            return None;
        }
        self.pointer_pos = Some(pos);

        let delta = self.drag.update(pos)?;
        if delta.x == 0.0 && delta.y == 0.0 {
            return None;
        }
        self.view.shift_origin(delta.x, delta.y);
        Some(ViewEvent::PanMoved {
            origin: self.view.origin(),
        })
    }

    /// Ends any active drag. Idempotent; moves arriving afterwards pan
    /// nothing.
    pub fn on_pointer_up(&mut self) {
        self.drag.end();
    }

    /// Ends any active drag, exactly like [`on_pointer_up`](Self::on_pointer_up).
    pub fn on_pointer_leave(&mut self) {
        self.drag.end();
    }

    /// Processes wheel/scroll input.
    ///
    /// A positive delta zooms in by the configured wheel step, a negative
    /// delta zooms out by its reciprocal; only the sign is interpreted.
    /// The zoom is anchored at `pos` when given, otherwise at the last
    /// known pointer position, otherwise at the surface center. Zero or
    /// non-finite deltas are ignored.
    pub fn on_scroll(&mut self, delta: f64, pos: Option<Point>) -> Option<ViewEvent> {
        if !delta.is_finite() || delta == 0.0 {
            return None;
        }
        let step = if delta > 0.0 {
            self.wheel_step
        } else {
            1.0 / self.wheel_step
        };
        let focal = pos
            .filter(|p| p.is_finite())
            .or(self.pointer_pos)
            .unwrap_or_else(|| {
                Point::new(
                    self.view.surface().width() / 2.0,
                    self.view.surface().height() / 2.0,
                )
            });
        Some(self.apply_zoom(step, focal))
    }

    /// Processes one pinch update, multiplying the current scale by
    /// `factor` about `center`.
    ///
    /// Pinch updates arrive continuously during a gesture; each call is
    /// self-contained. Non-finite or non-positive factors and non-finite
    /// centers are ignored.
    pub fn on_pinch(&mut self, factor: f64, center: Point) -> Option<ViewEvent> {
        if !factor.is_finite() || factor <= 0.0 || !center.is_finite() {
            return None;
        }
        Some(self.apply_zoom(factor, center))
    }

    /// Dispatches a normalized [`InputEvent`] to the canonical handlers.
    pub fn handle(&mut self, event: InputEvent) -> Option<ViewEvent> {
        match event {
            InputEvent::PointerDown { pos } => {
                self.on_pointer_down(pos);
                None
            }
            InputEvent::PointerMove { pos } => self.on_pointer_move(pos),
            InputEvent::PointerUp => {
                self.on_pointer_up();
                None
            }
            InputEvent::PointerLeave => {
                self.on_pointer_leave();
                None
            }
            InputEvent::Scroll { delta, pos } => self.on_scroll(delta, pos),
            InputEvent::Pinch { factor, center } => self.on_pinch(factor, center),
        }
    }

    /// Shared zoom path: clamp first, then anchor the focal correction to
    /// the actually-applied scale.
    ///
    /// Proceeds even when clamping leaves the scale unchanged, so the
    /// focal correction still runs and the host still hears the bounded
    /// value.
    fn apply_zoom(&mut self, multiplier: f64, focal: Point) -> ViewEvent {
        let bounded = (self.view.scale() * multiplier)
            .clamp(self.view.min_scale(), self.view.max_scale());
        self.view.set_scale(bounded, Some(focal));
        ViewEvent::Zoomed {
            scale: self.view.scale(),
        }
    }
}
