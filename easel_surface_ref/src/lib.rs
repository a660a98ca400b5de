// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=easel_surface_ref --heading-base-level=0

//! Easel Surface Reference Recorder.
//!
//! This crate provides a small, stateful implementation of
//! [`DrawSurface`] for **op recording and state tracing**.
//!
//! It is intentionally *not* a reference renderer:
//! - It does **not** rasterize to pixels.
//! - It does **not** establish "golden" rendering behavior across backends.
//! - It is intended primarily for tests and debugging that want to assert
//!   on emitted operations and the surface state at the time each
//!   operation was applied.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use easel_surface::{DrawSurface, SurfaceOp};
use peniko::Brush;

/// Snapshot of the surface state inside the recorder.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StateSnapshot {
    /// Cumulative horizontal frame translation.
    pub offset_x: f64,
    /// Cumulative vertical frame translation.
    pub offset_y: f64,
    /// Current fill brush, if set.
    pub fill: Option<Brush>,
    /// Current stroke brush, if set.
    pub stroke: Option<Brush>,
    /// Current stroke width, if set.
    pub stroke_width: Option<f64>,
}

/// Event recorded by the reference surface.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// State operation and the resulting state snapshot.
    State {
        /// State operation that was applied.
        op: SurfaceOp,
        /// Snapshot after applying the state operation.
        state: StateSnapshot,
    },
    /// Draw operation and the state snapshot used for drawing.
    Draw {
        /// Draw operation that was applied.
        op: SurfaceOp,
        /// Snapshot at the time of drawing.
        state: StateSnapshot,
    },
}

/// Simple recording implementation of [`DrawSurface`].
///
/// This surface:
/// - Reports the fixed dimensions given at construction,
/// - Tracks the cumulative frame translation and current styling,
/// - Records high-level [`Event`]s as operations are applied, alongside
///   the raw [`SurfaceOp`] sequence for replay.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    width: f64,
    height: f64,

    /// Log of events in the order they were applied.
    events: Vec<Event>,
    /// Underlying ops, suitable for replay via [`DrawSurface::apply`].
    ops: Vec<SurfaceOp>,
    /// Current surface state.
    state: StateSnapshot,
}

impl RecordingSurface {
    /// Creates a recording surface reporting the given pixel dimensions.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            events: Vec::new(),
            ops: Vec::new(),
            state: StateSnapshot::default(),
        }
    }

    /// Returns a slice of recorded events.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Returns a slice of raw surface operations.
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Returns the cumulative frame translation as `(dx, dy)`.
    #[must_use]
    pub fn offset(&self) -> (f64, f64) {
        (self.state.offset_x, self.state.offset_y)
    }

    /// Returns the current state snapshot.
    pub fn state(&self) -> &StateSnapshot {
        &self.state
    }

    /// Clears all recorded events and ops but keeps the current state.
    pub fn clear_events(&mut self) {
        self.events.clear();
        self.ops.clear();
    }

    fn record_state(&mut self, op: SurfaceOp) {
        self.ops.push(op.clone());
        self.events.push(Event::State {
            op,
            state: self.state.clone(),
        });
    }

    fn record_draw(&mut self, op: SurfaceOp) {
        self.ops.push(op.clone());
        self.events.push(Event::Draw {
            op,
            state: self.state.clone(),
        });
    }
}

impl DrawSurface for RecordingSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.state.offset_x += dx;
        self.state.offset_y += dy;
        self.record_state(SurfaceOp::Translate { dx, dy });
    }

    fn clear_region(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.record_draw(SurfaceOp::ClearRegion {
            x,
            y,
            width,
            height,
        });
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.record_draw(SurfaceOp::FillRect {
            x,
            y,
            width,
            height,
        });
    }

    fn stroke_line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64) {
        self.record_draw(SurfaceOp::StrokeLine { x0, y0, x1, y1 });
    }

    fn stroke_circle(&mut self, cx: f64, cy: f64, radius: f64) {
        self.record_draw(SurfaceOp::StrokeCircle { cx, cy, radius });
    }

    fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64) {
        self.record_draw(SurfaceOp::FillCircle { cx, cy, radius });
    }

    fn set_fill_brush(&mut self, brush: Brush) {
        self.state.fill = Some(brush.clone());
        self.record_state(SurfaceOp::SetFillBrush(brush));
    }

    fn set_stroke_brush(&mut self, brush: Brush) {
        self.state.stroke = Some(brush.clone());
        self.record_state(SurfaceOp::SetStrokeBrush(brush));
    }

    fn set_stroke_width(&mut self, width: f64) {
        self.state.stroke_width = Some(width);
        self.record_state(SurfaceOp::SetStrokeWidth(width));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use peniko::Color;

    #[test]
    fn translations_accumulate_in_order() {
        let mut surface = RecordingSurface::new(800.0, 600.0);

        surface.translate(10.0, 5.0);
        surface.translate(-3.0, 2.0);

        assert_eq!(surface.offset(), (7.0, 7.0));
        assert_eq!(
            surface.ops(),
            &[
                SurfaceOp::Translate { dx: 10.0, dy: 5.0 },
                SurfaceOp::Translate { dx: -3.0, dy: 2.0 },
            ]
        );
    }

    #[test]
    fn draw_events_capture_state_at_draw_time() {
        let mut surface = RecordingSurface::new(100.0, 100.0);

        surface.translate(4.0, 0.0);
        surface.set_fill_brush(Brush::Solid(Color::WHITE));
        surface.fill_rect(1.0, 2.0, 1.0, 1.0);

        let Some(Event::Draw { op, state }) = surface.events().last() else {
            panic!("expected a draw event");
        };
        assert_eq!(
            *op,
            SurfaceOp::FillRect {
                x: 1.0,
                y: 2.0,
                width: 1.0,
                height: 1.0,
            }
        );
        assert_eq!(state.offset_x, 4.0);
        assert_eq!(state.fill, Some(Brush::Solid(Color::WHITE)));
    }

    #[test]
    fn clear_events_keeps_state() {
        let mut surface = RecordingSurface::new(100.0, 100.0);

        surface.translate(2.0, 3.0);
        surface.set_stroke_width(1.5);
        surface.clear_events();

        assert!(surface.events().is_empty());
        assert!(surface.ops().is_empty());
        assert_eq!(surface.offset(), (2.0, 3.0));
        assert_eq!(surface.state().stroke_width, Some(1.5));
    }

    #[test]
    fn recorded_ops_replay_onto_another_surface() {
        let mut surface = RecordingSurface::new(100.0, 100.0);
        surface.translate(5.0, -5.0);
        surface.stroke_line(0.0, 0.0, 10.0, 10.0);

        let mut replayed = RecordingSurface::new(100.0, 100.0);
        for op in surface.ops().iter().cloned() {
            replayed.apply(op);
        }

        assert_eq!(replayed.ops(), surface.ops());
        assert_eq!(replayed.offset(), surface.offset());
    }
}
