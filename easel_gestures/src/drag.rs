// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

/// Tracks the anchor of an active drag gesture.
///
/// The anchor is the last pointer pixel position recorded while the drag
/// is active; each [`update`](Self::update) yields the movement delta
/// since the previous sample and advances the anchor. The state is
/// ephemeral: it exists between a pointer-down and the matching
/// pointer-up/leave.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragState {
    anchor: Option<Point>,
}

impl DragState {
    /// Starts a drag anchored at `pos`.
    ///
    /// Starting while already active simply re-anchors the drag.
    pub fn start(&mut self, pos: Point) {
        self.anchor = Some(pos);
    }

    /// Advances the anchor to `pos`, returning the delta since the
    /// previous anchor.
    ///
    /// Returns `None` while no drag is active.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        let anchor = self.anchor?;
        self.anchor = Some(pos);
        Some(pos - anchor)
    }

    /// Ends the drag. Idempotent: ending an idle state is harmless.
    pub fn end(&mut self) {
        self.anchor = None;
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.anchor.is_some()
    }

    /// Returns the current anchor position, if a drag is active.
    #[must_use]
    pub fn anchor(&self) -> Option<Point> {
        self.anchor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_drag_state_is_idle() {
        let drag = DragState::default();
        assert!(!drag.is_active());
        assert!(drag.anchor().is_none());
    }

    #[test]
    fn start_anchors_the_drag() {
        let mut drag = DragState::default();
        let start = Point::new(10.0, 20.0);

        drag.start(start);

        assert!(drag.is_active());
        assert_eq!(drag.anchor(), Some(start));
    }

    #[test]
    fn update_returns_delta_and_advances_anchor() {
        let mut drag = DragState::default();
        drag.start(Point::new(10.0, 10.0));

        let delta = drag.update(Point::new(30.0, 25.0));

        assert_eq!(delta, Some(Vec2::new(20.0, 15.0)));
        assert_eq!(drag.anchor(), Some(Point::new(30.0, 25.0)));
    }

    #[test]
    fn update_while_idle_returns_none() {
        let mut drag = DragState::default();

        let delta = drag.update(Point::new(30.0, 25.0));

        assert_eq!(delta, None);
        assert!(!drag.is_active());
    }

    #[test]
    fn consecutive_updates_yield_incremental_deltas() {
        let mut drag = DragState::default();
        drag.start(Point::ZERO);

        assert_eq!(drag.update(Point::new(5.0, 3.0)), Some(Vec2::new(5.0, 3.0)));
        assert_eq!(drag.update(Point::new(8.0, 7.0)), Some(Vec2::new(3.0, 4.0)));
        assert_eq!(
            drag.update(Point::new(8.0, 7.0)),
            Some(Vec2::new(0.0, 0.0))
        );
    }

    #[test]
    fn end_is_idempotent() {
        let mut drag = DragState::default();
        drag.start(Point::new(1.0, 1.0));

        drag.end();
        drag.end();

        assert!(!drag.is_active());
        assert_eq!(drag.update(Point::new(2.0, 2.0)), None);
    }

    #[test]
    fn restart_overwrites_previous_anchor() {
        let mut drag = DragState::default();
        drag.start(Point::ZERO);
        drag.update(Point::new(10.0, 10.0));

        drag.start(Point::new(50.0, 60.0));

        assert_eq!(
            drag.update(Point::new(55.0, 65.0)),
            Some(Vec2::new(5.0, 5.0))
        );
    }
}
