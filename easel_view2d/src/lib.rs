// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=easel_view2d --heading-base-level=0

//! Easel View 2D: the viewport transform between a logical plane and a
//! pixel surface.
//!
//! This crate provides [`ViewTransform`], a headless model of an
//! interactive 2D viewport: an infinite logical plane mapped onto a
//! fixed-size pixel surface through an `origin` (the pixel image of
//! logical `(0, 0)`) and a strictly positive `scale`. It focuses on:
//! - Coordinate conversion between logical and pixel space.
//! - Panning, with the owned [`DrawSurface`](easel_surface::DrawSurface)
//!   kept in lockstep through translate side effects.
//! - Focal-point-preserving zoom: the logical point under the cursor or
//!   pinch center stays put across a scale change.
//! - Clearing with a generous margin so panning never reveals stale
//!   pixels.
//! - Scale-aware paint helpers forwarding to the surface primitives.
//!
//! It does **not** interpret input events; the gesture state machine that
//! drives the transform lives in `easel_gestures`.
//!
//! ## Minimal example
//!
//! ```rust
//! use easel_surface_ref::RecordingSurface;
//! use easel_view2d::{ViewTransform, ViewportConfig};
//! use kurbo::Point;
//!
//! // An 800x600 surface; the recorder stands in for a real backend.
//! let surface = RecordingSurface::new(800.0, 600.0);
//! let mut view = ViewTransform::new(surface, ViewportConfig::default())?;
//!
//! // Pan right/down by 20x15 pixels, then zoom in about a pixel point.
//! view.shift_origin(20.0, 15.0);
//! view.set_scale(2.0, Some(Point::new(100.0, 100.0)));
//!
//! // The logical point under the focal pixel did not move.
//! let logical = view.pixel_to_logical(Point::new(100.0, 100.0));
//! let pixel = view.logical_to_pixel(logical);
//! assert!((pixel.x - 100.0).abs() < 1e-9);
//! assert!((pixel.y - 100.0).abs() < 1e-9);
//! # Ok::<(), easel_view2d::ViewportError>(())
//! ```
//!
//! ## Design notes
//!
//! - The transform is axis-aligned with a **uniform** scale; every
//!   conversion satisfies `pixel = origin + logical * scale`.
//! - `scale` is always clamped into the configured
//!   `[min_scale, max_scale]` range, so the inverse conversion is total.
//! - State is encapsulated: `origin` and `scale` change only through the
//!   method contracts, never through stray field writes.
//! - Updates are synchronous and single-threaded; surface side effects
//!   fire in invocation order, once per origin change.
//!
//! This crate is `no_std`.

#![no_std]

mod config;
mod transform;

pub use config::{ViewportConfig, ViewportError};
pub use transform::{CLEAR_MARGIN, ViewTransform, ViewTransformDebugInfo};
