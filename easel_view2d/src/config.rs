// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::Point;

/// Static configuration for a [`ViewTransform`](crate::ViewTransform).
///
/// The defaults mirror the conventional interactive-canvas setup: unit
/// scale, origin at the surface's top-left corner, and a wide zoom range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportConfig {
    /// Smallest allowed scale factor. Must be finite and strictly positive.
    pub min_scale: f64,
    /// Largest allowed scale factor. Must be finite and at least `min_scale`.
    pub max_scale: f64,
    /// Scale the transform starts at. Clamped into `[min_scale, max_scale]`.
    pub initial_scale: f64,
    /// Pixel point the logical origin starts at.
    pub initial_origin: Point,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            min_scale: 0.5,
            max_scale: 1500.0,
            initial_scale: 1.0,
            initial_origin: Point::ZERO,
        }
    }
}

/// Error returned when a viewport cannot be constructed.
///
/// All variants are fatal: a transform with a degenerate surface or scale
/// range cannot uphold its conversion invariants, so construction refuses
/// rather than defaulting.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewportError {
    /// The draw surface reported non-finite or non-positive dimensions.
    InvalidSurface {
        /// Reported surface width.
        width: f64,
        /// Reported surface height.
        height: f64,
    },
    /// The configured scale bounds are not `0 < min_scale <= max_scale`,
    /// or are non-finite.
    InvalidScaleBounds {
        /// Configured minimum scale.
        min_scale: f64,
        /// Configured maximum scale.
        max_scale: f64,
    },
    /// The configured initial scale is non-finite or non-positive.
    InvalidInitialScale {
        /// Configured initial scale.
        scale: f64,
    },
    /// The configured initial origin has a non-finite coordinate.
    NonFiniteOrigin {
        /// Configured origin X.
        x: f64,
        /// Configured origin Y.
        y: f64,
    },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSurface { width, height } => {
                write!(f, "draw surface has invalid dimensions {width}x{height}")
            }
            Self::InvalidScaleBounds {
                min_scale,
                max_scale,
            } => {
                write!(
                    f,
                    "scale bounds [{min_scale}, {max_scale}] are not a positive ordered range"
                )
            }
            Self::InvalidInitialScale { scale } => {
                write!(f, "initial scale {scale} is not strictly positive")
            }
            Self::NonFiniteOrigin { x, y } => {
                write!(f, "initial origin ({x}, {y}) is not finite")
            }
        }
    }
}

impl core::error::Error for ViewportError {}
