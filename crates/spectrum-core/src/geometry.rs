//! Pixel <-> data mapping for a rectangular plot area.
//!
//! Positions are in the plot element's backing-store pixels, y growing
//! downwards. Both the drag/click path and the context-menu path resolve the
//! bin under the pointer through [`resolve_bin`].

use crate::constants::{AMPLITUDE_MAX, AMPLITUDE_MIN};
use crate::spectrum::FrequencyBins;
use glam::Vec2;

/// Drawn plot area in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl PlotRect {
    /// Inset a `width` x `height` surface by `margins`.
    pub fn inset(width: f32, height: f32, margins: Margins) -> Self {
        Self {
            left: margins.left,
            top: margins.top,
            right: width - margins.right,
            bottom: height - margins.bottom,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Zero, negative or non-finite extent; such a rect maps nothing.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        let (w, h) = (self.width(), self.height());
        !(w.is_finite() && h.is_finite()) || w <= 0.0 || h <= 0.0
    }

    /// Edges are inclusive.
    #[inline]
    pub fn contains(&self, pos: Vec2) -> bool {
        pos.x >= self.left && pos.x <= self.right && pos.y >= self.top && pos.y <= self.bottom
    }

    /// Position inside the rect as 0..1 fractions, x from the left edge and y
    /// from the bottom edge. `None` outside the rect or when it is degenerate.
    pub fn fraction(&self, pos: Vec2) -> Option<Vec2> {
        if self.is_degenerate() || !(pos.x.is_finite() && pos.y.is_finite()) {
            return None;
        }
        if !self.contains(pos) {
            return None;
        }
        Some(Vec2::new(
            (pos.x - self.left) / self.width(),
            (self.bottom - pos.y) / self.height(),
        ))
    }
}

/// Space between a surface's edges and its plot rect (axis labels live here).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margins {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Margins {
    pub fn scaled(self, factor: f32) -> Self {
        Self {
            left: self.left * factor,
            top: self.top * factor,
            right: self.right * factor,
            bottom: self.bottom * factor,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisRange {
    pub min: f32,
    pub max: f32,
}

impl AxisRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn span(&self) -> f32 {
        self.max - self.min
    }

    #[inline]
    pub fn lerp(&self, t: f32) -> f32 {
        self.min + t * self.span()
    }

    /// Position of `v` inside the range as a 0..1 fraction (unclamped).
    #[inline]
    pub fn normalize(&self, v: f32) -> f32 {
        (v - self.min) / self.span()
    }

    /// Multiples of `step` that fall inside the range, ascending.
    pub fn ticks(&self, step: f32) -> Vec<f32> {
        if step.is_nan() || step <= 0.0 || self.span().is_nan() || self.span() <= 0.0 {
            return Vec::new();
        }
        let first = (self.min / step).ceil() as i64;
        let last = (self.max / step + 1e-4).floor() as i64;
        (first..=last).map(|k| k as f32 * step).collect()
    }
}

/// A plot rect together with the data ranges mapped onto its axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotGeometry {
    pub rect: PlotRect,
    pub x: AxisRange,
    pub y: AxisRange,
}

impl PlotGeometry {
    pub fn new(rect: PlotRect, x: AxisRange, y: AxisRange) -> Self {
        Self { rect, x, y }
    }

    /// Pixel position to data coordinates. `None` when the position is outside
    /// the plot rect or the geometry cannot be inverted.
    pub fn px_to_data(&self, pos: Vec2) -> Option<Vec2> {
        let f = self.rect.fraction(pos)?;
        Some(Vec2::new(self.x.lerp(f.x), self.y.lerp(f.y)))
    }

    pub fn data_to_px(&self, data: Vec2) -> Vec2 {
        let u = self.x.normalize(data.x);
        let v = self.y.normalize(data.y);
        Vec2::new(
            self.rect.left + u * self.rect.width(),
            self.rect.bottom - v * self.rect.height(),
        )
    }

    #[inline]
    pub fn x_to_px(&self, x: f32) -> f32 {
        self.rect.left + self.x.normalize(x) * self.rect.width()
    }

    #[inline]
    pub fn y_to_px(&self, y: f32) -> f32 {
        self.rect.bottom - self.y.normalize(y) * self.rect.height()
    }
}

/// The bin a pointer is over, with the amplitude its height resolves to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BinTarget {
    pub index: usize,
    pub amplitude: f32,
}

/// Resolve a pointer position over the frequency plot to a bin edit.
///
/// Works on the plot rect alone, not on the drawn axes: the left edge is the
/// first bin and the right edge the last, with the fractional index rounded to
/// the nearest bin. Height maps linearly from 0 at the bottom edge to
/// `AMPLITUDE_MAX` at the top edge.
pub fn resolve_bin(geometry: &PlotGeometry, pos: Vec2, bins: &FrequencyBins) -> Option<BinTarget> {
    let f = geometry.rect.fraction(pos)?;
    let last = bins.last_index();
    let index = ((f.x * last as f32).round().max(0.0) as usize).min(last);
    Some(BinTarget {
        index,
        amplitude: (f.y * AMPLITUDE_MAX).clamp(AMPLITUDE_MIN, AMPLITUDE_MAX),
    })
}

/// x axis range of the frequency plot: first bin on the left edge, last bin on
/// the right edge.
pub fn frequency_axis(bins: &FrequencyBins) -> AxisRange {
    AxisRange::new(bins.frequency(0), bins.max_frequency())
}
