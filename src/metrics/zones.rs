//! Effort color mapping for paces.
//!
//! A distance's effort bounds (% VMA) translate into a pace window for a
//! given runner. Paces inside the window are colored along a green to red
//! gradient; paces outside it, or distances without bounds, get no color.

use serde::{Deserialize, Serialize};

use crate::distances::{DistanceEntry, EffortBounds};

use super::calculator::TimeCalculator;

/// RGB color representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS `rgb(r, g, b)` notation.
    pub fn to_css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// Hex `#rrggbb` notation.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A normalized position inside an effort window and its color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorSample {
    /// 0.0 at the fast end of the window, 1.0 at the slow end
    pub t: f64,
    pub color: Color,
}

/// Pace window (seconds per km) a runner can sustain over a distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffortPaceWindow {
    /// Pace at the highest sustainable % VMA
    pub fast_seconds: f64,
    /// Pace at the lowest sustainable % VMA
    pub slow_seconds: f64,
}

impl EffortPaceWindow {
    /// Window for `bounds` at `vma` km/h. `None` when `vma` is not positive.
    pub fn from_bounds(bounds: EffortBounds, vma: f64) -> Option<Self> {
        if !vma.is_finite() || vma <= 0.0 || !bounds.is_valid() {
            return None;
        }

        let vma_pace_seconds = 3600.0 / vma;
        Some(Self {
            fast_seconds: vma_pace_seconds / (bounds.max_soutien / 100.0),
            slow_seconds: vma_pace_seconds / (bounds.min_soutien / 100.0),
        })
    }

    pub fn contains(&self, pace_seconds: f64) -> bool {
        pace_seconds >= self.fast_seconds && pace_seconds <= self.slow_seconds
    }

    /// Linear position of `pace_seconds` in the window, if inside it.
    pub fn normalize(&self, pace_seconds: f64) -> Option<f64> {
        if !self.contains(pace_seconds) {
            return None;
        }

        let width = self.slow_seconds - self.fast_seconds;
        if width <= 0.0 {
            return Some(0.0);
        }
        Some((pace_seconds - self.fast_seconds) / width)
    }

    /// Window as `m:ss-m:ss`, fast edge first, rounded to whole seconds.
    pub fn format_range(&self) -> String {
        format!(
            "{}-{}",
            TimeCalculator::format_pace(self.fast_seconds.round() as u32),
            TimeCalculator::format_pace(self.slow_seconds.round() as u32)
        )
    }
}

/// Maps paces to effort colors against a distance's bounds.
pub struct PaceColorMapper;

impl PaceColorMapper {
    /// Gradient color at position `t`: `rgb(255·t, 255·(1−t), 0)`.
    pub fn gradient(t: f64) -> Color {
        let red = (t.clamp(0.0, 1.0) * 255.0).round() as u8;
        Color::new(red, 255 - red, 0)
    }

    /// Normalized sample for one table cell.
    pub fn sample(pace_seconds: f64, distance: &DistanceEntry, vma: f64) -> Option<ColorSample> {
        let window = EffortPaceWindow::from_bounds(distance.bounds?, vma)?;
        let t = window.normalize(pace_seconds)?;

        Some(ColorSample {
            t,
            color: Self::gradient(t),
        })
    }

    /// Cell color, or `None` for no color.
    pub fn color_for(pace_seconds: f64, distance: &DistanceEntry, vma: f64) -> Option<Color> {
        Self::sample(pace_seconds, distance, vma).map(|s| s.color)
    }
}
