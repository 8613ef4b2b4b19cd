//! Weight → stroke-width calibration curve.
//!
//! Stroke widths were measured per weight against the companion variable
//! font, so the table is data rather than a formula. Between calibration
//! points the curve is piecewise linear.

use std::sync::LazyLock;

use crate::errors::IconError;
use crate::log::debug;
use crate::render::defaults::{DEFAULT_WEIGHT, VIEWBOX_SIZE};
use crate::types::Units;

/// Calibrated (weight, stroke width in viewbox units) pairs.
#[rustfmt::skip]
pub const CALIBRATION: [(f64, f64); 9] = [
    (100.0, 2.22),
    (200.0, 2.78),
    (300.0, 3.35),
    (400.0, 3.91),
    (500.0, 4.48),
    (600.0, 5.05),
    (700.0, 5.61),
    (800.0, 6.18),
    (900.0, 6.74),
];

static CANONICAL: LazyLock<WeightCurve> = LazyLock::new(WeightCurve::canonical);

/// Piecewise-linear map from weight to stroke width.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightCurve {
    /// Sorted by weight, strictly increasing; widths non-decreasing.
    points: Vec<(f64, Units)>,
}

impl Default for WeightCurve {
    fn default() -> Self {
        Self::canonical()
    }
}

impl WeightCurve {
    /// The 9-point table the icon set was calibrated against
    pub fn canonical() -> Self {
        Self {
            points: CALIBRATION.iter().map(|&(w, s)| (w, Units(s))).collect(),
        }
    }

    /// Build a curve from custom calibration points.
    ///
    /// Points must be non-empty and finite, with strictly increasing weights
    /// and non-decreasing stroke widths in `(0, VIEWBOX_SIZE)`.
    pub fn new(points: impl IntoIterator<Item = (f64, f64)>) -> Result<Self, IconError> {
        let points: Vec<(f64, f64)> = points.into_iter().collect();
        let invalid = |reason: String| IconError::InvalidCalibration { reason };

        if points.is_empty() {
            return Err(invalid("no calibration points".to_string()));
        }
        for &(weight, width) in &points {
            if !weight.is_finite() || !width.is_finite() {
                return Err(invalid(format!("non-finite point ({weight}, {width})")));
            }
            if width <= 0.0 {
                return Err(invalid(format!("stroke width {width} at weight {weight} is not positive")));
            }
            if width >= VIEWBOX_SIZE.raw() {
                return Err(invalid(format!(
                    "stroke width {width} at weight {weight} is not narrower than the viewbox"
                )));
            }
        }
        for pair in points.windows(2) {
            let ((w0, s0), (w1, s1)) = (pair[0], pair[1]);
            if w1 <= w0 {
                return Err(invalid(format!("weights not strictly increasing at {w0} -> {w1}")));
            }
            if s1 < s0 {
                return Err(invalid(format!("stroke width decreases from {s0} to {s1} at weight {w1}")));
            }
        }

        Ok(Self {
            points: points.into_iter().map(|(w, s)| (w, Units(s))).collect(),
        })
    }

    /// Calibration points as (weight, stroke width)
    pub fn points(&self) -> &[(f64, Units)] {
        &self.points
    }

    fn first(&self) -> (f64, Units) {
        self.points[0]
    }

    fn last(&self) -> (f64, Units) {
        self.points[self.points.len() - 1]
    }

    /// Resolve a weight to a stroke width.
    ///
    /// Total for every input: the weight is clamped to the table's range,
    /// and NaN resolves as the default weight.
    pub fn resolve(&self, weight: f64) -> Units {
        let weight = if weight.is_nan() {
            debug!("NaN weight, using default");
            DEFAULT_WEIGHT.raw()
        } else {
            weight
        };
        let (first, last) = (self.first(), self.last());
        let clamped = weight.clamp(first.0, last.0);

        if let Some(&(_, width)) = self.points.iter().find(|(w, _)| *w == clamped) {
            return width;
        }

        // Outside the table both neighbours collapse to the nearest end.
        let lower = self
            .points
            .iter()
            .rev()
            .find(|(w, _)| *w < clamped)
            .copied()
            .unwrap_or(first);
        let upper = self
            .points
            .iter()
            .find(|(w, _)| *w > clamped)
            .copied()
            .unwrap_or(last);

        if lower.0 == upper.0 {
            return lower.1;
        }

        let t = (clamped - lower.0) / (upper.0 - lower.0);
        lower.1 + (upper.1 - lower.1) * t
    }
}

/// Resolve a weight against the canonical calibration table.
pub fn resolve_stroke_width(weight: f64) -> f64 {
    CANONICAL.resolve(weight).raw()
}
