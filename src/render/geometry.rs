//! Stroke compensation geometry.
//!
//! Paths are authored for `BASE_STROKE_WIDTH`. A heavier stroke eats more of
//! the viewbox margin, so content is scaled down about the viewbox center
//! and the stroke-width attribute is scaled up by the inverse, leaving the
//! rendered stroke at the requested width.

use glam::{DAffine2, DVec2};

use crate::log::warn;
use crate::types::{Scalar, Units};

use super::defaults::{
    BASE_STROKE_WIDTH, INNER_SCALE_FLOOR, MIN_SCALE_FACTOR, SHRINK_MULTIPLIER, STROKE_EPSILON,
    VIEWBOX_SIZE, center,
};

/// A uniform scale about the viewbox center.
///
/// Equivalent to `translate(offset, offset) scale(scale)` with
/// `offset = center * (1 - scale)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    scale: Scalar,
}

impl Placement {
    pub const IDENTITY: Placement = Placement { scale: Scalar::ONE };

    pub fn about_center(scale: Scalar) -> Self {
        Self { scale }
    }

    pub fn scale(&self) -> f64 {
        self.scale.raw()
    }

    /// Translation applied on both axes after scaling
    pub fn offset(&self) -> f64 {
        center().raw() * (1.0 - self.scale.raw())
    }

    /// Map an authored point into the viewbox
    pub fn apply(&self, p: DVec2) -> DVec2 {
        p * self.scale.raw() + DVec2::splat(self.offset())
    }

    pub fn to_affine(&self) -> DAffine2 {
        DAffine2::from_scale_angle_translation(
            DVec2::splat(self.scale.raw()),
            0.0,
            DVec2::splat(self.offset()),
        )
    }
}

/// Outer content scale for a stroke width and inset.
///
/// `(VIEWBOX - stroke - 2·inset) / (VIEWBOX - BASE)`, never below
/// `MIN_SCALE_FACTOR`.
pub fn scale_factor(stroke_width: Units, inset: Units) -> Scalar {
    let original = VIEWBOX_SIZE - BASE_STROKE_WIDTH;
    let available = VIEWBOX_SIZE - stroke_width - inset * 2.0;
    let scale = available.checked_div(original).unwrap_or(MIN_SCALE_FACTOR);

    if scale < MIN_SCALE_FACTOR {
        warn!(
            stroke_width = stroke_width.raw(),
            inset = inset.raw(),
            scale = scale.raw(),
            "stroke and inset leave no room in the viewbox, clamping scale"
        );
        return MIN_SCALE_FACTOR;
    }
    scale
}

/// Secondary shrink for the inner glyph of a compound icon.
///
/// `scaled_outer_size` is the outer shape's diameter after the outer scale.
/// At or below the base stroke there is no shrink; above it the shrink is
/// amplified by `SHRINK_MULTIPLIER` and floored at `INNER_SCALE_FLOOR`.
pub fn inner_scale_factor(stroke_width: Units, scaled_outer_size: Units) -> Scalar {
    let increase = stroke_width - BASE_STROKE_WIDTH;
    if increase.raw() <= STROKE_EPSILON {
        return Scalar::ONE;
    }
    if scaled_outer_size.raw() <= 0.0 {
        return Scalar::ONE;
    }

    let per_side = increase / 2.0;
    let Some(ratio) = per_side.checked_div(scaled_outer_size) else {
        return Scalar::ONE;
    };
    let reduction = Scalar(ratio.raw() * SHRINK_MULTIPLIER);
    (Scalar::ONE - reduction).max(INNER_SCALE_FLOOR)
}

/// Stroke width and content scale for one render
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeMetrics {
    pub stroke_width: Units,
    pub inset: Units,
    pub scale_factor: Scalar,
}

impl StrokeMetrics {
    pub fn new(stroke_width: Units, inset: Units) -> Self {
        Self {
            stroke_width,
            inset,
            scale_factor: scale_factor(stroke_width, inset),
        }
    }

    pub fn outer_placement(&self) -> Placement {
        Placement::about_center(self.scale_factor)
    }

    /// Placement of an inner glyph that shrinks by `inner` on top of the outer scale
    pub fn inner_placement(&self, inner: Scalar) -> Placement {
        Placement::about_center(self.scale_factor * inner)
    }

    /// Inner shrink for a compound icon whose outer shape spans `outer_size`
    pub fn inner_scale_factor(&self, outer_size: Units) -> Scalar {
        inner_scale_factor(self.stroke_width, outer_size * self.scale_factor)
    }

    /// Stroke-width attribute that renders at the requested width once the
    /// outer scale and `extra` have both been applied.
    pub fn compensated(&self, extra: Scalar) -> Units {
        self.stroke_width
            .checked_div_scalar(self.scale_factor * extra)
            .unwrap_or(self.stroke_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    const EPS: f64 = 1e-9;

    #[test]
    fn base_stroke_is_unscaled() {
        assert_eq!(scale_factor(BASE_STROKE_WIDTH, Units::ZERO), Scalar::ONE);
        assert_eq!(Placement::about_center(Scalar::ONE).offset(), 0.0);
    }

    #[test]
    fn regular_weight_scale() {
        let s = scale_factor(Units(3.91), Units::ZERO).raw();
        assert!((s - 28.09 / 29.78).abs() < EPS);
        let offset = Placement::about_center(Scalar(s)).offset();
        assert!((offset - 16.0 * (1.0 - s)).abs() < EPS);
    }

    #[test]
    fn inset_shrinks_content() {
        let plain = scale_factor(Units(2.22), Units::ZERO);
        let inset = scale_factor(Units(2.22), Units(2.0));
        assert!(inset < plain);
        assert!((inset.raw() - 25.78 / 29.78).abs() < EPS);
    }

    #[test]
    fn degenerate_scale_is_clamped() {
        assert_eq!(scale_factor(Units(32.0), Units::ZERO), MIN_SCALE_FACTOR);
        assert_eq!(scale_factor(Units(40.0), Units::ZERO), MIN_SCALE_FACTOR);
        assert_eq!(scale_factor(Units(2.22), Units(16.0)), MIN_SCALE_FACTOR);
    }

    #[test]
    fn compensation_round_trips() {
        for stroke in [2.22, 3.91, 6.74, 12.0] {
            let m = StrokeMetrics::new(Units(stroke), Units(1.5));
            let w = m.compensated(Scalar::ONE);
            assert!((w.raw() * m.scale_factor.raw() - stroke).abs() < EPS);

            let inner = m.inner_scale_factor(Units(29.78));
            let wi = m.compensated(inner);
            assert!((wi.raw() * m.scale_factor.raw() * inner.raw() - stroke).abs() < EPS);
        }
    }

    #[test]
    fn placement_scales_about_center() {
        let p = Placement::about_center(Scalar(0.5));
        assert_eq!(p.apply(dvec2(16.0, 16.0)), dvec2(16.0, 16.0));
        assert_eq!(p.apply(dvec2(0.0, 32.0)), dvec2(8.0, 24.0));
        let affine = p.to_affine();
        assert!((affine.transform_point2(dvec2(4.0, 28.0)) - p.apply(dvec2(4.0, 28.0))).length() < EPS);
    }

    #[test]
    fn inner_shrink_values() {
        assert_eq!(inner_scale_factor(Units(2.22), Units(29.78)), Scalar::ONE);
        assert_eq!(inner_scale_factor(Units(1.0), Units(29.78)), Scalar::ONE);
        assert_eq!(inner_scale_factor(Units(3.91), Units::ZERO), Scalar::ONE);

        // 400: per side 0.845 over 28.09 scaled outer size.
        let m = StrokeMetrics::new(Units(3.91), Units::ZERO);
        let inner = m.inner_scale_factor(Units(29.78)).raw();
        let scaled_outer = 29.78 * m.scale_factor.raw();
        let expected = 1.0 - ((3.91 - 2.22) / 2.0 / scaled_outer) * 5.6;
        assert!((inner - expected).abs() < EPS);
        assert!(inner > 0.8 && inner < 0.85);
    }

    #[test]
    fn inner_shrink_has_floor() {
        assert_eq!(inner_scale_factor(Units(1000.0), Units(1.0)), INNER_SCALE_FLOOR);
        let m = StrokeMetrics::new(Units(30.0), Units::ZERO);
        assert_eq!(m.inner_scale_factor(Units(29.78)), INNER_SCALE_FLOOR);
    }
}
