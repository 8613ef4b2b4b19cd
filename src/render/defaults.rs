//! Fixed geometry constants and request defaults.
//!
//! The calibration values are visual-design data, not derived quantities.

use crate::types::{Scalar, Units, Weight};

/// Side of the square authoring viewbox
pub const VIEWBOX_SIZE: Units = Units::units(32.0);
/// Stroke width every icon path was drawn at
pub const BASE_STROKE_WIDTH: Units = Units::units(2.22);
/// Amplification applied to the inner glyph's shrink in compound icons
pub const SHRINK_MULTIPLIER: f64 = 5.6;
/// The inner glyph of a compound icon never shrinks below this
pub const INNER_SCALE_FLOOR: Scalar = Scalar(0.5);
/// Lower bound on the outer content scale when the stroke eats the whole viewbox
pub const MIN_SCALE_FACTOR: Scalar = Scalar(0.05);
/// Stroke growth below this counts as "at the reference weight"
pub const STROKE_EPSILON: f64 = 1e-9;

pub const DEFAULT_WEIGHT: Weight = Weight::REGULAR;
pub const DEFAULT_SIZE: &str = "1em";
pub const DEFAULT_INSET: Units = Units::ZERO;
pub const DEFAULT_COLOR: &str = "inherit";

/// Center of the viewbox on both axes
pub fn center() -> Units {
    VIEWBOX_SIZE / 2.0
}
