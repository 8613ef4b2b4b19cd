//! Core types for icon rendering

use std::fmt;
use std::str::FromStr;

use crate::errors::IconError;
use crate::path::PathData;
use crate::types::{Scalar, Weight};

use super::defaults;
use super::geometry::Placement;
use super::svg::fmt_num;

/// How the stroke thickness of a render is chosen
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StrokeSpec {
    /// Resolve through the weight curve (clamped to the axis)
    Weight(Weight),
    /// Use this width in viewbox units, bypassing the curve
    Width(f64),
}

impl Default for StrokeSpec {
    fn default() -> Self {
        StrokeSpec::Weight(defaults::DEFAULT_WEIGHT)
    }
}

/// Rendered size of the icon box
#[derive(Debug, Clone, PartialEq)]
pub enum IconSize {
    /// Pixels
    Px(f64),
    /// A CSS length such as `1em` or `1.5rem`, kept verbatim
    Css(String),
}

/// Units accepted in CSS sizes
const CSS_UNITS: &[&str] = &["px", "em", "rem", "%", "vw", "vh", "vmin", "vmax", "pt", "ch", "ex"];

impl Default for IconSize {
    fn default() -> Self {
        IconSize::Css(defaults::DEFAULT_SIZE.to_string())
    }
}

impl From<f64> for IconSize {
    fn from(px: f64) -> Self {
        IconSize::Px(px)
    }
}

impl IconSize {
    /// Check that the size is usable as an SVG width/height
    pub fn validate(&self) -> Result<(), IconError> {
        match self {
            IconSize::Px(px) if px.is_finite() && *px > 0.0 => Ok(()),
            IconSize::Px(px) => Err(IconError::InvalidSize {
                value: px.to_string(),
            }),
            IconSize::Css(css) => css.parse::<IconSize>().map(|_| ()),
        }
    }
}

impl FromStr for IconSize {
    type Err = IconError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || IconError::InvalidSize {
            value: s.to_string(),
        };
        let trimmed = s.trim();

        if let Ok(px) = trimmed.parse::<f64>() {
            return if px.is_finite() && px > 0.0 {
                Ok(IconSize::Px(px))
            } else {
                Err(invalid())
            };
        }

        let split = trimmed
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .ok_or_else(invalid)?;
        let (number, unit) = trimmed.split_at(split);
        let value: f64 = number.parse().map_err(|_| invalid())?;
        if !CSS_UNITS.contains(&unit) || !value.is_finite() || value <= 0.0 {
            return Err(invalid());
        }
        Ok(IconSize::Css(trimmed.to_string()))
    }
}

impl fmt::Display for IconSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IconSize::Px(px) => write!(f, "{}", fmt_num(*px)),
            IconSize::Css(css) => write!(f, "{css}"),
        }
    }
}

/// A request to render one icon
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRequest {
    pub name: String,
    pub stroke: StrokeSpec,
    pub size: IconSize,
    /// Extra padding in viewbox units, expected in 0..=16
    pub inset: f64,
    pub color: String,
}

impl RenderRequest {
    /// A request with the default weight, size, inset and color
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stroke: StrokeSpec::default(),
            size: IconSize::default(),
            inset: defaults::DEFAULT_INSET.raw(),
            color: defaults::DEFAULT_COLOR.to_string(),
        }
    }

    pub fn weight(mut self, weight: impl Into<Weight>) -> Self {
        self.stroke = StrokeSpec::Weight(weight.into());
        self
    }

    /// Explicit stroke width in viewbox units; overrides any weight
    pub fn stroke_width(mut self, width: f64) -> Self {
        self.stroke = StrokeSpec::Width(width);
        self
    }

    pub fn size(mut self, size: impl Into<IconSize>) -> Self {
        self.size = size.into();
        self
    }

    pub fn inset(mut self, inset: f64) -> Self {
        self.inset = inset;
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }
}

/// What a path group is within its icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupRole {
    /// All paths of a simple icon
    Main,
    /// The enclosing shape of a compound icon
    Outer,
    /// The glyph inside a compound icon's outer shape
    Inner,
}

/// Corner join style of an icon's strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
}

impl LineJoin {
    pub fn as_svg(self) -> &'static str {
        match self {
            LineJoin::Miter => "miter",
            LineJoin::Round => "round",
        }
    }
}

/// One path with its compensated stroke-width attribute
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderedPath<'c> {
    pub data: &'c PathData,
    pub stroke_width: f64,
}

/// Paths sharing one placement
#[derive(Debug, Clone, PartialEq)]
pub struct PathGroup<'c> {
    pub role: GroupRole,
    pub placement: Placement,
    pub paths: Vec<RenderedPath<'c>>,
}

/// Output of laying out one glyph
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GlyphLayout<'c> {
    pub groups: Vec<PathGroup<'c>>,
    /// Present for compound icons only
    pub inner_scale_factor: Option<Scalar>,
}

/// A fully positioned icon, ready for any vector surface
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRender<'c> {
    pub name: &'c str,
    pub size: IconSize,
    pub color: String,
    /// Requested (visual) stroke width in viewbox units
    pub stroke_width: f64,
    pub scale_factor: f64,
    pub inner_scale_factor: Option<f64>,
    pub line_join: LineJoin,
    pub groups: Vec<PathGroup<'c>>,
}

impl ResolvedRender<'_> {
    /// Side of the square viewbox the groups are placed in
    pub fn view_box(&self) -> f64 {
        defaults::VIEWBOX_SIZE.raw()
    }

    /// Translation of the outer placement on both axes
    pub fn translate_offset(&self) -> f64 {
        Placement::about_center(Scalar(self.scale_factor)).offset()
    }

    pub fn group(&self, role: GroupRole) -> Option<&PathGroup<'_>> {
        self.groups.iter().find(|g| g.role == role)
    }
}

/// A pre-rasterized icon; its files are fetched outside this crate
#[derive(Debug, Clone, PartialEq)]
pub struct StaticIconRef<'c> {
    pub name: &'c str,
    /// Clamped weight, for picking the nearest precomputed file
    pub weight: Weight,
    pub size: IconSize,
}

/// Result of rendering a catalog icon
#[derive(Debug, Clone, PartialEq)]
pub enum IconRender<'c> {
    Dynamic(ResolvedRender<'c>),
    Static(StaticIconRef<'c>),
}

impl<'c> IconRender<'c> {
    pub fn as_dynamic(&self) -> Option<&ResolvedRender<'c>> {
        match self {
            IconRender::Dynamic(r) => Some(r),
            IconRender::Static(_) => None,
        }
    }

    pub fn into_dynamic(self) -> Option<ResolvedRender<'c>> {
        match self {
            IconRender::Dynamic(r) => Some(r),
            IconRender::Static(_) => None,
        }
    }
}

/// Output shaping for `ResolvedRender::to_svg`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SvgOptions {
    /// `class` attribute on the root element
    pub class: Option<String>,
    /// Accessible title; without one the icon is marked `aria-hidden`
    pub title: Option<String>,
}
