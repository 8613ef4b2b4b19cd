//! Icon rendering
//!
//! This module is organized into submodules:
//! - `defaults`: Fixed geometry constants and request defaults
//! - `types`: Requests, resolved renders, path groups
//! - `geometry`: Outer scale, inner shrink, stroke compensation
//! - `svg`: SVG generation

pub mod defaults;
pub mod geometry;
pub mod svg;
pub mod types;

// Re-export commonly used items
pub use geometry::{Placement, StrokeMetrics};
pub use types::*;

use crate::catalog::{Catalog, Glyph, IconDefinition};
use crate::errors::IconError;
use crate::log::debug;
use crate::types::{Units, Weight};
use crate::weight::WeightCurve;
use defaults::VIEWBOX_SIZE;

/// Renders catalog icons at a requested weight or stroke width.
///
/// Holds only shared, read-only state; one renderer can serve any number
/// of threads.
#[derive(Debug, Clone)]
pub struct IconRenderer<'c> {
    catalog: &'c Catalog,
    curve: WeightCurve,
}

impl<'c> IconRenderer<'c> {
    /// A renderer over `catalog` using the canonical weight curve
    pub fn new(catalog: &'c Catalog) -> Self {
        Self {
            catalog,
            curve: WeightCurve::canonical(),
        }
    }

    /// Replace the weight curve
    pub fn with_curve(mut self, curve: WeightCurve) -> Self {
        self.curve = curve;
        self
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    pub fn curve(&self) -> &WeightCurve {
        &self.curve
    }

    /// Stroke width in viewbox units for a request's stroke spec.
    ///
    /// Explicit widths must be positive and narrower than the viewbox.
    pub fn stroke_width(&self, stroke: StrokeSpec) -> Result<Units, IconError> {
        match stroke {
            StrokeSpec::Weight(weight) => Ok(self.curve.resolve(weight.raw())),
            StrokeSpec::Width(width) => match Units::try_positive(width) {
                Ok(units) if units < VIEWBOX_SIZE => Ok(units),
                _ => Err(IconError::InvalidStrokeWidth { value: width }),
            },
        }
    }

    /// Render one icon.
    ///
    /// Unknown names come back as `IconError::NotFound`; static icons are
    /// dispatched to `IconRender::Static` without touching any geometry.
    pub fn render(&self, request: &RenderRequest) -> Result<IconRender<'c>, IconError> {
        let icon = self.catalog.lookup(&request.name)?;
        request.size.validate()?;

        if let IconDefinition::Static(icon) = icon {
            let weight = match request.stroke {
                StrokeSpec::Weight(weight) => weight.clamped(),
                StrokeSpec::Width(_) => Weight::default(),
            };
            return Ok(IconRender::Static(StaticIconRef {
                name: &icon.name,
                weight,
                size: request.size.clone(),
            }));
        }

        let stroke_width = self.stroke_width(request.stroke)?;
        let inset = Units::try_new(request.inset)
            .map_err(|_| IconError::InvalidInset { value: request.inset })?;

        let metrics = StrokeMetrics::new(stroke_width, inset);
        let layout = icon.layout(&metrics);

        debug!(
            name = icon.name(),
            stroke_width = stroke_width.raw(),
            scale = metrics.scale_factor.raw(),
            inner_scale = layout.inner_scale_factor.map(|s| s.raw()),
            "resolved icon"
        );

        Ok(IconRender::Dynamic(ResolvedRender {
            name: icon.name(),
            size: request.size.clone(),
            color: request.color.clone(),
            stroke_width: stroke_width.raw(),
            scale_factor: metrics.scale_factor.raw(),
            inner_scale_factor: layout.inner_scale_factor.map(|s| s.raw()),
            line_join: icon.line_join(),
            groups: layout.groups,
        }))
    }
}

/// Render against the builtin catalog
pub fn render_icon(request: &RenderRequest) -> Result<IconRender<'static>, IconError> {
    IconRenderer::new(Catalog::builtin()).render(request)
}
