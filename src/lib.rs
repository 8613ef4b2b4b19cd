//! Variable-weight stroke icons.
//!
//! Every icon is authored once in a 32×32 viewbox for a 2.22-unit stroke.
//! Rendering at another weight thickens the stroke along a calibrated curve,
//! shrinks the glyph about the viewbox center so the thicker stroke still
//! fits, and compensates the stroke-width attribute for that shrink so the
//! visible thickness is exactly the requested one.

use pest_derive::Parser;

pub mod catalog;
pub mod errors;
pub mod icons;
pub mod log;
pub mod path;
pub mod render;
pub mod types;
pub mod weight;

pub use catalog::{Catalog, CatalogBuilder, CompoundIcon, Glyph, IconDefinition, SimpleIcon, StaticIcon};
pub use errors::IconError;
pub use path::{Bounds, PathData, Segment};
pub use render::{
    IconRender, IconRenderer, IconSize, RenderRequest, ResolvedRender, StaticIconRef, StrokeSpec,
    SvgOptions, render_icon,
};
pub use types::{Scalar, Units, Weight};
pub use weight::{WeightCurve, resolve_stroke_width};

#[derive(Parser)]
#[grammar = "path_data.pest"]
pub struct PathDataParser;

/// Render a builtin icon to an SVG document.
///
/// Static icons have no path geometry and are reported as an error; use
/// [`render_icon`] to receive them as [`StaticIconRef`]s instead.
pub fn render_svg(request: &RenderRequest) -> Result<String, miette::Report> {
    match render_icon(request)? {
        IconRender::Dynamic(render) => render.to_svg(&SvgOptions::default()),
        IconRender::Static(icon) => Err(miette::miette!(
            help = "static icons are served from pre-rasterized files",
            "icon {} has no vector geometry",
            icon.name
        )),
    }
}
