//! Facet-derived types for SVG icon parsing and serialization.
//!
//! This crate provides the small subset of strongly-typed SVG elements a
//! stroke icon needs: a root `<svg>`, `<title>`, `<g>` groups carrying
//! transforms and stroke presentation, and `<path>` leaves.
//!
//! # Example
//!
//! ```rust
//! use facet_svg::Svg;
//!
//! let svg_str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 32 32">
//!     <g stroke="currentColor"><path d="M2 16H30" stroke-width="2.22"/></g>
//! </svg>"#;
//!
//! let svg: Svg = facet_xml::from_str(svg_str).unwrap();
//! ```

use facet::Facet;
use facet_xml as xml;

/// SVG namespace URI
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Root SVG element
#[derive(Facet, Debug, Clone, Default)]
#[facet(xml::ns_all = "http://www.w3.org/2000/svg")]
pub struct Svg {
    #[facet(xml::attribute)]
    pub xmlns: Option<String>,
    #[facet(xml::attribute)]
    pub class: Option<String>,
    #[facet(xml::attribute)]
    pub width: Option<String>,
    #[facet(xml::attribute)]
    pub height: Option<String>,
    #[facet(xml::attribute, rename = "viewBox")]
    pub view_box: Option<String>,
    #[facet(xml::attribute)]
    pub fill: Option<String>,
    #[facet(xml::attribute)]
    pub role: Option<String>,
    #[facet(xml::attribute, rename = "aria-hidden")]
    pub aria_hidden: Option<String>,
    #[facet(xml::elements)]
    pub children: Vec<SvgNode>,
}

/// Any SVG node an icon is made of
#[derive(Facet, Debug, Clone)]
#[facet(xml::ns_all = "http://www.w3.org/2000/svg")]
#[repr(u8)]
pub enum SvgNode {
    #[facet(rename = "title")]
    Title(Title),
    #[facet(rename = "g")]
    G(Group),
    #[facet(rename = "path")]
    Path(Path),
}

/// SVG title element (`<title>`), the accessible name of the icon
#[derive(Facet, Debug, Clone, Default)]
pub struct Title {
    #[facet(xml::text)]
    pub content: String,
}

/// SVG group element (`<g>`)
///
/// Icon groups carry the placement transform and the stroke presentation
/// shared by their paths.
#[derive(Facet, Debug, Clone, Default)]
#[facet(xml::ns_all = "http://www.w3.org/2000/svg")]
pub struct Group {
    #[facet(xml::attribute)]
    pub id: Option<String>,
    #[facet(xml::attribute)]
    pub class: Option<String>,
    #[facet(xml::attribute)]
    pub transform: Option<String>,
    #[facet(xml::attribute)]
    pub stroke: Option<String>,
    #[facet(xml::attribute, rename = "stroke-linecap")]
    pub stroke_linecap: Option<String>,
    #[facet(xml::attribute, rename = "stroke-linejoin")]
    pub stroke_linejoin: Option<String>,
    #[facet(xml::elements)]
    pub children: Vec<SvgNode>,
}

/// SVG path element (`<path>`)
///
/// Paint comes from the enclosing group; a path only carries its geometry
/// and its compensated stroke width.
#[derive(Facet, Debug, Clone, Default)]
#[facet(xml::ns_all = "http://www.w3.org/2000/svg")]
pub struct Path {
    #[facet(xml::attribute)]
    pub d: Option<String>,
    #[facet(xml::attribute, rename = "stroke-width")]
    pub stroke_width: Option<String>,
}

impl Svg {
    /// All groups directly under the root, in document order
    pub fn groups(&self) -> impl Iterator<Item = &Group> {
        self.children.iter().filter_map(|node| match node {
            SvgNode::G(g) => Some(g),
            _ => None,
        })
    }

    /// The accessible title, if any
    pub fn title(&self) -> Option<&str> {
        self.children.iter().find_map(|node| match node {
            SvgNode::Title(t) => Some(t.content.as_str()),
            _ => None,
        })
    }
}

impl Group {
    /// All `<path>` children of this group
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.children.iter().filter_map(|node| match node {
            SvgNode::Path(p) => Some(p),
            _ => None,
        })
    }
}

// Re-export facet_xml for convenience
pub use facet_xml;
