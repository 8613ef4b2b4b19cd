//! Icon catalog: the immutable name → definition map.
//!
//! A definition is a simple icon (stroke paths), a compound icon (an outer
//! shape plus an inner glyph that shrinks independently), or a static icon
//! served from pre-rasterized files. Which one is decided once, here.

use std::collections::HashMap;

use enum_dispatch::enum_dispatch;

use crate::errors::IconError;
use crate::log::warn;
use crate::path::{Bounds, PathData, union_bounds};
use crate::render::defaults::VIEWBOX_SIZE;
use crate::render::geometry::StrokeMetrics;
use crate::render::{GlyphLayout, GroupRole, LineJoin, PathGroup, RenderedPath};
use crate::types::{Scalar, Units};

/// Longest edit distance still offered as a suggestion
const MAX_SUGGESTION_DISTANCE: usize = 3;

/// Behaviour shared by every kind of icon definition
#[enum_dispatch]
pub trait Glyph {
    fn name(&self) -> &str;

    fn line_join(&self) -> LineJoin;

    /// Place the glyph's paths for the given stroke metrics
    fn layout<'c>(&'c self, metrics: &StrokeMetrics) -> GlyphLayout<'c>;

    /// Centerline bounds of all authored geometry, None for static icons
    fn bounds(&self) -> Option<Bounds>;
}

/// Stroke paths sharing one placement
#[derive(Debug, Clone, PartialEq)]
pub struct SimpleIcon {
    pub name: String,
    pub paths: Vec<PathData>,
    pub line_join: LineJoin,
}

impl Glyph for SimpleIcon {
    fn name(&self) -> &str {
        &self.name
    }

    fn line_join(&self) -> LineJoin {
        self.line_join
    }

    fn layout<'c>(&'c self, metrics: &StrokeMetrics) -> GlyphLayout<'c> {
        let stroke_width = metrics.compensated(Scalar::ONE).raw();
        GlyphLayout {
            groups: vec![PathGroup {
                role: GroupRole::Main,
                placement: metrics.outer_placement(),
                paths: rendered(&self.paths, stroke_width),
            }],
            inner_scale_factor: None,
        }
    }

    fn bounds(&self) -> Option<Bounds> {
        union_bounds(&self.paths)
    }
}

/// An outer shape with an inner glyph that shrinks as the stroke grows
#[derive(Debug, Clone, PartialEq)]
pub struct CompoundIcon {
    pub name: String,
    pub outer: Vec<PathData>,
    /// Diameter of the outer shape in authoring units
    pub outer_size: Units,
    pub inner: Vec<PathData>,
    pub line_join: LineJoin,
}

impl Glyph for CompoundIcon {
    fn name(&self) -> &str {
        &self.name
    }

    fn line_join(&self) -> LineJoin {
        self.line_join
    }

    fn layout<'c>(&'c self, metrics: &StrokeMetrics) -> GlyphLayout<'c> {
        let inner = metrics.inner_scale_factor(self.outer_size);
        GlyphLayout {
            groups: vec![
                PathGroup {
                    role: GroupRole::Outer,
                    placement: metrics.outer_placement(),
                    paths: rendered(&self.outer, metrics.compensated(Scalar::ONE).raw()),
                },
                PathGroup {
                    role: GroupRole::Inner,
                    placement: metrics.inner_placement(inner),
                    paths: rendered(&self.inner, metrics.compensated(inner).raw()),
                },
            ],
            inner_scale_factor: Some(inner),
        }
    }

    fn bounds(&self) -> Option<Bounds> {
        union_bounds(self.outer.iter().chain(&self.inner))
    }
}

/// A pre-rasterized icon; rendering it is the caller's job
#[derive(Debug, Clone, PartialEq)]
pub struct StaticIcon {
    pub name: String,
}

impl Glyph for StaticIcon {
    fn name(&self) -> &str {
        &self.name
    }

    fn line_join(&self) -> LineJoin {
        LineJoin::default()
    }

    fn layout<'c>(&'c self, _metrics: &StrokeMetrics) -> GlyphLayout<'c> {
        GlyphLayout::default()
    }

    fn bounds(&self) -> Option<Bounds> {
        None
    }
}

fn rendered(paths: &[PathData], stroke_width: f64) -> Vec<RenderedPath<'_>> {
    paths
        .iter()
        .map(|data| RenderedPath { data, stroke_width })
        .collect()
}

/// Every catalog entry is exactly one of these
#[enum_dispatch(Glyph)]
#[derive(Debug, Clone, PartialEq)]
pub enum IconDefinition {
    Simple(SimpleIcon),
    Compound(CompoundIcon),
    Static(StaticIcon),
}

impl IconDefinition {
    pub fn is_static(&self) -> bool {
        matches!(self, IconDefinition::Static(_))
    }
}

/// Immutable set of icon definitions, looked up by name
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    icons: Vec<IconDefinition>,
    index: HashMap<String, usize>,
}

impl Catalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// The icon set shipped with this crate
    pub fn builtin() -> &'static Catalog {
        crate::icons::builtin()
    }

    pub fn get(&self, name: &str) -> Option<&IconDefinition> {
        self.index.get(name).map(|&i| &self.icons[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Look up a name, reporting unknown names as a recoverable error
    pub fn lookup(&self, name: &str) -> Result<&IconDefinition, IconError> {
        self.get(name).ok_or_else(|| {
            warn!(name, "icon not found");
            IconError::NotFound {
                name: name.to_string(),
                suggestion: self
                    .closest_name(name)
                    .map(|candidate| format!("did you mean `{candidate}`?")),
            }
        })
    }

    /// Names in the order they were added
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.icons.iter().map(|icon| icon.name())
    }

    pub fn iter(&self) -> impl Iterator<Item = &IconDefinition> {
        self.icons.iter()
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    fn closest_name(&self, name: &str) -> Option<&str> {
        self.names()
            .map(|candidate| (edit_distance(name, candidate), candidate))
            .filter(|&(distance, _)| distance <= MAX_SUGGESTION_DISTANCE)
            .min_by_key(|&(distance, _)| distance)
            .map(|(_, candidate)| candidate)
    }
}

/// Levenshtein distance over chars
fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut row = vec![0; b.len() + 1];
    for (i, ca) in a.chars().enumerate() {
        row[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            row[j + 1] = substitution.min(prev[j + 1] + 1).min(row[j] + 1);
        }
        std::mem::swap(&mut prev, &mut row);
    }
    prev[b.len()]
}

/// Icon source as authored, before parsing
#[derive(Debug, Clone)]
enum PendingIcon {
    Simple {
        name: String,
        paths: Vec<String>,
        line_join: LineJoin,
    },
    Compound {
        name: String,
        outer: Vec<String>,
        outer_size: f64,
        inner: Vec<String>,
        line_join: LineJoin,
    },
    Static {
        name: String,
    },
}

/// Collects authored icons; `build` parses and validates them all
#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    pending: Vec<PendingIcon>,
}

impl CatalogBuilder {
    pub fn simple(mut self, name: &str, paths: &[&str], line_join: LineJoin) -> Self {
        self.pending.push(PendingIcon::Simple {
            name: name.to_string(),
            paths: paths.iter().map(|p| p.to_string()).collect(),
            line_join,
        });
        self
    }

    /// `outer_size` is the outer shape's diameter in viewbox units
    pub fn compound(
        mut self,
        name: &str,
        outer: &[&str],
        outer_size: f64,
        inner: &[&str],
        line_join: LineJoin,
    ) -> Self {
        self.pending.push(PendingIcon::Compound {
            name: name.to_string(),
            outer: outer.iter().map(|p| p.to_string()).collect(),
            outer_size,
            inner: inner.iter().map(|p| p.to_string()).collect(),
            line_join,
        });
        self
    }

    pub fn static_icon(mut self, name: &str) -> Self {
        self.pending.push(PendingIcon::Static {
            name: name.to_string(),
        });
        self
    }

    pub fn build(self) -> Result<Catalog, IconError> {
        let mut catalog = Catalog::default();
        for pending in self.pending {
            let icon = parse_pending(pending)?;
            check_geometry(&icon)?;

            let name = icon.name().to_string();
            if catalog.index.contains_key(&name) {
                return Err(IconError::DuplicateIcon { name });
            }
            catalog.index.insert(name, catalog.icons.len());
            catalog.icons.push(icon);
        }
        Ok(catalog)
    }
}

fn parse_paths(name: &str, group: &str, sources: &[String]) -> Result<Vec<PathData>, IconError> {
    if sources.is_empty() {
        return Err(IconError::EmptyIcon {
            name: name.to_string(),
        });
    }
    sources
        .iter()
        .enumerate()
        .map(|(i, src)| PathData::parse(&format!("{name}/{group}[{i}]"), src))
        .collect()
}

fn parse_pending(pending: PendingIcon) -> Result<IconDefinition, IconError> {
    let icon = match pending {
        PendingIcon::Simple { name, paths, line_join } => {
            let paths = parse_paths(&name, "paths", &paths)?;
            SimpleIcon { name, paths, line_join }.into()
        }
        PendingIcon::Compound { name, outer, outer_size, inner, line_join } => {
            let outer_size = Units::try_positive(outer_size).map_err(|_| {
                IconError::InvalidOuterSize {
                    name: name.clone(),
                    value: outer_size,
                }
            })?;
            let outer = parse_paths(&name, "outer", &outer)?;
            let inner = parse_paths(&name, "inner", &inner)?;
            CompoundIcon { name, outer, outer_size, inner, line_join }.into()
        }
        PendingIcon::Static { name } => StaticIcon { name }.into(),
    };
    Ok(icon)
}

/// Authored centerlines must stay inside the viewbox
fn check_geometry(icon: &IconDefinition) -> Result<(), IconError> {
    let size = VIEWBOX_SIZE.raw();
    match icon.bounds() {
        Some(bounds) if !bounds.within(0.0, size) => Err(IconError::OutOfBounds {
            name: icon.name().to_string(),
            size,
        }),
        _ => Ok(()),
    }
}
