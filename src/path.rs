//! Authored path geometry.
//!
//! Icon paths are written as absolute SVG path data in the 32×32 viewbox.
//! They are parsed once into typed segments so any vector surface (SVG,
//! a canvas path API, a tessellator) can consume them.

use std::fmt;

use glam::{DVec2, dvec2};
use pest::Parser;
use pest::error::InputLocation;
use pest::iterators::Pair;

use crate::errors::IconError;
use crate::{PathDataParser, Rule};

/// Samples taken along an arc when measuring bounds
const ARC_SAMPLES: usize = 32;

/// One absolute path command
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    MoveTo(DVec2),
    LineTo(DVec2),
    Horizontal(f64),
    Vertical(f64),
    Arc {
        radii: DVec2,
        /// x-axis rotation in degrees
        rotation: f64,
        large_arc: bool,
        sweep: bool,
        to: DVec2,
    },
    Close,
}

/// Parsed path data for one stroke path
#[derive(Debug, Clone, PartialEq)]
pub struct PathData {
    segments: Vec<Segment>,
}

/// Axis-aligned bounds of a path's centerline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: DVec2,
    pub max: DVec2,
}

impl Bounds {
    fn empty() -> Self {
        Self {
            min: DVec2::splat(f64::INFINITY),
            max: DVec2::splat(f64::NEG_INFINITY),
        }
    }

    fn include(&mut self, p: DVec2) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    /// Smallest box containing both
    pub fn union(self, other: Bounds) -> Bounds {
        Bounds {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> DVec2 {
        (self.min + self.max) / 2.0
    }

    /// Whether the box lies within `[lo, hi]` on both axes
    pub fn within(&self, lo: f64, hi: f64) -> bool {
        self.min.x >= lo && self.min.y >= lo && self.max.x <= hi && self.max.y <= hi
    }
}

impl PathData {
    /// Parse absolute path data (`M`, `L`, `H`, `V`, `A`, `Z`).
    ///
    /// Numbers follow SVG syntax, including a leading `+` and exponents.
    ///
    /// `name` labels the source in diagnostics.
    pub fn parse(name: &str, source: &str) -> Result<PathData, IconError> {
        let mut pairs = PathDataParser::parse(Rule::path_data, source).map_err(|e| {
            let (offset, len) = match e.location {
                InputLocation::Pos(pos) => (pos, 0),
                InputLocation::Span((start, end)) => (start, end - start),
            };
            IconError::path_syntax(name, source, offset, len, e.variant.message())
        })?;

        let mut segments = Vec::new();
        if let Some(root) = pairs.next() {
            for pair in root.into_inner() {
                if pair.as_rule() == Rule::EOI {
                    continue;
                }
                segments.push(parse_segment(name, source, pair)?);
            }
        }

        Ok(PathData { segments })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Every point the pen visits, in order, with arcs sampled.
    fn visit_points(&self, mut visit: impl FnMut(DVec2)) {
        let mut current = DVec2::ZERO;
        let mut subpath_start = DVec2::ZERO;
        for segment in &self.segments {
            match *segment {
                Segment::MoveTo(p) => {
                    current = p;
                    subpath_start = p;
                    visit(p);
                }
                Segment::LineTo(p) => {
                    current = p;
                    visit(p);
                }
                Segment::Horizontal(x) => {
                    current.x = x;
                    visit(current);
                }
                Segment::Vertical(y) => {
                    current.y = y;
                    visit(current);
                }
                Segment::Arc { radii, rotation, large_arc, sweep, to } => {
                    if let Some(arc) = arc_center(current, to, radii, rotation, large_arc, sweep) {
                        for i in 1..ARC_SAMPLES {
                            let t = i as f64 / ARC_SAMPLES as f64;
                            visit(arc.point_at(arc.start_angle + arc.sweep_angle * t));
                        }
                    }
                    visit(to);
                    current = to;
                }
                Segment::Close => {
                    current = subpath_start;
                }
            }
        }
    }

    /// Bounds of the centerline (stroke not included).
    ///
    /// Arcs are sampled, so their extent is exact only to within a small
    /// fraction of their radius.
    pub fn bounds(&self) -> Option<Bounds> {
        let mut bounds = Bounds::empty();
        let mut any = false;
        self.visit_points(|p| {
            bounds.include(p);
            any = true;
        });
        any.then_some(bounds)
    }
}

/// Bounds of several paths together
pub fn union_bounds<'a>(paths: impl IntoIterator<Item = &'a PathData>) -> Option<Bounds> {
    paths
        .into_iter()
        .filter_map(PathData::bounds)
        .reduce(Bounds::union)
}

/// An authored coordinate, written back without rounding
struct Coord(f64);

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `-0` and `0` are the same point
        if self.0 == 0.0 {
            f.write_str("0")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Path data as absolute commands.
///
/// Coordinates keep their full authored precision; only separators and
/// redundant zeros are normalized.
impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            match *segment {
                Segment::MoveTo(p) => write!(f, "M{} {}", Coord(p.x), Coord(p.y))?,
                Segment::LineTo(p) => write!(f, "L{} {}", Coord(p.x), Coord(p.y))?,
                Segment::Horizontal(x) => write!(f, "H{}", Coord(x))?,
                Segment::Vertical(y) => write!(f, "V{}", Coord(y))?,
                Segment::Arc { radii, rotation, large_arc, sweep, to } => write!(
                    f,
                    "A{} {} {} {} {} {} {}",
                    Coord(radii.x),
                    Coord(radii.y),
                    Coord(rotation),
                    u8::from(large_arc),
                    u8::from(sweep),
                    Coord(to.x),
                    Coord(to.y)
                )?,
                Segment::Close => write!(f, "Z")?,
            }
        }
        Ok(())
    }
}

fn parse_segment(name: &str, source: &str, pair: Pair<Rule>) -> Result<Segment, IconError> {
    let rule = pair.as_rule();
    let span = pair.as_span();
    let mut numbers = Vec::new();
    let mut flags = Vec::new();
    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::number => {
                let value: f64 = inner.as_str().parse().map_err(|_| {
                    let s = inner.as_span();
                    IconError::path_syntax(name, source, s.start(), s.end() - s.start(), "invalid number")
                })?;
                numbers.push(value);
            }
            Rule::flag => flags.push(inner.as_str() == "1"),
            _ => {}
        }
    }

    let segment = match rule {
        Rule::move_to => Segment::MoveTo(dvec2(numbers[0], numbers[1])),
        Rule::line_to => Segment::LineTo(dvec2(numbers[0], numbers[1])),
        Rule::horizontal => Segment::Horizontal(numbers[0]),
        Rule::vertical => Segment::Vertical(numbers[0]),
        Rule::arc => Segment::Arc {
            radii: dvec2(numbers[0], numbers[1]),
            rotation: numbers[2],
            large_arc: flags[0],
            sweep: flags[1],
            to: dvec2(numbers[3], numbers[4]),
        },
        Rule::close => Segment::Close,
        other => {
            return Err(IconError::path_syntax(
                name,
                source,
                span.start(),
                span.end() - span.start(),
                format!("unexpected rule {other:?}"),
            ));
        }
    };
    Ok(segment)
}

/// An elliptical arc in center parameterization
#[derive(Debug, Clone, Copy)]
struct CenterArc {
    center: DVec2,
    radii: DVec2,
    /// x-axis rotation in radians
    phi: f64,
    start_angle: f64,
    sweep_angle: f64,
}

impl CenterArc {
    fn point_at(&self, theta: f64) -> DVec2 {
        let (sin_phi, cos_phi) = self.phi.sin_cos();
        let (sin_t, cos_t) = theta.sin_cos();
        dvec2(
            self.center.x + self.radii.x * cos_phi * cos_t - self.radii.y * sin_phi * sin_t,
            self.center.y + self.radii.x * sin_phi * cos_t + self.radii.y * cos_phi * sin_t,
        )
    }
}

/// Convert an endpoint-parameterized SVG arc to center form.
///
/// Returns None when the arc degenerates to a straight line (zero radius
/// or coincident endpoints). Radii too small to span the endpoints are
/// scaled up, as SVG renderers do.
fn arc_center(
    from: DVec2,
    to: DVec2,
    radii: DVec2,
    rotation_deg: f64,
    large_arc: bool,
    sweep: bool,
) -> Option<CenterArc> {
    if from == to {
        return None;
    }
    let mut rx = radii.x.abs();
    let mut ry = radii.y.abs();
    if rx == 0.0 || ry == 0.0 {
        return None;
    }

    let phi = rotation_deg.to_radians();
    let (sin_phi, cos_phi) = phi.sin_cos();
    let half = (from - to) / 2.0;
    let p = dvec2(
        cos_phi * half.x + sin_phi * half.y,
        -sin_phi * half.x + cos_phi * half.y,
    );

    let lambda = (p.x * p.x) / (rx * rx) + (p.y * p.y) / (ry * ry);
    if lambda > 1.0 {
        let s = lambda.sqrt();
        rx *= s;
        ry *= s;
    }

    let num = rx * rx * ry * ry - rx * rx * p.y * p.y - ry * ry * p.x * p.x;
    let den = rx * rx * p.y * p.y + ry * ry * p.x * p.x;
    let mut coef = (num / den).max(0.0).sqrt();
    if large_arc == sweep {
        coef = -coef;
    }
    let c = dvec2(coef * rx * p.y / ry, -coef * ry * p.x / rx);

    let mid = (from + to) / 2.0;
    let center = dvec2(
        cos_phi * c.x - sin_phi * c.y + mid.x,
        sin_phi * c.x + cos_phi * c.y + mid.y,
    );

    let u = dvec2((p.x - c.x) / rx, (p.y - c.y) / ry);
    let v = dvec2((-p.x - c.x) / rx, (-p.y - c.y) / ry);
    let start_angle = u.y.atan2(u.x);
    let mut sweep_angle = u.perp_dot(v).atan2(u.dot(v));
    if !sweep && sweep_angle > 0.0 {
        sweep_angle -= std::f64::consts::TAU;
    } else if sweep && sweep_angle < 0.0 {
        sweep_angle += std::f64::consts::TAU;
    }

    Some(CenterArc {
        center,
        radii: dvec2(rx, ry),
        phi,
        start_angle,
        sweep_angle,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn parses_lines_and_shorthands() {
        let path = PathData::parse("plus", "M16 2V30M2 16H30").unwrap();
        assert_eq!(
            path.segments(),
            &[
                Segment::MoveTo(dvec2(16.0, 2.0)),
                Segment::Vertical(30.0),
                Segment::MoveTo(dvec2(2.0, 16.0)),
                Segment::Horizontal(30.0),
            ]
        );
    }

    #[test]
    fn parses_commas_signs_and_fractions() {
        let path = PathData::parse("t", "M1.5,2 L-.5-3 Z").unwrap();
        assert_eq!(
            path.segments(),
            &[
                Segment::MoveTo(dvec2(1.5, 2.0)),
                Segment::LineTo(dvec2(-0.5, -3.0)),
                Segment::Close,
            ]
        );
    }

    #[test]
    fn parses_arc_flags() {
        let path = PathData::parse("ring", "M16 1.11A14.89 14.89 0 0 1 16 30.89").unwrap();
        assert_eq!(
            path.segments()[1],
            Segment::Arc {
                radii: dvec2(14.89, 14.89),
                rotation: 0.0,
                large_arc: false,
                sweep: true,
                to: dvec2(16.0, 30.89),
            }
        );
    }

    #[test]
    fn rejects_garbage_with_span() {
        let err = PathData::parse("bad", "M1 1Q2 2").unwrap_err();
        match err {
            IconError::PathSyntax { span, .. } => assert_eq!(span.offset(), 4),
            other => panic!("expected PathSyntax, got {other:?}"),
        }
    }

    #[test]
    fn parses_exponents() {
        let path = PathData::parse("t", "M1e1 2E-1L+3.5e+0,.5e1").unwrap();
        assert_eq!(
            path.segments(),
            &[
                Segment::MoveTo(dvec2(10.0, 0.2)),
                Segment::LineTo(dvec2(3.5, 5.0)),
            ]
        );
        assert!(PathData::parse("t", "M1e 2").is_err());
    }

    #[test]
    fn must_start_with_move() {
        assert!(PathData::parse("bad", "L1 1").is_err());
        assert!(PathData::parse("bad", "").is_err());
    }

    #[test]
    fn display_normalizes() {
        let path = PathData::parse("t", " M 2.50 , 7 H30.000 ").unwrap();
        assert_eq!(path.to_string(), "M2.5 7H30");
    }

    #[test]
    fn display_keeps_authored_precision() {
        let source = "M12.345678 0.1234567L-3.000001 31.99999A1.23456789 2 15 1 0 8 -0";
        let path = PathData::parse("t", source).unwrap();
        assert_eq!(
            path.to_string(),
            "M12.345678 0.1234567L-3.000001 31.99999A1.23456789 2 15 1 0 8 0"
        );
        assert_eq!(PathData::parse("t", &path.to_string()).unwrap(), path);
    }

    #[test]
    fn line_bounds() {
        let path = PathData::parse("chevron", "M3 10L16 23L29 10").unwrap();
        let b = path.bounds().unwrap();
        assert_eq!(b.min, dvec2(3.0, 10.0));
        assert_eq!(b.max, dvec2(29.0, 23.0));
    }

    #[test]
    fn ring_bounds_cover_the_circle() {
        let path = PathData::parse(
            "ring",
            "M16 1.11A14.89 14.89 0 0 1 16 30.89A14.89 14.89 0 0 1 16 1.11Z",
        )
        .unwrap();
        let b = path.bounds().unwrap();
        // The half-turn midpoint sample lands on the left/right extremes.
        assert!((b.min.x - 1.11).abs() < 1e-6, "{b:?}");
        assert!((b.max.x - 30.89).abs() < 1e-6, "{b:?}");
        assert!((b.min.y - 1.11).abs() < EPS);
        assert!((b.max.y - 30.89).abs() < EPS);
    }

    #[test]
    fn undersized_radii_are_scaled_up() {
        let arc = arc_center(dvec2(0.0, 0.0), dvec2(10.0, 0.0), dvec2(1.0, 1.0), 0.0, false, true)
            .unwrap();
        assert!((arc.radii.x - 5.0).abs() < EPS);
        assert!((arc.center - dvec2(5.0, 0.0)).length() < EPS);
    }

    #[test]
    fn degenerate_arc_is_a_line() {
        assert!(arc_center(dvec2(0.0, 0.0), dvec2(1.0, 0.0), dvec2(0.0, 3.0), 0.0, false, true).is_none());
        let path = PathData::parse("t", "M0 0A0 0 0 0 1 4 4").unwrap();
        assert_eq!(path.bounds().unwrap().max, dvec2(4.0, 4.0));
    }
}
