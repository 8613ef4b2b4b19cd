//! SVG generation

use facet_svg::{Group, Path, SVG_NS, Svg, SvgNode, Title, facet_xml};

use super::defaults::{VIEWBOX_SIZE, center};
use super::geometry::Placement;
use super::types::*;

/// Stroke color attribute for a requested color; `inherit` follows the text color
pub fn stroke_color(color: &str) -> String {
    if color.eq_ignore_ascii_case("inherit") {
        "currentColor".to_string()
    } else {
        color.to_string()
    }
}

/// `translate(o o) scale(s)`, the outer placement
pub fn outer_transform(placement: &Placement) -> String {
    let offset = fmt_num(placement.offset());
    format!("translate({offset} {offset}) scale({})", fmt_num(placement.scale()))
}

/// `translate(c c) scale(s) translate(-c -c)`, scaling explicitly about the center
pub fn centered_transform(placement: &Placement) -> String {
    let c = fmt_num(center().raw());
    format!(
        "translate({c} {c}) scale({}) translate(-{c} -{c})",
        fmt_num(placement.scale())
    )
}

fn group_node(group: &PathGroup<'_>, stroke: &str, line_join: LineJoin) -> SvgNode {
    let transform = match group.role {
        GroupRole::Main | GroupRole::Outer => outer_transform(&group.placement),
        GroupRole::Inner => centered_transform(&group.placement),
    };

    let children = group
        .paths
        .iter()
        .map(|path| {
            SvgNode::Path(Path {
                d: Some(path.data.to_string()),
                stroke_width: Some(fmt_num(path.stroke_width)),
            })
        })
        .collect();

    SvgNode::G(Group {
        id: None,
        class: None,
        transform: Some(transform),
        stroke: Some(stroke.to_string()),
        stroke_linecap: Some("round".to_string()),
        stroke_linejoin: Some(line_join.as_svg().to_string()),
        children,
    })
}

/// Build the SVG DOM for a resolved render
pub fn svg_document(render: &ResolvedRender<'_>, options: &SvgOptions) -> Svg {
    let size = render.size.to_string();
    let stroke = stroke_color(&render.color);
    let view = fmt_num(VIEWBOX_SIZE.raw());

    let mut children = Vec::with_capacity(render.groups.len() + 1);
    if let Some(title) = &options.title {
        children.push(SvgNode::Title(Title {
            content: title.clone(),
        }));
    }
    children.extend(
        render
            .groups
            .iter()
            .map(|group| group_node(group, &stroke, render.line_join)),
    );

    let (role, aria_hidden) = match options.title {
        Some(_) => (Some("img".to_string()), None),
        None => (None, Some("true".to_string())),
    };

    Svg {
        xmlns: Some(SVG_NS.to_string()),
        class: options.class.clone(),
        width: Some(size.clone()),
        height: Some(size),
        view_box: Some(format!("0 0 {view} {view}")),
        fill: Some("none".to_string()),
        role,
        aria_hidden,
        children,
    }
}

impl ResolvedRender<'_> {
    /// Serialize to an SVG document string
    pub fn to_svg(&self, options: &SvgOptions) -> Result<String, miette::Report> {
        let svg = svg_document(self, options);
        facet_xml::to_string(&svg).map_err(|e| miette::miette!("XML serialization error: {}", e))
    }
}

/// Format a number with 6 significant figures, trailing zeros trimmed.
pub(crate) fn fmt_num(value: f64) -> String {
    fmt_num_precision(value, 6)
}

/// Format a number with specified significant figures, trailing zeros trimmed.
fn fmt_num_precision(value: f64, sig_figs: i32) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    // Round to specified significant figures
    let abs_val = value.abs();
    let magnitude = abs_val.log10().floor() as i32;
    let scale = 10_f64.powi(sig_figs - 1 - magnitude);
    let rounded = (value * scale).round() / scale;

    // Format with enough decimal places, then trim
    let decimals = (sig_figs - 1 - magnitude).max(0) as usize;
    let s = format!("{:.prec$}", rounded, prec = decimals);
    let s = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        &s
    };
    s.to_string()
}
