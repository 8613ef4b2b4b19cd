//! End-to-end rendering tests: resolve, place, emit SVG, parse it back.
//!
//! Run with `RUST_LOG=varicon=debug cargo test --features tracing -- --nocapture`
//! to see per-render logs.

use facet_svg::{Svg, facet_xml};
use varicon::render::defaults::{INNER_SCALE_FLOOR, VIEWBOX_SIZE};
use varicon::render::geometry::{StrokeMetrics, inner_scale_factor};
use varicon::render::{GroupRole, IconRenderer, LineJoin};
use varicon::{
    Catalog, Glyph, IconDefinition, IconError, IconRender, RenderRequest, ResolvedRender,
    SvgOptions, Units, Weight, WeightCurve, render_icon, resolve_stroke_width,
};

const WEIGHTS: [f64; 9] = [100.0, 200.0, 300.0, 400.0, 500.0, 600.0, 700.0, 800.0, 900.0];

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn dynamic(request: RenderRequest) -> ResolvedRender<'static> {
    render_icon(&request)
        .expect("render succeeds")
        .into_dynamic()
        .expect("icon has vector geometry")
}

fn parse_svg(svg: &str) -> Svg {
    facet_xml::from_str(svg).unwrap_or_else(|e| panic!("XML parse error: {e}\n{svg}"))
}

/// One line per group and per path, for snapshotting
fn summarize(svg: &Svg) -> String {
    let mut out = String::new();
    for group in svg.groups() {
        out.push_str(&format!(
            "g transform={:?} stroke={:?} linecap={:?} linejoin={:?}\n",
            group.transform.as_deref().unwrap_or_default(),
            group.stroke.as_deref().unwrap_or_default(),
            group.stroke_linecap.as_deref().unwrap_or_default(),
            group.stroke_linejoin.as_deref().unwrap_or_default(),
        ));
        for path in group.paths() {
            out.push_str(&format!(
                "path d={:?} stroke-width={:?}\n",
                path.d.as_deref().unwrap_or_default(),
                path.stroke_width.as_deref().unwrap_or_default(),
            ));
        }
    }
    out
}

#[test]
fn calibration_points_are_exact() {
    let expected = [2.22, 2.78, 3.35, 3.91, 4.48, 5.05, 5.61, 6.18, 6.74];
    for (weight, stroke) in WEIGHTS.into_iter().zip(expected) {
        assert_eq!(resolve_stroke_width(weight), stroke, "weight {weight}");
    }
}

#[test]
fn interpolates_between_neighbours() {
    assert!((resolve_stroke_width(450.0) - 4.195).abs() < 1e-12);
}

#[test]
fn clamps_outside_the_axis() {
    assert_eq!(resolve_stroke_width(50.0), resolve_stroke_width(100.0));
    assert_eq!(resolve_stroke_width(1000.0), resolve_stroke_width(900.0));
}

#[test]
fn stroke_is_monotonic_in_weight() {
    let mut previous = resolve_stroke_width(100.0);
    for step in 1..=800 {
        let current = resolve_stroke_width(100.0 + step as f64);
        assert!(current >= previous, "weight {}", 100 + step);
        previous = current;
    }
}

#[test]
fn reference_weight_is_unscaled() {
    let render = dynamic(RenderRequest::new("plus").weight(100.0));
    assert_eq!(render.scale_factor, 1.0);
    assert_eq!(render.translate_offset(), 0.0);
}

#[test]
fn heavier_weights_shrink_content() {
    for inset in [0.0, 1.0, 3.5] {
        let light = dynamic(RenderRequest::new("plus").weight(100.0).inset(inset));
        let heavy = dynamic(RenderRequest::new("plus").weight(900.0).inset(inset));
        assert!(heavy.scale_factor < light.scale_factor, "inset {inset}");
    }
}

#[test]
fn compensation_restores_requested_stroke() {
    for name in ["cross", "hamburger", "check-circle", "cross-circle"] {
        for weight in [100.0, 250.0, 400.0, 650.0, 900.0] {
            for inset in [0.0, 2.0] {
                let render = dynamic(RenderRequest::new(name).weight(weight).inset(inset));
                for group in &render.groups {
                    for path in &group.paths {
                        let visible = path.stroke_width * group.placement.scale();
                        assert!(
                            (visible - render.stroke_width).abs() < 1e-9,
                            "{name} at {weight}/{inset}: {visible} != {}",
                            render.stroke_width
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn compound_inner_is_unshrunk_at_reference_weight() {
    let render = dynamic(RenderRequest::new("check-circle").weight(100.0));
    assert_eq!(render.inner_scale_factor, Some(1.0));
}

#[test]
fn compound_inner_never_shrinks_below_floor() {
    for stroke in [10.0, 20.0, 31.0, 1e6] {
        let factor = inner_scale_factor(Units(stroke), Units(29.78));
        assert_eq!(factor, INNER_SCALE_FLOOR, "stroke {stroke}");
    }
    let render = dynamic(RenderRequest::new("cross-circle").stroke_width(20.0));
    assert_eq!(render.inner_scale_factor, Some(0.5));
}

#[test]
fn compound_inner_shrinks_with_weight() {
    let inner = |weight: f64| {
        dynamic(RenderRequest::new("check-circle").weight(weight))
            .inner_scale_factor
            .unwrap()
    };
    let (light, regular, heavy) = (inner(100.0), inner(400.0), inner(900.0));
    assert!(heavy <= regular && regular <= light);
    assert!((regular - 0.831_54).abs() < 1e-4);
    assert_eq!(heavy, 0.5);
}

#[test]
fn unknown_icon_is_not_found() {
    let catalog = Catalog::builtin();
    let before: Vec<&str> = catalog.names().collect();

    let result = render_icon(&RenderRequest::new("does-not-exist"));
    assert!(matches!(result, Err(IconError::NotFound { ref name, .. }) if name == "does-not-exist"));

    let after: Vec<&str> = catalog.names().collect();
    assert_eq!(before, after);
    assert!(!catalog.contains("does-not-exist"));
}

#[test]
fn unknown_icon_suggests_nearby_name() {
    let Err(IconError::NotFound { suggestion, .. }) = render_icon(&RenderRequest::new("chevron-upp"))
    else {
        panic!("expected NotFound");
    };
    assert_eq!(suggestion.as_deref(), Some("did you mean `chevron-up`?"));
}

#[test]
fn cross_at_regular_weight_end_to_end() {
    init_tracing();
    let render = dynamic(RenderRequest::new("cross").weight(400.0));

    assert_eq!(render.stroke_width, 3.91);
    let expected_scale = (32.0 - 3.91) / (32.0 - 2.22);
    assert!((render.scale_factor - expected_scale).abs() < 1e-12);
    assert!((render.scale_factor - 0.9433).abs() < 1e-4);
    assert!((render.translate_offset() - 16.0 * (1.0 - expected_scale)).abs() < 1e-12);
    assert!((render.translate_offset() - 0.908).abs() < 1e-3);

    let main = render.group(GroupRole::Main).unwrap();
    assert_eq!(main.paths.len(), 2);
    for path in &main.paths {
        assert!((path.stroke_width - 3.91 / expected_scale).abs() < 1e-12);
        assert!((path.stroke_width - 4.145).abs() < 1e-3);
    }

    let svg = parse_svg(&render.to_svg(&SvgOptions::default()).unwrap());
    insta::assert_snapshot!(summarize(&svg), @r#"
    g transform="translate(0.907992 0.907992) scale(0.943251)" stroke="currentColor" linecap="round" linejoin="miter"
    path d="M5 5L27 27" stroke-width="4.14524"
    path d="M27 5L5 27" stroke-width="4.14524"
    "#);
}

#[test]
fn simple_icon_svg_at_reference_weight() {
    let render = dynamic(RenderRequest::new("chevron-right").weight(100.0).color("#336699"));
    let svg = parse_svg(&render.to_svg(&SvgOptions::default()).unwrap());
    insta::assert_snapshot!(summarize(&svg), @r#"
    g transform="translate(0 0) scale(1)" stroke="#336699" linecap="round" linejoin="round"
    path d="M10 3L23 16L10 29" stroke-width="2.22"
    "#);
}

#[test]
fn compound_icon_svg_at_reference_weight() {
    let render = dynamic(RenderRequest::new("check-circle").weight(100.0));
    let svg = parse_svg(&render.to_svg(&SvgOptions::default()).unwrap());
    insta::assert_snapshot!(summarize(&svg), @r#"
    g transform="translate(0 0) scale(1)" stroke="currentColor" linecap="round" linejoin="round"
    path d="M16 1.11A14.89 14.89 0 0 1 16 30.89A14.89 14.89 0 0 1 16 1.11Z" stroke-width="2.22"
    g transform="translate(16 16) scale(1) translate(-16 -16)" stroke="currentColor" linecap="round" linejoin="round"
    path d="M10 16.5L14 20.5L22 12" stroke-width="2.22"
    "#);
}

#[test]
fn svg_root_attributes() {
    let render = dynamic(RenderRequest::new("minus").size(24.0));

    let hidden = parse_svg(&render.to_svg(&SvgOptions::default()).unwrap());
    assert_eq!(hidden.view_box.as_deref(), Some("0 0 32 32"));
    assert_eq!(hidden.width.as_deref(), Some("24"));
    assert_eq!(hidden.height.as_deref(), Some("24"));
    assert_eq!(hidden.fill.as_deref(), Some("none"));
    assert_eq!(hidden.aria_hidden.as_deref(), Some("true"));
    assert_eq!(hidden.title(), None);

    let options = SvgOptions {
        class: Some("icon".to_string()),
        title: Some("Collapse".to_string()),
    };
    let titled = parse_svg(&render.to_svg(&options).unwrap());
    assert_eq!(titled.class.as_deref(), Some("icon"));
    assert_eq!(titled.role.as_deref(), Some("img"));
    assert_eq!(titled.aria_hidden, None);
    assert_eq!(titled.title(), Some("Collapse"));
}

#[test]
fn default_size_is_one_em() {
    let render = dynamic(RenderRequest::new("minus"));
    let svg = parse_svg(&render.to_svg(&SvgOptions::default()).unwrap());
    assert_eq!(svg.width.as_deref(), Some("1em"));
}

#[test]
fn placed_strokes_stay_inside_the_viewbox() {
    let size = VIEWBOX_SIZE.raw();
    for weight in WEIGHTS {
        for icon in Catalog::builtin().iter() {
            if icon.is_static() {
                continue;
            }
            let render = dynamic(RenderRequest::new(icon.name()).weight(weight));
            let half = render.stroke_width / 2.0;
            for group in &render.groups {
                for path in &group.paths {
                    let bounds = path.data.bounds().unwrap();
                    for corner in [bounds.min, bounds.max] {
                        let placed = group.placement.apply(corner);
                        assert!(
                            placed.min_element() >= half - 1e-6
                                && placed.max_element() <= size - half + 1e-6,
                            "{} at {weight}: {placed:?}",
                            icon.name()
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn static_icons_are_dispatched() {
    for name in ["star", "info-circle", "controls", "help-circle"] {
        let render = render_icon(&RenderRequest::new(name).weight(650.0)).unwrap();
        let IconRender::Static(icon) = render else {
            panic!("{name} should be static");
        };
        assert_eq!(icon.name, name);
        assert_eq!(icon.weight, Weight(650.0));
    }
}

#[test]
fn custom_catalog_and_curve() {
    let catalog = Catalog::builder()
        .simple("slash", &["M4 28L28 4"], LineJoin::Round)
        .build()
        .unwrap();
    let curve = WeightCurve::new([(100.0, 2.22), (900.0, 10.22)]).unwrap();
    let renderer = IconRenderer::new(&catalog).with_curve(curve);

    let render = renderer
        .render(&RenderRequest::new("slash").weight(500.0))
        .unwrap()
        .into_dynamic()
        .unwrap();
    assert!((render.stroke_width - 6.22).abs() < 1e-12);
    let metrics = StrokeMetrics::new(Units(render.stroke_width), Units::ZERO);
    assert_eq!(render.scale_factor, metrics.scale_factor.raw());

    assert!(matches!(
        renderer.render(&RenderRequest::new("cross")),
        Err(IconError::NotFound { .. })
    ));
}

#[test]
fn catalog_lists_every_kind() {
    let catalog = Catalog::builtin();
    let (mut simple, mut compound, mut fixed) = (0, 0, 0);
    for icon in catalog.iter() {
        match icon {
            IconDefinition::Simple(_) => simple += 1,
            IconDefinition::Compound(_) => compound += 1,
            IconDefinition::Static(_) => fixed += 1,
        }
    }
    assert_eq!((simple, compound, fixed), (11, 2, 4));
    assert_eq!(catalog.len(), 17);
}

#[test]
fn renders_from_many_threads() {
    let handles: Vec<_> = WEIGHTS
        .into_iter()
        .map(|weight| {
            std::thread::spawn(move || {
                dynamic(RenderRequest::new("cross-circle").weight(weight))
                    .to_svg(&SvgOptions::default())
                    .unwrap()
            })
        })
        .collect();
    let outputs: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(outputs.len(), 9);
    assert_eq!(
        outputs[3],
        dynamic(RenderRequest::new("cross-circle").weight(400.0))
            .to_svg(&SvgOptions::default())
            .unwrap()
    );
}
