//! The builtin icon set.
//!
//! All geometry is authored in the 32×32 viewbox for a 2.22-unit stroke,
//! so round caps reach at most 1.11 units past each endpoint.

use std::sync::LazyLock;

use crate::catalog::Catalog;
use crate::errors::IconError;
use crate::render::LineJoin;

/// Full-size ring enclosing compound glyphs, drawn as two half-turn arcs
pub const RING: &str = "M16 1.11A14.89 14.89 0 0 1 16 30.89A14.89 14.89 0 0 1 16 1.11Z";
/// Diameter of `RING`
pub const RING_SIZE: f64 = 29.78;

/// Names served from pre-rasterized files instead of path geometry
pub const STATIC_ICONS: [&str; 4] = ["star", "info-circle", "controls", "help-circle"];

static BUILTIN: LazyLock<Catalog> =
    LazyLock::new(|| build().expect("builtin icon geometry is valid"));

pub(crate) fn builtin() -> &'static Catalog {
    &BUILTIN
}

#[rustfmt::skip]
fn build() -> Result<Catalog, IconError> {
    use LineJoin::{Miter, Round};

    let mut builder = Catalog::builder()
        .simple("cross", &["M5 5L27 27", "M27 5L5 27"], Miter)
        .simple("plus", &["M16 2V30", "M2 16H30"], Miter)
        .simple("minus", &["M2 16H30"], Miter)
        .simple("chevron-up", &["M3 22L16 9L29 22"], Round)
        .simple("chevron-down", &["M3 10L16 23L29 10"], Round)
        .simple("chevron-left", &["M22 3L9 16L22 29"], Round)
        .simple("chevron-right", &["M10 3L23 16L10 29"], Round)
        .simple("checkmark", &["M3 17L11.5 25.5L29 7"], Round)
        .simple("hamburger", &["M2 7H30", "M2 16H30", "M2 25H30"], Miter)
        .simple("arrow-left", &["M30 16H3", "M13 6L3 16L13 26"], Round)
        .simple("arrow-right", &["M2 16H29", "M19 6L29 16L19 26"], Round)
        .compound("check-circle", &[RING], RING_SIZE, &["M10 16.5L14 20.5L22 12"], Round)
        .compound("cross-circle", &[RING], RING_SIZE, &["M11.5 11.5L20.5 20.5", "M20.5 11.5L11.5 20.5"], Round);

    for name in STATIC_ICONS {
        builder = builder.static_icon(name);
    }
    builder.build()
}
