//! Error types with rich diagnostics using miette
//!
//! Path syntax errors carry source spans into the authored path string.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Errors raised while building catalogs, calibrating curves, or rendering icons
#[derive(Error, Diagnostic, Debug)]
pub enum IconError {
    #[error("icon not found: {name}")]
    #[diagnostic(code(varicon::catalog::not_found))]
    NotFound {
        name: String,
        #[help]
        suggestion: Option<String>,
    },

    #[error("duplicate icon name: {name}")]
    #[diagnostic(
        code(varicon::catalog::duplicate),
        help("every icon name maps to exactly one definition")
    )]
    DuplicateIcon { name: String },

    #[error("icon {name} has no paths")]
    #[diagnostic(code(varicon::catalog::empty_icon))]
    EmptyIcon { name: String },

    #[error("geometry of icon {name} leaves the {size}x{size} viewbox")]
    #[diagnostic(code(varicon::catalog::out_of_bounds))]
    OutOfBounds { name: String, size: f64 },

    #[error("invalid outer size for icon {name}: {value}")]
    #[diagnostic(
        code(varicon::catalog::invalid_outer_size),
        help("the outer size is the outer shape's diameter in viewbox units and must be positive")
    )]
    InvalidOuterSize { name: String, value: f64 },

    #[error("invalid path data: {message}")]
    #[diagnostic(code(varicon::path::syntax))]
    PathSyntax {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: SourceSpan,
    },

    #[error("invalid stroke width: {value}")]
    #[diagnostic(
        code(varicon::render::invalid_stroke_width),
        help("an explicit stroke width must be a finite, positive number of viewbox units")
    )]
    InvalidStrokeWidth { value: f64 },

    #[error("invalid inset: {value}")]
    #[diagnostic(
        code(varicon::render::invalid_inset),
        help("inset must be finite; values in 0..=16 keep the glyph visible")
    )]
    InvalidInset { value: f64 },

    #[error("invalid icon size: {value}")]
    #[diagnostic(
        code(varicon::render::invalid_size),
        help("use a positive number of pixels or a CSS length such as `1em` or `24px`")
    )]
    InvalidSize { value: String },

    #[error("invalid calibration table: {reason}")]
    #[diagnostic(code(varicon::weight::invalid_calibration))]
    InvalidCalibration { reason: String },
}

impl IconError {
    /// Build a path syntax error pointing at `offset..offset+len` in `source`
    pub(crate) fn path_syntax(
        name: &str,
        source: &str,
        offset: usize,
        len: usize,
        message: impl Into<String>,
    ) -> Self {
        IconError::PathSyntax {
            message: message.into(),
            src: NamedSource::new(name, source.to_string()),
            span: (offset, len).into(),
        }
    }
}
