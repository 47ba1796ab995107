//! SVG output for patterns.
//!
//! The document uses a `0 0 100 100` view box so pattern coordinates map
//! directly onto it; `width`/`height` set the displayed size.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::error::{AcidError, Result};
use crate::types::{Pattern, Shape, ShapeKind};

use super::{RenderOptions, VIEWBOX};

/// Renders patterns as SVG documents.
#[derive(Debug, Clone, Default)]
pub struct SvgRenderer {
    options: RenderOptions,
}

impl SvgRenderer {
    /// Create a new SVG renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render a pattern to an SVG document.
    pub fn render(&self, pattern: &Pattern) -> String {
        let size = self.options.size;
        let mut out = String::new();

        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {VIEWBOX} {VIEWBOX}">"#
        );

        if let Some(canvas) = self.options.canvas {
            let _ = writeln!(
                out,
                r#"  <rect width="{VIEWBOX}" height="{VIEWBOX}" fill="{canvas}"/>"#
            );
        }

        let _ = writeln!(
            out,
            r#"  <rect width="{VIEWBOX}" height="{VIEWBOX}" fill="{}" opacity="{}"/>"#,
            pattern.palette.accent, self.options.background_opacity
        );

        for shape in pattern.iter() {
            let _ = writeln!(out, "  {}", self.element(shape));
        }

        out.push_str("</svg>\n");
        out
    }

    /// Build the element for one shape.
    fn element(&self, shape: &Shape) -> String {
        let s = shape.size;
        let h = shape.half();
        let paint = format!(
            r#"fill="{}" opacity="{}" transform="translate({}, {}) rotate({} {} {})""#,
            shape.colour, self.options.shape_opacity, shape.x, shape.y, shape.rotation, h, h
        );

        match shape.kind {
            ShapeKind::Circle => format!(r#"<circle cx="{h}" cy="{h}" r="{h}" {paint}/>"#),
            ShapeKind::Rect => {
                format!(r#"<rect x="0" y="0" width="{s}" height="{s}" {paint}/>"#)
            }
            ShapeKind::Polygon => {
                format!(r#"<polygon points="{h},0 {s},{s} 0,{s}" {paint}/>"#)
            }
        }
    }
}

/// Render a pattern and write it to an SVG file.
pub fn write_svg(pattern: &Pattern, path: &Path, options: RenderOptions) -> Result<()> {
    let svg = SvgRenderer::new(options).render(pattern);

    fs::write(path, svg).map_err(|e| AcidError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write SVG: {}", e),
    })
}
