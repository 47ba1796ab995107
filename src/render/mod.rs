//! Rendering module for acidentiton.
//!
//! Turns a generated `Pattern` into SVG markup or an RGBA pixel grid.
//! Both renderers paint the same scene: a faint accent-coloured
//! background, then every shape in insertion order.

mod png;
mod raster;
mod svg;

pub use png::{encode_png, write_png};
pub use raster::{RasterRenderer, RenderedAvatar};
pub use svg::{write_svg, SvgRenderer};

use crate::types::Colour;

/// Side length of the normalized pattern space.
pub const VIEWBOX: f64 = 100.0;

/// Options shared by all renderers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    /// Output side length in pixels.
    pub size: u32,

    /// Opacity of the accent-coloured background.
    pub background_opacity: f64,

    /// Opacity of each shape.
    pub shape_opacity: f64,

    /// Samples per pixel along each axis (raster only).
    pub samples: u32,

    /// Opaque colour painted under everything, if any.
    pub canvas: Option<Colour>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            size: 64,
            background_opacity: 0.1,
            shape_opacity: 0.8,
            samples: 4,
            canvas: None,
        }
    }
}

impl RenderOptions {
    /// Set the output size.
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    /// Set the canvas colour.
    pub fn with_canvas(mut self, canvas: Colour) -> Self {
        self.canvas = Some(canvas);
        self
    }
}
