//! Raster renderer - paints patterns into RGBA pixel grids.
//!
//! Each pixel is supersampled on a regular grid; a layer's coverage is the
//! fraction of samples that fall inside it. Layers are composited
//! source-over in paint order.

use crate::types::{Colour, Pattern, Shape};

use super::{RenderOptions, VIEWBOX};

/// A rendered avatar - a square grid of colours.
#[derive(Debug, Clone)]
pub struct RenderedAvatar {
    /// Avatar name (usually the seed slug).
    pub name: String,

    /// Pixel grid (row-major: pixels[y][x]).
    pixels: Vec<Vec<Colour>>,

    /// Width in pixels.
    width: usize,

    /// Height in pixels.
    height: usize,
}

impl RenderedAvatar {
    /// Create a new rendered avatar.
    pub fn new(name: impl Into<String>, pixels: Vec<Vec<Colour>>) -> Self {
        let height = pixels.len();
        let width = pixels.first().map_or(0, |row| row.len());

        Self {
            name: name.into(),
            pixels,
            width,
            height,
        }
    }

    /// Get the width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get a pixel at the given position.
    pub fn get(&self, x: usize, y: usize) -> Option<Colour> {
        self.pixels.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Get a reference to the pixel grid.
    pub fn pixels(&self) -> &[Vec<Colour>] {
        &self.pixels
    }

    /// Convert to a flat RGBA buffer (for image output).
    pub fn to_rgba_buffer(&self) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(self.width * self.height * 4);
        for row in &self.pixels {
            for colour in row {
                buffer.extend_from_slice(&colour.to_rgba());
            }
        }
        buffer
    }
}

/// Straight-alpha working colour, channels in `0..=1`.
#[derive(Debug, Clone, Copy, Default)]
struct Pixel {
    r: f64,
    g: f64,
    b: f64,
    a: f64,
}

impl Pixel {
    fn from_colour(colour: Colour) -> Self {
        Self {
            r: f64::from(colour.r) / 255.0,
            g: f64::from(colour.g) / 255.0,
            b: f64::from(colour.b) / 255.0,
            a: f64::from(colour.a) / 255.0,
        }
    }

    /// Composite `src` with opacity `alpha` over this pixel.
    fn blend(self, src: Colour, alpha: f64) -> Self {
        if alpha <= 0.0 {
            return self;
        }

        let s = Self::from_colour(src);
        let sa = s.a * alpha;
        let da = self.a * (1.0 - sa);
        let a = sa + da;

        if a <= 0.0 {
            return Self::default();
        }

        Self {
            r: (s.r * sa + self.r * da) / a,
            g: (s.g * sa + self.g * da) / a,
            b: (s.b * sa + self.b * da) / a,
            a,
        }
    }

    fn to_colour(self) -> Colour {
        let channel = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        Colour::new(channel(self.r), channel(self.g), channel(self.b), channel(self.a))
    }
}

/// A shape prepared for sampling.
struct Layer<'a> {
    shape: &'a Shape,
    colour: Colour,
    centre: (f64, f64),

    /// Squared radius of the circle enclosing the rotated box.
    reach_sq: f64,
}

impl<'a> Layer<'a> {
    fn new(shape: &'a Shape) -> Self {
        let half = shape.half();
        Self {
            shape,
            colour: shape.colour.to_colour(),
            centre: shape.centre(),
            reach_sq: 2.0 * half * half,
        }
    }

    fn contains(&self, u: f64, v: f64) -> bool {
        let (dx, dy) = (u - self.centre.0, v - self.centre.1);
        dx * dx + dy * dy <= self.reach_sq && self.shape.contains(u, v)
    }
}

/// Paints patterns into pixel grids.
#[derive(Debug, Clone, Default)]
pub struct RasterRenderer {
    options: RenderOptions,
}

impl RasterRenderer {
    /// Create a new raster renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render a pattern to a square pixel grid.
    pub fn render(&self, name: impl Into<String>, pattern: &Pattern) -> RenderedAvatar {
        let size = self.options.size as usize;
        let samples = self.options.samples.max(1) as usize;
        let sample_count = (samples * samples) as f64;
        let scale = VIEWBOX / size.max(1) as f64;

        let base = self
            .options
            .canvas
            .map(Pixel::from_colour)
            .unwrap_or_default()
            .blend(
                pattern.palette.accent.to_colour(),
                self.options.background_opacity,
            );

        let layers: Vec<Layer> = pattern.iter().map(Layer::new).collect();
        let mut hits = vec![0usize; layers.len()];

        let mut pixels = Vec::with_capacity(size);
        for py in 0..size {
            let mut row = Vec::with_capacity(size);
            for px in 0..size {
                hits.iter_mut().for_each(|h| *h = 0);

                for sy in 0..samples {
                    let v = (py as f64 + (sy as f64 + 0.5) / samples as f64) * scale;
                    for sx in 0..samples {
                        let u = (px as f64 + (sx as f64 + 0.5) / samples as f64) * scale;
                        for (layer, hit) in layers.iter().zip(hits.iter_mut()) {
                            if layer.contains(u, v) {
                                *hit += 1;
                            }
                        }
                    }
                }

                let pixel = layers.iter().zip(&hits).fold(base, |acc, (layer, &hit)| {
                    let coverage = hit as f64 / sample_count;
                    acc.blend(layer.colour, self.options.shape_opacity * coverage)
                });
                row.push(pixel.to_colour());
            }
            pixels.push(row);
        }

        RenderedAvatar::new(name, pixels)
    }
}
