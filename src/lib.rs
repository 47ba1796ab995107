//! acidentiton - Deterministic identity avatars
//!
//! Derives a reproducible abstract avatar (a three-colour palette and a
//! handful of geometric shapes) from an opaque seed string, and renders it
//! as SVG or PNG.
//!
//! ```
//! let pattern = acidentiton::generate_pattern("alice-1700000000000");
//! assert_eq!(pattern.palette.primary.hue, 301);
//! assert_eq!(pattern, acidentiton::generate_pattern("alice-1700000000000"));
//! ```

pub mod cli;
pub mod error;
pub mod manifest;
pub mod output;
pub mod render;
pub mod sequence;
pub mod types;

pub use error::{AcidError, Result};
pub use manifest::{Manifest, OutputFormat};
pub use render::{
    encode_png, write_png, write_svg, RasterRenderer, RenderOptions, RenderedAvatar, SvgRenderer,
};
pub use sequence::SeededSequence;
pub use types::{
    generate_pattern, Colour, ColourRole, Hsl, Palette, Pattern, ProfileColours, Seed, Shape,
    ShapeKind,
};
