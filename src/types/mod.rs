//! Core domain types for acidentiton.
//!
//! This module contains the values produced by generation:
//! - `Hsl` / `Colour` - generated and rendered colours
//! - `Palette` - the three-colour scheme for a seed
//! - `Shape` - one primitive of a pattern
//! - `Pattern` - palette plus ordered shapes
//! - `Seed` - the opaque identity string

mod colour;
mod palette;
mod pattern;
mod seed;
mod shape;

pub use colour::{Colour, Hsl};
pub use palette::{ColourRole, Palette, ProfileColours};
pub use pattern::{generate_pattern, Pattern, MAX_SHAPES, MIN_SHAPES};
pub use seed::Seed;
pub use shape::{Shape, ShapeKind};
