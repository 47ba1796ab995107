//! Patterns: a palette plus an ordered list of shapes.

use serde::{Deserialize, Serialize};

use crate::sequence::SeededSequence;

use super::{Palette, Shape};

/// Fewest shapes a pattern can hold.
pub const MIN_SHAPES: usize = 3;

/// Most shapes a pattern can hold.
pub const MAX_SHAPES: usize = 6;

/// The full visual signature of a seed.
///
/// Shape order is paint order: later shapes are drawn over earlier ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pattern {
    pub palette: Palette,
    pub shapes: Vec<Shape>,
}

impl Pattern {
    /// Generate the pattern for a seed.
    ///
    /// Builds a fresh sequence, derives the palette, then composes shapes
    /// from the same stream. The same seed always yields the same pattern.
    pub fn generate(seed: &str) -> Self {
        let mut seq = SeededSequence::new(seed);
        let palette = Palette::derive(&mut seq);
        Self::compose(&mut seq, palette)
    }

    /// Compose shapes from `seq`, continuing after the palette draws.
    pub fn compose(seq: &mut SeededSequence, palette: Palette) -> Self {
        let span = MAX_SHAPES - MIN_SHAPES + 1;
        let count = MIN_SHAPES + seq.draw_index(span);

        let shapes = (0..count)
            .map(|_| Shape::draw(seq, &palette))
            .collect();

        Self { palette, shapes }
    }

    /// Number of shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Check if the pattern has no shapes.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Iterate over shapes in paint order.
    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter()
    }
}

/// Generate the pattern for a seed.
pub fn generate_pattern(seed: &str) -> Pattern {
    Pattern::generate(seed)
}
