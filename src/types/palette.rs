//! Three-colour palettes derived from a seeded sequence.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::sequence::SeededSequence;

use super::Hsl;

/// Hue offset from primary to secondary, in degrees.
pub const SECONDARY_HUE_OFFSET: u16 = 120;

/// Hue offset from primary to accent, in degrees.
pub const ACCENT_HUE_OFFSET: u16 = 240;

/// Lightness delta applied to the secondary colour.
pub const SECONDARY_LIGHTNESS_DELTA: f64 = -10.0;

/// Lightness delta applied to the accent colour.
pub const ACCENT_LIGHTNESS_DELTA: f64 = 10.0;

/// Which palette slot a colour comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColourRole {
    Primary,
    Secondary,
    Accent,
}

impl ColourRole {
    /// All roles, in selector order.
    pub const ALL: [ColourRole; 3] = [
        ColourRole::Primary,
        ColourRole::Secondary,
        ColourRole::Accent,
    ];

    /// Role name as used in output.
    pub fn as_str(self) -> &'static str {
        match self {
            ColourRole::Primary => "primary",
            ColourRole::Secondary => "secondary",
            ColourRole::Accent => "accent",
        }
    }
}

impl fmt::Display for ColourRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An evenly-hued palette: primary plus two colours a third of the wheel apart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub primary: Hsl,
    pub secondary: Hsl,
    pub accent: Hsl,
}

impl Palette {
    /// Build a palette around a primary colour.
    pub fn from_primary(primary: Hsl) -> Self {
        Self {
            primary,
            secondary: primary
                .rotate(SECONDARY_HUE_OFFSET)
                .shift_lightness(SECONDARY_LIGHTNESS_DELTA),
            accent: primary
                .rotate(ACCENT_HUE_OFFSET)
                .shift_lightness(ACCENT_LIGHTNESS_DELTA),
        }
    }

    /// Derive a palette from the next three draws of `seq`.
    ///
    /// Draws are consumed in a fixed order: hue, saturation, lightness.
    pub fn derive(seq: &mut SeededSequence) -> Self {
        let hue = (seq.draw() * 360.0).floor() as u16;
        let saturation = seq.draw_range(60.0, 20.0);
        let lightness = seq.draw_range(50.0, 20.0);

        Self::from_primary(Hsl::new(hue, saturation, lightness))
    }

    /// Look up the colour for a role.
    pub fn get(&self, role: ColourRole) -> Hsl {
        match role {
            ColourRole::Primary => self.primary,
            ColourRole::Secondary => self.secondary,
            ColourRole::Accent => self.accent,
        }
    }

    /// Iterate over `(role, colour)` pairs in selector order.
    pub fn iter(&self) -> impl Iterator<Item = (ColourRole, Hsl)> + '_ {
        ColourRole::ALL.into_iter().map(move |role| (role, self.get(role)))
    }

    /// Colours in the form stored alongside a profile.
    pub fn profile_colours(&self) -> ProfileColours {
        ProfileColours {
            primary: self.primary.to_string(),
            secondary: self.secondary.to_string(),
            background: self.accent.to_string(),
        }
    }
}

/// The CSS colour triple kept with a user profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileColours {
    pub primary: String,
    pub secondary: String,
    pub background: String,
}
