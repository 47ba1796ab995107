//! Palette command implementation.
//!
//! Prints a seed's palette to stdout, one colour per line.

use clap::Args;

use crate::error::{AcidError, Result};
use crate::sequence::SeededSequence;
use crate::types::Palette;

/// Print the colour palette for a seed
#[derive(Args, Debug)]
pub struct PaletteArgs {
    /// Seed to derive the palette from
    pub seed: String,

    /// Print hex RGB values instead of hsl()
    #[arg(long)]
    pub hex: bool,

    /// Print the profile colour record as JSON
    #[arg(long, conflicts_with = "hex")]
    pub profile: bool,
}

pub fn run(args: PaletteArgs) -> Result<()> {
    for line in render(&args)? {
        println!("{}", line);
    }
    Ok(())
}

/// Build the output lines for `args`.
pub fn render(args: &PaletteArgs) -> Result<Vec<String>> {
    let palette = Palette::derive(&mut SeededSequence::new(&args.seed));

    if args.profile {
        let json = serde_json::to_string(&palette.profile_colours()).map_err(|e| {
            AcidError::Render {
                message: format!("Failed to serialize profile colours: {}", e),
                help: None,
            }
        })?;
        return Ok(vec![json]);
    }

    Ok(palette
        .iter()
        .map(|(role, colour)| {
            if args.hex {
                format!("{}: {}", role, colour.to_colour())
            } else {
                format!("{}: {}", role, colour)
            }
        })
        .collect())
}
