//! Inspect command implementation.

use clap::Args;

use crate::error::{AcidError, Result};
use crate::types::Pattern;

/// Print the generated pattern for a seed as JSON
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Seed to inspect
    pub seed: String,

    /// Pretty-print the JSON
    #[arg(long)]
    pub pretty: bool,
}

pub fn run(args: InspectArgs) -> Result<()> {
    println!("{}", render(&args)?);
    Ok(())
}

/// Serialize the pattern for `args.seed`.
pub fn render(args: &InspectArgs) -> Result<String> {
    let pattern = Pattern::generate(&args.seed);

    let json = if args.pretty {
        serde_json::to_string_pretty(&pattern)
    } else {
        serde_json::to_string(&pattern)
    };

    json.map_err(|e| AcidError::Render {
        message: format!("Failed to serialize pattern: {}", e),
        help: None,
    })
}
