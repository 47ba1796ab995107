pub mod completions;
pub mod generate;
pub mod init;
pub mod inspect;
pub mod palette;
pub mod seed;

use clap::{Parser, Subcommand};

/// acid - Deterministic identity avatars from seed strings
#[derive(Parser, Debug)]
#[command(name = "acid")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Suppress status output on stderr
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate avatar files for one or more seeds
    Generate(generate::GenerateArgs),

    /// Print the generated pattern for a seed as JSON
    Inspect(inspect::InspectArgs),

    /// Print the colour palette for a seed
    Palette(palette::PaletteArgs),

    /// Mint a profile seed for a username
    Seed(seed::SeedArgs),

    /// Write a default acid.yaml
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
