//! Seed command implementation.

use clap::Args;

use crate::error::{AcidError, Result};
use crate::types::Seed;

/// Mint a profile seed for a username
#[derive(Args, Debug)]
pub struct SeedArgs {
    /// Username the seed belongs to
    pub username: String,

    /// Creation time in milliseconds since the Unix epoch (default: now)
    #[arg(long)]
    pub timestamp: Option<u64>,
}

pub fn run(args: SeedArgs) -> Result<()> {
    println!("{}", mint(&args)?);
    Ok(())
}

/// Build the seed described by `args`.
pub fn mint(args: &SeedArgs) -> Result<Seed> {
    if args.username.is_empty() {
        return Err(AcidError::Input {
            message: "Username must not be empty".to_string(),
            help: None,
        });
    }

    Ok(match args.timestamp {
        Some(millis) => Seed::for_profile(&args.username, u128::from(millis)),
        None => Seed::now(&args.username),
    })
}
