//! Init command implementation.
//!
//! Writes an `acid.yaml` manifest holding the default settings.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::error::{AcidError, Result};
use crate::manifest::{Manifest, MANIFEST_FILENAME};
use crate::output::{display_path, Printer};

/// Write a default acid.yaml
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to write the manifest into
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite an existing acid.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    if manifest_path.exists() && !args.force {
        return Err(AcidError::Config {
            message: format!("{} already exists", MANIFEST_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    let yaml = Manifest::default().to_yaml()?;

    fs::write(&manifest_path, yaml).map_err(|e| AcidError::Io {
        path: manifest_path.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;

    printer.status("Created", &display_path(&manifest_path));

    Ok(())
}
