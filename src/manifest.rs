//! Project manifest (acid.yaml) parsing.
//!
//! The manifest holds default output settings. Every field is optional and
//! command-line flags take precedence over it.

use std::fmt;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{AcidError, Result};
use crate::render::RenderOptions;
use crate::types::Colour;

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "acid.yaml";

/// Largest accepted avatar side length, in pixels.
pub const MAX_SIZE: u32 = 4096;

/// Largest accepted supersample count per pixel axis.
pub const MAX_SAMPLES: u32 = 16;

/// Output file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Svg,
    Png,
    Json,
}

impl OutputFormat {
    /// File extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Svg => "svg",
            OutputFormat::Png => "png",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Project manifest loaded from acid.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Output directory for generated avatars.
    pub output: PathBuf,

    /// Avatar side length in pixels.
    pub size: u32,

    /// Default output format.
    pub format: OutputFormat,

    /// Opacity of the accent background.
    pub background_opacity: f64,

    /// Opacity of each shape.
    pub shape_opacity: f64,

    /// Supersamples per pixel axis for PNG output.
    pub samples: u32,

    /// Optional opaque canvas colour (hex).
    pub canvas: Option<String>,
}

impl Default for Manifest {
    fn default() -> Self {
        let options = RenderOptions::default();
        Self {
            output: PathBuf::from("avatars"),
            size: options.size,
            format: OutputFormat::default(),
            background_opacity: options.background_opacity,
            shape_opacity: options.shape_opacity,
            samples: options.samples,
            canvas: None,
        }
    }
}

impl Manifest {
    /// Load manifest from an acid.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| AcidError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Load the manifest from `dir` if one exists, defaults otherwise.
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(MANIFEST_FILENAME);
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        let manifest: Self = serde_yaml::from_str(content).map_err(|e| AcidError::Config {
            message: format!("Invalid manifest: {}", e),
            help: Some(format!("Check {} syntax", MANIFEST_FILENAME)),
        })?;

        manifest.validate()?;
        Ok(manifest)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_SIZE).contains(&self.size) {
            return Err(AcidError::Config {
                message: format!("size must be between 1 and {}, got {}", MAX_SIZE, self.size),
                help: None,
            });
        }

        if !(1..=MAX_SAMPLES).contains(&self.samples) {
            return Err(AcidError::Config {
                message: format!(
                    "samples must be between 1 and {}, got {}",
                    MAX_SAMPLES, self.samples
                ),
                help: Some("4 samples per axis is usually enough".to_string()),
            });
        }

        for (name, value) in [
            ("background_opacity", self.background_opacity),
            ("shape_opacity", self.shape_opacity),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(AcidError::Config {
                    message: format!("{} must be between 0 and 1, got {}", name, value),
                    help: None,
                });
            }
        }

        if let Some(canvas) = &self.canvas {
            Colour::from_hex(canvas).map_err(|_| AcidError::Config {
                message: format!("Invalid canvas colour: {}", canvas),
                help: Some("Use #RGB, #RRGGBB, or #RRGGBBAA format".to_string()),
            })?;
        }

        Ok(())
    }

    /// Render options described by this manifest.
    pub fn render_options(&self) -> Result<RenderOptions> {
        let canvas = self.canvas.as_deref().map(Colour::from_hex).transpose()?;

        Ok(RenderOptions {
            size: self.size,
            background_opacity: self.background_opacity,
            shape_opacity: self.shape_opacity,
            samples: self.samples,
            canvas,
        })
    }

    /// Serialize back to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| AcidError::Config {
            message: format!("Failed to serialize manifest: {}", e),
            help: None,
        })
    }
}
