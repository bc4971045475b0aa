//! Manifest parsing and validation

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default manifest file name looked up in the working directory.
pub const DEFAULT_MANIFEST: &str = "moshigen.toml";

/// moshigen.toml manifest structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub generator: GeneratorSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorSection {
    /// Path to the class model JSON.
    pub model: String,

    /// Output directory for generated sources.
    pub output: String,

    /// Log elapsed time per generation phase.
    #[serde(default)]
    pub performance_trace: bool,
}

impl Manifest {
    /// Load manifest from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read manifest: {:?}", path.as_ref()))?;

        Self::from_str(&content)
    }

    /// Parse manifest from string
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse manifest")
    }

    /// Load the manifest named on the command line, or `moshigen.toml` from
    /// the working directory when present. No manifest is not an error;
    /// commands then require their paths as flags.
    pub fn discover(path: Option<&str>) -> Result<Option<Self>> {
        match path {
            Some(path) => Ok(Some(Self::from_file(path)?)),
            None => {
                let default = Path::new(DEFAULT_MANIFEST);
                if default.exists() {
                    Ok(Some(Self::from_file(default)?))
                } else {
                    Ok(None)
                }
            }
        }
    }

    /// Validate the manifest
    pub fn validate(&self) -> Result<()> {
        if self.generator.model.is_empty() {
            anyhow::bail!("Model path cannot be empty");
        }

        if self.generator.output.is_empty() {
            anyhow::bail!("Output directory cannot be empty");
        }

        if !self.generator.model.ends_with(".json") {
            anyhow::bail!(
                "Model path should point at a .json file, got: {}",
                self.generator.model
            );
        }

        Ok(())
    }
}
