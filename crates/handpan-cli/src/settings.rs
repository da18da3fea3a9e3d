use std::path::Path;

use anyhow::{Context, Result};
use handpan_core::config::ViewportConfig;
use handpan_core::frame::Shape;
use handpan_core::keymap::KeyBindings;
use serde::{Deserialize, Serialize};

/// Everything the CLI reads from a `--config` file.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub viewport: ViewportConfig,
    #[serde(default)]
    pub keys: KeyBindings,
}

impl Settings {
    /// Load settings from `path`, or fall back to defaults.
    /// An explicit `--output-size` overrides the configured output shape.
    pub fn resolve(path: Option<&Path>, output_size: Option<Shape>) -> Result<Self> {
        let mut settings = match path {
            Some(path) => {
                let contents = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config {}", path.display()))?;
                toml::from_str(&contents).context("Invalid handpan config")?
            }
            None => Settings::default(),
        };
        if let Some(shape) = output_size {
            settings.viewport.output = shape;
        }
        settings.viewport.validate()?;
        Ok(settings)
    }
}
