//! Run configuration, loadable from JSON. Every field has a default, so a partial file only
//! overrides what it names.

use std::path::Path;
use std::time::Duration;

use crate::compose::composer::FrameComposer;
use crate::compose::params::{ComposerParams, Variant};
use crate::data::synthetic::SyntheticConfig;
use crate::foundation::core::Canvas;
use crate::foundation::error::{AirglyphError, AirglyphResult};
use crate::synth::params::SynthParams;

/// Everything a run needs besides the records themselves.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ArtConfig {
    /// Visualization variant.
    pub variant: Variant,
    /// Seed for geometry randomness; a fresh one is drawn when absent.
    pub seed: Option<u64>,
    /// Tick interval override in milliseconds; the variant's cadence when absent.
    pub interval_ms: Option<u64>,
    /// Output size for rasterizing renderers.
    pub canvas: Canvas,
    /// Synthesis tunables.
    pub synth: SynthParams,
    /// Composer tunables; the variant's defaults when absent.
    pub composer: Option<ComposerParams>,
    /// Fallback generator settings.
    pub synthetic: SyntheticConfig,
}

impl ArtConfig {
    /// Read and validate a JSON config file.
    pub fn load(path: &Path) -> AirglyphResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            AirglyphError::validation(format!("failed to read config '{}': {e}", path.display()))
        })?;
        Self::from_json(&text)
    }

    /// Parse and validate a JSON config.
    pub fn from_json(text: &str) -> AirglyphResult<Self> {
        let cfg: Self = serde_json::from_str(text)
            .map_err(|e| AirglyphError::validation(format!("invalid config json: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check every nested section.
    pub fn validate(&self) -> AirglyphResult<()> {
        if self.interval_ms == Some(0) {
            return Err(AirglyphError::validation("interval_ms must be > 0"));
        }
        self.canvas.validate()?;
        self.synth.validate()?;
        self.composer_params().validate()?;
        self.synthetic.validate()?;
        Ok(())
    }

    /// Effective tick interval.
    pub fn interval(&self) -> Duration {
        self.interval_ms
            .map_or_else(|| self.variant.interval(), Duration::from_millis)
    }

    /// Effective composer tunables.
    pub fn composer_params(&self) -> ComposerParams {
        self.composer
            .clone()
            .unwrap_or_else(|| ComposerParams::for_variant(self.variant))
    }

    /// Build the frame composer this config describes.
    pub fn composer(&self) -> AirglyphResult<FrameComposer> {
        FrameComposer::new(self.variant, self.composer_params(), self.synth.clone())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
