use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::series::terms_from;
use crate::types::waveform::Waveform;

/// Largest term count accepted from a config file or the command line
pub const MAX_TERMS: usize = 200;

/// Top-level configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FourierConfig {
    #[serde(default)]
    pub wave: Waveform,

    #[serde(default = "default_frequency")]
    pub frequency: f64,

    #[serde(default = "default_terms", deserialize_with = "deserialize_terms")]
    pub terms: usize,

    #[serde(default)]
    pub plot: PlotConfig,

    #[serde(default)]
    pub tone: ToneConfig,
}

impl Default for FourierConfig {
    fn default() -> Self {
        Self {
            wave: Waveform::default(),
            frequency: default_frequency(),
            terms: default_terms(),
            plot: PlotConfig::default(),
            tone: ToneConfig::default(),
        }
    }
}

impl FourierConfig {
    /// Load configuration from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config = Self::from_yaml(&content)
            .with_context(|| format!("Failed to load config: {}", path.display()))?;

        info!(path = %path.display(), wave = %config.wave, "loaded config");
        Ok(config)
    }

    /// Parse and validate configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: FourierConfig =
            serde_yaml::from_str(content).context("Failed to parse YAML config")?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !(self.frequency > 0.0) || !self.frequency.is_finite() {
            return Err(anyhow!("Frequency must be a positive number of Hz"));
        }
        if self.terms < 1 || self.terms > MAX_TERMS {
            return Err(anyhow!("Terms must be between 1 and {}", MAX_TERMS));
        }

        self.plot.validate().context("Invalid plot configuration")?;
        self.tone.validate().context("Invalid tone configuration")?;

        Ok(())
    }
}

/// Time-domain plot grid
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlotConfig {
    #[serde(default = "default_samples")]
    pub samples: usize,

    #[serde(default = "default_periods")]
    pub periods: f64,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            samples: default_samples(),
            periods: default_periods(),
        }
    }
}

impl PlotConfig {
    pub fn validate(&self) -> Result<()> {
        if self.samples < 2 {
            return Err(anyhow!("Plot samples must be at least 2"));
        }
        if !(self.periods > 0.0) || !self.periods.is_finite() {
            return Err(anyhow!("Plot periods must be positive"));
        }
        Ok(())
    }
}

/// Tone playback settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ToneConfig {
    #[serde(default = "default_duration")]
    pub duration: f64,

    #[serde(default = "default_volume")]
    pub volume: f32,

    /// Output device name or index; the default device when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
}

impl Default for ToneConfig {
    fn default() -> Self {
        Self {
            duration: default_duration(),
            volume: default_volume(),
            device: None,
        }
    }
}

impl ToneConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.duration > 0.0) || self.duration > 30.0 {
            return Err(anyhow!("Tone duration must be between 0 and 30 seconds"));
        }
        if !(0.0..=1.0).contains(&self.volume) {
            return Err(anyhow!("Tone volume must be between 0.0 and 1.0"));
        }
        Ok(())
    }
}

/// Accept integer or fractional term counts, truncating toward zero
fn deserialize_terms<'de, D>(deserializer: D) -> std::result::Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    f64::deserialize(deserializer).map(terms_from)
}

// Default value functions for serde
fn default_frequency() -> f64 {
    50.0
}

fn default_terms() -> usize {
    10
}

fn default_samples() -> usize {
    1000
}

fn default_periods() -> f64 {
    2.0
}

fn default_duration() -> f64 {
    3.0
}

fn default_volume() -> f32 {
    0.5
}
