use serde::Deserialize;

use crate::common::error::ConfigError;
use crate::common::format::FormatParams;
use crate::core::pipeline::DEFAULT_LATENCY;
use crate::core::round::RoundingMode;

const DEFAULT_WIDTH: u32 = 16;
const DEFAULT_ROUNDING: &str = "rne";

const DEFAULT_STIM_COUNT: usize = 100;
const DEFAULT_STIM_SEED: u64 = 1;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub pipeline: PipelineConfig,
    #[serde(default)]
    pub stimulus: StimulusConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            engine: EngineConfig::default(),
            pipeline: PipelineConfig::default(),
            stimulus: StimulusConfig::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct EngineConfig {
    #[serde(default = "default_width")]
    pub width: u32,

    /// Extra internal precision bits; the per-width default is
    /// used when absent.
    #[serde(default)]
    pub guard_bits: Option<u32>,

    #[serde(default = "default_rounding")]
    pub rounding_mode: String,
}

impl EngineConfig {
    /// Validated format parameters for this configuration.
    pub fn format_params(&self) -> Result<FormatParams, ConfigError> {
        match self.guard_bits {
            Some(g) => FormatParams::new(self.width, g),
            None => FormatParams::with_default_guard(self.width),
        }
    }

    /// Parsed default rounding mode.
    pub fn rounding_mode_val(&self) -> Result<RoundingMode, ConfigError> {
        RoundingMode::from_name(&self.rounding_mode)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            width: default_width(),
            guard_bits: None,
            rounding_mode: default_rounding(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PipelineConfig {
    #[serde(default = "default_latency")]
    pub latency: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            latency: default_latency(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct StimulusConfig {
    #[serde(default = "default_stim_count")]
    pub count: usize,

    #[serde(default = "default_stim_seed")]
    pub seed: u64,

    #[serde(default = "default_directed")]
    pub directed_specials: bool,

    /// Smallest biased exponent drawn for random normals.
    #[serde(default = "default_min_exponent")]
    pub min_exponent: u32,

    /// Largest biased exponent drawn for random normals; the width's
    /// maximum normal exponent is used when absent.
    #[serde(default)]
    pub max_exponent: Option<u32>,
}

impl StimulusConfig {
    /// Largest biased exponent to draw, clamped to the format's maximum
    /// normal exponent.
    pub fn max_exponent_val(&self, params: &FormatParams) -> u32 {
        let max_normal = params.exp_all_ones() - 1;
        self.max_exponent.unwrap_or(max_normal).min(max_normal)
    }
}

impl Default for StimulusConfig {
    fn default() -> Self {
        StimulusConfig {
            count: default_stim_count(),
            seed: default_stim_seed(),
            directed_specials: default_directed(),
            min_exponent: default_min_exponent(),
            max_exponent: None,
        }
    }
}

fn default_width() -> u32 {
    DEFAULT_WIDTH
}

fn default_rounding() -> String {
    DEFAULT_ROUNDING.to_string()
}

fn default_latency() -> usize {
    DEFAULT_LATENCY
}

fn default_stim_count() -> usize {
    DEFAULT_STIM_COUNT
}

fn default_stim_seed() -> u64 {
    DEFAULT_STIM_SEED
}

fn default_directed() -> bool {
    true
}

fn default_min_exponent() -> u32 {
    1
}
