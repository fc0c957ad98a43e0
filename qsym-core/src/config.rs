//! Simulator configuration
//!
//! Defaults can be overridden from the environment (or a `.env` file):
//!
//! | Variable                        | Field                     | Default  |
//! |---------------------------------|---------------------------|----------|
//! | `QSYM_SHOTS`                    | `shots`                   | 1024     |
//! | `QSYM_LANE_MODE`                | `lane_mode`               | `strict` |
//! | `QSYM_STRICT_NORMALIZATION`     | `strict_normalization`    | false    |
//! | `QSYM_NORMALIZATION_TOLERANCE`  | `normalization_tolerance` | 1e-9     |
//! | `QSYM_MAX_QUBITS`               | `max_qubits`              | 12       |
//! | `QSYM_SEED`                     | `seed`                    | unset    |

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt::Display;
use std::str::FromStr;
use tracing::warn;

/// Hard ceiling on circuit depth regardless of `max_qubits`
pub const MAX_SUPPORTED_QUBITS: usize = 30;

static DOTENV_INIT: Lazy<()> = Lazy::new(|| {
    let _ = dotenv::dotenv();
});

#[inline]
fn ensure_loaded() {
    let _ = &*DOTENV_INIT;
}

fn env_parse<T>(key: &str) -> Option<T>
where
    T: FromStr,
    T::Err: Display,
{
    let raw = env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(key, value = %raw, error = %e, "ignoring unparsable environment variable");
            None
        }
    }
}

fn env_flag(key: &str) -> Option<bool> {
    env::var(key)
        .ok()
        .map(|v| !matches!(v.trim().to_ascii_lowercase().as_str(), "" | "0" | "false" | "no" | "off"))
}

/// How out-of-range lanes are handled during gate placement
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LaneMode {
    /// Out-of-range lanes are an error
    #[default]
    Strict,
    /// Out-of-range lanes are skipped with a warning
    Lenient,
}

impl FromStr for LaneMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "lenient" => Ok(Self::Lenient),
            other => Err(format!("unknown lane mode '{other}'")),
        }
    }
}

/// Configuração do simulador
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Samples drawn by a default histogram
    pub shots: usize,
    /// Out-of-range lane policy
    pub lane_mode: LaneMode,
    /// Reject states whose total probability is not 1
    pub strict_normalization: bool,
    /// Allowed deviation of the total probability under strict normalization
    pub normalization_tolerance: f64,
    /// Upper bound on circuit depth
    pub max_qubits: usize,
    /// Fixed RNG seed for reproducible sampling
    pub seed: Option<u64>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            shots: 1024,
            lane_mode: LaneMode::Strict,
            strict_normalization: false,
            normalization_tolerance: 1e-9,
            max_qubits: 12,
            seed: None,
        }
    }
}

impl SimulatorConfig {
    /// Defaults overridden by `QSYM_*` environment variables
    pub fn from_env() -> Self {
        ensure_loaded();
        Self::default().with_env_overrides()
    }

    /// Applies any `QSYM_*` variables present on top of `self`
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(shots) = env_parse("QSYM_SHOTS") {
            self.shots = shots;
        }
        if let Some(mode) = env_parse("QSYM_LANE_MODE") {
            self.lane_mode = mode;
        }
        if let Some(strict) = env_flag("QSYM_STRICT_NORMALIZATION") {
            self.strict_normalization = strict;
        }
        if let Some(tolerance) = env_parse("QSYM_NORMALIZATION_TOLERANCE") {
            self.normalization_tolerance = tolerance;
        }
        if let Some(max) = env_parse::<usize>("QSYM_MAX_QUBITS") {
            if max > MAX_SUPPORTED_QUBITS {
                warn!(max, limit = MAX_SUPPORTED_QUBITS, "QSYM_MAX_QUBITS above supported limit");
            }
            self.max_qubits = max.min(MAX_SUPPORTED_QUBITS);
        }
        if let Some(seed) = env_parse("QSYM_SEED") {
            self.seed = Some(seed);
        }
        self
    }

    /// Configuration that skips out-of-range lanes
    pub fn lenient() -> Self {
        Self {
            lane_mode: LaneMode::Lenient,
            ..Default::default()
        }
    }
}
