//! # Measurement — amostragem na base computacional
//!
//! A single shot rolls an integer die in `[1, 100]` and walks the non-zero
//! amplitudes in basis order, each owning the half-open interval
//! `(start, start + |a|²·100]`. The first interval holding the roll wins.
//!
//! Weights are not renormalized. An under-normalized state can leave the
//! roll outside every interval, which yields "no outcome" (`Ok(None)`).
//! [`SimulatorConfig::strict_normalization`] rejects such states instead.

use crate::config::{SimulatorConfig, MAX_SUPPORTED_QUBITS};
use crate::error::{QsymError, QsymResult};
use crate::matrix::ComplexMatrix;
use num_complex::Complex64;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, trace, warn};

/// Label of basis index `index` over `n` qubits, most-significant bit first
pub fn basis_label(index: usize, n: usize) -> String {
    if n == 0 {
        return String::new();
    }
    format!("{index:0n$b}")
}

/// All `2^n` basis labels in index order
///
/// # Panics
///
/// If `n` exceeds [`MAX_SUPPORTED_QUBITS`].
pub fn basis_labels(n: usize) -> Vec<String> {
    assert!(
        n <= MAX_SUPPORTED_QUBITS,
        "basis_labels: {n} qubits exceeds the supported maximum of {MAX_SUPPORTED_QUBITS}"
    );
    (0..1usize << n).map(|i| basis_label(i, n)).collect()
}

/// Qubit count of a state vector; its height must be a power of two
fn qubit_count(state: &ComplexMatrix) -> QsymResult<usize> {
    if !state.is_column() {
        return Err(QsymError::NotAColumnVector { cols: state.cols() });
    }
    let rows = state.rows();
    if !rows.is_power_of_two() {
        return Err(QsymError::InvalidStateHeight(rows));
    }
    Ok(rows.trailing_zeros() as usize)
}

/// Basis label whose interval `(start, start + |a|²·100]` holds `dice`.
///
/// Exact-zero amplitudes own no interval.
fn outcome_for_roll(state: &ComplexMatrix, n: usize, dice: u32) -> Option<String> {
    let dice = f64::from(dice);
    let zero = Complex64::new(0.0, 0.0);

    let mut start = 0.0;
    for (i, amplitude) in state.as_slice().iter().enumerate() {
        if *amplitude == zero {
            continue;
        }
        let weight = amplitude.norm_sqr() * 100.0;
        if dice > start && dice <= start + weight {
            return Some(basis_label(i, n));
        }
        start += weight;
    }
    None
}

/// Outcome counts accumulated over a number of shots
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Histogram {
    counts: BTreeMap<String, u64>,
    shots: usize,
    discarded: usize,
}

impl Histogram {
    fn record(&mut self, outcome: Option<String>) {
        self.shots += 1;
        match outcome {
            Some(label) => *self.counts.entry(label).or_insert(0) += 1,
            None => self.discarded += 1,
        }
    }

    /// Contagem de um resultado
    pub fn get(&self, label: &str) -> u64 {
        self.counts.get(label).copied().unwrap_or(0)
    }

    pub fn counts(&self) -> &BTreeMap<String, u64> {
        &self.counts
    }

    /// Shots requested
    pub fn shots(&self) -> usize {
        self.shots
    }

    /// Shots that landed in no interval
    pub fn discarded(&self) -> usize {
        self.discarded
    }

    /// Shots that produced an outcome
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Number of distinct outcomes seen
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Outcomes in label order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// Observed frequency of `label` over requested shots
    pub fn frequency(&self, label: &str) -> f64 {
        if self.shots == 0 {
            return 0.0;
        }
        self.get(label) as f64 / self.shots as f64
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, count) in self.iter() {
            writeln!(f, "{label} => {count}")?;
        }
        Ok(())
    }
}

/// Samples basis-state outcomes from state vectors.
///
/// One die roll per shot; the generator is advanced once per draw.
#[derive(Debug, Clone)]
pub struct MeasurementEngine<R: Rng = StdRng> {
    rng: R,
    config: SimulatorConfig,
}

impl MeasurementEngine<StdRng> {
    /// Engine seeded from `config.seed`, or from OS entropy when unset
    pub fn new(config: SimulatorConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng, config }
    }

    /// Engine with a fixed seed and default configuration
    pub fn with_seed(seed: u64) -> Self {
        Self::new(SimulatorConfig {
            seed: Some(seed),
            ..Default::default()
        })
    }
}

impl Default for MeasurementEngine<StdRng> {
    fn default() -> Self {
        Self::new(SimulatorConfig::default())
    }
}

impl<R: Rng> MeasurementEngine<R> {
    /// Engine over a caller-supplied generator
    pub fn with_rng(rng: R, config: SimulatorConfig) -> Self {
        Self { rng, config }
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Probability `|a|²` of every basis label, in index order
    pub fn probabilities(&self, state: &ComplexMatrix) -> QsymResult<Vec<(String, f64)>> {
        let n = qubit_count(state)?;
        Ok(state
            .as_slice()
            .iter()
            .enumerate()
            .map(|(i, a)| (basis_label(i, n), a.norm_sqr()))
            .collect())
    }

    fn check_normalization(&self, state: &ComplexMatrix) -> QsymResult<()> {
        if !self.config.strict_normalization {
            return Ok(());
        }
        let total: f64 = state.as_slice().iter().map(|a| a.norm_sqr()).sum();
        if (total - 1.0).abs() > self.config.normalization_tolerance {
            return Err(QsymError::NotNormalized { total });
        }
        Ok(())
    }

    /// Draws one outcome; `Ok(None)` when the roll lands in no interval
    pub fn measure(&mut self, state: &ComplexMatrix) -> QsymResult<Option<String>> {
        let n = qubit_count(state)?;
        self.check_normalization(state)?;
        let outcome = self.sample(state, n);
        if outcome.is_none() {
            warn!("roll landed in no probability interval");
        }
        Ok(outcome)
    }

    fn sample(&mut self, state: &ComplexMatrix, n: usize) -> Option<String> {
        let dice = self.rng.gen_range(1..=100u32);
        let outcome = outcome_for_roll(state, n, dice);
        if outcome.is_none() {
            trace!(dice, "no outcome");
        }
        outcome
    }

    /// Repeats [`measure`](Self::measure) `shots` times; "no outcome" draws are not counted
    pub fn histogram(&mut self, state: &ComplexMatrix, shots: usize) -> QsymResult<Histogram> {
        let n = qubit_count(state)?;
        self.check_normalization(state)?;

        let mut histogram = Histogram::default();
        for _ in 0..shots {
            let outcome = self.sample(state, n);
            histogram.record(outcome);
        }

        debug!(
            shots,
            distinct = histogram.distinct(),
            discarded = histogram.discarded(),
            "histogram sampled"
        );
        if histogram.discarded() > 0 {
            warn!(
                discarded = histogram.discarded(),
                shots, "some draws landed in no probability interval"
            );
        }
        Ok(histogram)
    }

    /// Histogram over the configured number of shots
    pub fn histogram_default(&mut self, state: &ComplexMatrix) -> QsymResult<Histogram> {
        let shots = self.config.shots;
        self.histogram(state, shots)
    }
}
