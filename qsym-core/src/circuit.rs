//! # Circuit — layered single-qubit circuits
//!
//! Gates are packed greedily: each request goes to the earliest layer in
//! which its lane is still free, and a new layer is appended only when
//! every existing layer already uses that lane.
//!
//! ```text
//! x(0); x(1); h(0); x(1)
//!
//!          layer 0   layer 1
//! q0 ──────  X  ──────  H  ──
//! q1 ──────  X  ──────  X  ──
//! ```
//!
//! Each lane keeps a cursor to its next free layer. A lane's occupied slots
//! always form a prefix of the layer list, so the cursor is exactly the
//! first layer where the lane is still the identity.

use crate::config::{LaneMode, SimulatorConfig, MAX_SUPPORTED_QUBITS};
use crate::error::{QsymError, QsymResult};
use crate::gates::{ground_state, Gate};
use crate::layer::Layer;
use crate::matrix::ComplexMatrix;
use tracing::{debug, trace, warn};

/// Where a `set_matrix` request ended up
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    /// Gate stored in this layer
    Placed { layer: usize },
    /// Identity request satisfied by a free slot; nothing was written
    Absorbed { layer: usize },
    /// Lane out of range under [`LaneMode::Lenient`]
    Skipped,
}

/// Ordered sequence of layers over a fixed number of qubits
#[derive(Clone, Debug)]
pub struct Circuit {
    depth: usize,
    layers: Vec<Layer>,
    /// Next free layer per lane
    cursors: Vec<usize>,
    lane_mode: LaneMode,
}

impl Circuit {
    /// Cria circuito vazio com a configuração padrão
    pub fn new(depth: usize) -> QsymResult<Self> {
        Self::with_config(depth, &SimulatorConfig::default())
    }

    /// Empty circuit; `depth` must be within `1..=config.max_qubits`.
    ///
    /// `max_qubits` is itself capped at [`MAX_SUPPORTED_QUBITS`].
    pub fn with_config(depth: usize, config: &SimulatorConfig) -> QsymResult<Self> {
        let max = config.max_qubits.min(MAX_SUPPORTED_QUBITS);
        if depth == 0 || depth > max {
            return Err(QsymError::InvalidQubitCount { count: depth, max });
        }
        Ok(Self {
            depth,
            layers: Vec::new(),
            cursors: vec![0; depth],
            lane_mode: config.lane_mode,
        })
    }

    /// Qubit count
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn lane_mode(&self) -> LaneMode {
        self.lane_mode
    }

    /// Places `matrix` on `lane` in the earliest layer where that lane is free
    pub fn set_matrix(&mut self, lane: usize, matrix: &ComplexMatrix) -> QsymResult<Placement> {
        if lane >= self.depth {
            return match self.lane_mode {
                LaneMode::Strict => Err(QsymError::OutOfRangeLane {
                    lane,
                    depth: self.depth,
                }),
                LaneMode::Lenient => {
                    warn!(lane, depth = self.depth, "skipping gate on out-of-range lane");
                    Ok(Placement::Skipped)
                }
            };
        }
        if matrix.shape() != (2, 2) {
            return Err(QsymError::NotSingleQubitGate {
                rows: matrix.rows(),
                cols: matrix.cols(),
            });
        }

        let target = self.cursors[lane];
        if target == self.layers.len() {
            debug!(layer = target, lane, "appending layer");
            self.layers.push(Layer::new(self.depth));
        }

        if matrix == Gate::I.matrix() {
            trace!(layer = target, lane, "identity absorbed");
            return Ok(Placement::Absorbed { layer: target });
        }

        self.layers[target].set_matrix(lane, matrix)?;
        self.cursors[lane] = target + 1;
        trace!(layer = target, lane, gate = ?Gate::identify(matrix), "gate placed");
        Ok(Placement::Placed { layer: target })
    }

    /// Places a library gate
    pub fn apply(&mut self, gate: Gate, lane: usize) -> QsymResult<Placement> {
        self.set_matrix(lane, gate.matrix())
    }

    pub fn i(&mut self, lane: usize) -> QsymResult<Placement> {
        self.apply(Gate::I, lane)
    }

    pub fn x(&mut self, lane: usize) -> QsymResult<Placement> {
        self.apply(Gate::X, lane)
    }

    pub fn y(&mut self, lane: usize) -> QsymResult<Placement> {
        self.apply(Gate::Y, lane)
    }

    pub fn z(&mut self, lane: usize) -> QsymResult<Placement> {
        self.apply(Gate::Z, lane)
    }

    pub fn h(&mut self, lane: usize) -> QsymResult<Placement> {
        self.apply(Gate::H, lane)
    }

    pub fn s(&mut self, lane: usize) -> QsymResult<Placement> {
        self.apply(Gate::S, lane)
    }

    pub fn t(&mut self, lane: usize) -> QsymResult<Placement> {
        self.apply(Gate::T, lane)
    }

    /// Layer indices holding a non-identity gate on `lane`, in order
    pub fn lane_schedule(&self, lane: usize) -> Vec<usize> {
        self.layers
            .iter()
            .enumerate()
            .filter(|(_, layer)| layer.get_matrix(lane).is_some_and(|m| m != Gate::I.matrix()))
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Evolves `initial` through every layer in creation order
    pub fn state_vector(&self, initial: &ComplexMatrix) -> QsymResult<ComplexMatrix> {
        self.layers
            .iter()
            .enumerate()
            .try_fold(initial.clone(), |state, (idx, layer)| {
                trace!(layer = idx, "applying layer");
                layer.state_vector(&state)
            })
    }

    /// Evolves the ground state |0…0⟩
    pub fn run(&self) -> QsymResult<ComplexMatrix> {
        self.state_vector(&ground_state(self.depth))
    }

    /// Product of all layer operators (last layer leftmost)
    pub fn unitary(&self) -> QsymResult<ComplexMatrix> {
        let dim = 1usize << self.depth;
        self.layers
            .iter()
            .try_fold(ComplexMatrix::identity(dim), |acc, layer| {
                layer.operator_matrix().matmul(&acc)
            })
    }
}
