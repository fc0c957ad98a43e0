//! # ⚛️ qsym-core — State-Vector Circuit Simulator
//!
//! Simula circuitos quânticos pequenos representando portas e estados como
//! matrizes complexas densas.
//!
//! ## Computational Complexity
//!
//! **Layer operator — O(4^n):**
//! - n = circuit depth (qubits)
//! - Kronecker fold of n 2x2 lane matrices into a 2^n x 2^n unitary
//!
//! **Layer application — O(4^n):**
//! - Dense matrix × column vector
//!
//! **Measurement — O(2^n) per shot:**
//! - Linear walk over cumulative probability intervals
//!
//! **Scalability:**
//! - n ≤ 8: ✓ Excellent
//! - 8 < n ≤ 12: △ Good
//! - n > 12: rejected by default (`max_qubits`)
//!
//! ## Arquitetura
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │  Gate Library   (I X Y Z H S T · |0⟩ |1⟩)       │
//! └───────────────────────┬─────────────────────────┘
//!                         ▼ set_matrix(lane, M)
//! ┌─────────────────────────────────────────────────┐
//! │  Circuit                                        │
//! │  ┌───────────┐ ┌───────────┐     ┌───────────┐  │
//! │  │  Layer 0  │→│  Layer 1  │→ … →│  Layer k  │  │
//! │  └───────────┘ └───────────┘     └───────────┘  │
//! └───────────────────────┬─────────────────────────┘
//!                         ▼ state_vector(|0…0⟩)
//! ┌─────────────────────────────────────────────────┐
//! │  MeasurementEngine  → outcome / histogram       │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! ## Exemplo
//!
//! ```
//! use qsym_core::prelude::*;
//!
//! let mut circuit = Circuit::new(2)?;
//! circuit.x(0)?;
//! circuit.h(1)?;
//!
//! let state = circuit.run()?;
//! let mut engine = MeasurementEngine::with_seed(7);
//! let counts = engine.histogram(&state, 1024)?;
//! assert!(counts.iter().all(|(label, _)| label.starts_with('1')));
//! # Ok::<(), QsymError>(())
//! ```

pub mod circuit;
pub mod config;
pub mod diagram;
pub mod error;
pub mod gates;
pub mod layer;
pub mod matrix;
pub mod measurement;
pub mod prelude;

pub use circuit::{Circuit, Placement};
pub use config::{LaneMode, SimulatorConfig};
pub use error::{QsymError, QsymResult};
pub use gates::{ground_state, Gate, Qubit};
pub use layer::Layer;
pub use matrix::ComplexMatrix;
pub use measurement::{basis_label, basis_labels, Histogram, MeasurementEngine};
