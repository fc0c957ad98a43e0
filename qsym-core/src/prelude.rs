//! Common imports: `use qsym_core::prelude::*;`

pub use crate::circuit::{Circuit, Placement};
pub use crate::config::{LaneMode, SimulatorConfig};
pub use crate::error::{QsymError, QsymResult};
pub use crate::gates::{ground_state, Gate, Qubit};
pub use crate::layer::Layer;
pub use crate::matrix::ComplexMatrix;
pub use crate::measurement::{Histogram, MeasurementEngine};
pub use num_complex::Complex64;
