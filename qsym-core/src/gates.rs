//! # Gate Library — portas e estados de base
//!
//! Fixed single-qubit unitaries and basis vectors, built once on first use
//! and never mutated afterwards.
//!
//! ## Gates
//!
//! - **Identity**: I
//! - **Pauli**: X, Y, Z
//! - **Hadamard**: H
//! - **Phase**: S (√Z), T (π/8)

use crate::error::QsymError;
use crate::matrix::ComplexMatrix;
use num_complex::Complex64;
use once_cell::sync::Lazy;
use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_4};
use std::fmt;
use std::str::FromStr;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);

fn gate_2x2(a: Complex64, b: Complex64, c: Complex64, d: Complex64) -> ComplexMatrix {
    let mut m = ComplexMatrix::zeros(2, 2);
    m.set(0, 0, a).set(0, 1, b).set(1, 0, c).set(1, 1, d);
    m
}

static IDENTITY: Lazy<ComplexMatrix> = Lazy::new(|| ComplexMatrix::identity(2));

static PAULI_X: Lazy<ComplexMatrix> = Lazy::new(|| gate_2x2(ZERO, ONE, ONE, ZERO));

static PAULI_Y: Lazy<ComplexMatrix> =
    Lazy::new(|| gate_2x2(ZERO, Complex64::new(0.0, -1.0), Complex64::new(0.0, 1.0), ZERO));

static PAULI_Z: Lazy<ComplexMatrix> =
    Lazy::new(|| gate_2x2(ONE, ZERO, ZERO, Complex64::new(-1.0, 0.0)));

static HADAMARD: Lazy<ComplexMatrix> = Lazy::new(|| {
    let h = Complex64::new(FRAC_1_SQRT_2, 0.0);
    gate_2x2(h, h, h, -h)
});

static S_GATE: Lazy<ComplexMatrix> = Lazy::new(|| gate_2x2(ONE, ZERO, ZERO, Complex64::i()));

static T_GATE: Lazy<ComplexMatrix> =
    Lazy::new(|| gate_2x2(ONE, ZERO, ZERO, Complex64::from_polar(1.0, FRAC_PI_4)));

static KET_ZERO: Lazy<ComplexMatrix> = Lazy::new(|| ComplexMatrix::column(vec![ONE, ZERO]));

static KET_ONE: Lazy<ComplexMatrix> = Lazy::new(|| ComplexMatrix::column(vec![ZERO, ONE]));

/// Named single-qubit gate
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Gate {
    I,
    X,
    Y,
    Z,
    H,
    S,
    T,
}

impl Gate {
    /// Every gate in the library, identity first
    pub const ALL: [Gate; 7] = [
        Gate::I,
        Gate::X,
        Gate::Y,
        Gate::Z,
        Gate::H,
        Gate::S,
        Gate::T,
    ];

    /// Nome curto usado no diagrama
    pub fn name(&self) -> &'static str {
        match self {
            Self::I => "I",
            Self::X => "X",
            Self::Y => "Y",
            Self::Z => "Z",
            Self::H => "H",
            Self::S => "S",
            Self::T => "T",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::I => "Identity",
            Self::X => "Pauli-X (bit flip)",
            Self::Y => "Pauli-Y",
            Self::Z => "Pauli-Z (phase flip)",
            Self::H => "Hadamard (superposition)",
            Self::S => "S phase (√Z)",
            Self::T => "T phase (π/8)",
        }
    }

    /// The gate's 2x2 unitary
    pub fn matrix(&self) -> &'static ComplexMatrix {
        match self {
            Self::I => &*IDENTITY,
            Self::X => &*PAULI_X,
            Self::Y => &*PAULI_Y,
            Self::Z => &*PAULI_Z,
            Self::H => &*HADAMARD,
            Self::S => &*S_GATE,
            Self::T => &*T_GATE,
        }
    }

    /// Reverse lookup by exact matrix equality
    pub fn identify(matrix: &ComplexMatrix) -> Option<Gate> {
        Self::ALL.into_iter().find(|g| g.matrix() == matrix)
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Gate {
    type Err = QsymError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "I" | "ID" => Ok(Self::I),
            "X" => Ok(Self::X),
            "Y" => Ok(Self::Y),
            "Z" => Ok(Self::Z),
            "H" => Ok(Self::H),
            "S" => Ok(Self::S),
            "T" => Ok(Self::T),
            _ => Err(QsymError::UnknownGate(s.to_string())),
        }
    }
}

/// Single-qubit computational basis states
pub struct Qubit;

impl Qubit {
    /// |0⟩ = (1, 0)ᵀ
    pub fn zero() -> &'static ComplexMatrix {
        &*KET_ZERO
    }

    /// |1⟩ = (0, 1)ᵀ
    pub fn one() -> &'static ComplexMatrix {
        &*KET_ONE
    }
}

/// |0…0⟩ over `n` qubits, folded left-to-right so lane 0 is leftmost.
///
/// `n == 0` yields the 1x1 unit scalar (empty tensor product).
pub fn ground_state(n: usize) -> ComplexMatrix {
    (0..n).fold(ComplexMatrix::scalar(ONE), |acc, _| {
        acc.tensor_product(Qubit::zero())
    })
}
