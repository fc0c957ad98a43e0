//! Layer — um passo de tempo simultâneo sobre todas as lanes

use crate::error::{QsymError, QsymResult};
use crate::gates::Gate;
use crate::matrix::ComplexMatrix;

/// One time-step of single-qubit gates, one 2x2 matrix per lane.
///
/// Lanes start as the identity and are only ever replaced, never removed.
#[derive(Clone, Debug, PartialEq)]
pub struct Layer {
    lanes: Vec<ComplexMatrix>,
}

impl Layer {
    /// Cria layer com todas as lanes em identidade
    pub fn new(depth: usize) -> Self {
        Self {
            lanes: vec![Gate::I.matrix().clone(); depth],
        }
    }

    /// Lane count (= circuit depth)
    pub fn depth(&self) -> usize {
        self.lanes.len()
    }

    /// Replaces the matrix held by `lane`
    pub fn set_matrix(&mut self, lane: usize, matrix: &ComplexMatrix) -> QsymResult<()> {
        let depth = self.depth();
        let slot = self
            .lanes
            .get_mut(lane)
            .ok_or(QsymError::OutOfRangeLane { lane, depth })?;

        if matrix.shape() != (2, 2) {
            return Err(QsymError::NotSingleQubitGate {
                rows: matrix.rows(),
                cols: matrix.cols(),
            });
        }

        *slot = matrix.clone();
        Ok(())
    }

    pub fn get_matrix(&self, lane: usize) -> Option<&ComplexMatrix> {
        self.lanes.get(lane)
    }

    /// Lane matrix, or the identity when `lane` is out of range
    pub fn matrix_or_identity(&self, lane: usize) -> &ComplexMatrix {
        self.lanes.get(lane).unwrap_or_else(|| Gate::I.matrix())
    }

    /// True while the lane still holds the identity
    pub fn is_lane_free(&self, lane: usize) -> bool {
        self.lanes.get(lane).is_some_and(|m| m == Gate::I.matrix())
    }

    /// Lane matrices in lane order
    pub fn lanes(&self) -> &[ComplexMatrix] {
        &self.lanes
    }

    /// Full `2^depth x 2^depth` unitary of this time-step.
    ///
    /// Lanes are folded left-to-right with the Kronecker product, so lane 0
    /// is the most-significant factor. Depth 0 yields the 2x2 identity.
    pub fn operator_matrix(&self) -> ComplexMatrix {
        match self.lanes.split_first() {
            None => ComplexMatrix::identity(2),
            Some((first, rest)) => rest
                .iter()
                .fold(first.clone(), |acc, m| acc.tensor_product(m)),
        }
    }

    /// Applies this layer's operator to `input` (a `2^depth` column vector)
    pub fn state_vector(&self, input: &ComplexMatrix) -> QsymResult<ComplexMatrix> {
        self.operator_matrix().matmul(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gates::{ground_state, Qubit};

    #[test]
    fn test_new_layer_is_identity() {
        let layer = Layer::new(3);
        assert_eq!(layer.depth(), 3);
        assert!((0..3).all(|lane| layer.is_lane_free(lane)));
        assert_eq!(layer.operator_matrix(), ComplexMatrix::identity(8));
    }

    #[test]
    fn test_set_and_get() {
        let mut layer = Layer::new(2);
        layer.set_matrix(1, Gate::H.matrix()).unwrap();
        assert_eq!(layer.get_matrix(1), Some(Gate::H.matrix()));
        assert!(layer.is_lane_free(0));
        assert!(!layer.is_lane_free(1));
    }

    #[test]
    fn test_out_of_range_lane() {
        let mut layer = Layer::new(2);
        let err = layer.set_matrix(2, Gate::X.matrix()).unwrap_err();
        assert!(matches!(err, QsymError::OutOfRangeLane { lane: 2, depth: 2 }));
        assert!(layer.get_matrix(5).is_none());
        assert_eq!(layer.matrix_or_identity(5), Gate::I.matrix());
        assert!(!layer.is_lane_free(5));
    }

    #[test]
    fn test_rejects_non_single_qubit_matrix() {
        let mut layer = Layer::new(1);
        let err = layer.set_matrix(0, &ComplexMatrix::identity(4)).unwrap_err();
        assert!(matches!(err, QsymError::NotSingleQubitGate { rows: 4, cols: 4 }));
    }

    #[test]
    fn test_depth_zero_and_one() {
        assert_eq!(Layer::new(0).operator_matrix(), ComplexMatrix::identity(2));

        let mut single = Layer::new(1);
        single.set_matrix(0, Gate::Y.matrix()).unwrap();
        assert_eq!(&single.operator_matrix(), Gate::Y.matrix());
    }

    #[test]
    fn test_lane_zero_is_most_significant() {
        // X on lane 0 of |00⟩ gives |10⟩ (index 2)
        let mut layer = Layer::new(2);
        layer.set_matrix(0, Gate::X.matrix()).unwrap();
        let out = layer.state_vector(&ground_state(2)).unwrap();
        assert_eq!(out, Qubit::one().tensor_product(Qubit::zero()));
        assert_eq!(out.at(2, 0).re, 1.0);
    }

    #[test]
    fn test_state_vector_height_mismatch() {
        let layer = Layer::new(2);
        assert!(matches!(
            layer.state_vector(&ground_state(3)),
            Err(QsymError::DimensionMismatch { op: "matmul", .. })
        ));
    }
}
