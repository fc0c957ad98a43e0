//! Testes de integração para qsym-core

use qsym_core::prelude::*;
use qsym_core::{basis_label, diagram};

/// Deterministic gate/lane sequence for packing checks
fn scripted_ops(depth: usize, count: usize) -> Vec<(Gate, usize)> {
    let gates = [Gate::X, Gate::H, Gate::Z, Gate::Y, Gate::S, Gate::T];
    (0..count)
        .map(|i| (gates[(i * 7 + 3) % gates.len()], (i * 5 + i / 3) % depth))
        .collect()
}

#[test]
fn test_packing_uses_minimum_layers() {
    let depth = 4;
    let ops = scripted_ops(depth, 40);
    let mut circuit = Circuit::new(depth).unwrap();
    let mut per_lane = vec![0usize; depth];

    for &(gate, lane) in &ops {
        circuit.apply(gate, lane).unwrap();
        per_lane[lane] += 1;
    }

    // the busiest lane dictates the layer count
    assert_eq!(circuit.layer_count(), *per_lane.iter().max().unwrap());
    for lane in 0..depth {
        let schedule = circuit.lane_schedule(lane);
        assert_eq!(schedule, (0..per_lane[lane]).collect::<Vec<_>>());
    }
}

#[test]
fn test_packing_preserves_lane_order() {
    let depth = 3;
    let ops = scripted_ops(depth, 24);
    let mut circuit = Circuit::new(depth).unwrap();
    for &(gate, lane) in &ops {
        circuit.apply(gate, lane).unwrap();
    }

    for lane in 0..depth {
        let requested: Vec<Gate> = ops
            .iter()
            .filter(|(_, l)| *l == lane)
            .map(|(g, _)| *g)
            .collect();
        let placed: Vec<Gate> = circuit
            .lane_schedule(lane)
            .into_iter()
            .map(|idx| Gate::identify(circuit.layers()[idx].get_matrix(lane).unwrap()).unwrap())
            .collect();
        assert_eq!(placed, requested);
    }
}

#[test]
fn test_every_layer_matches_depth() {
    let mut circuit = Circuit::new(5).unwrap();
    for &(gate, lane) in &scripted_ops(5, 30) {
        circuit.apply(gate, lane).unwrap();
    }
    assert!(circuit.layers().iter().all(|layer| layer.depth() == 5));
}

#[test]
fn test_layerwise_evolution_matches_sequential_gates() {
    // lane-by-lane single-qubit evolution must agree with the layered simulation
    let mut circuit = Circuit::new(2).unwrap();
    circuit.h(0).unwrap();
    circuit.s(0).unwrap();
    circuit.t(1).unwrap();
    circuit.x(1).unwrap();
    circuit.h(1).unwrap();

    let q0 = Gate::S
        .matrix()
        .matmul(&Gate::H.matrix().matmul(Qubit::zero()).unwrap())
        .unwrap();
    let q1 = [Gate::T, Gate::X, Gate::H]
        .into_iter()
        .try_fold(Qubit::zero().clone(), |state, g| g.matrix().matmul(&state))
        .unwrap();

    let expected = q0.tensor_product(&q1);
    assert!(circuit.run().unwrap().approx_eq(&expected, 1e-12));
}

#[test]
fn test_custom_initial_state() {
    let mut circuit = Circuit::new(2).unwrap();
    circuit.x(0).unwrap();
    circuit.x(1).unwrap();

    let initial = Qubit::one().tensor_product(Qubit::zero());
    let out = circuit.state_vector(&initial).unwrap();
    assert_eq!(out, Qubit::zero().tensor_product(Qubit::one()));
}

#[test]
fn test_seeded_config_reproducible() {
    let mut circuit = Circuit::new(3).unwrap();
    for lane in 0..3 {
        circuit.h(lane).unwrap();
    }
    let state = circuit.run().unwrap();

    let config = SimulatorConfig {
        seed: Some(31337),
        shots: 300,
        ..Default::default()
    };
    let first = MeasurementEngine::new(config.clone()).histogram_default(&state).unwrap();
    let second = MeasurementEngine::new(config).histogram_default(&state).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.shots(), 300);
    assert_eq!(first.total() as usize + first.discarded(), 300);
}

#[test]
fn test_histogram_serializes_ordered_counts() {
    let mut engine = MeasurementEngine::with_seed(8);
    let state = Qubit::one().tensor_product(Qubit::one());
    let hist = engine.histogram(&state, 10).unwrap();

    let json = serde_json::to_value(&hist).unwrap();
    assert_eq!(json["counts"]["11"], 10);
    assert_eq!(json["shots"], 10);
    assert_eq!(json["discarded"], 0);
}

#[test]
fn test_diagram_render() {
    let mut circuit = Circuit::new(2).unwrap();
    circuit.h(0).unwrap();
    circuit.t(0).unwrap();
    circuit.y(1).unwrap();
    assert_eq!(diagram::render(&circuit), "q0: H T\nq1: Y I\n");
}

#[test]
fn test_basis_label_matches_lane_order() {
    // X on lane 0 only: the leftmost bit flips
    let mut circuit = Circuit::new(3).unwrap();
    circuit.x(0).unwrap();
    let state = circuit.run().unwrap();
    let index = state
        .as_slice()
        .iter()
        .position(|a| a.norm() > 0.5)
        .unwrap();
    assert_eq!(basis_label(index, 3), "100");
}

#[test]
fn test_state_serializes_with_shape_and_amplitudes() {
    let mut circuit = Circuit::new(1).unwrap();
    circuit.s(0).unwrap();
    circuit.x(0).unwrap();
    let state = circuit.run().unwrap();

    let json = serde_json::to_value(&state).unwrap();
    assert_eq!(json["rows"], 2);
    assert_eq!(json["cols"], 1);
    // Complex64 serializes as [re, im]
    assert_eq!(json["data"], serde_json::json!([[0.0, 0.0], [1.0, 0.0]]));
}
