//! Textual circuit diagram: one row per qubit, one column per layer.
//!
//! ```text
//! q0: X H
//! q1: X X
//! q2: I I
//! ```
//!
//! Library gates print their name, identity prints `I`, anything else `U`.

use crate::circuit::Circuit;
use crate::gates::Gate;
use std::fmt;

fn cell(circuit: &Circuit, layer: usize, lane: usize) -> &'static str {
    let matrix = circuit.layers()[layer].matrix_or_identity(lane);
    Gate::identify(matrix).map_or("U", |g| g.name())
}

/// Renders the diagram as a string with a trailing newline per row
pub fn render(circuit: &Circuit) -> String {
    let label_width = format!("q{}", circuit.depth().saturating_sub(1)).len();
    let mut out = String::new();

    for lane in 0..circuit.depth() {
        let label = format!("q{lane}");
        out.push_str(&format!("{label:<label_width$}:"));
        for layer in 0..circuit.layer_count() {
            out.push(' ');
            out.push_str(cell(circuit, layer, lane));
        }
        out.push('\n');
    }
    out
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}
