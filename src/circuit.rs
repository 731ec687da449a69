//! Depth-layered binary circuits.
//!
//! A circuit is an ordered sequence of depths, each an ordered sequence of
//! gates. A depth consumes the previous depth's outputs as one flat vector,
//! partitioned into contiguous slices sized by gate arity; its outputs are the
//! gate results in gate order.

use crate::error::{Error, Result};
use crate::gate::{Gate, HomomorphicOps};

/// A circuit under construction or ready for evaluation.
#[derive(Clone, Debug, Default)]
pub struct Circuit {
    depths: Vec<Vec<Gate>>,
}

/// Total number of inputs a depth consumes.
fn depth_arity(gates: &[Gate]) -> usize {
    gates.iter().map(Gate::arity).sum()
}

impl Circuit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a circuit from depth-ordered gate names.
    pub fn parse(depths: &[&[&str]]) -> Result<Self> {
        let mut circuit = Self::new();
        for depth in depths {
            circuit.add_named_depth(depth)?;
        }
        Ok(circuit)
    }

    pub fn is_empty(&self) -> bool {
        self.depths.is_empty()
    }

    /// Number of inputs the whole circuit expects; 0 while empty.
    pub fn input_arity(&self) -> usize {
        self.depths.first().map(|d| depth_arity(d)).unwrap_or(0)
    }

    /// Append a depth. The new depth's total arity must equal the previous
    /// depth's output count; on failure the circuit is left unchanged.
    pub fn add_depth(&mut self, gates: Vec<Gate>) -> Result<()> {
        if let Some(previous) = self.depths.last() {
            let outputs = previous.len();
            let inputs = depth_arity(&gates);
            if outputs != inputs {
                return Err(Error::count("depth arity", outputs, inputs));
            }
        }
        self.depths.push(gates);
        Ok(())
    }

    /// Parse gate names and append them as one depth.
    pub fn add_named_depth(&mut self, names: &[&str]) -> Result<()> {
        let gates = names
            .iter()
            .map(|name| Gate::from_name(name))
            .collect::<Result<Vec<_>>>()?;
        self.add_depth(gates)
    }

    /// Run the circuit, returning the final depth's outputs in gate order.
    pub fn evaluate<A: HomomorphicOps>(&self, ops: &A, inputs: &[A::Ct]) -> Result<Vec<A::Ct>> {
        if self.is_empty() {
            return Err(Error::EmptyCircuit);
        }
        if inputs.len() != self.input_arity() {
            return Err(Error::count("circuit inputs", self.input_arity(), inputs.len()));
        }

        let mut values = inputs.to_vec();
        for depth in &self.depths {
            values = evaluate_depth(ops, depth, &values)?;
        }
        Ok(values)
    }
}

fn evaluate_depth<A: HomomorphicOps>(ops: &A, depth: &[Gate], inputs: &[A::Ct]) -> Result<Vec<A::Ct>> {
    let mut outputs = Vec::with_capacity(depth.len());
    let mut offset = 0;
    for gate in depth {
        let slice = &inputs[offset..offset + gate.arity()];
        outputs.push(gate.eval(ops, slice)?);
        offset += gate.arity();
    }
    Ok(outputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plain::PlainAlgebra;

    #[test]
    fn test_parse_and_evaluate() {
        let circuit = Circuit::parse(&[&["wire", "wire"], &["and"]]).unwrap();
        assert_eq!(circuit.input_arity(), 2);
        for (a, b) in [(0u8, 0u8), (0, 1), (1, 0), (1, 1)] {
            let out = circuit.evaluate(&PlainAlgebra, &[a, b]).unwrap();
            assert_eq!(out, vec![a & b]);
        }
    }

    #[test]
    fn test_half_adder() {
        // sum = a XOR b, carry = a AND b
        let circuit =
            Circuit::parse(&[&["wire", "wire", "wire", "wire"], &["xor", "and"]]).unwrap();
        for (a, b) in [(0u8, 0u8), (0, 1), (1, 0), (1, 1)] {
            let out = circuit.evaluate(&PlainAlgebra, &[a, b, a, b]).unwrap();
            assert_eq!(out, vec![a ^ b, a & b]);
        }
    }

    #[test]
    fn test_incompatible_depth_leaves_circuit_unchanged() {
        let mut circuit = Circuit::new();
        circuit.add_named_depth(&["wire", "wire"]).unwrap();
        let err = circuit.add_named_depth(&["and", "and"]).unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch { .. }));
        // Still the one valid depth: evaluation works on two inputs.
        assert_eq!(circuit.input_arity(), 2);
        let out = circuit.evaluate(&PlainAlgebra, &[1, 0]).unwrap();
        assert_eq!(out, vec![1, 0]);
    }

    #[test]
    fn test_empty_circuit_rejected() {
        let circuit = Circuit::new();
        let err = circuit.evaluate(&PlainAlgebra, &[1u8]).unwrap_err();
        assert_eq!(err, Error::EmptyCircuit);
    }

    #[test]
    fn test_wrong_input_count_rejected() {
        let circuit = Circuit::parse(&[&["and"]]).unwrap();
        let err = circuit.evaluate(&PlainAlgebra, &[1u8]).unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch { .. }));
    }

    #[test]
    fn test_unknown_gate_rejected() {
        let err = Circuit::parse(&[&["wire", "nor"]]).unwrap_err();
        assert_eq!(err, Error::UnknownGate("nor".to_string()));
    }

    #[test]
    fn test_mixed_case_names() {
        let circuit = Circuit::parse(&[&["Wire", "WIRE"], &["NaNd"]]).unwrap();
        let out = circuit.evaluate(&PlainAlgebra, &[1u8, 1]).unwrap();
        assert_eq!(out, vec![0]);
    }
}
