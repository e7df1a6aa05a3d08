//! High-level circuit builder API.

use std::f64::consts::PI;

use rustc_hash::FxHashMap;

use crate::dag::CircuitDag;
use crate::error::IrResult;
use crate::gate::{Gate, StandardGate};
use crate::instruction::Instruction;
use crate::qubit::{ClbitId, QubitId};

/// A named quantum circuit.
///
/// Gate methods validate their operands and return `&mut Self`, so calls can
/// be chained with `?`:
///
/// ```
/// use qic_ir::{Circuit, QubitId};
///
/// # fn main() -> qic_ir::IrResult<()> {
/// let mut circuit = Circuit::with_size("pair", 2, 0);
/// circuit.h(QubitId(0))?.cx(QubitId(0), QubitId(1))?;
/// assert_eq!(circuit.depth(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Circuit {
    name: String,
    dag: CircuitDag,
    next_qubit: u32,
    next_clbit: u32,
}

impl Circuit {
    /// Create an empty circuit.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dag: CircuitDag::new(),
            next_qubit: 0,
            next_clbit: 0,
        }
    }

    /// Create a circuit with qubits `0..num_qubits` and classical bits
    /// `0..num_clbits`.
    pub fn with_size(name: impl Into<String>, num_qubits: u32, num_clbits: u32) -> Self {
        let mut circuit = Self::new(name);
        for _ in 0..num_qubits {
            circuit.add_qubit();
        }
        for _ in 0..num_clbits {
            circuit.add_clbit();
        }
        circuit
    }

    /// Append a qubit and return its id.
    pub fn add_qubit(&mut self) -> QubitId {
        let id = QubitId(self.next_qubit);
        self.next_qubit += 1;
        self.dag.add_qubit(id);
        id
    }

    /// Append a classical bit and return its id.
    pub fn add_clbit(&mut self) -> ClbitId {
        let id = ClbitId(self.next_clbit);
        self.next_clbit += 1;
        self.dag.add_clbit(id);
        id
    }

    fn push(&mut self, instruction: Instruction) -> IrResult<&mut Self> {
        self.dag.apply(instruction)?;
        Ok(self)
    }

    /// Apply an arbitrary gate.
    pub fn gate(
        &mut self,
        gate: impl Into<Gate>,
        qubits: impl IntoIterator<Item = QubitId>,
    ) -> IrResult<&mut Self> {
        self.push(Instruction::gate(gate, qubits))
    }

    pub fn h(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.gate(StandardGate::H, [qubit])
    }

    /// Hadamard on every qubit, in qubit order.
    pub fn h_all(&mut self) -> IrResult<&mut Self> {
        for qubit in self.dag.qubits().to_vec() {
            self.h(qubit)?;
        }
        Ok(self)
    }

    pub fn x(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.gate(StandardGate::X, [qubit])
    }

    pub fn ry(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.gate(StandardGate::Ry(theta), [qubit])
    }

    pub fn rz(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.gate(StandardGate::Rz(theta), [qubit])
    }

    pub fn cx(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.gate(StandardGate::CX, [control, target])
    }

    pub fn cz(&mut self, q1: QubitId, q2: QubitId) -> IrResult<&mut Self> {
        self.gate(StandardGate::CZ, [q1, q2])
    }

    pub fn ecr(&mut self, q1: QubitId, q2: QubitId) -> IrResult<&mut Self> {
        self.gate(StandardGate::ECR, [q1, q2])
    }

    pub fn swap(&mut self, q1: QubitId, q2: QubitId) -> IrResult<&mut Self> {
        self.gate(StandardGate::Swap, [q1, q2])
    }

    /// Controlled phase rotation by `theta`.
    pub fn cp(&mut self, theta: f64, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.gate(StandardGate::CP(theta), [control, target])
    }

    pub fn rzz(&mut self, theta: f64, q1: QubitId, q2: QubitId) -> IrResult<&mut Self> {
        self.gate(StandardGate::RZZ(theta), [q1, q2])
    }

    pub fn ccx(&mut self, c1: QubitId, c2: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.gate(StandardGate::CCX, [c1, c2, target])
    }

    /// Measure one qubit into one classical bit.
    pub fn measure(&mut self, qubit: QubitId, clbit: ClbitId) -> IrResult<&mut Self> {
        self.push(Instruction::measure(qubit, clbit))
    }

    /// Measure every qubit with a single instruction.
    ///
    /// Classical bits are allocated until there is one per qubit; qubit `i`
    /// is measured into classical bit `i`.
    pub fn measure_all(&mut self) -> IrResult<&mut Self> {
        while self.num_clbits() < self.num_qubits() {
            self.add_clbit();
        }
        let qubits = self.dag.qubits().to_vec();
        let clbits = self.dag.clbits().iter().copied().take(qubits.len());
        let instruction = Instruction::measure_all(qubits, clbits)?;
        self.push(instruction)
    }

    pub fn reset(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::reset(qubit))
    }

    pub fn barrier(&mut self, qubits: impl IntoIterator<Item = QubitId>) -> IrResult<&mut Self> {
        self.push(Instruction::barrier(qubits))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn num_qubits(&self) -> usize {
        self.dag.num_qubits()
    }

    pub fn num_clbits(&self) -> usize {
        self.dag.num_clbits()
    }

    pub fn depth(&self) -> usize {
        self.dag.depth()
    }

    pub fn dag(&self) -> &CircuitDag {
        &self.dag
    }

    /// Qubits in the order they were added.
    pub fn qubits(&self) -> &[QubitId] {
        self.dag.qubits()
    }

    /// Position of a qubit in [`Circuit::qubits`], if it belongs to this
    /// circuit.
    pub fn qubit_index(&self, qubit: QubitId) -> Option<usize> {
        self.qubits().iter().position(|&q| q == qubit)
    }

    /// Operations in application order.
    pub fn instructions(&self) -> impl Iterator<Item = &Instruction> + '_ {
        self.dag.ops()
    }

    /// Number of operations per instruction name.
    pub fn count_ops(&self) -> FxHashMap<String, usize> {
        let mut counts = FxHashMap::default();
        for inst in self.instructions() {
            *counts.entry(inst.name().to_string()).or_insert(0) += 1;
        }
        counts
    }

    /// GHZ state preparation on `n` qubits, measured qubit by qubit.
    pub fn ghz(n: u32) -> IrResult<Self> {
        let mut circuit = Self::with_size("ghz", n, n);
        if n == 0 {
            return Ok(circuit);
        }

        circuit.h(QubitId(0))?;
        for i in 1..n {
            circuit.cx(QubitId(i - 1), QubitId(i))?;
        }
        for i in 0..n {
            circuit.measure(QubitId(i), ClbitId(i))?;
        }
        Ok(circuit)
    }

    /// Quantum Fourier transform on `n` qubits, without measurement.
    ///
    /// Every pair interacts through one controlled phase of angle
    /// `π / 2^(j - i)`; the final swaps reverse qubit order.
    pub fn qft(n: u32) -> IrResult<Self> {
        let mut circuit = Self::with_size("qft", n, 0);

        for i in 0..n {
            circuit.h(QubitId(i))?;
            for j in (i + 1)..n {
                let angle = PI / 2f64.powf(f64::from(j - i));
                circuit.cp(angle, QubitId(j), QubitId(i))?;
            }
        }
        for i in 0..n / 2 {
            circuit.swap(QubitId(i), QubitId(n - 1 - i))?;
        }

        Ok(circuit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IrError;
    use crate::gate::CustomGate;
    use crate::instruction::InstructionKind;

    #[test]
    fn test_with_size() {
        let circuit = Circuit::with_size("test", 3, 2);
        assert_eq!(circuit.name(), "test");
        assert_eq!(circuit.num_qubits(), 3);
        assert_eq!(circuit.num_clbits(), 2);
        assert_eq!(circuit.qubits(), &[QubitId(0), QubitId(1), QubitId(2)]);
    }

    #[test]
    fn test_qubit_index() {
        let circuit = Circuit::with_size("test", 3, 0);
        assert_eq!(circuit.qubit_index(QubitId(2)), Some(2));
        assert_eq!(circuit.qubit_index(QubitId(9)), None);
    }

    #[test]
    fn test_ghz_state() {
        let circuit = Circuit::ghz(5).unwrap();
        assert_eq!(circuit.num_qubits(), 5);
        assert_eq!(circuit.num_clbits(), 5);
        assert_eq!(circuit.count_ops()["cx"], 4);
        assert_eq!(circuit.count_ops()["measure"], 5);

        assert_eq!(Circuit::ghz(0).unwrap().instructions().count(), 0);
    }

    #[test]
    fn test_qft_gate_counts() {
        let circuit = Circuit::qft(4).unwrap();
        let counts = circuit.count_ops();
        assert_eq!(counts["h"], 4);
        assert_eq!(counts["cp"], 6);
        assert_eq!(counts["swap"], 2);
        assert_eq!(circuit.num_clbits(), 0);
    }

    #[test]
    fn test_qft_angles_halve_with_distance() {
        let circuit = Circuit::qft(3).unwrap();
        let angles: Vec<f64> = circuit
            .instructions()
            .filter_map(|inst| match inst.kind {
                InstructionKind::Gate(Gate::Standard(StandardGate::CP(theta))) => Some(theta),
                _ => None,
            })
            .collect();
        let expected = [PI / 2.0, PI / 4.0, PI / 2.0];
        assert_eq!(angles.len(), expected.len());
        for (got, want) in angles.iter().zip(expected) {
            assert!((got - want).abs() < 1e-12);
        }
    }

    #[test]
    fn test_wide_qft_builds() {
        // Distances of 32 and more exceed what fits in a u32 shift.
        let circuit = Circuit::qft(40).unwrap();
        assert_eq!(circuit.count_ops()["cp"], 40 * 39 / 2);
        for inst in circuit.instructions() {
            if let InstructionKind::Gate(Gate::Standard(StandardGate::CP(theta))) = inst.kind {
                assert!((0.0..=PI / 2.0).contains(&theta));
            }
        }
    }

    #[test]
    fn test_h_all_and_ecr() {
        let mut circuit = Circuit::with_size("test", 3, 0);
        circuit
            .h_all()
            .unwrap()
            .ecr(QubitId(0), QubitId(2))
            .unwrap()
            .rz(PI / 4.0, QubitId(1))
            .unwrap();

        let names: Vec<_> = circuit.instructions().map(Instruction::name).collect();
        assert_eq!(names, vec!["h", "h", "h", "ecr", "rz"]);
    }

    #[test]
    fn test_custom_gate_arity_checked() {
        let mut circuit = Circuit::with_size("test", 2, 0);
        let err = circuit
            .gate(CustomGate::new("fsim", 2), [QubitId(0)])
            .unwrap_err();
        assert!(matches!(err, IrError::QubitCountMismatch { expected: 2, got: 1, .. }));
    }

    #[test]
    fn test_measure_all_allocates_clbits() {
        let mut circuit = Circuit::with_size("test", 3, 1);
        circuit.measure_all().unwrap();

        assert_eq!(circuit.num_clbits(), 3);
        let measure = circuit.instructions().last().unwrap();
        assert!(measure.is_measure());
        assert_eq!(measure.qubits, vec![QubitId(0), QubitId(1), QubitId(2)]);
        assert_eq!(measure.clbits, vec![ClbitId(0), ClbitId(1), ClbitId(2)]);
    }

    #[test]
    fn test_fluent_api_errors_on_missing_qubit() {
        let mut circuit = Circuit::with_size("test", 2, 0);
        assert!(circuit.cz(QubitId(0), QubitId(5)).is_err());
        assert_eq!(circuit.dag().num_ops(), 0);
    }
}
