//! Quality indicator circuit builder.

use serde::Serialize;
use tracing::{debug, info, instrument};

use qic_ir::{Circuit, Instruction};

use crate::config::QicConfig;
use crate::error::QicResult;
use crate::histogram::InteractionHistogram;

/// Builds quality indicator circuits (QICs).
///
/// A QIC keeps only the two-qubit interaction pattern of its input: which
/// pairs interact and how often relative to each other. The interactions are
/// replayed with a single primitive between two layers of Hadamard gates.
///
/// ```
/// use qic_ir::{Circuit, QubitId};
/// use qic_synth::{QicBuilder, QicConfig, TwoQubitGate};
///
/// let mut circuit = Circuit::with_size("input", 3, 3);
/// circuit.cx(QubitId(0), QubitId(1)).unwrap();
/// circuit.cx(QubitId(0), QubitId(1)).unwrap();
/// circuit.cx(QubitId(1), QubitId(2)).unwrap();
///
/// let builder = QicBuilder::new(QicConfig::default().with_two_qubit_gate(TwoQubitGate::Cx));
/// let qics = builder.build(&[circuit]).unwrap();
///
/// let counts = qics[0].count_ops();
/// assert_eq!(counts["h"], 6);
/// assert_eq!(counts["cx"], 3);
/// assert_eq!(counts["measure"], 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct QicBuilder {
    config: QicConfig,
}

/// What a QIC build did to one input circuit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QicSummary {
    /// Name of the input circuit.
    pub name: String,
    /// Qubit count of both input and output.
    pub num_qubits: usize,
    /// Interaction histogram of the input.
    pub original: InteractionHistogram,
    /// Histogram replayed in the output (normalized when configured).
    pub effective: InteractionHistogram,
    /// Two-qubit gates in the output.
    pub two_qubit_gates: usize,
    /// Whether the output ends with a measurement.
    pub measured: bool,
}

impl QicBuilder {
    /// Create a builder with a fixed configuration.
    pub fn new(config: QicConfig) -> Self {
        Self { config }
    }

    /// Create a default builder using the named two-qubit gate.
    ///
    /// Fails with [`QicError::UnrecognizedGateKind`](crate::QicError::UnrecognizedGateKind)
    /// for names other than `"cx"`, `"ecr"` and `"cz"`.
    pub fn from_gate_name(name: &str) -> QicResult<Self> {
        Ok(Self::new(QicConfig::default().with_gate_name(name)?))
    }

    /// The configuration applied to every circuit.
    pub fn config(&self) -> &QicConfig {
        &self.config
    }

    /// Build one QIC per input circuit, in order.
    ///
    /// Stops at the first circuit that fails and returns its error.
    #[instrument(skip(self, circuits), fields(gate = %self.config.two_qubit_gate))]
    pub fn build(&self, circuits: &[Circuit]) -> QicResult<Vec<Circuit>> {
        info!("Building QICs for {} circuits", circuits.len());

        let qics = circuits
            .iter()
            .map(|circuit| self.build_one(circuit))
            .collect::<QicResult<Vec<_>>>()?;

        info!("Built {} QICs", qics.len());
        Ok(qics)
    }

    /// Build the QIC for a single circuit.
    pub fn build_one(&self, circuit: &Circuit) -> QicResult<Circuit> {
        let histogram = self.effective_histogram(&InteractionHistogram::from_circuit(circuit))?;
        self.synthesize_named(
            format!("qic_{}", circuit.name()),
            circuit.num_qubits(),
            circuit.num_clbits() > 0,
            &histogram,
        )
    }

    /// Build the QIC for a single circuit and report what it contains.
    pub fn analyze(&self, circuit: &Circuit) -> QicResult<(Circuit, QicSummary)> {
        let original = InteractionHistogram::from_circuit(circuit);
        let effective = self.effective_histogram(&original)?;
        let qic = self.synthesize_named(
            format!("qic_{}", circuit.name()),
            circuit.num_qubits(),
            circuit.num_clbits() > 0,
            &effective,
        )?;

        let summary = QicSummary {
            name: circuit.name().to_string(),
            num_qubits: qic.num_qubits(),
            two_qubit_gates: qic.instructions().filter(|i| i.is_two_qubit_gate()).count(),
            measured: qic.instructions().any(Instruction::is_measure),
            original,
            effective,
        };
        Ok((qic, summary))
    }

    /// Apply ratio normalization when configured.
    fn effective_histogram(&self, histogram: &InteractionHistogram) -> QicResult<InteractionHistogram> {
        if self.config.reduce_by_ratio {
            histogram.normalized()
        } else {
            Ok(histogram.clone())
        }
    }

    /// Synthesize a QIC from an interaction histogram.
    ///
    /// The output has `num_qubits` qubits: a Hadamard on every qubit, each
    /// pair's primitive repeated `count` times (contiguously per pair), a
    /// second Hadamard layer, and a full-width barrier followed by a
    /// full-width measurement when `measure` is set.
    pub fn synthesize(
        &self,
        num_qubits: usize,
        measure: bool,
        histogram: &InteractionHistogram,
    ) -> QicResult<Circuit> {
        self.synthesize_named("qic", num_qubits, measure, histogram)
    }

    fn synthesize_named(
        &self,
        name: impl Into<String>,
        num_qubits: usize,
        measure: bool,
        histogram: &InteractionHistogram,
    ) -> QicResult<Circuit> {
        let mut qic = Circuit::new(name);
        for _ in 0..num_qubits {
            qic.add_qubit();
        }

        qic.h_all()?;

        let gate = self.config.two_qubit_gate;
        let barriers = self.config.barriers_enabled() && histogram.len() > 1;

        for entry in histogram.iter() {
            let (a, b) = entry.pair.qubits();
            debug!("{} x{} on {}", gate, entry.count, entry.pair);
            for _ in 0..entry.count {
                qic.gate(gate.standard_gate(), [a, b])?;
                if barriers {
                    qic.barrier([a, b])?;
                }
            }
        }

        qic.h_all()?;

        if measure {
            let qubits = qic.qubits().to_vec();
            qic.barrier(qubits)?;
            qic.measure_all()?;
        }

        Ok(qic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TwoQubitGate;
    use crate::error::QicError;
    use qic_ir::QubitId;

    fn two_pair_circuit(num_clbits: u32) -> Circuit {
        let mut circuit = Circuit::with_size("input", 3, num_clbits);
        circuit
            .h(QubitId(0))
            .unwrap()
            .cx(QubitId(0), QubitId(1))
            .unwrap()
            .cx(QubitId(1), QubitId(0))
            .unwrap()
            .cx(QubitId(1), QubitId(2))
            .unwrap();
        circuit
    }

    fn names(circuit: &Circuit) -> Vec<String> {
        circuit
            .instructions()
            .map(|i| i.name().to_string())
            .collect()
    }

    #[test]
    fn test_cx_with_barriers() {
        let config = QicConfig::default()
            .with_two_qubit_gate(TwoQubitGate::Cx)
            .with_insert_barriers(true);
        let qic = QicBuilder::new(config)
            .build_one(&two_pair_circuit(0))
            .unwrap();

        assert_eq!(qic.name(), "qic_input");
        assert_eq!(qic.num_qubits(), 3);
        assert_eq!(qic.num_clbits(), 0);
        assert_eq!(
            names(&qic),
            vec![
                "h", "h", "h", "cx", "barrier", "cx", "barrier", "cx", "barrier", "h", "h", "h"
            ]
        );

        let ops: Vec<_> = qic.instructions().collect();
        for pair in ops[3..9].chunks(2) {
            assert_eq!(pair[0].qubits, pair[1].qubits);
        }
        assert_eq!(ops[3].qubits, vec![QubitId(0), QubitId(1)]);
        assert_eq!(ops[7].qubits, vec![QubitId(1), QubitId(2)]);
    }

    #[test]
    fn test_no_barriers_for_single_pair() {
        let mut circuit = Circuit::with_size("single", 2, 0);
        circuit.cx(QubitId(0), QubitId(1)).unwrap();
        circuit.cx(QubitId(0), QubitId(1)).unwrap();

        let config = QicConfig::default()
            .with_two_qubit_gate(TwoQubitGate::Cx)
            .with_insert_barriers(true)
            .with_reduce_by_ratio(false);
        let qic = QicBuilder::new(config).build_one(&circuit).unwrap();

        assert_eq!(names(&qic), vec!["h", "h", "cx", "cx", "h", "h"]);
    }

    #[test]
    fn test_barriers_ignored_for_cz_and_ecr() {
        for gate in [TwoQubitGate::Cz, TwoQubitGate::Ecr] {
            let config = QicConfig::default()
                .with_two_qubit_gate(gate)
                .with_insert_barriers(true);
            let qic = QicBuilder::new(config)
                .build_one(&two_pair_circuit(0))
                .unwrap();

            let counts = qic.count_ops();
            assert_eq!(counts[gate.name()], 3);
            assert!(!counts.contains_key("barrier"));
        }
    }

    #[test]
    fn test_measures_when_input_has_clbits() {
        let builder = QicBuilder::default();
        let qic = builder.build_one(&two_pair_circuit(1)).unwrap();

        assert_eq!(qic.num_clbits(), 3);
        let ops: Vec<_> = qic.instructions().collect();
        let [.., fence, last] = ops.as_slice() else {
            panic!("qic too short");
        };
        assert!(fence.is_barrier());
        assert!(last.is_measure());
        assert_eq!(fence.qubits, vec![QubitId(0), QubitId(1), QubitId(2)]);
        assert_eq!(last.qubits, vec![QubitId(0), QubitId(1), QubitId(2)]);
    }

    #[test]
    fn test_measured_qic_fences_before_measure() {
        let config = QicConfig::default()
            .with_two_qubit_gate(TwoQubitGate::Cx)
            .with_insert_barriers(true);
        let qic = QicBuilder::new(config)
            .build_one(&two_pair_circuit(1))
            .unwrap();

        assert_eq!(
            names(&qic),
            vec![
                "h", "h", "h", "cx", "barrier", "cx", "barrier", "cx", "barrier", "h", "h", "h",
                "barrier", "measure"
            ]
        );
        assert_eq!(qic.count_ops()["barrier"], 4);
    }

    #[test]
    fn test_primitive_matches_configured_gate() {
        for gate in [TwoQubitGate::Cx, TwoQubitGate::Ecr, TwoQubitGate::Cz] {
            let config = QicConfig::default().with_two_qubit_gate(gate);
            let qic = QicBuilder::new(config)
                .build_one(&two_pair_circuit(0))
                .unwrap();

            let primitives: Vec<_> = qic
                .instructions()
                .filter(|i| i.is_two_qubit_gate())
                .collect();
            assert_eq!(primitives.len(), 3);
            assert!(primitives.iter().all(|i| i.name() == gate.name()));
        }
    }

    #[test]
    fn test_reduce_by_ratio_toggle() {
        let mut circuit = Circuit::with_size("input", 3, 0);
        for _ in 0..4 {
            circuit.cz(QubitId(0), QubitId(1)).unwrap();
        }
        for _ in 0..2 {
            circuit.cz(QubitId(1), QubitId(2)).unwrap();
        }

        let reduced = QicBuilder::default().build_one(&circuit).unwrap();
        assert_eq!(reduced.count_ops()["cz"], 3);

        let full = QicBuilder::new(QicConfig::default().with_reduce_by_ratio(false))
            .build_one(&circuit)
            .unwrap();
        assert_eq!(full.count_ops()["cz"], 6);
    }

    #[test]
    fn test_reduce_without_interactions_fails() {
        let mut circuit = Circuit::with_size("product", 2, 0);
        circuit.h(QubitId(0)).unwrap();

        let err = QicBuilder::default().build_one(&circuit).unwrap_err();
        assert!(matches!(err, QicError::DivisionUndefined));
    }

    #[test]
    fn test_no_interactions_without_reduce() {
        let mut circuit = Circuit::with_size("product", 2, 0);
        circuit.h(QubitId(0)).unwrap().x(QubitId(1)).unwrap();

        let builder = QicBuilder::new(QicConfig::default().with_reduce_by_ratio(false));
        let qic = builder.build_one(&circuit).unwrap();
        assert_eq!(names(&qic), vec!["h", "h", "h", "h"]);
    }

    #[test]
    fn test_from_gate_name() {
        let builder = QicBuilder::from_gate_name("ecr").unwrap();
        assert_eq!(builder.config().two_qubit_gate, TwoQubitGate::Ecr);

        let err = QicBuilder::from_gate_name("xyz").unwrap_err();
        assert!(matches!(err, QicError::UnrecognizedGateKind(ref g) if g == "xyz"));
    }

    #[test]
    fn test_synthesize_rejects_out_of_range_pair() {
        let histogram = InteractionHistogram::from_counts([((0, 5), 1)]);
        let err = QicBuilder::default()
            .synthesize(3, false, &histogram)
            .unwrap_err();
        assert!(matches!(err, QicError::Ir(_)));
    }

    #[test]
    fn test_analyze_summary() {
        let (qic, summary) = QicBuilder::default()
            .analyze(&two_pair_circuit(2))
            .unwrap();

        assert_eq!(summary.name, "input");
        assert_eq!(summary.num_qubits, 3);
        assert_eq!(summary.original.get(0, 1), Some(2));
        assert_eq!(summary.effective.get(0, 1), Some(2));
        assert_eq!(summary.two_qubit_gates, 3);
        assert!(summary.measured);
        assert_eq!(qic.count_ops()["cz"], 3);
    }
}
