//! DAG-based circuit representation.

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::{IrError, IrResult};
use crate::instruction::Instruction;
use crate::qubit::{ClbitId, QubitId};

#[derive(Debug, Clone)]
enum DagNode {
    In,
    Out,
    Op(Instruction),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum WireId {
    Qubit(QubitId),
    Clbit(ClbitId),
}

/// Input and output node of one wire, plus the last node placed on it.
#[derive(Debug, Clone, Copy)]
struct Wire {
    input: NodeIndex,
    output: NodeIndex,
    front: NodeIndex,
}

/// Circuit stored as a directed acyclic graph.
///
/// Every wire runs from an input node to an output node, threading through
/// the operations placed on it. Operations can only be appended, so the
/// order in which they were applied is always a topological order of the
/// graph; [`CircuitDag::ops`] iterates in that order.
#[derive(Debug, Clone, Default)]
pub struct CircuitDag {
    graph: DiGraph<DagNode, WireId>,
    wires: FxHashMap<WireId, Wire>,
    qubits: Vec<QubitId>,
    clbits: Vec<ClbitId>,
    op_order: Vec<NodeIndex>,
}

impl CircuitDag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a qubit wire. Adding an existing qubit is a no-op.
    pub fn add_qubit(&mut self, qubit: QubitId) {
        if self.add_wire(WireId::Qubit(qubit)) {
            self.qubits.push(qubit);
        }
    }

    /// Add a classical wire. Adding an existing bit is a no-op.
    pub fn add_clbit(&mut self, clbit: ClbitId) {
        if self.add_wire(WireId::Clbit(clbit)) {
            self.clbits.push(clbit);
        }
    }

    fn add_wire(&mut self, wire: WireId) -> bool {
        if self.wires.contains_key(&wire) {
            return false;
        }
        let input = self.graph.add_node(DagNode::In);
        let output = self.graph.add_node(DagNode::Out);
        self.graph.add_edge(input, output, wire);
        self.wires.insert(
            wire,
            Wire {
                input,
                output,
                front: input,
            },
        );
        true
    }

    /// Append an instruction after everything already on its wires.
    ///
    /// Nothing is modified when the instruction is rejected.
    pub fn apply(&mut self, instruction: Instruction) -> IrResult<()> {
        self.check_operands(&instruction)?;

        let wires: Vec<WireId> = instruction
            .qubits
            .iter()
            .map(|&q| WireId::Qubit(q))
            .chain(instruction.clbits.iter().map(|&c| WireId::Clbit(c)))
            .collect();

        let op = self.graph.add_node(DagNode::Op(instruction));

        for wire in wires {
            let Some(entry) = self.wires.get_mut(&wire) else {
                return Err(IrError::InvalidDag(format!("Unknown wire {wire:?}")));
            };
            let edge = self
                .graph
                .find_edge(entry.front, entry.output)
                .ok_or_else(|| IrError::InvalidDag(format!("Wire {wire:?} has no open end")))?;
            self.graph.remove_edge(edge);
            self.graph.add_edge(entry.front, op, wire);
            self.graph.add_edge(op, entry.output, wire);
            entry.front = op;
        }

        self.op_order.push(op);
        Ok(())
    }

    fn check_operands(&self, instruction: &Instruction) -> IrResult<()> {
        let gate_name = instruction.as_gate().map(|g| g.name().to_string());

        if let Some(gate) = instruction.as_gate() {
            let got = instruction.qubits.len();
            let expected = gate.num_qubits() as usize;
            if got != expected {
                return Err(IrError::QubitCountMismatch {
                    gate_name: gate.name().to_string(),
                    expected,
                    got,
                });
            }
        }

        let mut seen = FxHashSet::default();
        for &qubit in &instruction.qubits {
            if !self.wires.contains_key(&WireId::Qubit(qubit)) {
                return Err(IrError::QubitNotFound {
                    qubit,
                    gate_name: gate_name.clone(),
                });
            }
            if !seen.insert(qubit) {
                return Err(IrError::DuplicateQubit {
                    qubit,
                    gate_name: gate_name.clone(),
                });
            }
        }

        if let Some(&clbit) = instruction
            .clbits
            .iter()
            .find(|&&c| !self.wires.contains_key(&WireId::Clbit(c)))
        {
            return Err(IrError::ClbitNotFound { clbit, gate_name });
        }

        Ok(())
    }

    /// Operations in the order they were applied.
    pub fn ops(&self) -> impl Iterator<Item = &Instruction> + '_ {
        self.op_order.iter().filter_map(|&idx| match &self.graph[idx] {
            DagNode::Op(inst) => Some(inst),
            _ => None,
        })
    }

    pub fn num_qubits(&self) -> usize {
        self.qubits.len()
    }

    pub fn num_clbits(&self) -> usize {
        self.clbits.len()
    }

    pub fn num_ops(&self) -> usize {
        self.op_order.len()
    }

    /// Qubits in the order they were added.
    pub fn qubits(&self) -> &[QubitId] {
        &self.qubits
    }

    /// Classical bits in the order they were added.
    pub fn clbits(&self) -> &[ClbitId] {
        &self.clbits
    }

    /// Length of the longest chain of operations sharing wires.
    pub fn depth(&self) -> usize {
        let mut depths: FxHashMap<NodeIndex, usize> = FxHashMap::default();
        let mut max_depth = 0;

        for &node in &self.op_order {
            let depth = 1 + self
                .graph
                .edges_directed(node, Direction::Incoming)
                .map(|e| depths.get(&e.source()).copied().unwrap_or(0))
                .max()
                .unwrap_or(0);
            max_depth = max_depth.max(depth);
            depths.insert(node, depth);
        }

        max_depth
    }

    /// Check that the graph is acyclic and that every wire is an unbroken
    /// path from its input node to its output node.
    pub fn verify_integrity(&self) -> IrResult<()> {
        if petgraph::algo::is_cyclic_directed(&self.graph) {
            return Err(IrError::InvalidDag("Graph contains a cycle".into()));
        }

        for (&wire, entry) in &self.wires {
            let mut current = entry.input;
            let mut steps = 0;

            while current != entry.output {
                current = self
                    .graph
                    .edges_directed(current, Direction::Outgoing)
                    .find(|e| *e.weight() == wire)
                    .map(|e| e.target())
                    .ok_or_else(|| {
                        IrError::InvalidDag(format!("Wire {wire:?} is broken at {current:?}"))
                    })?;

                steps += 1;
                if steps > self.graph.node_count() {
                    return Err(IrError::InvalidDag(format!("Wire {wire:?} does not terminate")));
                }
            }

            if !self.graph.contains_edge(entry.front, entry.output) {
                return Err(IrError::InvalidDag(format!(
                    "Wire {wire:?} front is not attached to its output"
                )));
            }
        }

        Ok(())
    }
}
