//! Gate types.
//!
//! The IR only tracks what QIC synthesis needs from a gate: its name and how
//! many qubits it acts on. Rotation angles are kept so that circuits built
//! from the same calls compare equal.

use serde::{Deserialize, Serialize};

/// Built-in gates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum StandardGate {
    /// Pauli-X.
    X,
    /// Hadamard.
    H,
    /// Rotation around Y.
    Ry(f64),
    /// Rotation around Z.
    Rz(f64),
    /// Controlled-X (CNOT).
    CX,
    /// Controlled-Z.
    CZ,
    /// Echoed cross-resonance.
    ECR,
    Swap,
    /// Controlled phase.
    CP(f64),
    /// ZZ rotation.
    RZZ(f64),
    /// Toffoli.
    CCX,
}

impl StandardGate {
    /// Lowercase gate name.
    pub fn name(&self) -> &'static str {
        match self {
            StandardGate::X => "x",
            StandardGate::H => "h",
            StandardGate::Ry(_) => "ry",
            StandardGate::Rz(_) => "rz",
            StandardGate::CX => "cx",
            StandardGate::CZ => "cz",
            StandardGate::ECR => "ecr",
            StandardGate::Swap => "swap",
            StandardGate::CP(_) => "cp",
            StandardGate::RZZ(_) => "rzz",
            StandardGate::CCX => "ccx",
        }
    }

    /// Number of qubits the gate acts on.
    pub fn num_qubits(&self) -> u32 {
        match self {
            StandardGate::X | StandardGate::H | StandardGate::Ry(_) | StandardGate::Rz(_) => 1,
            StandardGate::CX
            | StandardGate::CZ
            | StandardGate::ECR
            | StandardGate::Swap
            | StandardGate::CP(_)
            | StandardGate::RZZ(_) => 2,
            StandardGate::CCX => 3,
        }
    }
}

/// A gate known only by name and arity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomGate {
    pub name: String,
    pub num_qubits: u32,
}

impl CustomGate {
    pub fn new(name: impl Into<String>, num_qubits: u32) -> Self {
        Self {
            name: name.into(),
            num_qubits,
        }
    }
}

/// Either a built-in or a custom gate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Gate {
    Standard(StandardGate),
    Custom(CustomGate),
}

impl Gate {
    pub fn name(&self) -> &str {
        match self {
            Gate::Standard(g) => g.name(),
            Gate::Custom(g) => &g.name,
        }
    }

    pub fn num_qubits(&self) -> u32 {
        match self {
            Gate::Standard(g) => g.num_qubits(),
            Gate::Custom(g) => g.num_qubits,
        }
    }
}

impl From<StandardGate> for Gate {
    fn from(gate: StandardGate) -> Self {
        Gate::Standard(gate)
    }
}

impl From<CustomGate> for Gate {
    fn from(gate: CustomGate) -> Self {
        Gate::Custom(gate)
    }
}
