//! Circuits used as QIC inputs.

use std::fmt;
use std::str::FromStr;

use qic_ir::{Circuit, IrResult, QubitId};

/// A named family of input circuits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Workload {
    /// GHZ preparation, measured qubit by qubit.
    Ghz,
    /// Textbook QFT with controlled phases and closing swaps.
    Qft,
    /// Four layers of `ry` rotations and alternating neighbour CX.
    Brickwork,
    /// Every workload above, in that order.
    All,
}

impl Workload {
    /// Build the circuits for this workload on `num_qubits` qubits.
    ///
    /// Circuits without classical bits get a full measurement appended, so
    /// the resulting QICs are measured too.
    pub fn circuits(self, num_qubits: u32) -> IrResult<Vec<Circuit>> {
        let mut circuits = match self {
            Workload::Ghz => vec![Circuit::ghz(num_qubits)?],
            Workload::Qft => vec![Circuit::qft(num_qubits)?],
            Workload::Brickwork => vec![brickwork(num_qubits, 4)?],
            Workload::All => vec![
                Circuit::ghz(num_qubits)?,
                Circuit::qft(num_qubits)?,
                brickwork(num_qubits, 4)?,
            ],
        };
        for circuit in circuits.iter_mut().filter(|c| c.num_clbits() == 0) {
            circuit.measure_all()?;
        }
        Ok(circuits)
    }
}

impl fmt::Display for Workload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Workload::Ghz => "ghz",
            Workload::Qft => "qft",
            Workload::Brickwork => "brickwork",
            Workload::All => "all",
        };
        f.write_str(name)
    }
}

impl FromStr for Workload {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ghz" => Ok(Workload::Ghz),
            "qft" => Ok(Workload::Qft),
            "brickwork" | "ladder" => Ok(Workload::Brickwork),
            "all" => Ok(Workload::All),
            other => Err(format!(
                "Unknown workload: '{other}'. Available: ghz, qft, brickwork, all"
            )),
        }
    }
}

/// Brickwork ladder: each layer applies an RY rotation to every qubit, then
/// CX on pairs `(0,1), (2,3), ...` followed by `(1,2), (3,4), ...`.
///
/// Every neighbouring pair interacts once per layer.
pub fn brickwork(num_qubits: u32, layers: usize) -> IrResult<Circuit> {
    let mut circuit = Circuit::with_size("brickwork", num_qubits, 0);

    for layer in 0..layers {
        let theta = 0.1 * (layer + 1) as f64;
        for q in 0..num_qubits {
            circuit.ry(theta, QubitId(q))?;
        }
        for start in [0, 1] {
            let mut q = start;
            while q + 1 < num_qubits {
                circuit.cx(QubitId(q), QubitId(q + 1))?;
                q += 2;
            }
        }
    }

    Ok(circuit)
}
