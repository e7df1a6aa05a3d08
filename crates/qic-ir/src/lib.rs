//! QIC Circuit Intermediate Representation
//!
//! The circuit model that QIC synthesis reads from and writes to. Circuits
//! are stored as a DAG; [`Circuit`] wraps it in a fluent builder.
//!
//! - [`QubitId`], [`ClbitId`]: wire indices
//! - [`StandardGate`], [`CustomGate`]: gates, known by name and arity
//! - [`Instruction`]: a gate, measurement, reset or barrier with its operands
//! - [`CircuitDag`]: wire graph, operations kept in application order
//!
//! ```rust
//! use qic_ir::{Circuit, QubitId};
//!
//! let mut circuit = Circuit::with_size("bell_state", 2, 2);
//! circuit.h(QubitId(0)).unwrap();
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//! circuit.measure_all().unwrap();
//!
//! assert_eq!(circuit.num_qubits(), 2);
//! assert_eq!(circuit.depth(), 3);
//! ```
//!
//! | Gate | Qubits |
//! |------|--------|
//! | `X`, `H`, `Ry`, `Rz` | 1 |
//! | `CX`, `CZ`, `ECR`, `Swap`, `CP`, `RZZ` | 2 |
//! | `CCX` | 3 |

pub mod circuit;
pub mod dag;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod qubit;

pub use circuit::Circuit;
pub use dag::CircuitDag;
pub use error::{IrError, IrResult};
pub use gate::{CustomGate, Gate, StandardGate};
pub use instruction::{Instruction, InstructionKind};
pub use qubit::{ClbitId, QubitId};
