//! Quality Indicator Circuit synthesis
//!
//! A quality indicator circuit (QIC) is a diagnostic circuit derived from an
//! arbitrary input circuit. It drops the input's logical function and keeps
//! only its two-qubit interaction structure: which qubit pairs interact and
//! how often, relative to each other. Running the QIC on hardware exposes the
//! noise and connectivity cost of that interaction pattern on its own.
//!
//! # Pipeline
//!
//! ```text
//! Input Circuit
//!       │
//!       ▼
//! InteractionHistogram::from_circuit   (pair → count over all 2q gates)
//!       │
//!       ▼
//! InteractionHistogram::normalized     (if reduce_by_ratio: ceil(count / min))
//!       │
//!       ▼
//! QicBuilder::synthesize               (H layer, repeated 2q primitive, H layer, measure)
//!       │
//!       ▼
//! Output Circuit
//! ```
//!
//! # Example
//!
//! ```rust
//! use qic_ir::Circuit;
//! use qic_synth::{QicBuilder, QicConfig};
//!
//! let circuits = vec![Circuit::ghz(4).unwrap(), Circuit::qft(3).unwrap()];
//!
//! let builder = QicBuilder::new(QicConfig::default());
//! let qics = builder.build(&circuits).unwrap();
//!
//! assert_eq!(qics.len(), 2);
//! assert_eq!(qics[0].num_qubits(), 4);
//! assert_eq!(qics[0].count_ops()["cz"], 3);
//! ```
//!
//! # Configuration
//!
//! | Option | Default | Effect |
//! |--------|---------|--------|
//! | `reduce_by_ratio` | `true` | Normalize counts by the smallest count |
//! | `two_qubit_gate` | `cz` | Primitive replayed per interaction: `cx`, `ecr` or `cz` |
//! | `insert_barriers` | `false` | Barrier after each CX when more than one pair interacts |

pub mod builder;
pub mod config;
pub mod error;
pub mod histogram;

pub use builder::{QicBuilder, QicSummary};
pub use config::{QicConfig, TwoQubitGate};
pub use error::{QicError, QicResult};
pub use histogram::{InteractionHistogram, PairCount, QubitPair};
