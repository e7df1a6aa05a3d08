//! Builder configuration.
//!
//! [`QicConfig`] is fixed when a [`QicBuilder`](crate::QicBuilder) is
//! constructed and applies uniformly to every circuit in a batch.
//!
//! ```
//! use qic_synth::{QicConfig, TwoQubitGate};
//!
//! let config = QicConfig::default()
//!     .with_two_qubit_gate(TwoQubitGate::Cx)
//!     .with_insert_barriers(true);
//!
//! assert!(config.reduce_by_ratio);
//! assert!(config.barriers_enabled());
//!
//! assert!(QicConfig::default().with_gate_name("xyz").is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use qic_ir::StandardGate;

use crate::error::{QicError, QicResult};

/// Two-qubit primitive used to reproduce each interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TwoQubitGate {
    /// Controlled-NOT.
    Cx,
    /// Echoed cross-resonance.
    Ecr,
    /// Controlled-Z.
    #[default]
    Cz,
}

impl TwoQubitGate {
    /// All recognized gate kinds.
    pub const ALL: [TwoQubitGate; 3] = [TwoQubitGate::Cx, TwoQubitGate::Ecr, TwoQubitGate::Cz];

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            TwoQubitGate::Cx => "cx",
            TwoQubitGate::Ecr => "ecr",
            TwoQubitGate::Cz => "cz",
        }
    }

    /// The IR gate emitted for this kind.
    pub fn standard_gate(self) -> StandardGate {
        match self {
            TwoQubitGate::Cx => StandardGate::CX,
            TwoQubitGate::Ecr => StandardGate::ECR,
            TwoQubitGate::Cz => StandardGate::CZ,
        }
    }
}

impl fmt::Display for TwoQubitGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TwoQubitGate {
    type Err = QicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cx" => Ok(TwoQubitGate::Cx),
            "ecr" => Ok(TwoQubitGate::Ecr),
            "cz" => Ok(TwoQubitGate::Cz),
            other => Err(QicError::UnrecognizedGateKind(other.to_string())),
        }
    }
}

impl TryFrom<String> for TwoQubitGate {
    type Error = QicError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TwoQubitGate> for String {
    fn from(gate: TwoQubitGate) -> Self {
        gate.name().to_string()
    }
}

/// Options controlling how a quality indicator circuit is synthesized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QicConfig {
    /// Divide every pair count by the smallest count (rounding up).
    pub reduce_by_ratio: bool,
    /// Primitive applied once per (normalized) interaction.
    pub two_qubit_gate: TwoQubitGate,
    /// Insert a two-qubit barrier after each CX. Ignored for ECR and CZ.
    pub insert_barriers: bool,
}

impl Default for QicConfig {
    fn default() -> Self {
        Self {
            reduce_by_ratio: true,
            two_qubit_gate: TwoQubitGate::Cz,
            insert_barriers: false,
        }
    }
}

impl QicConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable ratio normalization.
    #[must_use]
    pub fn with_reduce_by_ratio(mut self, reduce_by_ratio: bool) -> Self {
        self.reduce_by_ratio = reduce_by_ratio;
        self
    }

    /// Set the two-qubit primitive.
    #[must_use]
    pub fn with_two_qubit_gate(mut self, gate: TwoQubitGate) -> Self {
        self.two_qubit_gate = gate;
        self
    }

    /// Set the two-qubit primitive by name (`"cx"`, `"ecr"` or `"cz"`).
    pub fn with_gate_name(self, name: &str) -> QicResult<Self> {
        Ok(self.with_two_qubit_gate(name.parse()?))
    }

    /// Enable or disable barriers between repeated CX applications.
    #[must_use]
    pub fn with_insert_barriers(mut self, insert_barriers: bool) -> Self {
        self.insert_barriers = insert_barriers;
        self
    }

    /// Whether barriers can be emitted at all under this configuration.
    ///
    /// Whether they are emitted for a given circuit also depends on it having
    /// more than one interacting pair.
    pub fn barriers_enabled(&self) -> bool {
        self.insert_barriers && self.two_qubit_gate == TwoQubitGate::Cx
    }
}
