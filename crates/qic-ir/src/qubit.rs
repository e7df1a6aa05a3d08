//! Wire identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Index of a qubit wire. Circuits number their qubits from zero in the order
/// they were added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct QubitId(pub u32);

/// Index of a classical bit wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ClbitId(pub u32);

impl fmt::Display for QubitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

impl fmt::Display for ClbitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        assert_eq!(QubitId(3).to_string(), "q3");
        assert_eq!(ClbitId(1).to_string(), "c1");
    }

    #[test]
    fn test_qubit_ids_order_by_index() {
        let mut ids = vec![QubitId(4), QubitId(0), QubitId(2)];
        ids.sort();
        assert_eq!(ids, vec![QubitId(0), QubitId(2), QubitId(4)]);
    }
}
