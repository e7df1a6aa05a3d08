//! Two-qubit interaction histograms.
//!
//! An [`InteractionHistogram`] counts how often each unordered qubit pair is
//! acted on by a two-qubit gate. Pairs are stored canonically (smaller index
//! first) and iterate in the order they were first seen.

use std::fmt;

use rustc_hash::FxHashMap;
use serde::Serialize;
use tracing::{debug, trace};

use qic_ir::{Circuit, QubitId};

use crate::error::{QicError, QicResult};

/// An unordered pair of qubit indices, stored with the smaller index first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct QubitPair(u32, u32);

impl QubitPair {
    /// Create the canonical pair for two qubit indices, in either order.
    pub fn new(a: u32, b: u32) -> Self {
        if a <= b { Self(a, b) } else { Self(b, a) }
    }

    /// The smaller index.
    pub fn low(self) -> u32 {
        self.0
    }

    /// The larger index.
    pub fn high(self) -> u32 {
        self.1
    }

    /// Both indices as qubit ids, smaller first.
    pub fn qubits(self) -> (QubitId, QubitId) {
        (QubitId(self.0), QubitId(self.1))
    }
}

impl fmt::Display for QubitPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

/// One histogram entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PairCount {
    /// The interacting pair.
    pub pair: QubitPair,
    /// Number of two-qubit gates between the pair. Always positive.
    pub count: usize,
}

/// Mapping from canonical qubit pair to interaction count.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct InteractionHistogram {
    entries: Vec<PairCount>,
    #[serde(skip)]
    index: FxHashMap<QubitPair, usize>,
}

impl InteractionHistogram {
    /// Create an empty histogram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan every operation of `circuit` once and count its two-qubit gates.
    ///
    /// Operands are identified by their position in the circuit's qubit list.
    /// Gates of any other arity, barriers, measurements and resets are ignored.
    pub fn from_circuit(circuit: &Circuit) -> Self {
        let index_of = |q: QubitId| {
            circuit
                .qubit_index(q)
                .and_then(|idx| u32::try_from(idx).ok())
        };

        let mut histogram = Self::new();
        for inst in circuit.instructions() {
            if !inst.is_two_qubit_gate() {
                continue;
            }
            let (Some(a), Some(b)) = (index_of(inst.qubits[0]), index_of(inst.qubits[1])) else {
                continue;
            };
            let pair = QubitPair::new(a, b);
            trace!("qubit pair {pair} ({})", inst.name());
            histogram.record(pair);
        }

        debug!(
            "circuit '{}': {} interacting pairs, {} two-qubit gates: {histogram}",
            circuit.name(),
            histogram.len(),
            histogram.total()
        );
        histogram
    }

    /// Build a histogram from explicit counts. Zero counts are dropped and
    /// repeated pairs are summed.
    pub fn from_counts(counts: impl IntoIterator<Item = ((u32, u32), usize)>) -> Self {
        let mut histogram = Self::new();
        for ((a, b), count) in counts {
            if count > 0 {
                histogram.add(QubitPair::new(a, b), count);
            }
        }
        histogram
    }

    /// Count one interaction between the pair.
    pub fn record(&mut self, pair: QubitPair) {
        self.add(pair, 1);
    }

    fn add(&mut self, pair: QubitPair, count: usize) {
        match self.index.get(&pair) {
            Some(&pos) => self.entries[pos].count += count,
            None => {
                self.index.insert(pair, self.entries.len());
                self.entries.push(PairCount { pair, count });
            }
        }
    }

    /// Rescale every count to `ceil(count / min)`, where `min` is the
    /// smallest count present.
    ///
    /// The least-interacting pair ends up with exactly one repetition and
    /// relative ordering between pairs is preserved.
    pub fn normalized(&self) -> QicResult<Self> {
        let min = self.min_count().ok_or(QicError::DivisionUndefined)?;
        debug!("normalizing {} pairs by minimum count {min}", self.len());

        let entries = self
            .entries
            .iter()
            .map(|e| PairCount {
                pair: e.pair,
                count: e.count.div_ceil(min),
            })
            .collect();

        Ok(Self {
            entries,
            index: self.index.clone(),
        })
    }

    /// Count for a pair, given in either order.
    pub fn get(&self, a: u32, b: u32) -> Option<usize> {
        self.index
            .get(&QubitPair::new(a, b))
            .map(|&pos| self.entries[pos].count)
    }

    /// Number of distinct interacting pairs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no two-qubit interaction was recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Smallest count, if any pair is present.
    pub fn min_count(&self) -> Option<usize> {
        self.entries.iter().map(|e| e.count).min()
    }

    /// Largest count, if any pair is present.
    pub fn max_count(&self) -> Option<usize> {
        self.entries.iter().map(|e| e.count).max()
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = PairCount> + '_ {
        self.entries.iter().copied()
    }
}

/// Histograms are equal when they hold the same counts, regardless of order.
impl PartialEq for InteractionHistogram {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .entries
                .iter()
                .all(|e| other.get(e.pair.low(), e.pair.high()) == Some(e.count))
    }
}

impl Eq for InteractionHistogram {}

impl fmt::Display for InteractionHistogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, e) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", e.pair, e.count)?;
        }
        f.write_str("}")
    }
}
