//! Outcomes of entanglement tests.

use std::fmt;

use entangle_integers::DivisorPair;

use crate::error::EntanglementError;

/// The result of testing one divisor pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Entanglement {
    /// The kernel subgroup fills its baseline: no entanglement.
    Absent,
    /// The kernel subgroup has this index (> 1) in its baseline.
    Present {
        /// The size of the entanglement.
        index: usize,
    },
}

impl Entanglement {
    /// Compares the order of the subgroup generated by the two kernels
    /// with the order it would have without entanglement.
    ///
    /// The generated subgroup always lies inside the baseline, so the
    /// ratio is exact.
    #[must_use]
    pub fn from_orders(baseline: usize, generated: usize) -> Self {
        if generated < baseline {
            Entanglement::Present {
                index: baseline / generated,
            }
        } else {
            Entanglement::Absent
        }
    }

    /// Returns true if an entanglement was found.
    #[must_use]
    pub fn is_present(&self) -> bool {
        matches!(self, Entanglement::Present { .. })
    }

    /// The entanglement index, if any.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        match self {
            Entanglement::Present { index } => Some(*index),
            Entanglement::Absent => None,
        }
    }
}

impl fmt::Display for Entanglement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entanglement::Absent => write!(f, "no entanglement"),
            Entanglement::Present { index } => write!(f, "entanglement of index {index}"),
        }
    }
}

/// One line of a survey: a divisor pair and what testing it produced.
///
/// A pair whose computation failed carries its error; the rest of the
/// survey is unaffected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PairReport {
    /// The pair tested.
    pub pair: DivisorPair,
    /// The entanglement found, or why the pair could not be tested.
    pub outcome: Result<Entanglement, EntanglementError>,
}

impl PairReport {
    /// Returns true if this report is worth printing: an entanglement or
    /// a failure.
    #[must_use]
    pub fn is_notable(&self) -> bool {
        !matches!(self.outcome, Ok(Entanglement::Absent))
    }

    /// The entanglement index, if one was found.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        self.outcome.as_ref().ok().and_then(Entanglement::index)
    }
}

impl fmt::Display for PairReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Ok(entanglement) => write!(f, "{}: {entanglement}", self.pair),
            Err(error) => write!(f, "{}: failed: {error}", self.pair),
        }
    }
}
