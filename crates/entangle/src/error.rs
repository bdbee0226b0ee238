//! Errors raised while testing a divisor pair.

use entangle_groups::GroupError;
use entangle_integers::ModulusError;
use thiserror::Error;

/// Errors that can occur during entanglement detection.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EntanglementError {
    /// The level or a divisor was not a positive integer.
    #[error(transparent)]
    Modulus(#[from] ModulusError),

    /// A group computation failed.
    #[error(transparent)]
    Group(#[from] GroupError),

    /// The pair does not live at this level.
    #[error("lcm {lcm} of the divisor pair does not divide the level {level}")]
    LevelNotDivisible {
        /// lcm(a, b).
        lcm: u64,
        /// The level n.
        level: u64,
    },
}

impl EntanglementError {
    /// Returns true if the error comes from malformed generators rather
    /// than from an invalid request.
    #[must_use]
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, EntanglementError::Group(e) if e.is_invariant_violation())
    }
}
