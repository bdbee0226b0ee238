//! Errors raised by group operations.

use entangle_integers::ModulusError;
use thiserror::Error;

use crate::matrix::ModMatrix;

/// Errors that can occur while working in GL(2, Z/mZ).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GroupError {
    /// A modulus was not a positive integer.
    #[error(transparent)]
    Modulus(#[from] ModulusError),

    /// A reduction was requested between incompatible moduli.
    #[error("{divisor} must divide {modulus}")]
    NotADivisor {
        /// The target modulus M.
        divisor: u64,
        /// The source modulus N.
        modulus: u64,
    },

    /// An element of one ambient group was handed to another.
    #[error("matrix over Z/{found}Z used where GL(2, Z/{expected}Z) was expected")]
    ModulusMismatch {
        /// The modulus of the ambient group.
        expected: u64,
        /// The modulus the matrix carries.
        found: u64,
    },

    /// A matrix that should be a group element has a non-unit determinant.
    #[error("{matrix} is not invertible modulo {modulus}")]
    NotInvertible {
        /// The offending matrix, as supplied.
        matrix: ModMatrix,
        /// The modulus at which invertibility failed.
        modulus: u64,
    },
}

impl GroupError {
    /// Returns true for errors that signal malformed group data rather than
    /// an invalid request.
    ///
    /// Reducing a genuine element of GL(2, Z/NZ) always yields an invertible
    /// matrix, so [`GroupError::NotInvertible`] only surfaces when a supplied
    /// generator was never a group element.
    #[must_use]
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, GroupError::NotInvertible { .. })
    }
}
