//! Reduction homomorphisms GL(2, Z/NZ) → GL(2, Z/MZ) for M | N.

use entangle_integers::Modulus;

use crate::error::GroupError;
use crate::gl2::Gl2;
use crate::matrix::ModMatrix;

/// Entrywise reduction from modulus N to a divisor M of N.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ReductionMap {
    source: Gl2,
    target: Gl2,
}

impl ReductionMap {
    /// Creates the reduction map from N to M.
    ///
    /// # Errors
    ///
    /// Returns [`GroupError::NotADivisor`] unless M divides N.
    pub fn new(source: Modulus, target: Modulus) -> Result<Self, GroupError> {
        if !target.divides(source) {
            return Err(GroupError::NotADivisor {
                divisor: target.get(),
                modulus: source.get(),
            });
        }
        Ok(Self {
            source: Gl2::over(source),
            target: Gl2::over(target),
        })
    }

    /// The domain, GL(2, Z/NZ).
    #[must_use]
    pub const fn source(&self) -> Gl2 {
        self.source
    }

    /// The codomain, GL(2, Z/MZ).
    #[must_use]
    pub const fn target(&self) -> Gl2 {
        self.target
    }

    /// Reduces a matrix over Z/NZ to Z/MZ.
    ///
    /// The input need not have been checked for invertibility mod N; the
    /// image is checked mod M instead.
    ///
    /// # Errors
    ///
    /// Returns [`GroupError::ModulusMismatch`] if `x` is not over Z/NZ, and
    /// [`GroupError::NotInvertible`] if the image is not a unit mod M. The
    /// latter cannot happen for genuine elements of GL(2, Z/NZ).
    pub fn apply(&self, x: &ModMatrix) -> Result<ModMatrix, GroupError> {
        if x.modulus() != self.source.modulus() {
            return Err(GroupError::ModulusMismatch {
                expected: self.source.modulus().get(),
                found: x.modulus().get(),
            });
        }
        let image = x.reduce_entries(self.target.modulus());
        if !image.is_invertible() {
            return Err(GroupError::NotInvertible {
                matrix: *x,
                modulus: self.target.modulus().get(),
            });
        }
        Ok(image)
    }

    /// Reduces each matrix in turn, preserving positions and duplicates.
    ///
    /// # Errors
    ///
    /// Fails on the first matrix that [`ReductionMap::apply`] rejects.
    pub fn apply_all(&self, xs: &[ModMatrix]) -> Result<Vec<ModMatrix>, GroupError> {
        xs.iter().map(|x| self.apply(x)).collect()
    }

    /// Returns true if `x` reduces to the identity of GL(2, Z/MZ).
    #[must_use]
    pub fn maps_to_identity(&self, x: &ModMatrix) -> bool {
        x.reduce_entries(self.target.modulus()).is_identity()
    }
}

/// Reduces a matrix over Z/NZ to Z/MZ.
///
/// # Errors
///
/// See [`ReductionMap::new`] and [`ReductionMap::apply`].
pub fn reduce(x: &ModMatrix, source: Modulus, target: Modulus) -> Result<ModMatrix, GroupError> {
    ReductionMap::new(source, target)?.apply(x)
}

/// Reduces a list of elements of GL(2, Z/NZ) to GL(2, Z/MZ).
///
/// # Errors
///
/// See [`ReductionMap::new`] and [`ReductionMap::apply`].
pub fn reduce_subgroup(
    xs: &[ModMatrix],
    source: Modulus,
    target: Modulus,
) -> Result<Vec<ModMatrix>, GroupError> {
    ReductionMap::new(source, target)?.apply_all(xs)
}
