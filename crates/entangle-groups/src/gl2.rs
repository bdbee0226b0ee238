//! The ambient group GL(2, Z/mZ).
//!
//! A [`Gl2`] is a lightweight value naming the group for one modulus.
//! Every operation that needs an ambient group takes it as a parameter;
//! nothing here holds global state.

use num_traits::checked_pow;
use rayon::prelude::*;

use entangle_integers::Modulus;

use crate::error::GroupError;
use crate::matrix::ModMatrix;

/// The group of invertible 2x2 matrices over Z/mZ.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Gl2 {
    modulus: Modulus,
}

impl Gl2 {
    /// Creates GL(2, Z/mZ), rejecting non-positive moduli.
    ///
    /// # Errors
    ///
    /// Returns [`GroupError::Modulus`] when m ≤ 0.
    pub fn new(m: i64) -> Result<Self, GroupError> {
        Ok(Self::over(Modulus::new(m)?))
    }

    /// Creates GL(2, Z/mZ) over an existing modulus.
    #[must_use]
    pub const fn over(modulus: Modulus) -> Self {
        Self { modulus }
    }

    /// Returns the modulus.
    #[must_use]
    pub const fn modulus(&self) -> Modulus {
        self.modulus
    }

    /// The identity element.
    #[must_use]
    pub fn identity(&self) -> ModMatrix {
        ModMatrix::identity(self.modulus)
    }

    /// Builds a group element from integer entries `[a, b, c, d]`.
    ///
    /// # Errors
    ///
    /// Returns [`GroupError::NotInvertible`] if the determinant is not a
    /// unit mod m.
    pub fn element(&self, entries: [i64; 4]) -> Result<ModMatrix, GroupError> {
        let x = ModMatrix::new(entries, self.modulus);
        self.check(&x)?;
        Ok(x)
    }

    /// Returns true if `x` lies in this group.
    #[must_use]
    pub fn contains(&self, x: &ModMatrix) -> bool {
        x.modulus() == self.modulus && x.is_invertible()
    }

    /// Checks membership, reporting why `x` is not an element.
    ///
    /// # Errors
    ///
    /// Returns [`GroupError::ModulusMismatch`] if `x` is over another
    /// modulus and [`GroupError::NotInvertible`] if its determinant is not
    /// a unit mod m.
    pub fn check(&self, x: &ModMatrix) -> Result<(), GroupError> {
        if x.modulus() != self.modulus {
            return Err(GroupError::ModulusMismatch {
                expected: self.modulus.get(),
                found: x.modulus().get(),
            });
        }
        if !x.is_invertible() {
            return Err(GroupError::NotInvertible {
                matrix: *x,
                modulus: self.modulus.get(),
            });
        }
        Ok(())
    }

    /// The order of GL(2, Z/mZ), m⁴ ∏_{p | m} (1 - 1/p)(1 - 1/p²).
    ///
    /// Returns `None` if the order does not fit in a `u64`.
    #[must_use]
    pub fn order(&self) -> Option<u64> {
        let m = u128::from(self.modulus.get());
        let mut order = checked_pow(m, 4)?;
        for p in self.modulus.prime_factors() {
            let p = u128::from(p);
            order = order / (p * p * p) * ((p - 1) * (p * p - 1));
        }
        u64::try_from(order).ok()
    }

    /// Lazily enumerates every element of the group exactly once.
    ///
    /// The sequence is finite and restartable: each call starts afresh.
    #[must_use]
    pub fn elements(&self) -> Gl2Elements {
        let m = u128::from(self.modulus.get());
        Gl2Elements {
            modulus: self.modulus,
            next: 0,
            end: checked_pow(m, 4).unwrap_or(u128::MAX),
        }
    }

    /// Enumerates every element in parallel.
    ///
    /// Candidates are split on the first row; each worker scans the
    /// second row and keeps the invertible matrices.
    pub fn par_elements(&self) -> impl ParallelIterator<Item = ModMatrix> {
        let modulus = self.modulus;
        let m = modulus.get();
        (0..m * m).into_par_iter().flat_map_iter(move |top| {
            let (a, b) = (top / m, top % m);
            (0..m * m).filter_map(move |bottom| {
                let x = ModMatrix::from_residues([a, b, bottom / m, bottom % m], modulus);
                x.is_invertible().then_some(x)
            })
        })
    }
}

/// Iterator over the elements of GL(2, Z/mZ), in lexicographic order of
/// the entries `[a, b, c, d]`.
#[derive(Clone, Debug)]
pub struct Gl2Elements {
    modulus: Modulus,
    next: u128,
    end: u128,
}

impl Iterator for Gl2Elements {
    type Item = ModMatrix;

    fn next(&mut self) -> Option<ModMatrix> {
        let m = u128::from(self.modulus.get());
        while self.next < self.end {
            let mut code = self.next;
            self.next += 1;

            let mut entries = [0u64; 4];
            for entry in entries.iter_mut().rev() {
                *entry = (code % m) as u64;
                code /= m;
            }

            let x = ModMatrix::from_residues(entries, self.modulus);
            if x.is_invertible() {
                return Some(x);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, usize::try_from(self.end - self.next).ok())
    }
}
