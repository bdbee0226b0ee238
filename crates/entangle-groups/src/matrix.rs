//! 2x2 matrices over Z/mZ.

use std::fmt;
use std::ops::{Index, Mul};

use entangle_integers::Modulus;

/// A 2x2 matrix with entries in Z/mZ, stored in row-major order.
///
/// The matrix carries its modulus. Matrices over different moduli are
/// never equal, and multiplying them is a programming error.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModMatrix {
    /// Entries `[a, b, c, d]` of `[[a, b], [c, d]]`, each in `0..m`.
    entries: [u64; 4],
    modulus: Modulus,
}

impl ModMatrix {
    /// Creates a matrix from signed integer entries `[a, b, c, d]`,
    /// reducing each one mod m.
    #[must_use]
    pub fn new(entries: [i64; 4], modulus: Modulus) -> Self {
        Self {
            entries: entries.map(|e| modulus.reduce(e)),
            modulus,
        }
    }

    /// Creates a matrix from rows `[[a, b], [c, d]]`.
    #[must_use]
    pub fn from_rows(rows: [[i64; 2]; 2], modulus: Modulus) -> Self {
        let [[a, b], [c, d]] = rows;
        Self::new([a, b, c, d], modulus)
    }

    /// Creates a matrix from unsigned entries, reducing each one mod m.
    #[must_use]
    pub fn from_residues(entries: [u64; 4], modulus: Modulus) -> Self {
        Self {
            entries: entries.map(|e| modulus.reduce_unsigned(e)),
            modulus,
        }
    }

    /// The identity matrix mod m.
    #[must_use]
    pub fn identity(modulus: Modulus) -> Self {
        let one = modulus.one();
        Self {
            entries: [one, 0, 0, one],
            modulus,
        }
    }

    /// Returns the entries `[a, b, c, d]`.
    #[must_use]
    pub const fn entries(&self) -> [u64; 4] {
        self.entries
    }

    /// Returns the modulus.
    #[must_use]
    pub const fn modulus(&self) -> Modulus {
        self.modulus
    }

    /// The determinant ad - bc mod m.
    #[must_use]
    pub fn det(&self) -> u64 {
        let m = self.modulus;
        let [a, b, c, d] = self.entries;
        m.sub(m.mul(a, d), m.mul(b, c))
    }

    /// Returns true if the determinant is a unit mod m.
    #[must_use]
    pub fn is_invertible(&self) -> bool {
        self.modulus.is_unit(self.det())
    }

    /// Returns true if this is the identity matrix.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::identity(self.modulus)
    }

    /// Matrix product mod m.
    ///
    /// # Panics
    ///
    /// Panics if the moduli differ.
    #[must_use]
    pub fn mm(&self, other: &Self) -> Self {
        assert_eq!(
            self.modulus, other.modulus,
            "cannot multiply matrices over different moduli"
        );
        let m = self.modulus;
        let [a, b, c, d] = self.entries;
        let [e, f, g, h] = other.entries;
        Self {
            entries: [
                m.add(m.mul(a, e), m.mul(b, g)),
                m.add(m.mul(a, f), m.mul(b, h)),
                m.add(m.mul(c, e), m.mul(d, g)),
                m.add(m.mul(c, f), m.mul(d, h)),
            ],
            modulus: m,
        }
    }

    /// The inverse matrix, computed as det⁻¹ times the adjugate.
    ///
    /// Returns `None` if the matrix is not invertible.
    #[must_use]
    pub fn inverse(&self) -> Option<Self> {
        let m = self.modulus;
        let det_inv = m.inv(self.det())?;
        let [a, b, c, d] = self.entries;
        Some(Self {
            entries: [
                m.mul(d, det_inv),
                m.mul(m.neg(b), det_inv),
                m.mul(m.neg(c), det_inv),
                m.mul(a, det_inv),
            ],
            modulus: m,
        })
    }

    /// Computes self^exp using binary exponentiation.
    #[must_use]
    pub fn pow(&self, mut exp: u64) -> Self {
        let mut base = *self;
        let mut result = Self::identity(self.modulus);

        while exp > 0 {
            if exp & 1 == 1 {
                result = result.mm(&base);
            }
            base = base.mm(&base);
            exp >>= 1;
        }

        result
    }

    /// Entrywise reduction to a modulus dividing m, without any check.
    pub(crate) fn reduce_entries(&self, target: Modulus) -> Self {
        Self::from_residues(self.entries, target)
    }
}

impl Mul for ModMatrix {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.mm(&rhs)
    }
}

impl Index<(usize, usize)> for ModMatrix {
    type Output = u64;

    fn index(&self, (row, col): (usize, usize)) -> &u64 {
        assert!(row < 2 && col < 2, "index ({row}, {col}) out of bounds");
        &self.entries[row * 2 + col]
    }
}

impl fmt::Debug for ModMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl fmt::Display for ModMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.entries;
        write!(f, "[[{a}, {b}], [{c}, {d}]] (mod {})", self.modulus)
    }
}
