//! Arithmetic in Z/mZ for a modulus known only at runtime.
//!
//! Residues are plain `u64` values in `0..m`; a [`Modulus`] carries the
//! ring and performs every operation on them.

use std::fmt;

use num_integer::Integer;
use thiserror::Error;

/// Errors raised when constructing a modulus or enumerating divisors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ModulusError {
    /// The value is not a positive integer.
    #[error("modulus must be a positive integer, got {0}")]
    NonPositive(i64),

    /// The divisor 1 was used in a divisor pair.
    #[error("divisor pairs exclude the divisor 1")]
    TrivialDivisor,
}

/// A positive modulus m, defining the ring Z/mZ.
///
/// The modulus 1 is allowed: Z/1Z is the zero ring, in which every
/// value reduces to 0 and 0 is a unit.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Modulus(u64);

impl Modulus {
    /// Creates a modulus, rejecting non-positive values.
    ///
    /// # Errors
    ///
    /// Returns [`ModulusError::NonPositive`] when m ≤ 0.
    pub fn new(m: i64) -> Result<Self, ModulusError> {
        u64::try_from(m)
            .ok()
            .filter(|&m| m > 0)
            .map(Self)
            .ok_or(ModulusError::NonPositive(m))
    }

    /// Returns m.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Reduces a signed integer into `0..m`.
    #[must_use]
    pub fn reduce(self, value: i64) -> u64 {
        // rem_euclid on i128 covers every i64 against every u64 modulus.
        let r = i128::from(value).rem_euclid(i128::from(self.0));
        u64::try_from(r).unwrap_or_default()
    }

    /// Reduces an unsigned integer into `0..m`.
    #[must_use]
    pub const fn reduce_unsigned(self, value: u64) -> u64 {
        value % self.0
    }

    /// The residue of 1. This is 0 in Z/1Z.
    #[must_use]
    pub const fn one(self) -> u64 {
        1 % self.0
    }

    /// Sum of two residues.
    #[must_use]
    pub fn add(self, a: u64, b: u64) -> u64 {
        ((u128::from(a) + u128::from(b)) % u128::from(self.0)) as u64
    }

    /// Difference of two residues.
    #[must_use]
    pub fn sub(self, a: u64, b: u64) -> u64 {
        let m = u128::from(self.0);
        ((m + u128::from(a % self.0) - u128::from(b % self.0)) % m) as u64
    }

    /// Product of two residues.
    #[must_use]
    pub fn mul(self, a: u64, b: u64) -> u64 {
        // Use u128 to avoid overflow
        ((u128::from(a) * u128::from(b)) % u128::from(self.0)) as u64
    }

    /// Additive inverse of a residue.
    #[must_use]
    pub fn neg(self, a: u64) -> u64 {
        self.sub(0, a)
    }

    /// Returns true if `a` is a unit mod m, i.e. gcd(a, m) = 1.
    #[must_use]
    pub fn is_unit(self, a: u64) -> bool {
        gcd(a % self.0, self.0) == 1
    }

    /// Computes the inverse of a residue using the extended Euclidean
    /// algorithm.
    ///
    /// Returns `None` if `a` is not a unit.
    #[must_use]
    pub fn inv(self, a: u64) -> Option<u64> {
        let m = i128::from(self.0);
        let egcd = i128::from(a % self.0).extended_gcd(&m);
        if egcd.gcd != 1 {
            return None;
        }
        u64::try_from(egcd.x.rem_euclid(m)).ok()
    }

    /// Returns true if this modulus divides `other`.
    #[must_use]
    pub const fn divides(self, other: Self) -> bool {
        other.0 % self.0 == 0
    }

    /// Distinct prime factors of m in ascending order.
    #[must_use]
    pub fn prime_factors(self) -> Vec<u64> {
        crate::divisors::prime_factors(self.0)
    }
}

impl TryFrom<u64> for Modulus {
    type Error = ModulusError;

    fn try_from(m: u64) -> Result<Self, Self::Error> {
        if m == 0 {
            Err(ModulusError::NonPositive(0))
        } else {
            Ok(Self(m))
        }
    }
}

impl fmt::Debug for Modulus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Z/{}Z", self.0)
    }
}

impl fmt::Display for Modulus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Greatest common divisor, with gcd(0, 0) = 0.
#[must_use]
pub fn gcd(a: u64, b: u64) -> u64 {
    a.gcd(&b)
}

/// Least common multiple, with lcm(a, 0) = 0.
#[must_use]
pub fn lcm(a: u64, b: u64) -> u64 {
    a.lcm(&b)
}
