//! Divisors of the adelic level and the pairs tested for entanglement.

use std::fmt;

use crate::modulus::{gcd, lcm, Modulus, ModulusError};

/// A pair (a, b) of divisors of the level, in enumeration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DivisorPair {
    a: u64,
    b: u64,
}

impl DivisorPair {
    /// Creates a pair. Both entries must be divisors other than 1.
    ///
    /// # Errors
    ///
    /// Returns [`ModulusError::NonPositive`] if an entry is 0 and
    /// [`ModulusError::TrivialDivisor`] if an entry is 1.
    pub fn new(a: u64, b: u64) -> Result<Self, ModulusError> {
        for value in [a, b] {
            match value {
                0 => return Err(ModulusError::NonPositive(0)),
                1 => return Err(ModulusError::TrivialDivisor),
                _ => {}
            }
        }
        Ok(Self { a, b })
    }

    /// The first divisor.
    #[must_use]
    pub const fn a(self) -> u64 {
        self.a
    }

    /// The second divisor.
    #[must_use]
    pub const fn b(self) -> u64 {
        self.b
    }

    /// gcd(a, b).
    #[must_use]
    pub fn gcd(self) -> u64 {
        gcd(self.a, self.b)
    }

    /// lcm(a, b), the modulus both reductions factor through.
    #[must_use]
    pub fn lcm(self) -> u64 {
        lcm(self.a, self.b)
    }

    /// Returns true if gcd(a, b) = 1.
    #[must_use]
    pub fn is_coprime(self) -> bool {
        self.gcd() == 1
    }
}

impl fmt::Display for DivisorPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.a, self.b)
    }
}

/// Returns the positive divisors of n in ascending order.
///
/// # Errors
///
/// Returns [`ModulusError::NonPositive`] when n ≤ 0.
pub fn divisors(n: i64) -> Result<Vec<u64>, ModulusError> {
    let n = Modulus::new(n)?.get();

    let mut small = Vec::new();
    let mut large = Vec::new();
    let mut d = 1u64;
    while d.saturating_mul(d) <= n {
        if n % d == 0 {
            small.push(d);
            if d != n / d {
                large.push(n / d);
            }
        }
        d += 1;
    }

    small.extend(large.into_iter().rev());
    Ok(small)
}

/// Pairs (divs[i], divs[j]) with 1 ≤ i ≤ j, skipping the divisor 1.
///
/// Ordered lexicographically by index pair. The diagonal i = j is part of
/// the index scheme; `coprime_divisor_pairs` relies on gcd(d, d) = d > 1 to
/// drop it.
///
/// # Errors
///
/// Returns [`ModulusError::NonPositive`] when n ≤ 0.
pub fn divisor_pairs(n: i64) -> Result<Vec<DivisorPair>, ModulusError> {
    let divs = divisors(n)?;
    let mut pairs = Vec::new();
    for i in 1..divs.len() {
        for j in i..divs.len() {
            pairs.push(DivisorPair {
                a: divs[i],
                b: divs[j],
            });
        }
    }
    Ok(pairs)
}

/// The coprime pairs among [`divisor_pairs`], in the same order.
///
/// # Errors
///
/// Returns [`ModulusError::NonPositive`] when n ≤ 0.
pub fn coprime_divisor_pairs(n: i64) -> Result<Vec<DivisorPair>, ModulusError> {
    Ok(divisor_pairs(n)?
        .into_iter()
        .filter(|pair| pair.is_coprime())
        .collect())
}

/// Distinct prime factors of n in ascending order, by trial division.
///
/// Returns an empty vector for n ≤ 1.
#[must_use]
pub fn prime_factors(mut n: u64) -> Vec<u64> {
    let mut factors = Vec::new();
    let mut p = 2u64;
    while p.saturating_mul(p) <= n {
        if n % p == 0 {
            factors.push(p);
            while n % p == 0 {
                n /= p;
            }
        }
        p += 1;
    }
    if n > 1 {
        factors.push(n);
    }
    factors
}
