//! # entangle-integers
//!
//! Integer arithmetic underlying the entanglement engine.
//!
//! This crate provides:
//! - The ring Z/mZ through a runtime [`Modulus`]
//! - `gcd`, `lcm` and trial-division factorisation of small integers
//! - Divisor enumeration and the divisor pairs tested for entanglement
//!
//! Moduli are machine words: the adelic levels handled by brute-force
//! enumeration of GL(2, Z/nZ) are small enough that no big-integer
//! support is needed.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod divisors;
pub mod modulus;

#[cfg(test)]
mod proptests;

pub use divisors::{coprime_divisor_pairs, divisor_pairs, divisors, prime_factors, DivisorPair};
pub use modulus::{gcd, lcm, Modulus, ModulusError};
