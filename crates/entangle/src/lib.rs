//! # entangle
//!
//! Detects entanglements between the mod-a and mod-b images of a subgroup
//! G ≤ GL(2, Z/nZ).
//!
//! G is supplied as a level n together with a list of generators, for
//! instance the adelic image of an elliptic curve. For a pair (a, b) of
//! divisors of n, G is entangled when the map from its mod-lcm(a, b)
//! image into the product of its mod-a and mod-b images fails to be
//! injective. The size of the entanglement is an index of subgroups.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use entangle::prelude::*;
//!
//! let detector = EntanglementDetector::default();
//! let generators = [[11, 0, 0, 1], [1, 1, 1, 0], [1, 6, 0, 1], [7, 15, 0, 1]];
//! for report in detector.survey_coprime(30, &generators)? {
//!     if report.is_notable() {
//!         println!("{report}");
//!     }
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod cache;
pub mod config;
pub mod detector;
pub mod error;
pub mod report;

#[cfg(test)]
mod proptests;

pub use entangle_groups as groups;
pub use entangle_integers as integers;

pub use cache::KernelCache;
pub use config::DetectorConfig;
pub use detector::EntanglementDetector;
pub use error::EntanglementError;
pub use report::{Entanglement, PairReport};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::{
        DetectorConfig, Entanglement, EntanglementDetector, EntanglementError, PairReport,
    };
    pub use entangle_groups::{Gl2, ModMatrix, Subgroup};
    pub use entangle_integers::{coprime_divisor_pairs, divisors, DivisorPair, Modulus};
}
