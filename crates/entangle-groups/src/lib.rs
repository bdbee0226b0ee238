//! # entangle-groups
//!
//! Finite matrix groups GL(2, Z/mZ) and the homomorphisms between them.
//!
//! This crate provides:
//! - 2x2 matrices over Z/mZ ([`ModMatrix`])
//! - The ambient group GL(2, Z/mZ) with lazy and parallel enumeration ([`Gl2`])
//! - Reduction homomorphisms GL(2, Z/NZ) → GL(2, Z/MZ) for M | N ([`ReductionMap`])
//! - Kernels of reduction, computed by exhaustive enumeration ([`kernel`])
//! - Subgroups given by generators or explicit elements ([`Subgroup`])
//!
//! ## Cost
//!
//! Enumerating GL(2, Z/NZ) visits N⁴ candidate matrices. Everything here
//! is brute force and meant for the small levels of adelic images.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod gl2;
pub mod kernel;
pub mod matrix;
pub mod reduction;
pub mod subgroup;

#[cfg(test)]
mod proptests;

pub use error::GroupError;
pub use gl2::{Gl2, Gl2Elements};
pub use kernel::{kernel, par_kernel};
pub use matrix::ModMatrix;
pub use reduction::{reduce, reduce_subgroup, ReductionMap};
pub use subgroup::Subgroup;

pub use entangle_integers::Modulus;
