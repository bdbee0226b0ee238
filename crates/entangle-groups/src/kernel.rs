//! Kernels of reduction homomorphisms, by exhaustive enumeration.
//!
//! kernel(N, M) is every element of GL(2, Z/NZ) congruent to the identity
//! mod M. It is found by scanning the whole of GL(2, Z/NZ), which costs
//! N⁴ candidate matrices.

use entangle_integers::Modulus;
use rayon::prelude::*;
use tracing::debug;

use crate::error::GroupError;
use crate::reduction::ReductionMap;
use crate::subgroup::Subgroup;

/// Computes the kernel of reduction GL(2, Z/NZ) → GL(2, Z/MZ).
///
/// # Errors
///
/// Returns [`GroupError::NotADivisor`] unless M divides N. The check runs
/// before any enumeration.
pub fn kernel(source: Modulus, target: Modulus) -> Result<Subgroup, GroupError> {
    let map = ReductionMap::new(source, target)?;
    let elements: Vec<_> = map
        .source()
        .elements()
        .filter(|x| map.maps_to_identity(x))
        .collect();

    debug!(n = source.get(), m = target.get(), order = elements.len(), "kernel");
    Ok(Subgroup::from_elements(elements, map.source()))
}

/// Parallel version of [`kernel`], splitting the enumeration across
/// rayon's thread pool.
///
/// # Errors
///
/// Returns [`GroupError::NotADivisor`] unless M divides N.
pub fn par_kernel(source: Modulus, target: Modulus) -> Result<Subgroup, GroupError> {
    let map = ReductionMap::new(source, target)?;
    let elements: Vec<_> = map
        .source()
        .par_elements()
        .filter(|x| map.maps_to_identity(x))
        .collect();

    debug!(n = source.get(), m = target.get(), order = elements.len(), "kernel (parallel)");
    Ok(Subgroup::from_elements(elements, map.source()))
}
