//! Entanglement detection for divisor pairs of the level.
//!
//! For a pair (a, b) with c = lcm(a, b), let Gc be the image of G in
//! GL(2, Z/cZ) and let Ka, Kb be the kernels of reduction from c to a and
//! to b. The subgroup Nab generated by Ka ∩ Gc and Kb ∩ Gc is compared
//! with a baseline:
//!
//! - coprime pairs compare against Gc itself;
//! - general pairs compare against the full kernel of reduction from c
//!   to d = gcd(a, b), which is not intersected with Gc.
//!
//! Nab is always a closure of the union. A union of two subgroups is not
//! a subgroup in general, and its size is not the order of Nab.

use std::sync::Arc;

use entangle_groups::{kernel, par_kernel, reduce_subgroup, Gl2, ModMatrix, Subgroup};
use entangle_integers::{coprime_divisor_pairs, divisor_pairs, DivisorPair, Modulus};
use rayon::prelude::*;
use tracing::{debug, info, info_span, warn};

use crate::cache::KernelCache;
use crate::config::DetectorConfig;
use crate::error::EntanglementError;
use crate::report::{Entanglement, PairReport};

/// Decides entanglement for divisor pairs of a level.
///
/// The detector holds no state beyond its configuration and an optional
/// cache of kernels, which are pure functions of their moduli.
#[derive(Debug, Default)]
pub struct EntanglementDetector {
    config: DetectorConfig,
    cache: KernelCache,
}

impl EntanglementDetector {
    /// Creates a detector with the given configuration.
    #[must_use]
    pub fn new(config: DetectorConfig) -> Self {
        Self {
            config,
            cache: KernelCache::new(),
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Returns the kernel cache.
    #[must_use]
    pub fn cache(&self) -> &KernelCache {
        &self.cache
    }

    /// Tests a pair (a, b) against G ≤ GL(2, Z/nZ) given by generators
    /// mod n, comparing against the image Gc.
    ///
    /// Coprimality of a and b is not checked: with a = b = n the kernels
    /// are trivial and the result is the order of G itself.
    ///
    /// # Errors
    ///
    /// - [`EntanglementError::Modulus`] if n is not positive.
    /// - [`EntanglementError::LevelNotDivisible`] if lcm(a, b) does not
    ///   divide n.
    /// - [`EntanglementError::Group`] if a generator does not reduce to an
    ///   invertible matrix mod lcm(a, b).
    pub fn detect_coprime(
        &self,
        level: i64,
        generators: &[[i64; 4]],
        pair: DivisorPair,
    ) -> Result<Entanglement, EntanglementError> {
        let n = Modulus::new(level)?;
        let c = pair_modulus(n, pair)?;
        let gc = projected_image(n, c, generators)?;
        let (a, b) = (Modulus::try_from(pair.a())?, Modulus::try_from(pair.b())?);

        let nab = self.kernel_subgroup(&gc, a, b)?;
        debug!(gc = gc.order(), nab = nab.order(), "coprime orders");
        Ok(Entanglement::from_orders(gc.order(), nab.order()))
    }

    /// Tests a pair (a, b) against Gc ≤ GL(2, Z/cZ) given by generators
    /// mod c = lcm(a, b), comparing against the kernel of reduction from
    /// c to gcd(a, b).
    ///
    /// # Errors
    ///
    /// [`EntanglementError::Group`] if a generator is not invertible mod c.
    pub fn detect_general(
        &self,
        generators: &[[i64; 4]],
        pair: DivisorPair,
    ) -> Result<Entanglement, EntanglementError> {
        let c = Modulus::try_from(pair.lcm())?;
        let gens: Vec<_> = generators.iter().map(|e| ModMatrix::new(*e, c)).collect();
        let gc = Subgroup::from_generators(&gens, Gl2::over(c))?;
        self.detect_general_in(&gc, pair)
    }

    /// Tests every coprime divisor pair of n.
    ///
    /// A pair whose computation fails is reported with its error and the
    /// survey moves on to the next pair.
    ///
    /// # Errors
    ///
    /// [`EntanglementError::Modulus`] if n is not positive; nothing is
    /// computed in that case.
    pub fn survey_coprime(
        &self,
        level: i64,
        generators: &[[i64; 4]],
    ) -> Result<Vec<PairReport>, EntanglementError> {
        let pairs = coprime_divisor_pairs(level)?;
        Ok(self.survey(&pairs, |pair| {
            self.detect_coprime(level, generators, pair)
        }))
    }

    /// Tests every divisor pair of n with the general comparison, reducing
    /// the generators from n to lcm(a, b) for each pair.
    ///
    /// # Errors
    ///
    /// [`EntanglementError::Modulus`] if n is not positive.
    pub fn survey_general(
        &self,
        level: i64,
        generators: &[[i64; 4]],
    ) -> Result<Vec<PairReport>, EntanglementError> {
        let pairs = divisor_pairs(level)?;
        let n = Modulus::new(level)?;
        Ok(self.survey(&pairs, |pair| {
            let c = pair_modulus(n, pair)?;
            let gc = projected_image(n, c, generators)?;
            self.detect_general_in(&gc, pair)
        }))
    }

    fn survey<F>(&self, pairs: &[DivisorPair], test: F) -> Vec<PairReport>
    where
        F: Fn(DivisorPair) -> Result<Entanglement, EntanglementError> + Sync,
    {
        let run = |pair: &DivisorPair| {
            let pair = *pair;
            let _span = info_span!("pair", a = pair.a(), b = pair.b()).entered();
            let outcome = test(pair);
            match &outcome {
                Ok(Entanglement::Present { index }) => info!(index, "entanglement found"),
                Ok(Entanglement::Absent) => debug!("no entanglement"),
                Err(error) => warn!(%error, "pair aborted"),
            }
            PairReport { pair, outcome }
        };

        if self.config.parallel_pairs {
            pairs.par_iter().map(run).collect()
        } else {
            pairs.iter().map(run).collect()
        }
    }

    fn detect_general_in(
        &self,
        gc: &Subgroup,
        pair: DivisorPair,
    ) -> Result<Entanglement, EntanglementError> {
        let c = gc.ambient().modulus();
        let a = Modulus::try_from(pair.a())?;
        let b = Modulus::try_from(pair.b())?;
        let d = Modulus::try_from(pair.gcd())?;

        let nab = self.kernel_subgroup(gc, a, b)?;
        let nd = self.kernel(c, d)?;
        debug!(gc = gc.order(), nab = nab.order(), nd = nd.order(), "general orders");
        Ok(Entanglement::from_orders(nd.order(), nab.order()))
    }

    /// The subgroup generated by (Ka ∩ Gc) ∪ (Kb ∩ Gc).
    fn kernel_subgroup(
        &self,
        gc: &Subgroup,
        a: Modulus,
        b: Modulus,
    ) -> Result<Subgroup, EntanglementError> {
        let c = gc.ambient().modulus();
        let ka = self.kernel(c, a)?;
        let kb = self.kernel(c, b)?;

        let na = gc.intersect(&ka);
        let nb = gc.intersect(&kb);
        debug!(ka = ka.order(), kb = kb.order(), na = na.len(), nb = nb.len(), "kernels");

        Ok(Subgroup::from_generators(na.iter().chain(&nb), gc.ambient())?)
    }

    fn kernel(&self, source: Modulus, target: Modulus) -> Result<Arc<Subgroup>, EntanglementError> {
        let compute = || {
            if source.get() >= self.config.parallel_threshold {
                par_kernel(source, target)
            } else {
                kernel(source, target)
            }
        };

        let subgroup = if self.config.memoize_kernels {
            self.cache.get_or_try_insert_with(source, target, compute)?
        } else {
            Arc::new(compute()?)
        };
        Ok(subgroup)
    }
}

/// lcm(a, b), checked to divide the level.
fn pair_modulus(n: Modulus, pair: DivisorPair) -> Result<Modulus, EntanglementError> {
    let c = Modulus::try_from(pair.lcm())?;
    if !c.divides(n) {
        return Err(EntanglementError::LevelNotDivisible {
            lcm: c.get(),
            level: n.get(),
        });
    }
    Ok(c)
}

/// The image in GL(2, Z/cZ) of the subgroup generated mod n.
fn projected_image(
    n: Modulus,
    c: Modulus,
    generators: &[[i64; 4]],
) -> Result<Subgroup, EntanglementError> {
    let gens: Vec<_> = generators.iter().map(|e| ModMatrix::new(*e, n)).collect();
    let reduced = reduce_subgroup(&gens, n, c)?;
    Ok(Subgroup::from_generators(&reduced, Gl2::over(c))?)
}
