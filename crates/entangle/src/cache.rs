//! Memoised kernels of reduction.
//!
//! kernel(N, M) is a pure function of (N, M), and a survey over the
//! divisor pairs of a level asks for the same kernels repeatedly. The
//! cache shares each one behind an `Arc`.

use std::sync::Arc;

use entangle_groups::{GroupError, Modulus, Subgroup};
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

/// A thread-safe cache of kernels, keyed by (source, target) modulus.
#[derive(Debug, Default)]
pub struct KernelCache {
    kernels: RwLock<FxHashMap<(Modulus, Modulus), Arc<Subgroup>>>,
}

impl KernelCache {
    /// Creates a new empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up kernel(N, M).
    #[must_use]
    pub fn get(&self, source: Modulus, target: Modulus) -> Option<Arc<Subgroup>> {
        self.kernels.read().get(&(source, target)).cloned()
    }

    /// Returns kernel(N, M), computing and storing it on a miss.
    ///
    /// The lock is not held while computing, so two threads may both
    /// compute the same kernel; the first one stored wins.
    ///
    /// # Errors
    ///
    /// Returns the error of `compute`; nothing is stored in that case.
    pub fn get_or_try_insert_with<F>(
        &self,
        source: Modulus,
        target: Modulus,
        compute: F,
    ) -> Result<Arc<Subgroup>, GroupError>
    where
        F: FnOnce() -> Result<Subgroup, GroupError>,
    {
        if let Some(kernel) = self.get(source, target) {
            return Ok(kernel);
        }
        let kernel = Arc::new(compute()?);
        let mut kernels = self.kernels.write();
        Ok(kernels.entry((source, target)).or_insert(kernel).clone())
    }

    /// Returns the number of cached kernels.
    pub fn len(&self) -> usize {
        self.kernels.read().len()
    }

    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.kernels.read().is_empty()
    }

    /// Clears the cache.
    pub fn clear(&self) {
        self.kernels.write().clear();
    }
}
