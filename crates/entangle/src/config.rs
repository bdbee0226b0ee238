//! Detector configuration.

/// Configuration for [`EntanglementDetector`](crate::EntanglementDetector).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetectorConfig {
    /// Kernels of GL(2, Z/NZ) with N at least this large are enumerated
    /// on rayon's thread pool.
    pub parallel_threshold: u64,
    /// Test the divisor pairs of a survey in parallel.
    pub parallel_pairs: bool,
    /// Share kernels between pairs through a [`KernelCache`](crate::KernelCache).
    pub memoize_kernels: bool,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 12,
            parallel_pairs: true,
            memoize_kernels: true,
        }
    }
}

impl DetectorConfig {
    /// A configuration that never leaves the calling thread.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel_threshold: u64::MAX,
            parallel_pairs: false,
            ..Self::default()
        }
    }

    /// Sets the parallel enumeration threshold.
    #[must_use]
    pub fn with_parallel_threshold(mut self, threshold: u64) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Enables or disables parallel surveys.
    #[must_use]
    pub fn with_parallel_pairs(mut self, enabled: bool) -> Self {
        self.parallel_pairs = enabled;
        self
    }

    /// Enables or disables kernel memoisation.
    #[must_use]
    pub fn with_memoize_kernels(mut self, enabled: bool) -> Self {
        self.memoize_kernels = enabled;
        self
    }
}
