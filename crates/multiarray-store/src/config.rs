//! Store configuration parameters.

/// Configuration for an [`ArrayStore`](crate::ArrayStore).
///
/// Controls bounds checking and the payload size cap. Fixed at store
/// construction; every array in the store is governed by the same values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreConfig {
    /// Whether `index` rejects indices that are not below the axis size.
    ///
    /// Default: on when the `bounds-checks` feature is enabled (the crate
    /// default). With checks off, an out-of-range index yields a view
    /// over the wrong (or nonexistent) bytes; reading it through the
    /// store still never touches memory outside the payload.
    pub bounds_checks: bool,

    /// Largest payload a single array may have, in bytes.
    ///
    /// Default: `isize::MAX`, the largest allocation a `Vec` can describe.
    /// Allocations and resizes beyond it fail with `CapacityExceeded`.
    pub max_payload_bytes: usize,
}

impl StoreConfig {
    /// Default for [`StoreConfig::bounds_checks`].
    pub const DEFAULT_BOUNDS_CHECKS: bool = cfg!(feature = "bounds-checks");

    /// Default for [`StoreConfig::max_payload_bytes`].
    pub const DEFAULT_MAX_PAYLOAD_BYTES: usize = isize::MAX as usize;

    /// Create a config with default values.
    pub fn new() -> Self {
        Self {
            bounds_checks: Self::DEFAULT_BOUNDS_CHECKS,
            max_payload_bytes: Self::DEFAULT_MAX_PAYLOAD_BYTES,
        }
    }

    /// Enable or disable bounds checking.
    #[must_use]
    pub fn with_bounds_checks(mut self, enabled: bool) -> Self {
        self.bounds_checks = enabled;
        self
    }

    /// Set the per-array payload cap in bytes.
    #[must_use]
    pub fn with_max_payload_bytes(mut self, max: usize) -> Self {
        self.max_payload_bytes = max;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new()
    }
}
