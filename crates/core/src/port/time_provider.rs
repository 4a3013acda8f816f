// Time Provider Port (for testability)

use chrono::Utc;

/// Time provider interface (allows deterministic time in tests)
pub trait TimeProvider: Send + Sync {
    /// Get current time in nanoseconds since epoch
    fn now_nanos(&self) -> i64;
}

/// System time provider (production)
pub struct SystemTimeProvider;

impl TimeProvider for SystemTimeProvider {
    fn now_nanos(&self) -> i64 {
        // timestamp_nanos_opt is None past the year 2262; saturate rather than panic
        Utc::now().timestamp_nanos_opt().unwrap_or(i64::MAX)
    }
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::sync::atomic::{AtomicI64, Ordering};
    use std::sync::Arc;

    /// Distance between consecutive reads. Arbitrary odd constant, picked so
    /// the sequence is recognizable and never round.
    pub const STEP_NANOS: i64 = 1979;

    /// Deterministic time provider for tests.
    ///
    /// Starts at the wall-clock time captured at construction. Each read
    /// returns the held value, then advances it by [`STEP_NANOS`], so code
    /// asserting on elapsed-time deltas sees reproducible results.
    ///
    /// Intended for single-threaded test use; concurrent readers get an
    /// unspecified interleaving of the sequence.
    pub struct DeterministicTimeProvider {
        current: AtomicI64,
    }

    impl DeterministicTimeProvider {
        pub fn new() -> Self {
            Self {
                current: AtomicI64::new(SystemTimeProvider.now_nanos()),
            }
        }

        /// Install a fresh instance as the process-wide default provider.
        ///
        /// Returns the installed instance so tests can also read it directly.
        /// Installing again replaces the binding with an independent instance
        /// whose sequence restarts from its own captured start time.
        pub fn install() -> Arc<Self> {
            let provider = Arc::new(Self::new());
            crate::default_provider::install(provider.clone());
            provider
        }
    }

    impl Default for DeterministicTimeProvider {
        fn default() -> Self {
            Self::new()
        }
    }

    impl TimeProvider for DeterministicTimeProvider {
        fn now_nanos(&self) -> i64 {
            // Read-then-increment: callers observe the pre-advance value
            self.current.fetch_add(STEP_NANOS, Ordering::Relaxed)
        }
    }
}
