// Default Time Provider Binding
//
// Dependency injection is the primary mechanism: code that needs the current
// time takes an Arc<dyn TimeProvider>. This module is the documented escape
// hatch for legacy call sites that cannot thread a provider through, exposed
// as a single process-wide binding that test setup may overwrite.

use std::sync::{Arc, RwLock};

use crate::port::time_provider::{SystemTimeProvider, TimeProvider};

// None means "no override installed"; readers fall back to the system clock.
static ACTIVE: RwLock<Option<Arc<dyn TimeProvider>>> = RwLock::new(None);

/// Get the time provider currently in effect.
///
/// Returns the installed override, or the system clock if none has been
/// installed (or the binding has been reset).
pub fn active_provider() -> Arc<dyn TimeProvider> {
    let guard = ACTIVE.read().unwrap_or_else(|e| e.into_inner());
    match guard.as_ref() {
        Some(provider) => Arc::clone(provider),
        None => Arc::new(SystemTimeProvider),
    }
}

/// Replace the process-wide default time provider.
///
/// Expected to run during single-threaded test setup, before any code starts
/// reading the binding; the swap itself is not ordered against in-flight reads.
pub fn install(provider: Arc<dyn TimeProvider>) {
    tracing::debug!("installing override time provider");
    *ACTIVE.write().unwrap_or_else(|e| e.into_inner()) = Some(provider);
}

/// Restore the real system clock as the default provider (test teardown).
pub fn reset_to_system() {
    tracing::debug!("resetting default time provider to system clock");
    *ACTIVE.write().unwrap_or_else(|e| e.into_inner()) = None;
}

/// Read the current time through the default binding.
pub fn now_nanos() -> i64 {
    active_provider().now_nanos()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::port::time_provider::mocks::{DeterministicTimeProvider, STEP_NANOS};
    use std::sync::Mutex;

    // The binding is process-wide and the harness runs tests on multiple
    // threads, so every test touching it serializes on this lock.
    static SERIAL: Mutex<()> = Mutex::new(());

    #[test]
    fn test_uninstalled_binding_reads_system_clock() {
        let _guard = SERIAL.lock().unwrap_or_else(|e| e.into_inner());
        reset_to_system();

        let before = SystemTimeProvider.now_nanos();
        let observed = now_nanos();
        let after = SystemTimeProvider.now_nanos();

        assert!(observed >= before && observed <= after);
    }

    #[test]
    fn test_install_routes_reads_to_deterministic_sequence() {
        let _guard = SERIAL.lock().unwrap_or_else(|e| e.into_inner());
        let _provider = DeterministicTimeProvider::install();

        let t0 = now_nanos();
        assert_eq!(now_nanos(), t0 + STEP_NANOS);
        assert_eq!(now_nanos(), t0 + 2 * STEP_NANOS);

        reset_to_system();
    }

    #[test]
    fn test_second_install_restarts_from_fresh_capture() {
        let _guard = SERIAL.lock().unwrap_or_else(|e| e.into_inner());

        let first = DeterministicTimeProvider::install();
        let f0 = now_nanos();

        let _second = DeterministicTimeProvider::install();
        let s0 = now_nanos();

        // The binding now serves the second instance's sequence
        assert_eq!(now_nanos(), s0 + STEP_NANOS);

        // The first instance kept its own counter: exactly one binding read
        // went through it before the swap
        assert_eq!(first.now_nanos(), f0 + STEP_NANOS);

        reset_to_system();
    }

    #[test]
    fn test_reset_restores_real_clock() {
        let _guard = SERIAL.lock().unwrap_or_else(|e| e.into_inner());
        let _provider = DeterministicTimeProvider::install();
        now_nanos();

        reset_to_system();

        let before = SystemTimeProvider.now_nanos();
        let observed = now_nanos();
        let after = SystemTimeProvider.now_nanos();

        assert!(observed >= before && observed <= after);
    }
}
