// Nanoclock Core - Time Source Port & Deterministic Stub
// NO timer/metrics logic; this crate is the injectable time seam only

pub mod default_provider;
pub mod port;

pub use port::time_provider::mocks::DeterministicTimeProvider;
pub use port::{SystemTimeProvider, TimeProvider};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
