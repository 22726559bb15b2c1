//! Production environment using system time and the OS RNG.

use ringledger_core::Environment;

/// Production environment: monotonic system clock plus OS randomness.
///
/// Uses `std::time::Instant::now()` for time and getrandom for key draws,
/// so production key material is not reproducible; tests inject seeded
/// environments instead.
///
/// # Panics
///
/// Panics if the OS RNG fails. Without a source of randomness no key
/// material can be drawn, so there is nothing sensible to continue with.
#[derive(Clone, Copy, Default)]
pub struct SystemEnv;

impl SystemEnv {
    /// Create a new system environment.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Environment for SystemEnv {
    type Instant = std::time::Instant;

    fn now(&self) -> Self::Instant {
        std::time::Instant::now()
    }

    #[allow(clippy::expect_used)]
    fn random_bytes(&self, buffer: &mut [u8]) {
        getrandom::fill(buffer).expect("OS RNG failure is unrecoverable");
    }
}
