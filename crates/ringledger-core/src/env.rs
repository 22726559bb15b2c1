//! Environment abstraction for deterministic testing.
//!
//! Decouples the transform core from system resources (time, randomness).
//! Production code injects a real clock and OS randomness; tests inject a
//! manually advanced clock and a seeded generator, making key generation
//! and rotation gating fully reproducible.

use std::time::Duration;

/// Abstract environment providing monotonic time and randomness.
///
/// # Invariants
///
/// Implementations MUST guarantee:
///
/// - `now()` never goes backwards within a single execution context
/// - `random_bytes()` fills the whole buffer on every call
pub trait Environment: Clone + Send + Sync + 'static {
    /// The specific instant type used by this environment.
    ///
    /// Production environments use `std::time::Instant`, while test
    /// environments typically use virtual time (e.g. a `Duration` offset
    /// from an arbitrary epoch).
    type Instant: Copy + Ord + Send + Sync + std::ops::Sub<Output = Duration>;

    /// Current time (monotonic).
    fn now(&self) -> Self::Instant;

    /// Fills the provided buffer with random bytes.
    fn random_bytes(&self, buffer: &mut [u8]);

    /// Generates a random `u64`.
    fn random_u64(&self) -> u64 {
        let mut bytes = [0u8; 8];
        self.random_bytes(&mut bytes);
        u64::from_be_bytes(bytes)
    }

    /// Draws a uniform value from the inclusive range `[lo, hi]`.
    ///
    /// Uses rejection sampling, so the draw is unbiased for every range
    /// width. `lo` must not exceed `hi`.
    fn random_range(&self, lo: u64, hi: u64) -> u64 {
        debug_assert!(lo <= hi, "random_range requires lo <= hi");
        let width = (hi - lo).wrapping_add(1);
        if width == 0 {
            // Range spans the whole u64 domain.
            return self.random_u64();
        }
        // Reject samples below the threshold so the accepted interval is an
        // exact multiple of the range width.
        let threshold = width.wrapping_neg() % width;
        loop {
            let sample = self.random_u64();
            if sample >= threshold {
                return lo + sample % width;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[derive(Clone)]
    struct SeededEnv {
        rng: Arc<Mutex<ChaCha8Rng>>,
    }

    impl SeededEnv {
        fn new(seed: u64) -> Self {
            Self { rng: Arc::new(Mutex::new(ChaCha8Rng::seed_from_u64(seed))) }
        }
    }

    impl Environment for SeededEnv {
        type Instant = Duration;

        fn now(&self) -> Self::Instant {
            Duration::ZERO
        }

        fn random_bytes(&self, buffer: &mut [u8]) {
            self.rng.lock().unwrap().fill_bytes(buffer);
        }
    }

    #[derive(Clone)]
    struct PatternEnv;

    impl Environment for PatternEnv {
        type Instant = Duration;

        fn now(&self) -> Self::Instant {
            Duration::ZERO
        }

        fn random_bytes(&self, buffer: &mut [u8]) {
            for (i, byte) in buffer.iter_mut().enumerate() {
                *byte = (i as u8) + 1;
            }
        }
    }

    #[test]
    fn random_u64_reads_big_endian() {
        assert_eq!(PatternEnv.random_u64(), 0x0102_0304_0506_0708);
    }

    #[test]
    fn random_range_stays_within_bounds() {
        let env = SeededEnv::new(3);
        for _ in 0..1000 {
            let value = env.random_range(100, 999);
            assert!((100..=999).contains(&value), "draw {value} escaped the range");
        }
    }

    #[test]
    fn random_range_degenerate_range_is_constant() {
        let env = SeededEnv::new(3);
        assert_eq!(env.random_range(42, 42), 42);
    }

    #[test]
    fn random_range_reaches_both_endpoints() {
        let env = SeededEnv::new(9);
        let mut hit_lo = false;
        let mut hit_hi = false;
        for _ in 0..2000 {
            match env.random_range(0, 7) {
                0 => hit_lo = true,
                7 => hit_hi = true,
                _ => {},
            }
        }
        assert!(hit_lo, "lower endpoint never drawn");
        assert!(hit_hi, "upper endpoint never drawn");
    }
}
