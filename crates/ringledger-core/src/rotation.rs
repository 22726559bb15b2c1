//! Time-gated key rotation.
//!
//! Rotation is polled by the caller after each encode-and-store action; it
//! never fires from a background timer. On firing, the live key pair is
//! replaced in place, which leaves every previously stored encoded value
//! decodable only under the new pair.

use std::time::Duration;

use crate::{engine::TransformEngine, env::Environment};

/// Interval used by [`RotationPolicy::new`].
pub const DEFAULT_ROTATION_INTERVAL: Duration = Duration::from_secs(10);

/// Time-gated, in-place replacement of the engine's key pair.
pub struct RotationPolicy<E: Environment> {
    interval: Duration,
    last_rotation: E::Instant,
}

impl<E: Environment> RotationPolicy<E> {
    /// Policy with the default 10-second interval, timer starting now.
    pub fn new(env: &E) -> Self {
        Self::with_interval(env, DEFAULT_ROTATION_INTERVAL)
    }

    /// Policy with an explicit interval, timer starting now.
    pub fn with_interval(env: &E, interval: Duration) -> Self {
        Self { interval, last_rotation: env.now() }
    }

    /// The configured rotation interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Rotate the engine's keys if the interval has elapsed.
    ///
    /// Returns `true` and resets the timer when strictly more than
    /// `interval` has passed since the last rotation (or construction);
    /// otherwise returns `false` with no side effect. The modulus is never
    /// touched.
    ///
    /// A `true` return means every value encoded under the previous pair
    /// now decodes under a key that generally does not invert it.
    pub fn maybe_rotate(&mut self, engine: &mut TransformEngine, env: &E) -> bool {
        let now = env.now();
        if now - self.last_rotation > self.interval {
            engine.rotate_keys(env);
            self.last_rotation = now;
            tracing::info!(interval_secs = self.interval.as_secs(), "rotated transform keys");
            true
        } else {
            false
        }
    }
}
