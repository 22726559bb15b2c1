//! Key material for the modular transform.
//!
//! A key pair and a modulus drawn from fixed demonstration ranges. The two
//! keys are drawn independently; nothing relates `decode_key` to
//! `encode_key`, so decoding is not guaranteed to invert encoding.

use crate::{env::Environment, error::KeyMaterialError};

/// Smallest value a generated key can take.
pub const KEY_MIN: u64 = 100;

/// Largest value a generated key can take.
pub const KEY_MAX: u64 = 999;

/// Smallest value a generated modulus can take.
pub const MODULUS_MIN: u64 = 1000;

/// Largest value a generated modulus can take.
pub const MODULUS_MAX: u64 = 2000;

/// Key pair and modulus for the modular transform.
///
/// Exactly one instance is live at a time. Rotation
/// mutates it in place ([`rotate`](Self::rotate)); there is no version
/// history, so values encoded under a previous pair can only be decoded
/// with the current one.
///
/// # Invariants
///
/// - `modulus >= 1`, so modular reduction is always defined
/// - Generated material satisfies `modulus >= 1000 > 999 >= keys`; nothing
///   about invertibility is guaranteed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMaterial {
    encode_key: i64,
    decode_key: i64,
    modulus: i64,
}

impl KeyMaterial {
    /// Draw fresh key material from the generation ranges.
    ///
    /// `encode_key` and `decode_key` come uniformly and independently from
    /// `[KEY_MIN, KEY_MAX]`, the modulus from `[MODULUS_MIN, MODULUS_MAX]`.
    /// No relationship between the two keys is enforced.
    pub fn generate(env: &impl Environment) -> Self {
        let material = Self {
            encode_key: env.random_range(KEY_MIN, KEY_MAX) as i64,
            decode_key: env.random_range(KEY_MIN, KEY_MAX) as i64,
            modulus: env.random_range(MODULUS_MIN, MODULUS_MAX) as i64,
        };
        tracing::debug!(modulus = material.modulus, "generated key material");
        material
    }

    /// Construct key material from explicit values.
    ///
    /// Accepts arbitrary keys, including values outside the generation
    /// ranges, but rejects a modulus smaller than 1.
    pub fn new(encode_key: i64, decode_key: i64, modulus: i64) -> Result<Self, KeyMaterialError> {
        if modulus < 1 {
            return Err(KeyMaterialError::NonPositiveModulus { modulus });
        }
        Ok(Self { encode_key, decode_key, modulus })
    }

    /// Key the transform multiplies plaintexts by.
    pub fn encode_key(&self) -> i64 {
        self.encode_key
    }

    /// Key the transform multiplies encoded values by on recovery.
    pub fn decode_key(&self) -> i64 {
        self.decode_key
    }

    /// Modulus of the finite ring all arithmetic is performed in.
    pub fn modulus(&self) -> i64 {
        self.modulus
    }

    /// Replace both keys with fresh draws from `[KEY_MIN, KEY_MAX]`.
    ///
    /// The modulus is never redrawn. Values encoded under the old pair
    /// remain in circulation and will decode under the new `decode_key`.
    pub fn rotate(&mut self, env: &impl Environment) {
        self.encode_key = env.random_range(KEY_MIN, KEY_MAX) as i64;
        self.decode_key = env.random_range(KEY_MIN, KEY_MAX) as i64;
        tracing::debug!(modulus = self.modulus, "rotated key pair");
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
        type Instant = std::time::Duration;

        fn now(&self) -> Self::Instant {
            std::time::Duration::ZERO
        }

        fn random_bytes(&self, buffer: &mut [u8]) {
            self.rng.lock().unwrap().fill_bytes(buffer);
        }
    }

    #[test]
    fn generated_material_stays_in_range() {
        let env = SeededEnv::new(7);
        for _ in 0..200 {
            let material = KeyMaterial::generate(&env);
            assert!((KEY_MIN as i64..=KEY_MAX as i64).contains(&material.encode_key()));
            assert!((KEY_MIN as i64..=KEY_MAX as i64).contains(&material.decode_key()));
            assert!((MODULUS_MIN as i64..=MODULUS_MAX as i64).contains(&material.modulus()));
        }
    }

    #[test]
    fn new_accepts_keys_outside_generation_ranges() {
        let material = KeyMaterial::new(7, 15, 26).unwrap();
        assert_eq!(material.encode_key(), 7);
        assert_eq!(material.decode_key(), 15);
        assert_eq!(material.modulus(), 26);
    }

    #[test]
    fn new_rejects_non_positive_modulus() {
        assert_eq!(
            KeyMaterial::new(7, 15, 0),
            Err(KeyMaterialError::NonPositiveModulus { modulus: 0 })
        );
        assert_eq!(
            KeyMaterial::new(7, 15, -26),
            Err(KeyMaterialError::NonPositiveModulus { modulus: -26 })
        );
    }

    #[test]
    fn rotate_redraws_keys_and_keeps_modulus() {
        let env = SeededEnv::new(42);
        let mut material = KeyMaterial::generate(&env);
        let modulus = material.modulus();
        let old_pair = (material.encode_key(), material.decode_key());

        // Retry so an unlucky identical redraw cannot flake the test.
        let mut changed = false;
        for _ in 0..5 {
            material.rotate(&env);
            assert_eq!(material.modulus(), modulus);
            assert!((KEY_MIN as i64..=KEY_MAX as i64).contains(&material.encode_key()));
            assert!((KEY_MIN as i64..=KEY_MAX as i64).contains(&material.decode_key()));
            if (material.encode_key(), material.decode_key()) != old_pair {
                changed = true;
                break;
            }
        }
        assert!(changed, "rotation never produced a fresh key pair");
    }
}
