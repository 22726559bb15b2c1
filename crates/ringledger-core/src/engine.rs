//! Partially-homomorphic modular transform.
//!
//! Every operation multiplies or adds in the finite ring defined by the
//! live key material's modulus. Arithmetic widens to `i128` and reduces
//! with `rem_euclid`, so all operations are total over `i64` and results
//! always land in `[0, modulus)`, negative inputs included.
//!
//! # Algebraic behavior
//!
//! - `combine_add(encode(a), encode(b)) == encode(a + b)` for every key
//!   pair, because encoding is linear in `encode_key`.
//! - `combine_mul(encode(a), encode(b))` equals `a·b·encode_key² mod
//!   modulus`, which matches `encode(a·b)` only when `encode_key² ≡
//!   encode_key (mod modulus)`.
//! - `decode(encode(x)) == x mod modulus` only when `encode_key ·
//!   decode_key ≡ 1 (mod modulus)`; the keys are drawn independently, so
//!   this generally fails.

use crate::{env::Environment, keys::KeyMaterial};

/// Modular transform engine over a live [`KeyMaterial`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformEngine {
    keys: KeyMaterial,
}

impl TransformEngine {
    /// Create an engine with freshly generated key material.
    pub fn generate(env: &impl Environment) -> Self {
        Self { keys: KeyMaterial::generate(env) }
    }

    /// Create an engine over explicit key material.
    pub fn with_keys(keys: KeyMaterial) -> Self {
        Self { keys }
    }

    /// The live key material.
    pub fn keys(&self) -> &KeyMaterial {
        &self.keys
    }

    /// Redraw both keys in place, keeping the modulus.
    pub fn rotate_keys(&mut self, env: &impl Environment) {
        self.keys.rotate(env);
    }

    /// Encode a plaintext: `(plaintext * encode_key) mod modulus`.
    pub fn encode(&self, plaintext: i64) -> i64 {
        self.reduce(i128::from(plaintext) * i128::from(self.keys.encode_key()))
    }

    /// Attempt to recover a value: `(value * decode_key) mod modulus`.
    ///
    /// Not an inverse of [`encode`](Self::encode) unless
    /// `encode_key · decode_key ≡ 1 (mod modulus)`.
    pub fn decode(&self, value: i64) -> i64 {
        self.reduce(i128::from(value) * i128::from(self.keys.decode_key()))
    }

    /// Combine two encoded values additively: `(v1 + v2) mod modulus`.
    ///
    /// Matches `encode(a + b)` for all inputs.
    pub fn combine_add(&self, v1: i64, v2: i64) -> i64 {
        self.reduce(i128::from(v1) + i128::from(v2))
    }

    /// Combine two encoded values multiplicatively: `(v1 * v2) mod modulus`.
    ///
    /// Carries an extra factor of `encode_key`, so it matches
    /// `encode(a * b)` only when `encode_key² ≡ encode_key (mod modulus)`.
    pub fn combine_mul(&self, v1: i64, v2: i64) -> i64 {
        self.reduce(i128::from(v1) * i128::from(v2))
    }

    /// Reduce into `[0, modulus)` with a sign-consistent modulo.
    fn reduce(&self, value: i128) -> i64 {
        let modulus = i128::from(self.keys.modulus());
        value.rem_euclid(modulus) as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 7 * 15 = 105 ≡ 1 (mod 26), so decode inverts encode.
    fn inverse_pair_engine() -> TransformEngine {
        TransformEngine::with_keys(KeyMaterial::new(7, 15, 26).unwrap())
    }

    #[test]
    fn encode_reduces_into_the_ring() {
        let engine = inverse_pair_engine();
        assert_eq!(engine.encode(5), 9);
        assert_eq!(engine.encode(3), 21);
    }

    #[test]
    fn decode_inverts_encode_for_an_inverse_pair() {
        let engine = inverse_pair_engine();
        assert_eq!(engine.decode(engine.encode(5)), 5);
        assert_eq!(engine.decode(9), 5);
    }

    #[test]
    fn combine_add_matches_the_encoded_sum() {
        let engine = inverse_pair_engine();
        let combined = engine.combine_add(engine.encode(5), engine.encode(3));
        assert_eq!(combined, 4);
        assert_eq!(combined, engine.encode(8));
    }

    #[test]
    fn combine_mul_misses_the_encoded_product() {
        let engine = inverse_pair_engine();
        let combined = engine.combine_mul(engine.encode(5), engine.encode(3));
        assert_eq!(combined, 7);
        assert_eq!(engine.encode(15), 1);
        assert_ne!(combined, engine.encode(15));
    }

    #[test]
    fn decode_is_not_an_inverse_for_independent_keys() {
        // 7 * 8 = 56 ≡ 4 (mod 26), nowhere near 1.
        let engine = TransformEngine::with_keys(KeyMaterial::new(7, 8, 26).unwrap());
        assert_eq!(engine.encode(5), 9);
        assert_eq!(engine.decode(9), 20);
    }

    #[test]
    fn negative_plaintexts_reduce_non_negative() {
        let engine = inverse_pair_engine();
        let encoded = engine.encode(-5);
        // -35 ≡ 17 (mod 26)
        assert_eq!(encoded, 17);
        assert!((0..26).contains(&encoded));
    }

    #[test]
    fn extreme_plaintexts_do_not_overflow() {
        let engine = inverse_pair_engine();
        for plaintext in [i64::MIN, i64::MAX] {
            let encoded = engine.encode(plaintext);
            assert!((0..26).contains(&encoded));
        }
    }
}
