//! Ringledger core: modular transform, key rotation, case ledger.
//!
//! A demonstration model of a partially-homomorphic scheme over a finite
//! ring. Plaintexts are encoded as `(p * encode_key) mod modulus`, stored in
//! an append-only ledger, and later batch-recovered through whatever key
//! pair is live at recovery time.
//!
//! ```text
//! plaintext ──▶ TransformEngine::encode ──▶ CaseLedger::add_case
//!                       ▲                            │
//!          RotationPolicy::maybe_rotate              ▼
//!            (in-place key replacement)    CaseLedger::process_all
//! ```
//!
//! # Algebra
//!
//! Encoding is linear in `encode_key`, so the additive combination of two
//! encoded values equals the encoding of the summed plaintexts for every
//! key pair. The multiplicative combination picks up an extra factor of
//! `encode_key` and only matches `encode(a * b)` when
//! `encode_key² ≡ encode_key (mod modulus)`. The decode key is drawn
//! independently of the encode key, so `decode(encode(x)) == x` holds only
//! when `encode_key · decode_key ≡ 1 (mod modulus)`. Callers must not
//! assume round-trip correctness.
//!
//! # Rotation hazard
//!
//! There is exactly one live [`KeyMaterial`]; rotation replaces its key
//! pair in place without versioning. Ledger recovery always uses the
//! current pair, so cases stored before a rotation stop decoding to
//! meaningful values. This is the behavior the model exists to
//! demonstrate, not a defect to repair.
//!
//! This crate is an arithmetic model only. It provides no cryptographic
//! security of any kind.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod env;

mod engine;
mod error;
mod keys;
mod ledger;
mod rotation;

pub use engine::TransformEngine;
pub use env::Environment;
pub use error::KeyMaterialError;
pub use keys::{KEY_MAX, KEY_MIN, KeyMaterial, MODULUS_MAX, MODULUS_MIN};
pub use ledger::{CaseLedger, CaseRecord};
pub use rotation::{DEFAULT_ROTATION_INTERVAL, RotationPolicy};
