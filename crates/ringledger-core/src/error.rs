//! Error types for key material construction.
//!
//! The only structurally possible core failure is a modulus that cannot
//! define a finite ring. Every arithmetic operation is total once key
//! material exists.

use thiserror::Error;

/// Errors that can occur when constructing key material.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyMaterialError {
    /// Modular reduction requires a modulus of at least 1.
    ///
    /// Generated material always satisfies this (its modulus comes from
    /// `[1000, 2000]`); only explicit construction can trip it.
    #[error("modulus must be positive, got {modulus}")]
    NonPositiveModulus {
        /// The rejected modulus value.
        modulus: i64,
    },
}
