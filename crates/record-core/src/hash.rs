// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field-name-aware record hashing.
//!
//! Every record hash starts from [`HASH_SEED`] and folds over the fields in
//! declaration order:
//!
//! ```text
//! hash = (hash * HASH_MULTIPLIER) ^ hash_of(field_name) ^ hash_of(field_value)
//! ```
//!
//! Mixing the field name in keeps records of different shapes with equal
//! values apart when they share a hash-based container.

use std::hash::{DefaultHasher, Hash, Hasher};

/// Initial hash value of every record.
pub const HASH_SEED: u64 = 486_187_739;

/// Multiplier applied to the running hash before each field is mixed in.
pub const HASH_MULTIPLIER: u64 = 15_485_863;

/// Hash a single value with a deterministic hasher.
///
/// Equal values produce equal results within one build of the program.
#[must_use]
pub fn hash_of<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Incremental record hash builder.
///
/// Generated `record_hash` implementations chain one [`field`](Self::field)
/// call per field:
///
/// ```rust
/// use record_core::{HASH_SEED, RecordHasher};
///
/// let empty = RecordHasher::new().finish();
/// assert_eq!(empty, HASH_SEED);
///
/// let h = RecordHasher::new().field("x", &3).field("y", &7).finish();
/// assert_ne!(h, RecordHasher::new().field("a", &3).field("b", &7).finish());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordHasher {
    state: u64
}

impl RecordHasher {
    /// Start a new hash from [`HASH_SEED`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: HASH_SEED
        }
    }

    /// Mix one named field into the hash.
    #[must_use]
    pub fn field<T: Hash + ?Sized>(self, name: &str, value: &T) -> Self {
        self.combine(hash_of(name), hash_of(value))
    }

    /// Mix pre-computed name and value hashes into the hash.
    #[must_use]
    pub const fn combine(self, name_hash: u64, value_hash: u64) -> Self {
        Self {
            state: self.state.wrapping_mul(HASH_MULTIPLIER) ^ name_hash ^ value_hash
        }
    }

    /// Finish and return the hash value.
    #[must_use]
    pub const fn finish(self) -> u64 {
        self.state
    }
}

impl Default for RecordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_record_hash_is_seed() {
        assert_eq!(RecordHasher::new().finish(), HASH_SEED);
        assert_eq!(RecordHasher::default().finish(), HASH_SEED);
    }

    #[test]
    fn combine_follows_fold_formula() {
        let h = RecordHasher::new().combine(1, 2).finish();
        assert_eq!(h, HASH_SEED.wrapping_mul(HASH_MULTIPLIER) ^ 1 ^ 2);
    }

    #[test]
    fn field_uses_name_and_value_hashes() {
        let expected = RecordHasher::new().combine(hash_of("x"), hash_of(&3_i32));
        assert_eq!(RecordHasher::new().field("x", &3_i32), expected);
    }

    #[test]
    fn hash_of_is_deterministic() {
        assert_eq!(hash_of("Richard"), hash_of("Richard"));
        assert_eq!(hash_of(&vec![1, 2, 3]), hash_of(&vec![1, 2, 3]));
    }

    #[test]
    fn field_order_matters() {
        let xy = RecordHasher::new().field("x", &1).field("y", &2).finish();
        let yx = RecordHasher::new().field("y", &2).field("x", &1).finish();
        assert_ne!(xy, yx);
    }

    #[test]
    fn field_names_separate_equal_values() {
        let point = RecordHasher::new().field("x", &3).field("y", &7).finish();
        let size = RecordHasher::new().field("width", &3).field("height", &7).finish();
        assert_ne!(point, size);
    }

    #[test]
    fn multiplication_wraps() {
        let h = RecordHasher::new().combine(u64::MAX, 0).combine(u64::MAX, 0);
        let _ = h.finish();
    }
}
