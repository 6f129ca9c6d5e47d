//! Hashing utilities for determinism checks.
//!
//! Uses FNV-1a for fast, deterministic hashing of simulation state.
//! These hashes are not cryptographically secure; they exist so that two
//! runs can be compared bit-for-bit with a single `u64`.

/// FNV-1a offset basis for 64-bit.
pub const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

/// Feed a single byte into an FNV-1a hash state.
#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

/// Feed a u64 (as 8 LE bytes) into an FNV-1a hash state.
#[inline]
pub fn fnv1a_u64(mut hash: u64, v: u64) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

/// Feed every `f64::to_bits()` of `values` into `hash`.
pub fn fnv1a_f64s(mut hash: u64, values: &[f64]) -> u64 {
    for &v in values {
        hash = fnv1a_u64(hash, v.to_bits());
    }
    hash
}

/// Hash a field's displacement followed by its velocity.
///
/// The buffer length is folded in between the two so that moving a value
/// from one buffer to the other changes the hash.
pub fn field_hash(displacement: &[f64], velocity: &[f64]) -> u64 {
    let mut hash = FNV_OFFSET;
    hash = fnv1a_f64s(hash, displacement);
    hash = fnv1a_u64(hash, displacement.len() as u64);
    fnv1a_f64s(hash, velocity)
}
