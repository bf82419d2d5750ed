//! src/digest.rs
//!
//! The iterated SHA-256 kernel applied to every task row.
//!
//! The chain is:
//! ```text
//! H0 = SHA256(seed)
//! Hi = SHA256(Hi-1 || 0x01)   for i = 1..=iterations
//! ```
//! and the result is the lowercase hex encoding of the final digest. With
//! `iterations == 0` the seed is hashed exactly once.
//!
//! The kernel is pure and stateless: the same `(seed, iterations)` pair
//! always produces the same string, so workers can call it concurrently
//! without any coordination.

use sha2::{Digest, Sha256};

/// Length in characters of the hex-encoded digest (SHA-256 = 32 bytes).
pub const DIGEST_HEX_LEN: usize = 64;

/// Byte appended to the previous digest before each re-hash.
const CHAIN_SUFFIX: u8 = 0x01;

/// Computes the iterated SHA-256 digest of `seed` and returns it as a
/// 64-character lowercase hex string.
pub fn iterated_sha256_hex(seed: &[u8], iterations: u32) -> String {
    let mut digest = Sha256::digest(seed);
    for _ in 0..iterations {
        let mut hasher = Sha256::new();
        hasher.update(digest);
        hasher.update([CHAIN_SUFFIX]);
        digest = hasher.finalize();
    }
    format!("{:x}", digest)
}
