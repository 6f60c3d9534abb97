// backend_mvnpm/src/maven/checksum.rs
use sha1::{Digest, Sha1};

/// Lowercase hex SHA-1, the digest Maven repositories publish beside every
/// artifact.
pub fn sha1_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha1::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}
