use sha2::{Digest, Sha256};

/// Stable SHA-256 reference for a traveler, derived from the passport number.
///
/// Reports carry this instead of the raw passport number.
pub fn traveler_ref(passport: &str) -> String {
    let canonical = ["traveler", passport.trim()].join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}
