//! Utility functions for prompt normalization and content hashing.

use sha2::{Digest, Sha256};

/// Lowercase a prompt for substring tests.
///
/// Returns `None` for empty or whitespace-only input, which callers treat as
/// "no match" rather than an error.
#[must_use]
pub fn normalized_prompt(prompt: &str) -> Option<String> {
    if prompt.trim().is_empty() {
        return None;
    }
    Some(prompt.to_lowercase())
}

/// Compute a SHA-256 content hash for deduplication.
///
/// Concatenates a kind tag and the body, then returns the hex-encoded digest.
#[must_use]
pub fn content_hash(kind: &str, body: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(kind.as_bytes());
    hasher.update(b":");
    hasher.update(body.as_bytes());
    format!("{:x}", hasher.finalize())
}
