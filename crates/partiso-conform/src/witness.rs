//! Deterministic witness identifiers for law violations.
//!
//! Two runs over the same samples must produce identical witness ids, and
//! so must two independent implementations given the same semantic failure.
//! The id is a SHA-256 over a canonical key built by feeding fields as
//! `name:value` lines in a fixed order. The human-readable message is
//! deliberately excluded: rewording a diagnostic must not change identity.

use sha2::{Digest, Sha256};

pub(crate) fn witness_id(law_ref: &str, class: &str, input: &str) -> String {
    let mut hasher = Sha256::new();
    for (name, value) in [
        ("schema", "1"),
        ("law", law_ref),
        ("class", class),
        ("input", input),
    ] {
        hasher.update(name.as_bytes());
        hasher.update(b":");
        hasher.update(value.as_bytes());
        hasher.update(b"\n");
    }
    let hash = hasher.finalize();
    format!("rt1_{hash:x}")
}
