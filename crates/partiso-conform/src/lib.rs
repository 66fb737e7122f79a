//! # partiso-conform
//!
//! Opt-in law checking for partial isomorphisms.
//!
//! The kernel trusts every caller-supplied isomorphism unconditionally;
//! that is its specified behavior and this crate does not change it. What
//! this crate adds is a harness a test suite or debug build can call: feed
//! an isomorphism a set of domain and wire samples, get back a serializable
//! report of every round-trip violation, each carrying a deterministic
//! witness id.
//!
//! ```text
//! check_round_trip(iso, domain_samples, wire_samples)
//!     │
//! LawReport { samples_checked, violations }
//!     │
//! LawViolation { witness_id, law, class, input, message }
//! ```

mod law;
mod witness;

pub use law::{FailureClass, Law, LawReport, LawViolation, check_round_trip};
