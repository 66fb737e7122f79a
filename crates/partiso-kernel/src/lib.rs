//! # Partiso Kernel
//!
//! Partial isomorphisms: the invertible-transformation algebra underneath a
//! bidirectional route parser/printer.
//!
//! A route table is written once and walked in two directions. Printing runs
//! each rule's isomorphism forward (domain value toward wire shape); parsing
//! runs it backward (wire primitive toward domain value). An absent result is
//! the only failure signal in either direction.
//!
//! This crate is **transport-agnostic**: it does not prescribe what routes,
//! requests, or wire primitives are. It only prescribes how a value maps
//! invertibly to and from another shape, and how those mappings compose.
//!
//! ## Architecture
//!
//! ```text
//! PartialIso<A, B>      ← forward: &A → Option<B>, backward: &B → Option<A>
//!     │
//! invert / pipe / compose / or_else     ← combinators (absence propagates)
//!     │
//! identity / unit / commute / constant / case    ← leaf constructors
//!     │
//! flatten3/5 · reparenthesize3/5    ← total tuple reshaping (no partiality)
//! ```

pub mod iso;
pub mod tuple;

pub use iso::PartialIso;
pub use tuple::{flatten3, flatten5, reparenthesize3, reparenthesize5};
