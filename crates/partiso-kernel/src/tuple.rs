//! Total reshaping between right-nested pair trees and flat tuples.
//!
//! Sequential combination of N independently captured values yields a
//! right-nested pair tree, because sequential composition is binary. Callers
//! assembling or destructuring an N-ary capture want the flat tuple. These
//! helpers bridge the two shapes.
//!
//! They are deliberately *not* partial isomorphisms: reshaping a tuple
//! cannot fail, and wrapping these in an optional would smuggle a partiality
//! concept into plain data movement. Each pair is mutually inverse:
//!
//! ```text
//! reparenthesize3(flatten3(n)) == n        flatten3(reparenthesize3(t)) == t
//! reparenthesize5(flatten5(n)) == n        flatten5(reparenthesize5(t)) == t
//! ```
//!
//! Rust has no overloading, so the arity is spelled out in the name.

/// Flatten `(A, (B, C))` into `(A, B, C)`.
pub fn flatten3<A, B, C>(nested: (A, (B, C))) -> (A, B, C) {
    let (a, (b, c)) = nested;
    (a, b, c)
}

/// Rebuild the right-nested `(A, (B, C))` from `(A, B, C)`.
pub fn reparenthesize3<A, B, C>(flat: (A, B, C)) -> (A, (B, C)) {
    let (a, b, c) = flat;
    (a, (b, c))
}

/// Flatten `(A, (B, (C, (D, E))))` into `(A, B, C, D, E)`.
pub fn flatten5<A, B, C, D, E>(nested: (A, (B, (C, (D, E))))) -> (A, B, C, D, E) {
    let (a, (b, (c, (d, e)))) = nested;
    (a, b, c, d, e)
}

/// Rebuild the right-nested `(A, (B, (C, (D, E))))` from `(A, B, C, D, E)`.
pub fn reparenthesize5<A, B, C, D, E>(flat: (A, B, C, D, E)) -> (A, (B, (C, (D, E)))) {
    let (a, b, c, d, e) = flat;
    (a, (b, (c, (d, e))))
}
