//! Common bound aliases used across the keyed graph code.
//!
//! The trait has a blanket impl, so any type satisfying the underlying bounds
//! implements it automatically. It only reduces duplication in `where` clauses.

/// Canonical bound set for vertex keys in a keyed graph.
///
/// - `Clone` so keys can be copied into the output order and error payloads
/// - `Eq + Hash` for the visited and ancestor sets
/// - `Debug` for error messages and invariant checks
pub trait KeyLike: Clone + Eq + std::hash::Hash + std::fmt::Debug {}
impl<T> KeyLike for T where T: Clone + Eq + std::hash::Hash + std::fmt::Debug {}
