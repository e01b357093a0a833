//! Error types for the sorting entry points.
//!
//! Index-addressed sorters report [`SortError`]; the keyed validator reports an
//! [`AggregateError`] holding every [`GraphError`] it found in a single pass.

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

/// Error type for the index-addressed sorters and permutation helpers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SortError {
    /// The graph contains at least one cycle; no topological order exists.
    #[error("cycle detected in graph (expected DAG)")]
    CycleDetected,
    /// A position or order array is not a permutation of `0..n`.
    #[error("invalid permutation: {0}")]
    InvalidPermutation(String),
    /// An edge `from -> to` points backwards in a proposed order.
    #[error("order violation: vertex {from} must come before vertex {to}")]
    OrderViolation {
        /// Original index of the predecessor.
        from: usize,
        /// Original index of the successor.
        to: usize,
    },
}

/// A single finding of the keyed graph validator.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GraphError<K: Debug> {
    /// One cycle, as the literal chain of keys. The first key is repeated at
    /// the end, so a self-loop on `a` reads `[a, a]`.
    #[error("cyclic: {cycle:?}")]
    CycleDetected {
        /// Keys forming the cycle, closed by the repeated first key.
        cycle: Vec<K>,
    },
    /// More than one independently rooted component was found.
    #[error("multiple roots: {roots:?}")]
    MultipleRoots {
        /// Root keys in candidate order.
        roots: Vec<K>,
    },
}

/// Every problem found by one call to [`sort_keyed`](crate::algs::keyed::sort_keyed).
///
/// Holds zero or more [`GraphError::CycleDetected`] entries followed by at
/// most one [`GraphError::MultipleRoots`].
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{}", .errors.iter().join("; "))]
pub struct AggregateError<K: Debug> {
    errors: Vec<GraphError<K>>,
}

impl<K: Debug> AggregateError<K> {
    pub(crate) fn new(errors: Vec<GraphError<K>>) -> Self {
        Self { errors }
    }

    /// All findings, cycles first.
    pub fn errors(&self) -> &[GraphError<K>] {
        &self.errors
    }

    /// Number of findings.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// `true` when nothing was reported.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Iterate over the recorded cycles.
    pub fn cycles(&self) -> impl Iterator<Item = &[K]> + '_ {
        self.errors.iter().filter_map(|e| match e {
            GraphError::CycleDetected { cycle } => Some(cycle.as_slice()),
            GraphError::MultipleRoots { .. } => None,
        })
    }

    /// Root keys, if a multiple-roots finding was reported.
    pub fn roots(&self) -> Option<&[K]> {
        self.errors.iter().find_map(|e| match e {
            GraphError::MultipleRoots { roots } => Some(roots.as_slice()),
            GraphError::CycleDetected { .. } => None,
        })
    }

    /// `true` if at least one cycle was reported.
    pub fn has_cycles(&self) -> bool {
        self.cycles().next().is_some()
    }

    /// Consume the aggregate, yielding the individual findings.
    pub fn into_errors(self) -> Vec<GraphError<K>> {
        self.errors
    }
}

impl<K: Debug> IntoIterator for AggregateError<K> {
    type Item = GraphError<K>;
    type IntoIter = std::vec::IntoIter<GraphError<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}
