//! Order verification helpers.
//!
//! Both index-addressed sorters may emit different orders for the same graph;
//! these checks test the edge contract itself rather than a specific order.

use crate::algs::permutation::check_permutation;
use crate::sort_error::SortError;
use crate::vertex::IndexedVertex;
use crate::vertex_map::VertexMap;
use hashbrown::HashMap as FastMap;

/// Check that `order` is a linear extension of the graph in `vertices`.
///
/// `order[k]` is the original index placed at position `k`. Out-of-range
/// successors are ignored, as the sorters ignore them.
///
/// # Errors
/// * [`SortError::InvalidPermutation`] if `order` is not a permutation of `0..n`.
/// * [`SortError::OrderViolation`] for the first edge that points backwards
///   (self-loops included).
pub fn validate_order<V: IndexedVertex>(vertices: &[V], order: &[usize]) -> Result<(), SortError> {
    let n = vertices.len();
    check_permutation(order, n)?;
    let mut pos = vec![0usize; n];
    for (k, &v) in order.iter().enumerate() {
        pos[v] = k;
    }
    for (u, vertex) in vertices.iter().enumerate() {
        for &w in vertex.successors() {
            if w < n && pos[u] >= pos[w] {
                return Err(SortError::OrderViolation { from: u, to: w });
            }
        }
    }
    Ok(())
}

/// `true` if `order` satisfies every edge of `vertices`.
pub fn is_topological<V: IndexedVertex>(vertices: &[V], order: &[usize]) -> bool {
    validate_order(vertices, order).is_ok()
}

/// Check a keyed order: every stored key appears exactly once, and every edge
/// between keys in the order points forward.
///
/// Successor keys that are neither stored nor listed in `order` are ignored.
/// Violations are reported with positions into `order`.
pub fn validate_keyed_order<M: VertexMap>(graph: &M, order: &[M::Key]) -> Result<(), SortError> {
    let mut pos: FastMap<&M::Key, usize> = FastMap::with_capacity(order.len());
    for (k, key) in order.iter().enumerate() {
        if pos.insert(key, k).is_some() {
            return Err(SortError::InvalidPermutation(format!(
                "key {key:?} listed twice"
            )));
        }
    }
    for key in graph.vertex_keys() {
        let Some(&from) = pos.get(key) else {
            return Err(SortError::InvalidPermutation(format!(
                "key {key:?} missing from order"
            )));
        };
        for succ in graph.successors_of(key) {
            if let Some(&to) = pos.get(succ)
                && from >= to
            {
                return Err(SortError::OrderViolation { from, to });
            }
        }
    }
    Ok(())
}
