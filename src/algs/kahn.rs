//! Breadth-first topological sort (Kahn's algorithm), applied in place.
//!
//! The emitted order is the canonical Kahn order: zero in-degree vertices are
//! seeded in input order and successors are released left to right.
//!
//! ## Complexity
//! - Time: **O(|V| + |E|)**
//! - Space: two `usize` buffers of length |V| from the configured provider.
//!
//! # Errors
//! * [`SortError::CycleDetected`]: fewer than |V| vertices could be emitted.
//!   The input slice is left unchanged.

use crate::algs::permutation::{apply_permutation, order_to_positions};
use crate::buffers::ScratchBuffers;
use crate::options::SortOptions;
use crate::sort_error::SortError;
use crate::vertex::IndexedVertex;

/// Sort `vertices` in place with default options.
pub fn bfs<V: IndexedVertex>(vertices: &mut [V]) -> Result<(), SortError> {
    bfs_with(vertices, &SortOptions::default())
}

/// Sort `vertices` in place, drawing scratch memory from `opts`.
pub fn bfs_with<V: IndexedVertex>(
    vertices: &mut [V],
    opts: &SortOptions<'_>,
) -> Result<(), SortError> {
    let n = vertices.len();
    if n < 2 {
        return Ok(());
    }
    let bufs = opts.buffers();
    let (in_degree, order) = kahn(vertices, bufs)?;

    // All in-degrees are zero again, so the buffer doubles as `pos`.
    let mut pos = in_degree;
    order_to_positions(&order, &mut pos);
    apply_permutation(vertices, &mut pos);

    bufs.recycle_int(order);
    bufs.recycle_int(pos);
    Ok(())
}

/// Compute the Kahn order without reordering `vertices`.
///
/// `order[k]` is the original index of the vertex placed at position `k`.
pub fn bfs_order<V: IndexedVertex>(
    vertices: &[V],
    opts: &SortOptions<'_>,
) -> Result<Vec<usize>, SortError> {
    let n = vertices.len();
    if n < 2 {
        return Ok((0..n).collect());
    }
    let bufs = opts.buffers();
    let (in_degree, order) = kahn(vertices, bufs)?;
    bufs.recycle_int(in_degree);
    Ok(order)
}

/// Returns the zeroed in-degree buffer and the emitted order.
fn kahn<V: IndexedVertex>(
    vertices: &[V],
    bufs: &dyn ScratchBuffers,
) -> Result<(Vec<usize>, Vec<usize>), SortError> {
    let n = vertices.len();
    log::trace!("kahn: sorting {n} vertices");

    let mut in_degree = bufs.int_buffer(n, 0);
    for v in vertices {
        for &w in v.successors() {
            if w < n {
                in_degree[w] += 1;
            }
        }
    }

    // The order doubles as the FIFO queue: `head` is the next vertex to release.
    let mut order = bufs.int_buffer(0, n);
    order.extend((0..n).filter(|&i| in_degree[i] == 0));
    let mut head = 0;
    while head < order.len() {
        let u = order[head];
        head += 1;
        for &w in vertices[u].successors() {
            if w < n {
                in_degree[w] -= 1;
                if in_degree[w] == 0 {
                    order.push(w);
                }
            }
        }
    }

    if order.len() != n {
        log::debug!(
            "kahn: cycle detected, {} of {n} vertices ordered",
            order.len()
        );
        bufs.recycle_int(in_degree);
        bufs.recycle_int(order);
        return Err(SortError::CycleDetected);
    }

    crate::debug_invariants!(
        crate::algs::verify::validate_order(vertices, &order),
        "kahn order"
    );
    Ok((in_degree, order))
}
