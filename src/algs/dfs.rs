//! Depth-first topological sort (reverse postorder), applied in place.
//!
//! The traversal uses an explicit work stack, so its call depth does not grow
//! with the depth of the graph. A vertex is marked `visited` and `on_stack`
//! the first time it reaches the top of the work stack, and all its
//! unvisited successors are pushed above it. When it reaches the top again,
//! everything pushed above it has been popped, so every successor has
//! finished; only then is it cleared from `on_stack` and appended to the
//! postorder. Stale duplicates of an already visited vertex are popped
//! without effect.
//!
//! A successor found `on_stack` is a back edge. The sort fails immediately
//! with [`SortError::CycleDetected`] and the input slice is left unchanged.
//!
//! ## Complexity
//! - Time: **O(|V| + |E|)**
//! - Space: two `bool` and two `usize` buffers of length |V|; the work stack
//!   may grow to |V| + |E| entries.

use crate::algs::permutation::{apply_permutation, order_to_positions};
use crate::buffers::ScratchBuffers;
use crate::options::SortOptions;
use crate::sort_error::SortError;
use crate::vertex::IndexedVertex;

/// Sort `vertices` in place with default options.
pub fn dfs<V: IndexedVertex>(vertices: &mut [V]) -> Result<(), SortError> {
    dfs_with(vertices, &SortOptions::default())
}

/// Sort `vertices` in place, drawing scratch memory from `opts`.
pub fn dfs_with<V: IndexedVertex>(
    vertices: &mut [V],
    opts: &SortOptions<'_>,
) -> Result<(), SortError> {
    let n = vertices.len();
    if n < 2 {
        return Ok(());
    }
    let bufs = opts.buffers();
    let order = reverse_postorder(vertices, bufs)?;

    let mut pos = bufs.int_buffer(n, 0);
    order_to_positions(&order, &mut pos);
    apply_permutation(vertices, &mut pos);

    bufs.recycle_int(order);
    bufs.recycle_int(pos);
    Ok(())
}

/// Compute the DFS order without reordering `vertices`.
///
/// `order[k]` is the original index of the vertex placed at position `k`.
pub fn dfs_order<V: IndexedVertex>(
    vertices: &[V],
    opts: &SortOptions<'_>,
) -> Result<Vec<usize>, SortError> {
    let n = vertices.len();
    if n < 2 {
        return Ok((0..n).collect());
    }
    reverse_postorder(vertices, opts.buffers())
}

fn reverse_postorder<V: IndexedVertex>(
    vertices: &[V],
    bufs: &dyn ScratchBuffers,
) -> Result<Vec<usize>, SortError> {
    let n = vertices.len();
    log::trace!("dfs: sorting {n} vertices");

    let mut visited = bufs.bool_buffer(n, 0);
    let mut on_stack = bufs.bool_buffer(n, 0);
    let mut order = bufs.int_buffer(0, n);
    let mut stack = bufs.int_buffer(0, n);

    let result = postorder(
        vertices,
        &mut visited,
        &mut on_stack,
        &mut stack,
        &mut order,
    );

    bufs.recycle_bool(visited);
    bufs.recycle_bool(on_stack);
    bufs.recycle_int(stack);

    match result {
        Ok(()) => {
            order.reverse();
            crate::debug_invariants!(
                crate::algs::verify::validate_order(vertices, &order),
                "dfs order"
            );
            Ok(order)
        }
        Err(e) => {
            bufs.recycle_int(order);
            Err(e)
        }
    }
}

fn postorder<V: IndexedVertex>(
    vertices: &[V],
    visited: &mut [bool],
    on_stack: &mut [bool],
    stack: &mut Vec<usize>,
    order: &mut Vec<usize>,
) -> Result<(), SortError> {
    let n = vertices.len();
    for root in 0..n {
        if visited[root] {
            continue;
        }
        stack.push(root);

        while let Some(&u) = stack.last() {
            if !visited[u] {
                visited[u] = true;
                on_stack[u] = true;
                for &w in vertices[u].successors() {
                    if w >= n {
                        continue;
                    }
                    if on_stack[w] {
                        log::debug!("dfs: back edge {u} -> {w}");
                        return Err(SortError::CycleDetected);
                    }
                    if !visited[w] {
                        stack.push(w);
                    }
                }
            } else {
                stack.pop();
                if on_stack[u] {
                    on_stack[u] = false;
                    order.push(u);
                }
            }
        }
    }
    Ok(())
}
