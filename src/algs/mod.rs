//! Sorting and validation algorithms.

pub mod dfs;
pub mod kahn;
pub mod keyed;
pub mod permutation;
pub mod verify;

pub use dfs::{dfs, dfs_order, dfs_with};
pub use kahn::{bfs, bfs_order, bfs_with};
pub use keyed::{KeyedTraversal, sort_keyed, traverse_keyed};
pub use permutation::{apply_permutation, order_to_positions, try_apply_permutation};
pub use verify::{is_topological, validate_keyed_order, validate_order};

use crate::options::{SortOptions, Strategy};
use crate::sort_error::SortError;
use crate::vertex::IndexedVertex;

/// Sort `vertices` in place with the sorter selected by `opts`.
pub fn sort_indexed<V: IndexedVertex>(
    vertices: &mut [V],
    opts: &SortOptions<'_>,
) -> Result<(), SortError> {
    match opts.strategy() {
        Strategy::Bfs => bfs_with(vertices, opts),
        Strategy::Dfs => dfs_with(vertices, opts),
    }
}

/// Compute the order the sorter selected by `opts` would apply.
pub fn sort_order<V: IndexedVertex>(
    vertices: &[V],
    opts: &SortOptions<'_>,
) -> Result<Vec<usize>, SortError> {
    match opts.strategy() {
        Strategy::Bfs => bfs_order(vertices, opts),
        Strategy::Dfs => dfs_order(vertices, opts),
    }
}
