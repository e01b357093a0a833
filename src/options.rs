//! Configuration for the index-addressed sorters.

use crate::buffers::{FreshBuffers, ScratchBuffers};
use std::fmt;

/// Which index-addressed sorter [`sort_indexed`](crate::algs::sort_indexed) runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Kahn's algorithm; ties broken by original input order.
    #[default]
    Bfs,
    /// Iterative depth-first reverse postorder.
    Dfs,
}

/// Options shared by every index-addressed entry point.
///
/// ```
/// use dag_order::{BufferPool, SortOptions, Strategy};
///
/// let pool = BufferPool::new();
/// let opts = SortOptions::new()
///     .with_buffers(&pool)
///     .with_strategy(Strategy::Dfs);
/// assert_eq!(opts.strategy(), Strategy::Dfs);
/// ```
#[derive(Clone, Copy, Default)]
pub struct SortOptions<'a> {
    buffers: Option<&'a dyn ScratchBuffers>,
    strategy: Strategy,
}

impl<'a> SortOptions<'a> {
    /// Fresh buffers and [`Strategy::Bfs`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw scratch memory from `buffers` instead of allocating.
    pub fn with_buffers(mut self, buffers: &'a dyn ScratchBuffers) -> Self {
        self.buffers = Some(buffers);
        self
    }

    /// Select the sorter used by [`sort_indexed`](crate::algs::sort_indexed).
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// The configured strategy.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// The configured provider, or [`FreshBuffers`].
    pub fn buffers(&self) -> &'a dyn ScratchBuffers {
        self.buffers.unwrap_or(&FreshBuffers)
    }
}

impl fmt::Debug for SortOptions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortOptions")
            .field("custom_buffers", &self.buffers.is_some())
            .field("strategy", &self.strategy)
            .finish()
    }
}
