#![cfg_attr(docsrs, feature(doc_cfg))]
//! # dag-order
//!
//! dag-order linearizes directed dependency graphs: it produces a sequence in
//! which every vertex precedes its successors, or reports that no such
//! sequence exists. It is meant to be embedded in build systems, package
//! installers and task schedulers that need a validated execution order.
//!
//! ## Features
//! - Two in-place sorters over index-addressed vertices: breadth-first
//!   ([`bfs`], Kahn's algorithm) and iterative depth-first ([`dfs`], reverse
//!   postorder). Both reorder the caller's slice with cycle-following swaps
//!   and leave it untouched on failure.
//! - A validator for key-addressed graphs ([`sort_keyed`]) that reports every
//!   cycle it finds and flags graphs with more than one root component.
//! - Pluggable scratch memory ([`ScratchBuffers`], [`BufferPool`]) for callers
//!   that sort often.
//!
//! ## Edge contract
//! An edge `u -> v`, meaning `v` appears in `u`'s successor list, requires `u`
//! to come strictly before `v`. Self-loops and parallel edges are legal input;
//! a self-loop is a cycle of length one.
//!
//! ```
//! use dag_order::{Node, bfs};
//!
//! // 0 must follow 1, 1 must follow 2.
//! let mut vs = vec![
//!     Node::new('a', vec![]),
//!     Node::new('b', vec![0]),
//!     Node::new('c', vec![1]),
//! ];
//! bfs(&mut vs).unwrap();
//! let labels: String = vs.iter().map(|n| n.label).collect();
//! assert_eq!(labels, "cba");
//! ```
//!
//! ## Determinism
//! The index sorters are fully deterministic. The keyed validator visits keys
//! in the map's enumeration order; use a `BTreeMap` for reproducible output
//! among independent branches.

pub mod algs;
pub mod bounds;
pub mod buffers;
pub mod debug_invariants;
pub mod options;
pub mod sort_error;
pub mod vertex;
pub mod vertex_map;

pub use algs::{bfs, bfs_with, dfs, dfs_with, sort_indexed, sort_keyed};
pub use buffers::{BufferPool, FreshBuffers, ScratchBuffers};
pub use options::{SortOptions, Strategy};
pub use sort_error::{AggregateError, GraphError, SortError};
pub use vertex::{IndexedVertex, KeyedNode, KeyedVertex, Node, keyed_graph_from_edges};
pub use vertex_map::VertexMap;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::algs::{
        bfs, bfs_order, bfs_with, dfs, dfs_order, dfs_with, sort_indexed, sort_keyed,
        sort_order, validate_order,
    };
    pub use crate::bounds::KeyLike;
    pub use crate::buffers::{BufferPool, FreshBuffers, ScratchBuffers};
    pub use crate::options::{SortOptions, Strategy};
    pub use crate::sort_error::{AggregateError, GraphError, SortError};
    pub use crate::vertex::{IndexedVertex, KeyedNode, KeyedVertex, Node};
    pub use crate::vertex_map::VertexMap;
}
