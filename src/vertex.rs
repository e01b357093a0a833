//! Vertex abstractions for the two addressing schemes.
//!
//! An edge `u -> v` (that is, `v` listed in `u.successors()`) always means `u`
//! must appear strictly before `v` in the output order. Self-loops and
//! parallel edges are legal input.

use crate::bounds::KeyLike;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A vertex addressed by its position in the caller's slice.
///
/// Successors are positions in the same slice as it was passed to the sorter.
/// Out-of-range positions are ignored.
pub trait IndexedVertex {
    /// Positions of the vertices that must come after this one.
    fn successors(&self) -> &[usize];
}

/// A vertex addressed by an opaque key.
pub trait KeyedVertex<K> {
    /// Identity of this vertex; expected to equal its key in the graph map.
    fn id(&self) -> &K;
    /// Keys of the vertices that must come after this one.
    fn successors(&self) -> &[K];
}

impl IndexedVertex for Vec<usize> {
    fn successors(&self) -> &[usize] {
        self
    }
}

impl<const N: usize> IndexedVertex for [usize; N] {
    fn successors(&self) -> &[usize] {
        self
    }
}

impl<T: IndexedVertex + ?Sized> IndexedVertex for &T {
    fn successors(&self) -> &[usize] {
        (**self).successors()
    }
}

/// Plain index-addressed vertex with an attached label.
///
/// The label travels with the vertex while the slice is permuted, which is
/// how callers find out where each original vertex ended up.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node<L = usize> {
    /// Caller data carried through the sort.
    pub label: L,
    /// Positions of the successor vertices.
    #[serde(default)]
    pub successors: Vec<usize>,
}

impl<L> Node<L> {
    /// Create a node with the given label and successor positions.
    pub fn new(label: L, successors: impl Into<Vec<usize>>) -> Self {
        Self {
            label,
            successors: successors.into(),
        }
    }
}

impl<L> IndexedVertex for Node<L> {
    fn successors(&self) -> &[usize] {
        &self.successors
    }
}

/// Plain key-addressed vertex.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyedNode<K> {
    /// Identity of the vertex.
    pub id: K,
    /// Keys that must come after this vertex.
    #[serde(default)]
    pub successors: Vec<K>,
}

impl<K> KeyedNode<K> {
    /// A vertex with no successors.
    pub fn new(id: K) -> Self {
        Self {
            id,
            successors: Vec::new(),
        }
    }

    /// A vertex with the given successors.
    pub fn with_successors(id: K, successors: impl Into<Vec<K>>) -> Self {
        Self {
            id,
            successors: successors.into(),
        }
    }
}

impl<K> KeyedVertex<K> for KeyedNode<K> {
    fn id(&self) -> &K {
        &self.id
    }

    fn successors(&self) -> &[K] {
        &self.successors
    }
}

impl<K, V: KeyedVertex<K> + ?Sized> KeyedVertex<K> for &V {
    fn id(&self) -> &K {
        (**self).id()
    }

    fn successors(&self) -> &[K] {
        (**self).successors()
    }
}

/// Build a keyed graph from `(before, after)` pairs.
///
/// Both endpoints are created on first sight. Parallel edges are kept, and
/// successor lists preserve the order in which pairs were supplied.
pub fn keyed_graph_from_edges<K, I>(edges: I) -> HashMap<K, KeyedNode<K>>
where
    K: KeyLike,
    I: IntoIterator<Item = (K, K)>,
{
    let mut graph: HashMap<K, KeyedNode<K>> = HashMap::new();
    for (before, after) in edges {
        graph
            .entry(after.clone())
            .or_insert_with(|| KeyedNode::new(after.clone()));
        graph
            .entry(before.clone())
            .or_insert_with(|| KeyedNode::new(before))
            .successors
            .push(after);
    }
    graph
}
