//! Container abstraction for keyed graphs.
//!
//! The keyed validator never mutates its input; it only needs to enumerate
//! keys and look vertices up. Enumeration order is the container's own, so
//! results among truly independent branches follow it: deterministic for
//! [`BTreeMap`], implementation defined for hash maps.

use crate::bounds::KeyLike;
use crate::vertex::KeyedVertex;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// A read-only mapping from key to keyed vertex.
pub trait VertexMap {
    /// Vertex identity.
    type Key: KeyLike;
    /// Vertex payload.
    type Vertex: KeyedVertex<Self::Key>;

    /// Number of vertices stored in the map.
    fn vertex_count(&self) -> usize;

    /// Every stored key, in the container's enumeration order.
    fn vertex_keys(&self) -> impl Iterator<Item = &Self::Key>;

    /// Look up the vertex stored under `key`.
    fn vertex(&self, key: &Self::Key) -> Option<&Self::Vertex>;

    /// Successors of `key`; empty for keys that are not stored.
    fn successors_of(&self, key: &Self::Key) -> &[Self::Key] {
        match self.vertex(key) {
            Some(v) => v.successors(),
            None => &[],
        }
    }
}

impl<K, V, S> VertexMap for HashMap<K, V, S>
where
    K: KeyLike,
    V: KeyedVertex<K>,
    S: BuildHasher,
{
    type Key = K;
    type Vertex = V;

    fn vertex_count(&self) -> usize {
        self.len()
    }

    fn vertex_keys(&self) -> impl Iterator<Item = &K> {
        self.keys()
    }

    fn vertex(&self, key: &K) -> Option<&V> {
        self.get(key)
    }
}

impl<K, V, S> VertexMap for hashbrown::HashMap<K, V, S>
where
    K: KeyLike,
    V: KeyedVertex<K>,
    S: BuildHasher,
{
    type Key = K;
    type Vertex = V;

    fn vertex_count(&self) -> usize {
        self.len()
    }

    fn vertex_keys(&self) -> impl Iterator<Item = &K> {
        self.keys()
    }

    fn vertex(&self, key: &K) -> Option<&V> {
        self.get(key)
    }
}

impl<K, V> VertexMap for BTreeMap<K, V>
where
    K: KeyLike + Ord,
    V: KeyedVertex<K>,
{
    type Key = K;
    type Vertex = V;

    fn vertex_count(&self) -> usize {
        self.len()
    }

    fn vertex_keys(&self) -> impl Iterator<Item = &K> {
        self.keys()
    }

    fn vertex(&self, key: &K) -> Option<&V> {
        self.get(key)
    }
}

impl<M: VertexMap + ?Sized> VertexMap for &M {
    type Key = M::Key;
    type Vertex = M::Vertex;

    fn vertex_count(&self) -> usize {
        (**self).vertex_count()
    }

    fn vertex_keys(&self) -> impl Iterator<Item = &Self::Key> {
        (**self).vertex_keys()
    }

    fn vertex(&self, key: &Self::Key) -> Option<&Self::Vertex> {
        (**self).vertex(key)
    }
}
