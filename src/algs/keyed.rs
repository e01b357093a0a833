//! Keyed graph validation: ordering, cycle capture and root detection.
//!
//! [`sort_keyed`] runs in two phases over a [`VertexMap`]:
//!
//! 1. [`traverse_keyed`] performs an explicit-stack DFS from every unvisited
//!    key, in the map's enumeration order. The active frame stack is the
//!    ancestor chain. A successor already on the chain closes a cycle, which
//!    is recorded as `[succ, .., current, succ]` and whose keys are all marked
//!    cyclic; the traversal then carries on, so every cycle is reported in one
//!    pass. Finished vertices form a postorder, reversed into the candidate
//!    order.
//! 2. The candidate order is walked, skipping cyclic keys. For each remaining
//!    key the number of successor edges reachable from it is measured; a key
//!    whose count is strictly greater than that of the preceding non-cyclic key
//!    starts a new root component.
//!
//! The root rule is a heuristic: it follows reachable edge counts, not weak
//! connectivity, and among independent branches its result depends on the
//! map's enumeration order.
//!
//! Successor keys that are not stored in the map are treated as vertices
//! without successors and appear in the order.

use crate::bounds::KeyLike;
use crate::sort_error::{AggregateError, GraphError};
use crate::vertex_map::VertexMap;
use hashbrown::{HashMap as FastMap, HashSet as FastSet};

/// Output of the first validation phase.
#[derive(Clone, Debug)]
pub struct KeyedTraversal<K> {
    /// Candidate order (reverse postorder). Positions of cyclic keys carry no
    /// meaning.
    pub order: Vec<K>,
    /// Keys on at least one recorded cycle.
    pub cyclic: FastSet<K>,
    /// Recorded cycles, each closed by its repeated first key.
    pub cycles: Vec<Vec<K>>,
}

impl<K: KeyLike> KeyedTraversal<K> {
    /// `true` if no cycle was recorded.
    pub fn is_acyclic(&self) -> bool {
        self.cycles.is_empty()
    }

    /// `true` if `key` lies on a recorded cycle.
    pub fn is_cyclic(&self, key: &K) -> bool {
        self.cyclic.contains(key)
    }
}

/// Topologically sort a keyed graph and validate its shape.
///
/// Returns the keys ordered so that every vertex precedes its successors.
///
/// # Errors
/// An [`AggregateError`] holding one [`GraphError::CycleDetected`] per
/// recorded cycle, followed by a [`GraphError::MultipleRoots`] if more than
/// one root component was found.
///
/// ```
/// use dag_order::{keyed_graph_from_edges, sort_keyed};
///
/// let g = keyed_graph_from_edges([("Jonas", "Sophie"), ("Sophie", "Nick"), ("Nick", "Barbara")]);
/// assert_eq!(sort_keyed(&g).unwrap(), ["Jonas", "Sophie", "Nick", "Barbara"]);
///
/// let g = keyed_graph_from_edges([("Jonas", "Jonas")]);
/// assert_eq!(sort_keyed(&g).unwrap_err().to_string(), r#"cyclic: ["Jonas", "Jonas"]"#);
/// ```
pub fn sort_keyed<M: VertexMap>(graph: &M) -> Result<Vec<M::Key>, AggregateError<M::Key>> {
    let traversal = traverse_keyed(graph);
    let roots = find_roots(graph, &traversal);

    let KeyedTraversal { order, cycles, .. } = traversal;
    let mut errors: Vec<_> = cycles
        .into_iter()
        .map(|cycle| GraphError::CycleDetected { cycle })
        .collect();
    if roots.len() > 1 {
        log::debug!("keyed: {} root components: {roots:?}", roots.len());
        errors.push(GraphError::MultipleRoots { roots });
    }

    if errors.is_empty() {
        Ok(order)
    } else {
        Err(AggregateError::new(errors))
    }
}

/// Phase one of [`sort_keyed`]: candidate order plus every recorded cycle.
pub fn traverse_keyed<M: VertexMap>(graph: &M) -> KeyedTraversal<M::Key> {
    let n = graph.vertex_count();
    log::trace!("keyed: traversing {n} vertices");

    let mut visited: FastSet<&M::Key> = FastSet::with_capacity(n);
    // key -> index of its frame in `chain`
    let mut on_chain: FastMap<&M::Key, usize> = FastMap::new();
    // (key, next successor to inspect)
    let mut chain: Vec<(&M::Key, usize)> = Vec::new();

    let mut postorder = Vec::with_capacity(n);
    let mut cyclic = FastSet::new();
    let mut cycles = Vec::new();

    for start in graph.vertex_keys() {
        if !visited.insert(start) {
            continue;
        }
        on_chain.insert(start, 0);
        chain.push((start, 0));

        while let Some(frame) = chain.last_mut() {
            let key = frame.0;
            match graph.successors_of(key).get(frame.1) {
                Some(succ) => {
                    frame.1 += 1;
                    if let Some(&at) = on_chain.get(succ) {
                        let mut cycle: Vec<M::Key> =
                            chain[at..].iter().map(|&(k, _)| k.clone()).collect();
                        cyclic.extend(cycle.iter().cloned());
                        cycle.push(succ.clone());
                        log::debug!("keyed: cycle {cycle:?}");
                        cycles.push(cycle);
                    } else if visited.insert(succ) {
                        on_chain.insert(succ, chain.len());
                        chain.push((succ, 0));
                    }
                }
                None => {
                    crate::debug_invariants!(check_identity(graph, key), "keyed vertex");
                    chain.pop();
                    on_chain.remove(key);
                    postorder.push(key.clone());
                }
            }
        }
    }

    postorder.reverse();
    KeyedTraversal {
        order: postorder,
        cyclic,
        cycles,
    }
}

fn find_roots<M: VertexMap>(graph: &M, traversal: &KeyedTraversal<M::Key>) -> Vec<M::Key> {
    let mut memo: FastMap<M::Key, u64> = FastMap::new();
    let mut roots = Vec::new();
    let mut previous = 0u64;
    for key in &traversal.order {
        if traversal.is_cyclic(key) {
            continue;
        }
        let reach = reachable_edges(graph, key, &traversal.cyclic, &mut memo);
        if reach > previous {
            roots.push(key.clone());
        }
        previous = reach;
    }
    roots
}

/// Number of successor edges reachable from `root`, counted along every path.
///
/// Cyclic successors contribute their incoming edge but are not expanded.
/// Every cycle holds at least one cyclic key, so the counted subgraph is
/// acyclic and the count is finite. Results are memoised per key.
fn reachable_edges<M: VertexMap>(
    graph: &M,
    root: &M::Key,
    cyclic: &FastSet<M::Key>,
    memo: &mut FastMap<M::Key, u64>,
) -> u64 {
    if let Some(&count) = memo.get(root) {
        return count;
    }

    let mut on_path: FastSet<&M::Key> = FastSet::new();
    // (key, next successor to inspect, edges counted so far)
    let mut stack: Vec<(&M::Key, usize, u64)> = vec![(root, 0, 0)];
    on_path.insert(root);

    while let Some(top) = stack.last_mut() {
        let key = top.0;
        let Some(succ) = graph.successors_of(key).get(top.1) else {
            let Some((done, _, total)) = stack.pop() else {
                break;
            };
            on_path.remove(done);
            memo.insert(done.clone(), total);
            if let Some(parent) = stack.last_mut() {
                parent.2 = parent.2.saturating_add(1).saturating_add(total);
            }
            continue;
        };
        top.1 += 1;

        if cyclic.contains(succ) || on_path.contains(succ) {
            top.2 = top.2.saturating_add(1);
        } else if let Some(&count) = memo.get(succ) {
            top.2 = top.2.saturating_add(1).saturating_add(count);
        } else {
            on_path.insert(succ);
            stack.push((succ, 0, 0));
        }
    }

    memo.get(root).copied().unwrap_or(0)
}

#[cfg_attr(not(any(debug_assertions, feature = "check-invariants")), allow(dead_code))]
fn check_identity<M: VertexMap>(graph: &M, key: &M::Key) -> Result<(), String> {
    use crate::vertex::KeyedVertex;
    match graph.vertex(key) {
        Some(v) if v.id() != key => Err(format!(
            "vertex stored under {key:?} reports id {:?}",
            v.id()
        )),
        _ => Ok(()),
    }
}
