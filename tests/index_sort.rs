use dag_order::algs::{bfs_order, dfs_order, is_topological, sort_order};
use dag_order::{BufferPool, Node, SortError, SortOptions, Strategy, bfs, dfs, sort_indexed};

/// Build labelled nodes: node `i` carries label `i`.
fn nodes(succ: &[&[usize]]) -> Vec<Node> {
    succ.iter()
        .enumerate()
        .map(|(i, s)| Node::new(i, s.to_vec()))
        .collect()
}

fn labels(vs: &[Node]) -> String {
    vs.iter()
        .map(|n| n.label.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

struct Case {
    succ: &'static [&'static [usize]],
    bfs: &'static str,
    dfs: &'static str,
}

const ACYCLIC: &[Case] = &[
    //    5        4
    //   / \      / \
    //  2   0    0   1
    //   \
    //    3
    //     \
    //      1
    Case {
        succ: &[&[], &[], &[3], &[1], &[0, 1], &[0, 2]],
        bfs: "4,5,0,2,3,1",
        dfs: "5,4,2,3,1,0",
    },
    //    6
    //   / \
    //  3   4
    //   \   \
    //    2   5
    //     \
    //      1
    //       \
    //        0
    Case {
        succ: &[&[], &[0], &[1], &[2], &[5], &[], &[3, 4]],
        bfs: "6,3,4,2,5,1,0",
        dfs: "6,4,5,3,2,1,0",
    },
    //  6       7
    //  |      / \
    //  3     4   5
    //  |    / \
    //  1   2   0
    //  |
    //  0
    Case {
        succ: &[&[], &[0], &[], &[1], &[2, 0], &[], &[3], &[4, 5]],
        bfs: "6,7,3,4,5,1,2,0",
        dfs: "7,6,5,4,3,2,1,0",
    },
    //      7
    //     / \
    //    3   5
    //   / \   \
    //  1   2   6
    //   \      |
    //    0     4
    Case {
        succ: &[&[], &[0], &[], &[1, 2], &[], &[6], &[4], &[3, 5]],
        bfs: "7,3,5,1,2,6,0,4",
        dfs: "7,5,6,4,3,2,1,0",
    },
    //    10
    //   /  \
    //  8    9
    //  |   / \
    //  5  6   7
    //  | / \
    //  3    4
    //  |    |
    //  1    2
    //  |
    //  0
    Case {
        succ: &[
            &[],
            &[0],
            &[],
            &[1],
            &[2],
            &[3],
            &[3, 4],
            &[],
            &[5],
            &[6, 7],
            &[8, 9],
        ],
        bfs: "10,8,9,5,6,7,3,4,1,2,0",
        dfs: "10,9,8,7,6,5,4,3,2,1,0",
    },
    //        9
    //       /
    //      8
    //     /
    //    5       7
    //   / \     / \
    //  1   3   0   2
    //   \ /    |
    //    4     6
    Case {
        succ: &[&[6], &[4], &[], &[4], &[], &[1, 3], &[], &[0, 2], &[5], &[8]],
        bfs: "7,9,0,2,8,6,5,1,3,4",
        dfs: "9,8,7,5,3,2,1,4,0,6",
    },
    //    8
    //   / \
    //  4   6
    //   \   \
    //    3   7
    //   / \
    //  1   2
    //   \
    //    0
    //    |
    //    5
    Case {
        succ: &[&[5], &[0], &[], &[1, 2], &[3], &[], &[7], &[], &[4, 6]],
        bfs: "8,4,6,3,7,1,2,0,5",
        dfs: "8,6,7,4,3,2,1,0,5",
    },
];

const CYCLIC: &[&[&[usize]]] = &[
    //  5 → 3 → 1
    //  ↑    ↓   |
    //  4    2 ←─+
    //  ↓
    //  0
    &[&[4], &[2], &[3], &[1], &[5], &[3]],
    //  7 → 4 → 6
    //  ↑    ↓   |
    //  5 ←  3 ← +
    //  ↓
    //  2 → 1 → 0
    //      ↑   ↓
    //      + → 8
    &[&[8], &[0], &[1], &[6], &[3], &[2, 7], &[3], &[4], &[1]],
];

#[test]
fn bfs_produces_canonical_kahn_order() {
    for case in ACYCLIC {
        let mut vs = nodes(case.succ);
        bfs(&mut vs).unwrap();
        assert_eq!(labels(&vs), case.bfs);
    }
}

#[test]
fn dfs_produces_reverse_postorder() {
    for case in ACYCLIC {
        let mut vs = nodes(case.succ);
        dfs(&mut vs).unwrap();
        assert_eq!(labels(&vs), case.dfs);
    }
}

#[test]
fn both_orders_satisfy_every_edge() {
    let opts = SortOptions::default();
    for case in ACYCLIC {
        let vs = nodes(case.succ);
        let b = bfs_order(&vs, &opts).unwrap();
        let d = dfs_order(&vs, &opts).unwrap();
        assert!(is_topological(&vs, &b), "bfs order {b:?}");
        assert!(is_topological(&vs, &d), "dfs order {d:?}");
    }
}

#[test]
fn computed_order_matches_applied_order() {
    for strategy in [Strategy::Bfs, Strategy::Dfs] {
        let opts = SortOptions::new().with_strategy(strategy);
        for case in ACYCLIC {
            let mut vs = nodes(case.succ);
            let order = sort_order(&vs, &opts).unwrap();
            sort_indexed(&mut vs, &opts).unwrap();
            let applied: Vec<usize> = vs.iter().map(|n| n.label).collect();
            assert_eq!(applied, order, "{strategy:?}");
        }
    }
}

#[test]
fn cycles_fail_and_leave_input_unchanged() {
    for succ in CYCLIC {
        for sorter in [bfs::<Node>, dfs::<Node>] {
            let mut vs = nodes(succ);
            let before = vs.clone();
            assert_eq!(sorter(&mut vs), Err(SortError::CycleDetected));
            assert_eq!(vs, before);
        }
    }
}

#[test]
fn self_loop_is_detected_by_both_sorters() {
    let succ: &[&[usize]] = &[&[], &[1], &[0]];
    let mut vs = nodes(succ);
    assert_eq!(bfs(&mut vs), Err(SortError::CycleDetected));
    assert_eq!(dfs(&mut vs), Err(SortError::CycleDetected));
    assert_eq!(labels(&vs), "0,1,2");
}

#[test]
fn trivial_slices_succeed_without_changes() {
    let mut empty: Vec<Node> = Vec::new();
    assert!(bfs(&mut empty).is_ok());
    assert!(dfs(&mut empty).is_ok());

    // A lone self-loop never needs reordering, so it is not inspected.
    let mut single = vec![Node::new(0, vec![0])];
    assert!(bfs(&mut single).is_ok());
    assert!(dfs(&mut single).is_ok());
    assert_eq!(single, vec![Node::new(0, vec![0])]);
}

#[test]
fn sorting_sorted_input_keeps_edge_contract() {
    let opts = SortOptions::default();
    for case in ACYCLIC {
        let vs = nodes(case.succ);
        let first = bfs_order(&vs, &opts).unwrap();
        // Relabel the graph in sorted order so positions equal the new ids.
        let mut new_id = vec![0; vs.len()];
        for (k, &v) in first.iter().enumerate() {
            new_id[v] = k;
        }
        let sorted: Vec<Vec<usize>> = first
            .iter()
            .map(|&v| vs[v].successors.iter().map(|&w| new_id[w]).collect())
            .collect();
        for order in [
            bfs_order(&sorted, &opts).unwrap(),
            dfs_order(&sorted, &opts).unwrap(),
        ] {
            assert!(is_topological(&sorted, &order));
        }
        assert_eq!(
            bfs_order(&sorted, &opts).unwrap(),
            (0..vs.len()).collect::<Vec<_>>()
        );
    }
}

#[test]
fn pooled_buffers_give_same_results() {
    let pool = BufferPool::new();
    for strategy in [Strategy::Bfs, Strategy::Dfs] {
        let opts = SortOptions::new()
            .with_buffers(&pool)
            .with_strategy(strategy);
        for case in ACYCLIC {
            let mut vs = nodes(case.succ);
            sort_indexed(&mut vs, &opts).unwrap();
            let expected = match strategy {
                Strategy::Bfs => case.bfs,
                Strategy::Dfs => case.dfs,
            };
            assert_eq!(labels(&vs), expected);
        }
    }
    let (ints, bools) = pool.idle();
    assert!(ints > 0 && bools > 0);
}

#[test]
fn sorts_slices_of_references() {
    let owned = nodes(&[&[], &[0]]);
    let mut refs: Vec<&Node> = owned.iter().collect();
    bfs(&mut refs).unwrap();
    assert_eq!(refs[0].label, 1);
    assert_eq!(refs[1].label, 0);
}
