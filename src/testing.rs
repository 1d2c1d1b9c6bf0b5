//! Slow reference implementations used to cross-check the algorithms in tests.

use itertools::Itertools;
use num::BigUint;

use crate::prelude::*;

/// Counts spanning trees by testing every `(n-1)`-subset of the canonical edge list
/// for acyclicity with a union-find.
pub(crate) fn brute_force_spanning_trees(graph: &MultiGraph) -> BigUint {
    let n = graph.len();
    if n == 0 {
        return BigUint::default();
    }

    let count = graph
        .edges()
        .iter()
        .combinations(n - 1)
        .filter(|subset| {
            let mut parent = (0..n).collect_vec();
            subset.iter().all(|&&Edge(u, v)| {
                let (ru, rv) = (find(&mut parent, u as usize), find(&mut parent, v as usize));
                parent[ru] = rv;
                ru != rv
            })
        })
        .count();

    BigUint::from(count)
}

fn find(parent: &mut [usize], mut u: usize) -> usize {
    while parent[u] != u {
        parent[u] = parent[parent[u]];
        u = parent[u];
    }
    u
}

/// Decides whether the edges can be partitioned into Δ matchings by computing the
/// chromatic index with a dynamic program over edge subsets.
/// ** Panics if the graph has more than 16 edges **
pub(crate) fn brute_force_class_one(graph: &MultiGraph) -> bool {
    let edges = graph.edges();
    let m = edges.len();
    assert!(m <= 16, "too many edges for brute force");

    let full = (1usize << m) - 1;
    let is_matching = |mask: usize| {
        (0..m)
            .filter(|&i| mask & (1 << i) != 0)
            .tuple_combinations()
            .all(|(i, j)| !edges[i].shares_endpoint_with(&edges[j]))
    };

    // min_colors[mask] = fewest matchings covering exactly the edges of `mask`
    let mut min_colors = vec![usize::MAX; full + 1];
    min_colors[0] = 0;
    for mask in 1..=full {
        let lowest = mask & mask.wrapping_neg();
        let mut sub = mask;
        while sub > 0 {
            if sub & lowest != 0 && is_matching(sub) && min_colors[mask ^ sub] != usize::MAX {
                min_colors[mask] = min_colors[mask].min(min_colors[mask ^ sub] + 1);
            }
            sub = (sub - 1) & mask;
        }
    }

    min_colors[full] <= graph.max_degree() as usize
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::gens::*;

    #[test]
    fn brute_force_references() {
        assert_eq!(brute_force_spanning_trees(&MultiGraph::complete(4)), BigUint::from(16u32));
        assert_eq!(brute_force_spanning_trees(&MultiGraph::cycle(5)), BigUint::from(5u32));
        assert_eq!(brute_force_spanning_trees(&MultiGraph::new(3)), BigUint::from(0u32));
        assert_eq!(brute_force_spanning_trees(&MultiGraph::new(1)), BigUint::from(1u32));

        assert!(brute_force_class_one(&MultiGraph::complete(4)));
        assert!(!brute_force_class_one(&MultiGraph::complete(3)));
        assert!(brute_force_class_one(&MultiGraph::star(5)));
        assert!(brute_force_class_one(&MultiGraph::new(2)));
    }
}
