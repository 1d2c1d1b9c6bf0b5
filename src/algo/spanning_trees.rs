/*!
# Spanning Tree Counting

Counts the spanning trees of a multigraph exactly and returns one witness tree.

Connected graphs are first checked against two closed forms: a graph with `n - 1` edges is
its own unique spanning tree, and the complete graph `K_n` has `n^(n-2)` spanning trees
(Cayley's formula). Everything else is handled by the deletion-contraction recurrence
```text
T(G) = T(G - e) + T(G / e)
```
for an edge `e` that is neither a loop nor a cut edge. If every non-loop edge is a cut edge,
contracting one of them does not change the count, so we recurse on the contraction alone.

The recursion is exponential in the worst case and meant for small graphs only. Counts are
arbitrary precision, so they never overflow.
*/

use fxhash::FxHashMap;
use num::{BigUint, One, Zero};

use super::*;

/// Number of spanning trees of a graph together with one of them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningTreeCensus {
    /// Exact number of distinct spanning trees; parallel edges yield distinct trees
    pub count: BigUint,
    /// A spanning tree on the same node labels, or [`MultiGraph::empty`] if `count == 0`
    pub witness: MultiGraph,
}

/// Configurable spanning tree counter.
///
/// # Example
/// ```
/// use mgraphs::{prelude::*, algo::*};
///
/// let cycle = MultiGraph::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]);
/// let census = SpanningTreeCounter::new().memoize(true).census(&cycle);
///
/// assert_eq!(census.count.to_string(), "4");
/// assert_eq!(census.witness.number_of_edges(), 3);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SpanningTreeCounter {
    use_shortcuts: bool,
    memoize: bool,
}

impl Default for SpanningTreeCounter {
    fn default() -> Self {
        Self {
            use_shortcuts: true,
            memoize: false,
        }
    }
}

impl SpanningTreeCounter {
    /// Creates a counter with closed-form shortcuts enabled and memoization disabled
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables the closed forms for trees and complete graphs
    pub fn set_use_shortcuts(&mut self, use_shortcuts: bool) {
        self.use_shortcuts = use_shortcuts;
    }

    /// Enables or disables the closed forms for trees and complete graphs
    pub fn use_shortcuts(mut self, use_shortcuts: bool) -> Self {
        self.set_use_shortcuts(use_shortcuts);
        self
    }

    /// Enables or disables caching of intermediate counts during the recursion.
    ///
    /// Subgraphs are keyed by their multiplicity matrix. This pays off for graphs with many
    /// parallel edges, where different contraction orders lead to identical subgraphs.
    pub fn set_memoize(&mut self, memoize: bool) {
        self.memoize = memoize;
    }

    /// Enables or disables caching of intermediate counts during the recursion.
    pub fn memoize(mut self, memoize: bool) -> Self {
        self.set_memoize(memoize);
        self
    }

    /// Counts the spanning trees of `graph` and extracts a witness
    pub fn census(&self, graph: &MultiGraph) -> SpanningTreeCensus {
        let census = match self.closed_form(graph) {
            Some(census) => census,
            None => SpanningTreeCensus {
                count: self.count_by_recurrence(graph),
                witness: graph.spanning_tree(),
            },
        };

        debug_assert_eq!(census.count.is_zero(), census.witness.is_empty());
        debug!(
            "{} spanning trees on {} nodes and {} edges",
            census.count,
            graph.number_of_nodes(),
            graph.number_of_edges()
        );

        census
    }

    /// Counts the spanning trees of `graph` without extracting a witness
    pub fn count(&self, graph: &MultiGraph) -> BigUint {
        match self.closed_form(graph) {
            Some(census) => census.count,
            None => self.count_by_recurrence(graph),
        }
    }

    /// Answers disconnected graphs, and trees and complete graphs if shortcuts are enabled
    fn closed_form(&self, graph: &MultiGraph) -> Option<SpanningTreeCensus> {
        let n = graph.number_of_nodes();

        if !graph.is_connected() {
            debug!("graph is disconnected");
            return Some(SpanningTreeCensus {
                count: BigUint::zero(),
                witness: MultiGraph::empty(),
            });
        }

        if !self.use_shortcuts {
            return None;
        }

        if graph.number_of_edges() == n - 1 {
            debug!("graph is a tree");
            return Some(SpanningTreeCensus {
                count: BigUint::one(),
                witness: graph.clone(),
            });
        }

        if graph.is_complete() {
            debug!("graph is complete, applying Cayley's formula");
            return Some(SpanningTreeCensus {
                count: cayley(n),
                witness: graph.spanning_tree(),
            });
        }

        None
    }

    fn count_by_recurrence(&self, graph: &MultiGraph) -> BigUint {
        let mut recurrence = DeletionContraction::new(self.memoize);
        let count = recurrence.count(graph);
        debug!(
            "deletion-contraction finished after {} calls ({} cache hits)",
            recurrence.calls, recurrence.cache_hits
        );
        count
    }
}

/// Number of labelled trees on `n` nodes
fn cayley(n: NumNodes) -> BigUint {
    if n < 2 {
        return BigUint::one();
    }
    BigUint::from(n).pow(n - 2)
}

/// State of one deletion-contraction run
struct DeletionContraction {
    cache: Option<FxHashMap<MultiGraph, BigUint>>,
    calls: u64,
    cache_hits: u64,
}

impl DeletionContraction {
    fn new(memoize: bool) -> Self {
        Self {
            cache: memoize.then(FxHashMap::default),
            calls: 0,
            cache_hits: 0,
        }
    }

    /// Counts the spanning trees of a connected graph
    fn count(&mut self, graph: &MultiGraph) -> BigUint {
        self.calls += 1;

        // remaining edges are loops which never end up in a spanning tree
        if graph.number_of_nodes() == 1 {
            return BigUint::one();
        }

        let non_loop_edges = graph.non_loop_edges().dedup().collect_vec();
        if non_loop_edges.is_empty() {
            return BigUint::one();
        }

        if let Some(count) = self.cache.as_ref().and_then(|cache| cache.get(graph)) {
            self.cache_hits += 1;
            return count.clone();
        }

        // parallel copies yield identical deletions, so testing one copy suffices
        let non_cut_edge = non_loop_edges.iter().find_map(|&edge| {
            let deleted = graph.delete_edge(edge);
            deleted.is_connected().then_some((edge, deleted))
        });

        let count = match non_cut_edge {
            Some((edge, deleted)) => {
                trace!("splitting at {edge}");
                let contracted = contract(graph, edge);
                self.count(&deleted) + self.count(&contracted)
            }
            None => {
                let edge = non_loop_edges[0];
                trace!("contracting cut edge {edge}");
                self.count(&contract(graph, edge))
            }
        };

        if let Some(cache) = self.cache.as_mut() {
            cache.insert(graph.clone(), count.clone());
        }

        count
    }
}

/// Contracts an edge already known to be no loop
fn contract(graph: &MultiGraph, edge: Edge) -> MultiGraph {
    match graph.contract_edge(edge) {
        Ok(contracted) => contracted,
        Err(err) => unreachable!("deletion-contraction picked an invalid edge: {err}"),
    }
}

/// Convenience access to [`SpanningTreeCounter`] with default settings
pub trait SpanningTrees {
    /// Returns the exact number of spanning trees
    ///
    /// # Example
    /// ```
    /// use mgraphs::{prelude::*, algo::*, gens::*};
    ///
    /// assert_eq!(MultiGraph::complete(5).number_of_spanning_trees().to_string(), "125");
    /// ```
    fn number_of_spanning_trees(&self) -> BigUint;

    /// Returns the number of spanning trees together with a witness tree
    fn spanning_tree_census(&self) -> SpanningTreeCensus;
}

impl SpanningTrees for MultiGraph {
    fn number_of_spanning_trees(&self) -> BigUint {
        SpanningTreeCounter::default().count(self)
    }

    fn spanning_tree_census(&self) -> SpanningTreeCensus {
        SpanningTreeCounter::default().census(self)
    }
}
