/*!
# Graph Operations

Read-only traits every graph representation of this crate implements. Algorithms in
[`crate::algo`] are written against these traits rather than against a concrete struct.
*/

use crate::*;

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        0..self.number_of_nodes()
    }

    /// Returns empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        NodeBitSet::new(self.number_of_nodes())
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph, counting parallel copies and loops
    fn number_of_edges(&self) -> NumEdges;

    /// Returns empty bitset with one entry per edge
    fn edge_bitset_unset(&self) -> EdgeBitSet {
        EdgeBitSet::new(self.number_of_edges())
    }

    /// Returns *true* if the graph has no edges
    fn is_singleton(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Access to the symmetric multiplicity matrix of an undirected multigraph.
///
/// Entry `(u, v)` counts the parallel edges between `u` and `v`; entry `(u, u)` counts
/// the loops at `u`.
pub trait MultiplicityMatrix: GraphNodeOrder + GraphEdgeOrder {
    /// Returns the number of edges between `u` and `v`.
    /// ** Panics if `u >= n || v >= n` **
    fn multiplicity(&self, u: Node, v: Node) -> Multiplicity;

    /// Returns *true* if at least one edge connects `u` and `v`.
    /// ** Panics if `u >= n || v >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.multiplicity(u, v) > 0
    }

    /// Returns the degree of `u` as its row sum. A loop contributes one.
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumEdges {
        self.vertices().map(|v| self.multiplicity(u, v)).sum()
    }

    /// Returns an iterator over the degrees of all nodes
    fn degrees(&self) -> impl Iterator<Item = NumEdges> + '_ {
        self.vertices().map(|u| self.degree_of(u))
    }

    /// Returns the maximum degree (Δ) in the graph, or `0` if it has no nodes
    fn max_degree(&self) -> NumEdges {
        self.degrees().max().unwrap_or(0)
    }

    /// Returns *true* if every node has degree Δ
    fn is_regular(&self) -> bool {
        let delta = self.max_degree();
        self.degrees().all(|d| d == delta)
    }

    /// Returns the number of loops in the graph
    fn number_of_loops(&self) -> NumEdges {
        self.vertices().map(|u| self.multiplicity(u, u)).sum()
    }

    /// Returns *true* if the graph is a simple complete graph, i.e. every pair of distinct
    /// nodes is connected by exactly one edge and there are no loops.
    fn is_complete(&self) -> bool {
        let n = self.number_of_nodes() as u64;
        if self.number_of_edges() as u64 != n * n.saturating_sub(1) / 2 {
            return false;
        }

        self.vertices().all(|u| {
            self.vertices()
                .all(|v| self.multiplicity(u, v) == if u == v { 0 } else { 1 })
        })
    }
}

/// Access to the canonical edge list of a multigraph.
///
/// The list contains every edge `(u, v)` with `u <= v` exactly `multiplicity(u, v)` times,
/// ordered by scanning `u` in `0..n` and then `v` in `u..n`. Algorithms that must be
/// reproducible process edges in this order and refer to them by index.
pub trait CanonicalEdges: GraphEdgeOrder {
    /// Returns the canonical edge list
    fn edges(&self) -> &[Edge];

    /// Returns the edge stored at index `i` of the canonical edge list.
    /// ** Panics if `i >= m` **
    fn edge_at(&self, i: NumEdges) -> Edge {
        self.edges()[i as usize]
    }

    /// Returns an iterator over all edges with distinct endpoints in canonical order
    fn non_loop_edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges().iter().copied().filter(|e| !e.is_loop())
    }

    /// Returns the set of edge indices that share an endpoint with the edge at index `i`,
    /// excluding `i` itself. Parallel copies of the edge are included.
    /// ** Panics if `i >= m` **
    fn incident_edges_at(&self, i: NumEdges) -> EdgeBitSet {
        let edge = self.edge_at(i);
        let mut incident = self.edge_bitset_unset();
        for (j, other) in self.edges().iter().enumerate() {
            let j = j as NumEdges;
            if j != i && edge.shares_endpoint_with(other) {
                incident.set_bit(j);
            }
        }
        incident
    }

    /// Returns all edges other than `edge` sharing an endpoint with it, in canonical order.
    /// Exactly one copy of `edge` is excluded, so remaining parallel copies are reported.
    fn incident_edges(&self, edge: Edge) -> Vec<Edge> {
        let edge = edge.normalized();
        let mut skipped = false;
        self.edges()
            .iter()
            .filter(|&other| {
                if !skipped && *other == edge {
                    skipped = true;
                    return false;
                }
                edge.shares_endpoint_with(other)
            })
            .copied()
            .collect()
    }
}
