/*!
# Connectivity

Connectivity test and spanning tree extraction by *frontier growth*: starting from the
endpoints of the first canonical edge, we repeatedly scan the whole edge list and absorb
every edge with exactly one visited endpoint. A scan that absorbs nothing ends the search.

Each absorbed edge adds exactly one new node, so the absorbed edges always form a tree.
The repeated scans cost `O(n * m)`, which is fine for the small graphs this crate targets.
*/

use super::*;

pub trait Connectivity: CanonicalEdges + MultiplicityMatrix + Sized {
    /// Returns *true* if every node is reachable from every other node.
    /// A graph without nodes is considered disconnected.
    ///
    /// # Example
    /// ```
    /// use mgraphs::{prelude::*, algo::*};
    ///
    /// let path = MultiGraph::from_edges(3, [(0, 1), (1, 2)]);
    /// assert!(path.is_connected());
    ///
    /// let split = MultiGraph::from_edges(4, [(0, 1), (2, 3), (2, 3)]);
    /// assert!(!split.is_connected());
    /// ```
    fn is_connected(&self) -> bool {
        FrontierGrowth::new(self).grow(|_| {})
    }

    /// Returns the edges of a spanning tree in the order they were absorbed,
    /// or `None` if the graph is disconnected.
    fn spanning_tree_edges(&self) -> Option<Vec<Edge>> {
        let mut tree = Vec::with_capacity(self.len().saturating_sub(1));
        FrontierGrowth::new(self)
            .grow(|e| tree.push(e))
            .then_some(tree)
    }

    /// Returns a spanning tree on the same node labels, or [`MultiGraph::empty`] if the graph
    /// is disconnected.
    ///
    /// # Example
    /// ```
    /// use mgraphs::{prelude::*, algo::*};
    ///
    /// let triangle = MultiGraph::from_edges(3, [(0, 1), (1, 2), (2, 0)]);
    /// let tree = triangle.spanning_tree();
    /// assert_eq!(tree.number_of_edges(), 2);
    /// assert!(tree.is_spanning_tree_of(&triangle));
    /// ```
    fn spanning_tree(&self) -> MultiGraph {
        match self.spanning_tree_edges() {
            Some(_) if self.len() == 1 => MultiGraph::new(1),
            Some(edges) => MultiGraph::from_edge_list(edges),
            None => MultiGraph::empty(),
        }
    }

    /// Returns *true* if `self` is a spanning tree of `graph`: same node set, `n - 1`
    /// loop-free edges that are all present in `graph`, and connected.
    fn is_spanning_tree_of<G>(&self, graph: &G) -> bool
    where
        G: MultiplicityMatrix,
    {
        let n = self.number_of_nodes();
        n > 0
            && n == graph.number_of_nodes()
            && self.number_of_edges() == n - 1
            && self.number_of_loops() == 0
            && self
                .edges()
                .iter()
                .dedup_with_count()
                .all(|(copies, &Edge(u, v))| copies as Multiplicity <= graph.multiplicity(u, v))
            && self.is_connected()
    }
}

impl<G> Connectivity for G where G: CanonicalEdges + MultiplicityMatrix + Sized {}

/// State of a single frontier growth over the canonical edge list
struct FrontierGrowth<'a, G>
where
    G: CanonicalEdges + GraphNodeOrder,
{
    graph: &'a G,
    visited: NodeBitSet,
    num_visited: NumNodes,
}

impl<'a, G> FrontierGrowth<'a, G>
where
    G: CanonicalEdges + GraphNodeOrder,
{
    fn new(graph: &'a G) -> Self {
        Self {
            graph,
            visited: graph.vertex_bitset_unset(),
            num_visited: 0,
        }
    }

    fn visit(&mut self, u: Node) {
        if !self.visited.set_bit(u) {
            self.num_visited += 1;
        }
    }

    /// Grows the visited set until it spans the graph or stalls.
    /// Every edge that brings in a new node is reported to `on_tree_edge`.
    /// Returns *true* if all nodes were reached.
    fn grow<F>(mut self, mut on_tree_edge: F) -> bool
    where
        F: FnMut(Edge),
    {
        let n = self.graph.number_of_nodes();
        match n {
            0 => return false,
            1 => return true,
            _ => {}
        }

        // not enough edges to span all nodes
        if n - 1 > self.graph.number_of_edges() {
            return false;
        }

        let first = self.graph.edge_at(0);
        self.visit(first.0);
        self.visit(first.1);
        if !first.is_loop() {
            on_tree_edge(first);
        }

        while self.num_visited < n {
            let mut grown = false;

            for &edge in self.graph.edges() {
                let Edge(u, v) = edge;
                let (has_u, has_v) = (self.visited.get_bit(u), self.visited.get_bit(v));
                if has_u == has_v {
                    continue;
                }

                self.visit(if has_u { v } else { u });
                on_tree_edge(edge);
                grown = true;
            }

            if !grown {
                return false;
            }
        }

        true
    }
}
