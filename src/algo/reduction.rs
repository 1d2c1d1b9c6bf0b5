/*!
# Graph Reductions

Edge deletion and edge contraction. Both return a new graph and leave the input untouched.
*/

use super::*;

pub trait GraphReduction: Sized {
    /// Returns a copy of the graph with one copy of `edge` removed.
    /// The node set is unchanged.
    /// ** Panics if `edge` is not present **
    ///
    /// # Example
    /// ```
    /// use mgraphs::{prelude::*, algo::*};
    ///
    /// let graph = MultiGraph::from_edges(2, [(0, 1), (0, 1)]);
    /// let reduced = graph.delete_edge(Edge(1, 0));
    /// assert_eq!(reduced.multiplicity(0, 1), 1);
    /// assert_eq!(reduced.number_of_edges(), 1);
    /// ```
    fn delete_edge(&self, edge: Edge) -> Self;

    /// Merges the endpoints of `edge` into a single node and removes one copy of `edge`.
    ///
    /// All other nodes keep their relative order; the merged node is appended last. Its
    /// row is the sum of both endpoint rows without their mutual entries; the remaining
    /// parallel copies of `edge` become its loops. Loops at either endpoint are dropped.
    ///
    /// Fails with [`GraphError::LoopContraction`] if `edge` is a loop.
    /// ** Panics if `edge` is not present **
    ///
    /// # Example
    /// ```
    /// use mgraphs::{prelude::*, algo::*};
    ///
    /// let triangle = MultiGraph::from_edges(3, [(0, 1), (1, 2), (2, 0)]);
    /// let contracted = triangle.contract_edge(Edge(0, 1)).unwrap();
    /// assert_eq!(contracted.number_of_nodes(), 2);
    /// assert_eq!(contracted.edges(), &[Edge(0, 1), Edge(0, 1)]);
    ///
    /// assert!(contracted.contract_edge(Edge(1, 1)).is_err());
    /// ```
    fn contract_edge(&self, edge: Edge) -> Result<Self, GraphError>;
}

impl GraphReduction for MultiGraph {
    fn delete_edge(&self, edge: Edge) -> Self {
        let Edge(u, v) = edge.normalized();
        let Some(position) = self.edges().iter().position(|&e| e == Edge(u, v)) else {
            panic!("cannot delete missing edge {edge}");
        };

        let mut edges = self.edges().to_vec();
        edges.remove(position);

        let n = self.number_of_nodes();
        let mut matrix = self.to_dense();
        matrix[(u * n + v) as usize] -= 1;
        if u != v {
            matrix[(v * n + u) as usize] -= 1;
        }

        MultiGraph::from_parts(n, matrix, edges)
    }

    fn contract_edge(&self, edge: Edge) -> Result<Self, GraphError> {
        if edge.is_loop() {
            return Err(GraphError::LoopContraction(edge));
        }

        let Edge(u, v) = edge.normalized();
        assert!(self.has_edge(u, v), "cannot contract missing edge {edge}");

        let kept = self.vertices().filter(|&w| w != u && w != v).collect_vec();
        let merged_loops = self.multiplicity(u, v) - 1;

        let n = self.number_of_nodes() - 1;
        let mut matrix = Vec::with_capacity((n as usize) * (n as usize));
        for &x in &kept {
            matrix.extend(kept.iter().map(|&y| self.multiplicity(x, y)));
            matrix.push(self.multiplicity(x, u) + self.multiplicity(x, v));
        }
        matrix.extend(
            kept.iter()
                .map(|&y| self.multiplicity(u, y) + self.multiplicity(v, y)),
        );
        matrix.push(merged_loops);

        trace!("contracted {edge}: {} -> {} nodes", n + 1, n);

        Ok(MultiGraph::from_dense(n, matrix))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn delete_keeps_canonical_order() {
        let graph = MultiGraph::from_edges(3, [(0, 1), (0, 1), (1, 2), (2, 2)]);

        let once = graph.delete_edge(Edge(0, 1));
        assert_eq!(once.edges(), &[Edge(0, 1), Edge(1, 2), Edge(2, 2)]);
        assert_eq!(once.multiplicity(1, 0), 1);
        assert_eq!(once.number_of_nodes(), 3);

        let no_loop = graph.delete_edge(Edge(2, 2));
        assert_eq!(no_loop.multiplicity(2, 2), 0);
        assert_eq!(no_loop.number_of_edges(), 3);

        // input is untouched
        assert_eq!(graph.number_of_edges(), 4);
    }

    #[test]
    #[should_panic]
    fn delete_missing_edge() {
        MultiGraph::from_edges(3, [(0, 1)]).delete_edge(Edge(1, 2));
    }

    #[test]
    fn contract_merges_rows() {
        // 0 - 1 = 2 - 3, with a loop at 2
        let graph = MultiGraph::from_edges(4, [(0, 1), (1, 2), (1, 2), (2, 3), (2, 2)]);
        let contracted = graph.contract_edge(Edge(2, 1)).unwrap();

        // nodes 0, 3 keep their order, {1, 2} becomes node 2
        assert_eq!(contracted.number_of_nodes(), 3);
        assert_eq!(
            contracted.matrix_rows().map(|r| r.to_vec()).collect_vec(),
            vec![vec![0, 0, 1], vec![0, 0, 1], vec![1, 1, 1]]
        );
        assert_eq!(contracted.number_of_edges(), 3);
    }

    #[test]
    fn contract_drops_endpoint_loops() {
        let graph = MultiGraph::try_from_matrix(&[[2, 1], [1, 0]]).unwrap();
        let contracted = graph.contract_edge(Edge(0, 1)).unwrap();
        assert_eq!(contracted, MultiGraph::new(1));

        let both = MultiGraph::from_edges(2, [(0, 0), (1, 1), (0, 1), (0, 1)]);
        let contracted = both.contract_edge(Edge(1, 0)).unwrap();
        assert_eq!(contracted.edges(), &[Edge(0, 0)]);
    }

    #[test]
    fn contract_loop_fails() {
        let graph = MultiGraph::from_edges(2, [(0, 0), (0, 1)]);
        assert_eq!(
            graph.contract_edge(Edge(0, 0)),
            Err(GraphError::LoopContraction(Edge(0, 0)))
        );
    }

    #[test]
    fn contract_to_single_node() {
        let graph = MultiGraph::from_edges(2, [(0, 1), (0, 1), (0, 1)]);
        let contracted = graph.contract_edge(Edge(0, 1)).unwrap();
        assert_eq!(contracted.number_of_nodes(), 1);
        assert_eq!(contracted.edges(), &[Edge(0, 0), Edge(0, 0)]);
    }
}
