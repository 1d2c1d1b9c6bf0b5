use std::fmt::Debug;

use itertools::Itertools;

use super::*;

/// An undirected multigraph stored as a dense, symmetric multiplicity matrix.
///
/// Next to the matrix we keep the canonical edge list (see [`CanonicalEdges`]) so that
/// algorithms can address individual parallel copies by index. Both views are derived once
/// on construction and never change afterwards.
///
/// The graph with no nodes doubles as the *empty* sentinel, e.g. for "no spanning tree".
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct MultiGraph {
    n: NumNodes,
    matrix: Vec<Multiplicity>,
    edges: Vec<Edge>,
}

impl MultiGraph {
    /// Creates an edgeless graph with `n` nodes
    pub fn new(n: NumNodes) -> Self {
        Self {
            n,
            matrix: vec![0; (n as usize) * (n as usize)],
            edges: Vec::new(),
        }
    }

    /// Creates the graph without nodes and edges
    pub fn empty() -> Self {
        Self::new(0)
    }

    /// Builds a graph from the rows of an adjacency matrix.
    ///
    /// Entry `rows[u][v]` is the number of edges between `u` and `v`, the diagonal counts
    /// loops. Fails if the matrix is not square or not symmetric.
    ///
    /// # Example
    /// ```
    /// use mgraphs::prelude::*;
    ///
    /// let graph = MultiGraph::try_from_matrix(&[[0, 2], [2, 1]]).unwrap();
    /// assert_eq!(graph.number_of_nodes(), 2);
    /// assert_eq!(graph.number_of_edges(), 3);
    /// assert_eq!(graph.edges(), &[Edge(0, 1), Edge(0, 1), Edge(1, 1)]);
    /// ```
    pub fn try_from_matrix<R>(rows: &[R]) -> Result<Self, GraphError>
    where
        R: AsRef<[Multiplicity]>,
    {
        let n = rows.len();
        let mut matrix = Vec::with_capacity(n * n);
        for (row, entries) in rows.iter().enumerate() {
            let entries = entries.as_ref();
            if entries.len() != n {
                return Err(GraphError::NotSquare {
                    rows: n,
                    row,
                    len: entries.len(),
                });
            }
            matrix.extend_from_slice(entries);
        }

        for (u, v) in (0..n).tuple_combinations() {
            if matrix[u * n + v] != matrix[v * n + u] {
                return Err(GraphError::Asymmetric {
                    u: u as Node,
                    v: v as Node,
                });
            }
        }

        Ok(Self::from_dense(n as NumNodes, matrix))
    }

    /// Builds a graph with `n` nodes from a collection of (possibly repeated) edges.
    /// ** Panics if any endpoint is `>= n` **
    pub fn from_edges<I>(n: NumNodes, edges: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Edge>,
    {
        let mut matrix = vec![0; (n as usize) * (n as usize)];
        for Edge(u, v) in edges.into_iter().map(|e| e.into()) {
            assert!(u < n && v < n, "edge ({u},{v}) out of range for {n} nodes");
            matrix[(u * n + v) as usize] += 1;
            if u != v {
                matrix[(v * n + u) as usize] += 1;
            }
        }
        Self::from_dense(n, matrix)
    }

    /// Builds a graph from edges alone. The node count is the number of distinct endpoints,
    /// which are relabelled `0..n` by rank (smallest endpoint becomes `0`).
    ///
    /// If the endpoints already cover `0..n`, labels are kept as they are.
    ///
    /// # Example
    /// ```
    /// use mgraphs::prelude::*;
    ///
    /// let graph = MultiGraph::from_edge_list([Edge(4, 7), Edge(7, 9)]);
    /// assert_eq!(graph.number_of_nodes(), 3);
    /// assert_eq!(graph.edges(), &[Edge(0, 1), Edge(1, 2)]);
    /// ```
    pub fn from_edge_list<I>(edges: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Edge>,
    {
        let edges = edges.into_iter().map(|e| e.into()).collect_vec();
        let labels = edges
            .iter()
            .flat_map(|&Edge(u, v)| [u, v])
            .sorted_unstable()
            .dedup()
            .collect_vec();

        let rank = |u: Node| labels.binary_search(&u).map_or(INVALID_NODE, |r| r as Node);

        Self::from_edges(
            labels.len() as NumNodes,
            edges.into_iter().map(|Edge(u, v)| Edge(rank(u), rank(v))),
        )
    }

    /// Builds a graph from a row-major `n * n` matrix and derives the canonical edge list
    pub(crate) fn from_dense(n: NumNodes, matrix: Vec<Multiplicity>) -> Self {
        debug_assert_eq!(matrix.len(), (n as usize) * (n as usize));

        let mut edges = Vec::new();
        for u in 0..n {
            for v in u..n {
                let m = matrix[(u * n + v) as usize];
                edges.extend(std::iter::repeat_n(Edge(u, v), m as usize));
            }
        }

        Self { n, matrix, edges }
    }

    /// Assembles a graph whose canonical edge list is already known
    pub(crate) fn from_parts(n: NumNodes, matrix: Vec<Multiplicity>, edges: Vec<Edge>) -> Self {
        debug_assert_eq!(matrix.len(), (n as usize) * (n as usize));
        debug_assert_eq!(
            edges.len() as NumEdges,
            (0..n)
                .flat_map(|u| (u..n).map(move |v| (u, v)))
                .map(|(u, v)| matrix[(u * n + v) as usize])
                .sum::<NumEdges>()
        );

        Self { n, matrix, edges }
    }

    /// Returns the row of `u` in the multiplicity matrix.
    /// ** Panics if `u >= n` **
    pub fn row(&self, u: Node) -> &[Multiplicity] {
        let n = self.n as usize;
        let u = u as usize;
        &self.matrix[u * n..(u + 1) * n]
    }

    /// Returns an iterator over all rows of the multiplicity matrix
    pub fn matrix_rows(&self) -> impl Iterator<Item = &[Multiplicity]> + '_ {
        self.vertices().map(|u| self.row(u))
    }

    /// Returns a copy of the row-major multiplicity matrix
    pub(crate) fn to_dense(&self) -> Vec<Multiplicity> {
        self.matrix.clone()
    }
}

impl Debug for MultiGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MultiGraph")
            .field("n", &self.n)
            .field("edges", &self.edges)
            .finish()
    }
}

impl Default for MultiGraph {
    fn default() -> Self {
        Self::empty()
    }
}

impl GraphNodeOrder for MultiGraph {
    fn number_of_nodes(&self) -> NumNodes {
        self.n
    }
}

impl GraphEdgeOrder for MultiGraph {
    fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }
}

impl MultiplicityMatrix for MultiGraph {
    fn multiplicity(&self, u: Node, v: Node) -> Multiplicity {
        assert!(u < self.n && v < self.n);
        self.matrix[(u * self.n + v) as usize]
    }

    fn degree_of(&self, u: Node) -> NumEdges {
        self.row(u).iter().sum()
    }
}

impl CanonicalEdges for MultiGraph {
    fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn four_cycle() -> MultiGraph {
        MultiGraph::try_from_matrix(&[[0, 1, 0, 1], [1, 0, 1, 0], [0, 1, 0, 1], [1, 0, 1, 0]])
            .unwrap()
    }

    #[test]
    fn canonical_edge_order() {
        let graph =
            MultiGraph::try_from_matrix(&[[1, 0, 2], [0, 0, 1], [2, 1, 0]]).unwrap();

        assert_eq!(graph.number_of_nodes(), 3);
        assert_eq!(graph.number_of_edges(), 4);
        assert_eq!(
            graph.edges(),
            &[Edge(0, 0), Edge(0, 2), Edge(0, 2), Edge(1, 2)]
        );
        assert_eq!(graph.number_of_loops(), 1);
        assert!(graph.edges().iter().all(|e| e.is_normalized()));
    }

    #[test]
    fn rejects_malformed_matrices() {
        let ragged: Vec<Vec<Multiplicity>> = vec![vec![0, 1], vec![1]];
        assert_eq!(
            MultiGraph::try_from_matrix(&ragged),
            Err(GraphError::NotSquare {
                rows: 2,
                row: 1,
                len: 1
            })
        );

        assert_eq!(
            MultiGraph::try_from_matrix(&[[0, 1, 0], [1, 0, 2], [0, 1, 0]]),
            Err(GraphError::Asymmetric { u: 1, v: 2 })
        );
    }

    #[test]
    fn degrees_and_regularity() {
        let graph = four_cycle();
        assert_eq!(graph.degrees().collect_vec(), vec![2, 2, 2, 2]);
        assert_eq!(graph.max_degree(), 2);
        assert!(graph.is_regular());
        assert!(!graph.is_complete());

        let star = MultiGraph::from_edges(4, [(0, 1), (0, 2), (0, 3)]);
        assert_eq!(star.max_degree(), 3);
        assert!(!star.is_regular());

        let loopy = MultiGraph::try_from_matrix(&[[2, 1], [1, 0]]).unwrap();
        assert_eq!(loopy.degrees().collect_vec(), vec![3, 1]);
    }

    #[test]
    fn completeness_requires_simple_graph() {
        let k4 = MultiGraph::from_edges(4, (0..4).tuple_combinations::<(Node, Node)>());
        assert!(k4.is_complete());
        assert_eq!(k4.number_of_edges(), 6);

        // six edges on four nodes, but with a parallel pair
        let fake = MultiGraph::from_edges(4, [(0, 1), (0, 1), (1, 2), (2, 3), (3, 0), (0, 2)]);
        assert_eq!(fake.number_of_edges(), 6);
        assert!(!fake.is_complete());

        assert!(MultiGraph::new(1).is_complete());
        assert!(MultiGraph::empty().is_complete());
    }

    #[test]
    fn from_edges_matches_matrix() {
        let graph = MultiGraph::from_edges(4, [(1, 0), (1, 2), (3, 2), (0, 3)]);
        assert_eq!(graph, four_cycle());
        assert_eq!(
            graph.matrix_rows().map(|r| r.to_vec()).collect_vec(),
            vec![
                vec![0, 1, 0, 1],
                vec![1, 0, 1, 0],
                vec![0, 1, 0, 1],
                vec![1, 0, 1, 0]
            ]
        );
    }

    #[test]
    fn edge_list_relabelling() {
        let covering = MultiGraph::from_edge_list([Edge(0, 2), Edge(2, 1)]);
        assert_eq!(covering.number_of_nodes(), 3);
        assert_eq!(covering.edges(), &[Edge(0, 2), Edge(1, 2)]);

        let sparse = MultiGraph::from_edge_list([Edge(10, 3), Edge(3, 3), Edge(10, 3)]);
        assert_eq!(sparse.number_of_nodes(), 2);
        assert_eq!(sparse.edges(), &[Edge(0, 0), Edge(0, 1), Edge(0, 1)]);

        assert!(MultiGraph::from_edge_list(Vec::<Edge>::new()).is_empty());
    }

    #[test]
    fn incidence() {
        let graph = MultiGraph::from_edges(3, [(0, 1), (0, 1), (1, 2), (2, 2)]);
        assert_eq!(
            graph.edges(),
            &[Edge(0, 1), Edge(0, 1), Edge(1, 2), Edge(2, 2)]
        );

        assert_eq!(
            graph.incident_edges(Edge(1, 0)),
            vec![Edge(0, 1), Edge(1, 2)]
        );
        assert_eq!(graph.incident_edges(Edge(2, 2)), vec![Edge(1, 2)]);

        let at_first = graph.incident_edges_at(0);
        assert!(!at_first.get_bit(0));
        assert!(at_first.get_bit(1));
        assert!(at_first.get_bit(2));
        assert!(!at_first.get_bit(3));
        assert_eq!(at_first.cardinality(), 2);
    }
}
