/*!
# Substructure Generators

Families of graphs with well-known spanning tree counts and chromatic indices.
*/

use super::*;

/// Constructors for common graph families on nodes `0..n`
pub trait Substructures: Sized {
    /// Path `0 - 1 - ... - (n-1)`
    ///
    /// # Example
    /// ```rust
    /// use mgraphs::{prelude::*, gens::*};
    ///
    /// let g = MultiGraph::path(4);
    /// assert_eq!(g.edges(), &[Edge(0, 1), Edge(1, 2), Edge(2, 3)]);
    /// ```
    fn path(n: NumNodes) -> Self;

    /// Cycle `0 - 1 - ... - (n-1) - 0`.
    /// For `n = 1` this is a single loop, for `n = 2` a pair of parallel edges.
    fn cycle(n: NumNodes) -> Self;

    /// Star with center `0` and leaves `1..n`
    fn star(n: NumNodes) -> Self;

    /// Simple complete graph `K_n`
    ///
    /// # Example
    /// ```rust
    /// use mgraphs::{prelude::*, gens::*};
    ///
    /// let g = MultiGraph::complete(4);
    /// assert!(g.is_complete());
    /// assert_eq!(g.number_of_edges(), 6);
    /// ```
    fn complete(n: NumNodes) -> Self;

    /// Petersen graph: outer cycle `0..5`, inner pentagram `5..10` and spokes `(i, i + 5)`
    fn petersen() -> Self;
}

impl Substructures for MultiGraph {
    fn path(n: NumNodes) -> Self {
        MultiGraph::from_edges(n, (0..n).tuple_windows::<(Node, Node)>())
    }

    fn cycle(n: NumNodes) -> Self {
        MultiGraph::from_edges(n, (0..n).map(|u| Edge(u, (u + 1) % n)))
    }

    fn star(n: NumNodes) -> Self {
        MultiGraph::from_edges(n, (1..n).map(|v| Edge(0, v)))
    }

    fn complete(n: NumNodes) -> Self {
        MultiGraph::from_edges(n, (0..n).tuple_combinations::<(Node, Node)>())
    }

    fn petersen() -> Self {
        let outer = (0..5).map(|u| Edge(u, (u + 1) % 5));
        let inner = (0..5).map(|u| Edge(5 + u, 5 + (u + 2) % 5));
        let spokes = (0..5).map(|u| Edge(u, u + 5));
        MultiGraph::from_edges(10, outer.chain(inner).chain(spokes))
    }
}
