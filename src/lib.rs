/*!
`mgraphs` is a small library for **undirected multigraphs** on nodes `0` to `n - 1`, stored as a
dense multiplicity matrix. It answers two questions exactly:
- How many spanning trees does a graph have? (deletion-contraction with closed-form shortcuts)
- Can its edges be properly colored with `Δ` colors, i.e. is it *class one*? (backtracking search)

# Representation

We represent **nodes** as `u32` in the range `0..n` and **edges** as a tuple-struct `Edge(Node, Node)`.
A [`MultiGraph`](crate::repr::MultiGraph) stores how many edges join every pair of nodes (diagonal
entries count loops) together with its *canonical edge list*: every normalized edge `Edge(u, v)`
with `u <= v`, repeated by multiplicity, in row-major order. Positions in this list identify edges.

Graphs are immutable values: deleting or contracting an edge yields a new graph.

# Usage

- [`prelude`] includes nodes, edges, basic graph operations and the [`MultiGraph`](crate::repr::MultiGraph) itself,
- [`algo`] includes connectivity, edge deletion/contraction, spanning tree counting and edge coloring,
- [`gens`] includes deterministic families (paths, cycles, complete graphs, ...) and random multigraphs,
- [`io`] reads and writes the plain-text adjacency matrix format.

In most use-cases, `use mgraphs::{prelude::*, algo::*};` suffices.

```rust
use mgraphs::{prelude::*, algo::*};

let square = MultiGraph::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]);
assert_eq!(square.number_of_spanning_trees().to_string(), "4");
assert!(square.is_class_one());
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;

pub use edge::*;
pub use error::*;
pub use node::*;

/// `mgraphs::prelude` includes definitions for nodes and edges, all basic graph operation traits as well as the graph representation.
pub mod prelude {
    pub use super::{edge::*, error::*, node::*, ops::*, repr::*};
}
