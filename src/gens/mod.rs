/*!
# Graph Generators

Deterministic families of multigraphs (paths, cycles, stars, complete graphs, the Petersen
graph) via [`Substructures`], and seeded random multigraphs via [`RandomMultigraph`].

Both are mostly used to build test instances with known answers:

```rust
use mgraphs::{prelude::*, gens::*};
use rand::SeedableRng;

let cycle = MultiGraph::cycle(5);
assert_eq!(cycle.number_of_edges(), 5);

let rng = &mut rand::rngs::StdRng::seed_from_u64(1);
let graph = RandomMultigraph::new().nodes(6).prob(0.5).max_multiplicity(3).generate(rng);
assert_eq!(graph.number_of_nodes(), 6);
```
*/

use itertools::Itertools;
use rand::Rng;

use crate::prelude::*;

mod random;
mod substructures;

pub use random::*;
pub use substructures::*;

/// Trait for generators that allow setting the number of nodes.
pub trait NumNodesGen {
    /// Sets the number of nodes in the graph generator.
    fn nodes(self, n: NumNodes) -> Self;
}
