/*!
# Graph Algorithms

Algorithms on [`MultiGraph`]s, re-exported at the top level of this module:
```rust
use mgraphs::algo::*;
```

- [`Connectivity`] decides connectivity by frontier growth and extracts a spanning tree,
- [`GraphReduction`] deletes or contracts a single edge, producing a new graph,
- [`SpanningTreeCounter`] counts spanning trees by deletion-contraction,
- [`EdgeColorSearch`] decides whether the edges can be colored with `Δ` colors.
*/

mod connectivity;
mod edge_coloring;
mod reduction;
mod spanning_trees;

use itertools::Itertools;
use log::{debug, trace};

use crate::prelude::*;

pub use connectivity::*;
pub use edge_coloring::*;
pub use reduction::*;
pub use spanning_trees::*;
