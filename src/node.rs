/*!
# Node Representation

Nodes are plain `u32` indices in `0..n`. The graphs handled by this crate are small, so
there is no need for `usize` and we can manipulate node values directly.
*/

use stream_bitset::bitset::BitSetImpl;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// Number of parallel copies of an edge stored in a single matrix cell
pub type Multiplicity = u32;

/// BitSet for Nodes
pub type NodeBitSet = BitSetImpl<Node>;
