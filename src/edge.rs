use std::fmt::{Debug, Display};

use stream_bitset::bitset::BitSetImpl;

use crate::Node;

/// An undirected edge defined by its two endpoints.
/// A loop has both endpoints equal.
///
/// Edges are plain values: two parallel copies of the same edge compare equal.
/// Algorithms that must distinguish copies refer to edges by their index in the
/// canonical edge list instead.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

/// A BitSet over edge indices
pub type EdgeBitSet = BitSetImpl<NumEdges>;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1))
    }

    /// Returns true if the endpoint with smaller index comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Returns true if `u` is one of the endpoints
    pub fn has_endpoint(&self, u: Node) -> bool {
        self.0 == u || self.1 == u
    }

    /// Returns true if both edges have at least one endpoint in common
    pub fn shares_endpoint_with(&self, other: &Edge) -> bool {
        other.has_endpoint(self.0) || other.has_endpoint(self.1)
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&(Node, Node)> for Edge {
    fn from(value: &(Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}
