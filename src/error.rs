use thiserror::Error;

use crate::*;

/// Errors raised when building or transforming a [`MultiGraph`](crate::repr::MultiGraph)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("adjacency matrix is not square: row {row} has {len} entries, expected {rows}")]
    NotSquare { rows: usize, row: usize, len: usize },
    #[error("adjacency matrix is not symmetric at ({u}, {v})")]
    Asymmetric { u: Node, v: Node },
    #[error("cannot contract loop {0}")]
    LoopContraction(Edge),
}
