/*!
# Graph Representations

This crate stores graphs as a dense multiplicity matrix together with the canonical edge
list derived from it, see [`MultiGraph`]. Instances are never edited in place: every
transformation in [`crate::algo`] produces a new graph.
*/

use crate::{ops::*, *};

mod multigraph;

pub use multigraph::*;
