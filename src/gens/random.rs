use rand::seq::SliceRandom;

use super::*;

/// Random multigraphs in the spirit of `G(n,p)`: every pair `u < v` (and, if enabled, every
/// loop `(u, u)`) is present independently with probability `p`. A present pair receives a
/// uniform multiplicity in `1..=max_multiplicity`.
#[derive(Debug, Copy, Clone)]
pub struct RandomMultigraph {
    n: NumNodes,
    p: f64,
    max_multiplicity: Multiplicity,
    loops: bool,
}

impl Default for RandomMultigraph {
    fn default() -> Self {
        Self {
            n: 0,
            p: 0.5,
            max_multiplicity: 1,
            loops: false,
        }
    }
}

impl RandomMultigraph {
    /// Creates a generator for simple graphs with `p = 0.5`
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `p`
    pub fn prob(mut self, prob: f64) -> Self {
        assert!((0.0..=1.0).contains(&prob), "{prob} is not a probability");
        self.p = prob;
        self
    }

    /// Updates the largest multiplicity a present pair can receive
    pub fn max_multiplicity(mut self, max_multiplicity: Multiplicity) -> Self {
        assert!(max_multiplicity > 0);
        self.max_multiplicity = max_multiplicity;
        self
    }

    /// Allows or forbids loops
    pub fn loops(mut self, loops: bool) -> Self {
        self.loops = loops;
        self
    }

    /// Generates the edges of a random multigraph in canonical order
    pub fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng,
    {
        let mut edges = Vec::new();
        for u in 0..self.n {
            for v in u..self.n {
                if (u == v && !self.loops) || !rng.random_bool(self.p) {
                    continue;
                }

                let m = rng.random_range(1..=self.max_multiplicity);
                edges.extend(std::iter::repeat_n(Edge(u, v), m as usize));
            }
        }
        edges.into_iter()
    }

    /// Generates a random multigraph
    pub fn generate<R>(&self, rng: &mut R) -> MultiGraph
    where
        R: Rng,
    {
        MultiGraph::from_edges(self.n, self.stream(rng))
    }

    /// Samples a loop-free `d`-regular multigraph on `n` nodes by randomly pairing up `d`
    /// stubs per node. Pairings that create a loop are rejected; gives up after `attempts`
    /// rejections or if `n * d` is odd.
    pub fn regular<R>(rng: &mut R, n: NumNodes, d: NumNodes, attempts: usize) -> Option<MultiGraph>
    where
        R: Rng,
    {
        if (n * d) % 2 == 1 {
            return None;
        }

        let mut stubs = (0..n)
            .flat_map(|u| std::iter::repeat_n(u, d as usize))
            .collect_vec();

        for _ in 0..attempts {
            stubs.shuffle(rng);
            let edges = stubs.chunks_exact(2).map(|p| Edge(p[0], p[1])).collect_vec();
            if edges.iter().all(|e| !e.is_loop()) {
                return Some(MultiGraph::from_edges(n, edges));
            }
        }

        None
    }
}

impl NumNodesGen for RandomMultigraph {
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}
