/*!
# Edge Coloring

Decides whether the edges of a multigraph can be colored with Δ colors (Δ being the maximum
degree) such that edges sharing an endpoint receive different colors, i.e. whether the
graph is *class one*.

Two cases of regular graphs are answered without search:
- a regular graph of odd order is never considered class one, including edgeless graphs
  and graphs whose degrees stem from loops. Without loops this is the matching bound:
  every color class has at most `(n - 1) / 2` edges, too few to cover all `Δ * n / 2`,
- a complete graph of even order always is (it has a 1-factorization).

All other graphs are decided by an exhaustive backtracking search that colors the edges
one after another in canonical order. A graph without edges needs no colors at all.
*/

use super::*;

/// Index of a color class in `0..Δ`
pub type Color = u32;

/// A color for every edge of a graph, indexed like its canonical edge list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeColoringAssignment {
    colors: Vec<Color>,
    num_colors: Color,
}

impl EdgeColoringAssignment {
    /// Returns the number of available colors
    pub fn number_of_colors(&self) -> Color {
        self.num_colors
    }

    /// Returns the color of the edge at canonical index `i`.
    /// ** Panics if `i >= m` **
    pub fn color_of(&self, i: NumEdges) -> Color {
        self.colors[i as usize]
    }

    /// Returns the colors of all edges in canonical order
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Returns the canonical edge indices of every color class
    pub fn color_classes(&self) -> Vec<Vec<NumEdges>> {
        let mut classes = vec![Vec::new(); self.num_colors as usize];
        for (i, &c) in self.colors.iter().enumerate() {
            classes[c as usize].push(i as NumEdges);
        }
        classes
    }

    /// Returns *true* if the assignment colors every edge of `graph` with one of the available
    /// colors and no two edges sharing an endpoint have the same color.
    pub fn is_proper_for<G>(&self, graph: &G) -> bool
    where
        G: CanonicalEdges,
    {
        let edges = graph.edges();
        edges.len() == self.colors.len()
            && self.colors.iter().all(|&c| c < self.num_colors)
            && edges
                .iter()
                .zip(&self.colors)
                .tuple_combinations()
                .all(|((e, c), (f, d))| c != d || !e.shares_endpoint_with(f))
    }
}

/// Configurable search for a Δ-edge-coloring.
///
/// # Example
/// ```
/// use mgraphs::{prelude::*, algo::*, gens::*};
///
/// let search = EdgeColorSearch::new();
/// assert!(search.is_class_one(&MultiGraph::cycle(4)));
/// assert!(!search.is_class_one(&MultiGraph::cycle(5)));
///
/// let coloring = search.find_coloring(&MultiGraph::complete(4)).unwrap();
/// assert_eq!(coloring.number_of_colors(), 3);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct EdgeColorSearch {
    use_shortcuts: bool,
}

impl Default for EdgeColorSearch {
    fn default() -> Self {
        Self {
            use_shortcuts: true,
        }
    }
}

impl EdgeColorSearch {
    /// Creates a search with the regular-graph shortcuts enabled
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables answering regular graphs without search.
    ///
    /// The search alone accepts graphs the odd-order rule rejects (e.g. a single loop), so
    /// both settings only agree on loop-free graphs with at least one edge.
    pub fn set_use_shortcuts(&mut self, use_shortcuts: bool) {
        self.use_shortcuts = use_shortcuts;
    }

    /// Enables or disables answering regular graphs without search
    pub fn use_shortcuts(mut self, use_shortcuts: bool) -> Self {
        self.set_use_shortcuts(use_shortcuts);
        self
    }

    /// Returns *true* if the edges of `graph` can be colored with Δ colors
    pub fn is_class_one<G>(&self, graph: &G) -> bool
    where
        G: CanonicalEdges + MultiplicityMatrix,
    {
        if let Some(answer) = self.shortcut(graph) {
            return answer;
        }

        self.search(graph).is_some()
    }

    /// Returns a Δ-edge-coloring of `graph` if one exists.
    ///
    /// Unlike [`EdgeColorSearch::is_class_one`], a positive shortcut still runs the search
    /// to produce the coloring.
    pub fn find_coloring<G>(&self, graph: &G) -> Option<EdgeColoringAssignment>
    where
        G: CanonicalEdges + MultiplicityMatrix,
    {
        if self.shortcut(graph) == Some(false) {
            return None;
        }

        self.search(graph)
    }

    fn shortcut<G>(&self, graph: &G) -> Option<bool>
    where
        G: CanonicalEdges + MultiplicityMatrix,
    {
        if !self.use_shortcuts || !graph.is_regular() {
            return None;
        }

        if graph.number_of_nodes() % 2 == 1 {
            debug!("regular graph of odd order is not class one");
            return Some(false);
        }

        if graph.is_complete() {
            debug!("complete graph of even order is class one");
            return Some(true);
        }

        None
    }

    fn search<G>(&self, graph: &G) -> Option<EdgeColoringAssignment>
    where
        G: CanonicalEdges + MultiplicityMatrix,
    {
        let num_colors = graph.max_degree();
        let mut backtracking = Backtracking::new(graph);
        let mut classes = ColorClasses::new(num_colors);

        let found = backtracking.extend(&mut classes, 0);
        debug!(
            "backtracking {} after {} steps",
            if found { "succeeded" } else { "failed" },
            backtracking.steps
        );

        found.then(|| classes.into_assignment(graph.number_of_edges()))
    }
}

/// Edges currently assigned to each color.
///
/// Owned by the caller of the search and handed down the recursion; each step pushes its
/// edge before descending and pops it again if the descent fails.
struct ColorClasses {
    classes: Vec<Vec<NumEdges>>,
}

impl ColorClasses {
    fn new(num_colors: Color) -> Self {
        Self {
            classes: vec![Vec::new(); num_colors as usize],
        }
    }

    fn number_of_colors(&self) -> Color {
        self.classes.len() as Color
    }

    /// Returns *true* if no edge of color `c` is in `conflicts`
    fn admits(&self, c: Color, conflicts: &EdgeBitSet) -> bool {
        !self.classes[c as usize]
            .iter()
            .any(|&j| conflicts.get_bit(j))
    }

    fn assign(&mut self, c: Color, i: NumEdges) {
        self.classes[c as usize].push(i);
    }

    fn unassign(&mut self, c: Color, i: NumEdges) {
        let popped = self.classes[c as usize].pop();
        debug_assert_eq!(popped, Some(i));
    }

    fn into_assignment(self, m: NumEdges) -> EdgeColoringAssignment {
        let num_colors = self.number_of_colors();
        let mut colors = vec![0; m as usize];
        for (c, class) in self.classes.into_iter().enumerate() {
            for i in class {
                colors[i as usize] = c as Color;
            }
        }

        EdgeColoringAssignment { colors, num_colors }
    }
}

/// Read-only context of the search: the conflict set of every edge
struct Backtracking {
    conflicts: Vec<EdgeBitSet>,
    steps: u64,
}

impl Backtracking {
    fn new<G>(graph: &G) -> Self
    where
        G: CanonicalEdges,
    {
        Self {
            conflicts: (0..graph.number_of_edges())
                .map(|i| graph.incident_edges_at(i))
                .collect(),
            steps: 0,
        }
    }

    /// Tries to color edges `i..m` given the colors of edges `0..i` in `classes`.
    /// On success `classes` holds a complete coloring, otherwise it is left as it was.
    fn extend(&mut self, classes: &mut ColorClasses, i: NumEdges) -> bool {
        self.steps += 1;

        if i as usize == self.conflicts.len() {
            return true;
        }

        for c in 0..classes.number_of_colors() {
            if !classes.admits(c, &self.conflicts[i as usize]) {
                continue;
            }

            classes.assign(c, i);
            if self.extend(classes, i + 1) {
                return true;
            }
            classes.unassign(c, i);
        }

        trace!("backtracking at edge {i}");
        false
    }
}

/// Convenience access to [`EdgeColorSearch`] with default settings
pub trait EdgeColoring {
    /// Returns *true* if the graph can be edge-colored with Δ colors
    ///
    /// # Example
    /// ```
    /// use mgraphs::{prelude::*, algo::*, gens::*};
    ///
    /// assert!(MultiGraph::complete(6).is_class_one());
    /// assert!(!MultiGraph::complete(5).is_class_one());
    /// ```
    fn is_class_one(&self) -> bool;

    /// Returns a Δ-edge-coloring if one exists
    fn delta_edge_coloring(&self) -> Option<EdgeColoringAssignment>;
}

impl<G> EdgeColoring for G
where
    G: CanonicalEdges + MultiplicityMatrix,
{
    fn is_class_one(&self) -> bool {
        EdgeColorSearch::default().is_class_one(self)
    }

    fn delta_edge_coloring(&self) -> Option<EdgeColoringAssignment> {
        EdgeColorSearch::default().find_coloring(self)
    }
}
