//! Prints `1` if the edges of a multigraph can be colored with Δ colors and `0` otherwise.

use std::io::{self, BufWriter, Write};

use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use mgraphs::{algo::*, prelude::*};

mod common;

fn main() -> Result<()> {
    let matches = common::with_common_args(Command::new("edge-coloring"))
        .about("Decides whether a multigraph given as an adjacency matrix is class one")
        .arg(
            Arg::new("print-coloring")
                .long("print-coloring")
                .action(ArgAction::SetTrue)
                .help("After a positive answer, print `u v color` for every edge"),
        )
        .get_matches();

    common::init_logging(&matches);

    let graph = common::read_graph(&matches, io::stdin().lock())?;
    let search = EdgeColorSearch::new().use_shortcuts(!matches.get_flag("no-shortcuts"));

    let mut out = BufWriter::new(io::stdout().lock());
    if matches.get_flag("print-coloring") {
        match search.find_coloring(&graph) {
            Some(coloring) => {
                writeln!(out, "1")?;
                write_coloring(&graph, &coloring, &mut out)?;
            }
            None => writeln!(out, "0")?,
        }
    } else {
        writeln!(out, "{}", u8::from(search.is_class_one(&graph)))?;
    }
    out.flush()?;

    Ok(())
}

/// Writes one line per edge: both endpoints followed by the edge's color
fn write_coloring<W: Write>(
    graph: &MultiGraph,
    coloring: &EdgeColoringAssignment,
    mut writer: W,
) -> Result<()> {
    for (Edge(u, v), c) in graph.edges().iter().zip(coloring.colors()) {
        writeln!(writer, "{u} {v} {c}")?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn coloring_lines() {
        let graph = MultiGraph::from_edges(3, [(0, 1), (1, 2)]);
        let coloring = EdgeColorSearch::new().find_coloring(&graph).unwrap();

        let mut buffer = Vec::new();
        write_coloring(&graph, &coloring, &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "0 1 0\n1 2 1\n");
    }
}
