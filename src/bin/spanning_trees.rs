//! Prints the number of spanning trees of a multigraph followed by the adjacency matrix of
//! one spanning tree.

use std::io::{self, BufWriter, Write};

use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use mgraphs::{algo::*, io::*};

mod common;

fn main() -> Result<()> {
    let matches = common::with_common_args(Command::new("spanning-trees"))
        .about("Counts the spanning trees of a multigraph given as an adjacency matrix")
        .arg(
            Arg::new("memoize")
                .long("memoize")
                .action(ArgAction::SetTrue)
                .help("Cache counts of subgraphs reached more than once"),
        )
        .get_matches();

    common::init_logging(&matches);

    let graph = common::read_graph(&matches, io::stdin().lock())?;

    let census = SpanningTreeCounter::new()
        .use_shortcuts(!matches.get_flag("no-shortcuts"))
        .memoize(matches.get_flag("memoize"))
        .census(&graph);

    let mut out = BufWriter::new(io::stdout().lock());
    writeln!(out, "{}", census.count)?;
    census.witness.try_write_matrix(&mut out)?;
    out.flush()?;

    Ok(())
}
