//! Command line plumbing shared by the `spanning-trees` and `edge-coloring` binaries

use std::{io::BufRead, path::PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Arg, ArgAction, ArgMatches, Command};

use mgraphs::{io::*, prelude::*};

/// Adds the arguments every binary accepts: an optional `INPUT` path, `-v/--verbose` and
/// `--no-shortcuts`
pub fn with_common_args(command: Command) -> Command {
    command
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("input")
                .value_name("INPUT")
                .value_parser(clap::value_parser!(PathBuf))
                .help("Adjacency matrix file; if omitted, its path is read from the first line of stdin"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Log algorithm decisions to stderr"),
        )
        .arg(
            Arg::new("no-shortcuts")
                .long("no-shortcuts")
                .action(ArgAction::SetTrue)
                .help("Disable closed-form fast paths and always run the exhaustive algorithm"),
        )
}

/// Initialises `env_logger` writing to stderr. `RUST_LOG` takes precedence over `-v`.
pub fn init_logging(matches: &ArgMatches) {
    let default_filter = if matches.get_flag("verbose") {
        "debug"
    } else {
        "warn"
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .target(env_logger::Target::Stderr)
        .init();
}

/// Returns the `INPUT` argument, or the first line of `stdin` if it was omitted
pub fn input_path<R: BufRead>(matches: &ArgMatches, stdin: R) -> Result<PathBuf> {
    if let Some(path) = matches.get_one::<PathBuf>("input") {
        return Ok(path.clone());
    }

    let Some(line) = stdin.lines().next() else {
        bail!("no input file given and stdin is empty");
    };
    let line = line.context("reading input path from stdin")?;
    let path = line.trim();
    if path.is_empty() {
        bail!("no input file given and the first line of stdin is blank");
    }

    Ok(PathBuf::from(path))
}

/// Locates and parses the input graph
pub fn read_graph<R: BufRead>(matches: &ArgMatches, stdin: R) -> Result<MultiGraph> {
    let path = input_path(matches, stdin)?;
    let graph = MultiGraph::try_read_matrix_file(&path)
        .with_context(|| format!("reading adjacency matrix from {}", path.display()))?;

    log::debug!(
        "read graph with {} nodes and {} edges from {}",
        graph.number_of_nodes(),
        graph.number_of_edges(),
        path.display()
    );

    Ok(graph)
}
