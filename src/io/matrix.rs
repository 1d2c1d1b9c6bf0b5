/*!
# Adjacency Matrix Format

A matrix file consists of:
- a line with the number of nodes `n`,
- a separator line whose content is ignored,
- `n` lines with `n` whitespace-separated non-negative integers each.

Entry `v` of line `u` is the number of edges between `u` and `v`; diagonal entries count
loops. The matrix must be symmetric.

# Examples

## Reading a graph
```
use mgraphs::{prelude::*, io::*};
use std::io::Cursor;

let data = b"3\n\n0 2 1\n2 0 0\n1 0 1\n";
let g = MultiGraph::try_read_matrix(Cursor::new(&data[..])).unwrap();

assert_eq!(g.number_of_nodes(), 3);
assert_eq!(g.number_of_edges(), 4);
```

## Writing a graph
```
use mgraphs::{prelude::*, io::*};

let g = MultiGraph::from_edges(3, [(0, 1), (1, 2)]);

let mut buffer = Vec::new();
g.try_write_matrix(&mut buffer).unwrap();
assert_eq!(String::from_utf8(buffer).unwrap(), "0 1 0\n1 0 1\n0 1 0\n");
```
*/

use itertools::Itertools;

use super::*;

/// A configurable reader for the adjacency matrix format
#[derive(Debug, Clone)]
pub struct AdjacencyMatrixReader {
    /// If *true*, the line after the node count is skipped
    skip_separator_line: bool,
}

impl Default for AdjacencyMatrixReader {
    fn default() -> Self {
        Self {
            skip_separator_line: true,
        }
    }
}

impl AdjacencyMatrixReader {
    /// Creates a new reader expecting a separator line
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates whether a separator line follows the node count
    pub fn set_skip_separator_line(&mut self, skip: bool) {
        self.skip_separator_line = skip;
    }

    /// Updates whether a separator line follows the node count, consuming and returning `self`
    pub fn skip_separator_line(mut self, skip: bool) -> Self {
        self.set_skip_separator_line(skip);
        self
    }
}

impl GraphReader<MultiGraph> for AdjacencyMatrixReader {
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<MultiGraph> {
        let mut lines = reader.lines();

        let header = lines
            .next()
            .ok_or(io_error!(ErrorKind::NotFound, "Number of nodes not found"))??;
        let mut parts = header.split_whitespace();
        let n: NumNodes = parse_next_value!(parts, "Number of nodes");

        if self.skip_separator_line {
            lines.next().transpose()?;
        }

        // rows are collected lazily, the header alone is not trusted for allocation
        let mut rows = Vec::new();
        for u in 0..n {
            let line = lines.next().ok_or(io_error!(
                ErrorKind::UnexpectedEof,
                format!("Expected {n} matrix rows, found {u}")
            ))??;

            let mut parts = line.split_whitespace();
            let row = (0..n)
                .map(|_| -> Result<Multiplicity> { Ok(parse_next_value!(parts, "Multiplicity")) })
                .collect::<Result<Vec<_>>>()?;
            raise_error_unless!(
                parts.next().is_none(),
                ErrorKind::InvalidData,
                format!("Row {u} has more than {n} entries")
            );

            rows.push(row);
        }

        MultiGraph::try_from_matrix(&rows).map_err(|e| io_error!(ErrorKind::InvalidData, e))
    }
}

/// Trait for reading graphs in the adjacency matrix format with default settings
pub trait MatrixRead: Sized {
    /// Tries to read the graph from a given reader
    fn try_read_matrix<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the graph from a given file
    fn try_read_matrix_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_matrix(BufReader::new(File::open(path)?))
    }
}

impl MatrixRead for MultiGraph {
    fn try_read_matrix<R: BufRead>(reader: R) -> Result<Self> {
        AdjacencyMatrixReader::default().try_read_graph(reader)
    }
}

/// A writer for the adjacency matrix format
#[derive(Debug, Clone, Default)]
pub struct AdjacencyMatrixWriter {
    /// If *true*, the node count and an empty separator line precede the rows
    header: bool,
}

impl AdjacencyMatrixWriter {
    /// Creates a writer that only emits the matrix rows
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates whether the node count and separator line are written
    pub fn header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }
}

impl GraphWriter<MultiGraph> for AdjacencyMatrixWriter {
    fn try_write_graph<W: Write>(&self, graph: &MultiGraph, mut writer: W) -> Result<()> {
        if self.header {
            writeln!(writer, "{}", graph.number_of_nodes())?;
            writeln!(writer)?;
        }

        for row in graph.matrix_rows() {
            writeln!(writer, "{}", row.iter().join(" "))?;
        }

        Ok(())
    }
}

/// Trait for writing a graph in the adjacency matrix format with default settings
pub trait MatrixWrite {
    /// Tries to write the matrix rows to a writer
    fn try_write_matrix<W: Write>(&self, writer: W) -> Result<()>;

    /// Tries to write the matrix rows to a file
    fn try_write_matrix_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.try_write_matrix(BufWriter::new(File::create(path)?))
    }
}

impl MatrixWrite for MultiGraph {
    fn try_write_matrix<W: Write>(&self, writer: W) -> Result<()> {
        AdjacencyMatrixWriter::default().try_write_graph(self, writer)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Cursor;

    fn read(data: &str) -> Result<MultiGraph> {
        MultiGraph::try_read_matrix(Cursor::new(data.as_bytes()))
    }

    #[test]
    fn reads_four_cycle() {
        let graph = read("4\n\n0 1 0 1\n1 0 1 0 \n0 1 0 1\n1 0 1 0\n").unwrap();
        assert_eq!(graph.number_of_nodes(), 4);
        assert_eq!(
            graph.edges(),
            &[Edge(0, 1), Edge(0, 3), Edge(1, 2), Edge(2, 3)]
        );
    }

    #[test]
    fn separator_content_is_ignored() {
        let graph = read("2\n-----\n0 3\n3 1\n").unwrap();
        assert_eq!(graph.number_of_edges(), 4);

        let compact = AdjacencyMatrixReader::new()
            .skip_separator_line(false)
            .try_read_graph(Cursor::new("2\n0 3\n3 1\n".as_bytes()))
            .unwrap();
        assert_eq!(compact, graph);
    }

    #[test]
    fn empty_graph() {
        assert!(read("0\n").unwrap().is_empty());
        assert!(read("0\n\n").unwrap().is_empty());
    }

    #[test]
    fn malformed_input() {
        for data in [
            "",
            "x\n\n0\n",
            "2\n\n0 1\n",
            "2\n\n0 1\n1\n",
            "2\n\n0 1 0\n1 0\n",
            "2\n\n0 -1\n-1 0\n",
            "2\n\n0 a\n1 0\n",
            "2\n\n0 1\n2 0\n",
        ] {
            let err = read(data).unwrap_err();
            assert!(
                matches!(
                    err.kind(),
                    ErrorKind::InvalidData | ErrorKind::NotFound | ErrorKind::UnexpectedEof
                ),
                "{data:?}: {err}"
            );
        }
    }

    #[test]
    fn huge_header_fails_cleanly() {
        let err = read("4000000000\n\n0 1\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);

        let err = read("4000000000\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedEof);
    }

    #[test]
    fn write_with_header_reads_back() {
        let graph = MultiGraph::from_edges(3, [(0, 0), (0, 1), (0, 1), (1, 2)]);

        let mut buffer = Vec::new();
        AdjacencyMatrixWriter::new()
            .header(true)
            .try_write_graph(&graph, &mut buffer)
            .unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text, "3\n\n1 2 0\n2 0 1\n0 1 0\n");
        assert_eq!(read(&text).unwrap(), graph);
    }
}
