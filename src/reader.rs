// Copyright (c) 2015-2022 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

//! Reading edge lists from text files.
//!
//! Each line contains one edge, given by two node names and the cost of the
//! edge, separated by whitespace. Empty lines and lines starting with `#` are
//! ignored.
//!
//! ```text
//! # stops and fares
//! A B 3
//! A D 3
//! B D 1
//! ```

use crate::edge::EdgeRecord;
use crate::error::{InvalidEdgeError, ReadError, Result};
use crate::graph::CostGraph;

use std::fmt;
use std::fs;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::str::FromStr;

/// Read all edge records.
///
/// A line with fewer than three tokens results in
/// [`ReadError::InvalidEdge`], a cost that cannot be parsed or additional
/// tokens in [`ReadError::Format`].
pub fn read_edges<R, D>(reader: R) -> Result<Vec<EdgeRecord<String, D>>>
where
    R: Read,
    D: FromStr,
    D::Err: fmt::Display,
{
    let mut io = BufReader::new(reader);
    let mut line = String::new();
    let mut line_number = 0;
    let mut edges = vec![];

    while {
        line.clear();
        io.read_line(&mut line)
    }? > 0
    {
        line_number += 1;
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let mut toks = trimmed.split_whitespace();
        let start = toks.next().map(String::from);
        let end = toks.next().map(String::from);
        let cost = match toks.next() {
            Some(tok) => Some(tok.parse().map_err(|e| ReadError::Format {
                line: line_number,
                msg: format!("invalid cost '{}': {}", tok, e),
            })?),
            None => None,
        };
        if let Some(tok) = toks.next() {
            return Err(ReadError::Format {
                line: line_number,
                msg: format!("unexpected token at end of line: {}", tok),
            });
        }

        let edge = EdgeRecord { start, end, cost };
        if let Some(missing) = edge.missing_field() {
            return Err(ReadError::InvalidEdge {
                line: line_number,
                source: InvalidEdgeError {
                    index: edges.len(),
                    missing,
                },
            });
        }
        edges.push(edge);
    }

    Ok(edges)
}

/// Read an edge list and build the graph.
pub fn read_graph<R, D>(reader: R) -> Result<CostGraph<String, D>>
where
    R: Read,
    D: FromStr + Copy,
    D::Err: fmt::Display,
{
    let edges = read_edges(reader)?;
    // all records are complete at this point
    CostGraph::from_edges(edges).map_err(|source| ReadError::InvalidEdge { line: 0, source })
}

/// Read an edge list from the file with the given name.
pub fn read_from_file<P, D>(path: P) -> Result<CostGraph<String, D>>
where
    P: AsRef<Path>,
    D: FromStr + Copy,
    D::Err: fmt::Display,
{
    read_graph(fs::File::open(path)?)
}

#[cfg(test)]
mod tests {
    use super::{read_edges, read_graph};
    use crate::edge::EdgeField;
    use crate::error::ReadError;
    use std::io::Cursor;

    #[test]
    fn parse_file_test() {
        let file = "# test file

A B 3
  A D 3.5
# there might be comments in between
B D 1
";
        let g = read_graph::<_, f64>(Cursor::new(file)).unwrap();
        assert_eq!(g.num_nodes(), 3);
        assert_eq!(g.num_edges(), 3);
        assert_eq!(g.cost(&"D".to_string(), &"A".to_string()), Some(3.5));
    }

    #[test]
    fn parse_short_line() {
        let file = "A B 3\nB C\n";
        match read_edges::<_, u32>(Cursor::new(file)) {
            Err(ReadError::InvalidEdge { line, source }) => {
                assert_eq!(line, 2);
                assert_eq!(source.index, 1);
                assert_eq!(source.missing, EdgeField::Cost);
            }
            _ => panic!("expected invalid edge"),
        }

        match read_edges::<_, u32>(Cursor::new("\n\nA\n")) {
            Err(ReadError::InvalidEdge { line, source }) => {
                assert_eq!(line, 3);
                assert_eq!(source.missing, EdgeField::End);
            }
            _ => panic!("expected invalid edge"),
        }
    }

    #[test]
    fn parse_format_errors() {
        match read_edges::<_, u32>(Cursor::new("A B x\n")) {
            Err(ReadError::Format { line, .. }) => assert_eq!(line, 1),
            _ => panic!("expected format error"),
        }
        match read_edges::<_, u32>(Cursor::new("A B 1\nA B 1 2\n")) {
            Err(ReadError::Format { line, .. }) => assert_eq!(line, 2),
            _ => panic!("expected format error"),
        }
    }

    #[test]
    fn parse_empty() {
        let edges = read_edges::<_, u32>(Cursor::new("# nothing\n\n")).unwrap();
        assert!(edges.is_empty());
    }
}
