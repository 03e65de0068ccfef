// Copyright (c) 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Cheapest path queries on a fixed graph.
//!
//! A [`PathFinder`] owns a [`CostGraph`]. The graph is built once from a list
//! of edges (or replaced as a whole) and can then be queried any number of
//! times. Each query runs a fresh Dijkstra search, no state is kept between
//! queries.
//!
//! # Example
//!
//! ```
//! use cheapest_path::PathFinder;
//!
//! let mut finder = PathFinder::new();
//! finder
//!     .build_from_edges(vec![
//!         ("A", "B", 3), ("A", "D", 3), ("A", "F", 6), ("B", "D", 1), ("B", "E", 3),
//!         ("C", "E", 2), ("C", "F", 3), ("D", "E", 1), ("D", "F", 2), ("E", "F", 5),
//!     ])
//!     .unwrap();
//!
//! let result = finder.find_cheapest_path(&"F", &"A").unwrap();
//! assert_eq!(result.sum, 5);
//! assert_eq!(result.path, vec!["F", "D", "A"]);
//!
//! // a node is never connected to itself
//! assert!(finder.find_cheapest_path(&"A", &"A").is_err());
//! ```

use crate::edge::EdgeRecord;
use crate::error::{InvalidEdgeError, NoPathError};
use crate::graph::CostGraph;
use crate::path::CheapestPath;
use crate::search::{self, ShortestPaths};

use num_traits::Zero;
use std::hash::Hash;
use std::ops::Add;
use tracing::debug;

/// Answers cheapest path queries on an undirected graph.
#[derive(Debug, Clone)]
pub struct PathFinder<N, D> {
    graph: CostGraph<N, D>,
}

impl<N, D> Default for PathFinder<N, D> {
    fn default() -> Self {
        PathFinder {
            graph: CostGraph::default(),
        }
    }
}

impl<N, D> From<CostGraph<N, D>> for PathFinder<N, D> {
    fn from(graph: CostGraph<N, D>) -> Self {
        PathFinder { graph }
    }
}

impl<N, D> PathFinder<N, D>
where
    N: Hash + Eq + Clone,
    D: Copy + PartialOrd + Zero + Add<D, Output = D>,
{
    /// Create a path finder on the empty graph.
    pub fn new() -> Self {
        Default::default()
    }

    /// Return the current graph.
    pub fn graph(&self) -> &CostGraph<N, D> {
        &self.graph
    }

    /// Replace the graph.
    ///
    /// The graph is used as is, no validation takes place.
    pub fn set_graph(&mut self, graph: CostGraph<N, D>) {
        debug!(nodes = graph.num_nodes(), edges = graph.num_edges(), "graph replaced");
        self.graph = graph;
    }

    /// Replace the graph by a nested adjacency mapping.
    ///
    /// See [`CostGraph::from_adjacency`].
    pub fn set_adjacency<I, A>(&mut self, adjacency: I)
    where
        I: IntoIterator<Item = (N, A)>,
        A: IntoIterator<Item = (N, D)>,
    {
        self.set_graph(CostGraph::from_adjacency(adjacency))
    }

    /// Build the graph from a list of edges.
    ///
    /// Each edge `(u, v, c)` connects `u` and `v` in both directions with cost
    /// `c`. If some pair of nodes occurs more than once, the last cost wins.
    ///
    /// If some edge record is incomplete, an error is returned and the
    /// current graph is left untouched.
    pub fn build_from_edges<I, E>(&mut self, edges: I) -> Result<(), InvalidEdgeError>
    where
        I: IntoIterator<Item = E>,
        E: Into<EdgeRecord<N, D>>,
    {
        match CostGraph::from_edges(edges) {
            Ok(graph) => {
                debug!(nodes = graph.num_nodes(), edges = graph.num_edges(), "graph built");
                self.graph = graph;
                Ok(())
            }
            Err(err) => {
                debug!(index = err.index, "invalid edge record, graph not built");
                Err(err)
            }
        }
    }

    /// Compute the distances of all nodes from `from`.
    pub fn shortest_paths(&self, from: &N) -> ShortestPaths<'_, N, D> {
        search::start(&self.graph, from)
    }

    /// Return the cheapest path from `from` to `to`.
    ///
    /// The returned path starts at `from` and ends at `to`. If `to` cannot be
    /// reached from `from` an error is returned. The same happens if `from`
    /// and `to` are equal: the trivial path is never reported.
    pub fn find_cheapest_path(&self, from: &N, to: &N) -> Result<CheapestPath<N, D>, NoPathError<N>> {
        self.shortest_paths(from).path_to(to).ok_or_else(|| {
            debug!(nodes = self.graph.num_nodes(), "no path found");
            NoPathError {
                from: from.clone(),
                to: to.clone(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::PathFinder;
    use crate::edge::{EdgeField, EdgeRecord};
    use crate::error::NoPathError;
    use std::collections::HashMap;

    #[test]
    fn test_failed_build_keeps_graph() {
        let mut finder = PathFinder::new();
        finder.build_from_edges(vec![("a", "b", 1), ("b", "c", 2)]).unwrap();

        let edges: Vec<EdgeRecord<&str, i32>> = vec![("x", "y", 1).into(), (Some("y"), None, Some(3)).into()];
        let err = finder.build_from_edges(edges).unwrap_err();
        assert_eq!(err.index, 1);
        assert_eq!(err.missing, EdgeField::End);

        assert_eq!(finder.graph().num_nodes(), 3);
        assert!(!finder.graph().contains(&"x"));
        assert_eq!(finder.find_cheapest_path(&"a", &"c").unwrap().sum, 3);
    }

    #[test]
    fn test_failed_first_build() {
        let mut finder = PathFinder::<&str, i32>::new();
        let edges: Vec<EdgeRecord<&str, i32>> = vec![("a", "b", 1).into(), (Some("b"), Some("c"), None).into()];
        assert!(finder.build_from_edges(edges).is_err());
        assert!(finder.graph().is_empty());
    }

    #[test]
    fn test_no_path() {
        let mut finder = PathFinder::new();
        finder.build_from_edges(vec![("a", "b", 1), ("c", "d", 1)]).unwrap();
        assert_eq!(
            finder.find_cheapest_path(&"a", &"d"),
            Err(NoPathError { from: "a", to: "d" })
        );
        assert!(finder.find_cheapest_path(&"a", &"z").is_err());
        assert!(finder.find_cheapest_path(&"z", &"a").is_err());
        assert!(finder.find_cheapest_path(&"b", &"b").is_err());
    }

    #[test]
    fn test_set_adjacency() {
        let mut adj = HashMap::new();
        adj.insert("a", vec![("b", 4), ("c", 1)]);
        adj.insert("b", vec![("a", 4), ("c", 1)]);
        adj.insert("c", vec![("a", 1), ("b", 1)]);

        let mut finder = PathFinder::new();
        finder.build_from_edges(vec![("x", "y", 1)]).unwrap();
        finder.set_adjacency(adj);

        assert!(!finder.graph().contains(&"x"));
        let p = finder.find_cheapest_path(&"a", &"b").unwrap();
        assert_eq!(p.sum, 2);
        assert_eq!(p.path, vec!["a", "c", "b"]);
    }

    #[test]
    fn test_repeated_queries() {
        let mut finder = PathFinder::new();
        finder
            .build_from_edges(vec![("a", "b", 2.0), ("b", "c", 0.5), ("a", "c", 3.0)])
            .unwrap();
        let first = finder.find_cheapest_path(&"a", &"c").unwrap();
        for _ in 0..3 {
            assert_eq!(finder.find_cheapest_path(&"a", &"c").unwrap(), first);
        }
        assert_eq!(first.sum, 2.5);
    }
}
