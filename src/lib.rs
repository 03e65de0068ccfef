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

#![forbid(unsafe_code)]

//! Cheapest paths in weighted undirected graphs.
//!
//! The graph is given as a list of edges `(u, v, cost)` with non-negative
//! costs. Queries for the cheapest path between two nodes are answered with
//! Dijkstra's algorithm.

// # Data structures

pub mod edge;
pub use self::edge::{EdgeField, EdgeRecord};

pub mod graph;
pub use self::graph::CostGraph;

pub mod collections;

mod path;
pub use self::path::CheapestPath;

pub mod error;
pub use self::error::{InvalidEdgeError, NoPathError, ReadError};

// # Algorithms

pub mod search;
pub use self::search::ShortestPaths;

pub mod pathfinder;
pub use self::pathfinder::PathFinder;

// # Input

pub mod reader;
