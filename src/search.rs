/*
 * Copyright (c) 2017, 2018, 2021, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

//! Dijkstra's shortest path algorithm.
//!
//! Dijkstra's algorithm computes the shortest path from some start node $s \in
//! V$ to all other nodes in an undirected graph. Each edge is assigned a
//! non-negative cost $c \colon E \to \mathbb{R}_+$.
//!
//! The search settles the nodes in the order of increasing distance from the
//! source. Whenever a settled node $u$ offers a cheaper route to some
//! neighbor $v$, i.e. $d(u) + c(uv) < d(v)$, the distance of $v$ is lowered
//! and $u$ becomes the predecessor of $v$.
//!
//! # Example
//!
//! ```
//! use cheapest_path::CostGraph;
//! use cheapest_path::search;
//!
//! let g = CostGraph::from_edges(vec![
//!     ("a", "b", 9), ("a", "c", 2), ("a", "e", 14), ("b", "d", 6),
//!     ("c", "d", 8), ("c", "e", 9), ("c", "f", 10), ("d", "f", 15),
//!     ("e", "f", 7),
//! ]).unwrap();
//!
//! let paths = search::start(&g, &"e");
//! assert_eq!(paths.distance(&"b"), Some(20));
//! assert_eq!(paths.predecessor(&"b"), Some(&"a"));
//!
//! let p = paths.path_to(&"b").unwrap();
//! assert_eq!(p.sum, 20);
//! assert_eq!(p.path, vec!["e", "c", "a", "b"]);
//! ```

use crate::collections::CostQueue;
use crate::graph::CostGraph;
use crate::path::CheapestPath;

use num_traits::Zero;
use std::hash::Hash;
use std::ops::Add;
use tracing::{debug, trace};

/// The result of a single-source search.
///
/// Contains the distance and the predecessor of each node reached from the
/// source. The table borrows the graph it has been computed on.
pub struct ShortestPaths<'a, N, D> {
    graph: &'a CostGraph<N, D>,
    src: N,
    dist: Vec<Option<D>>,
    /// The predecessor of each node and the cost of the connecting edge.
    pred: Vec<Option<(usize, D)>>,
    settled: usize,
}

/// Run Dijkstra's algorithm from `src`.
///
/// The source need not be a node of the graph. In this case no other node is
/// reachable.
pub fn start<'a, N, D>(g: &'a CostGraph<N, D>, src: &N) -> ShortestPaths<'a, N, D>
where
    N: Hash + Eq + Clone,
    D: Copy + PartialOrd + Zero + Add<D, Output = D>,
{
    let n = g.num_nodes();
    let mut paths = ShortestPaths {
        graph: g,
        src: src.clone(),
        dist: vec![None; n],
        pred: vec![None; n],
        settled: 0,
    };

    let s = match g.node_id(src) {
        Some(s) => s,
        None => {
            debug!(nodes = n, "source is not a node of the graph");
            return paths;
        }
    };

    let mut done = vec![false; n];
    let mut queue = CostQueue::new(n);
    paths.dist[s] = Some(D::zero());
    queue.push_or_decrease(s, D::zero());

    while let Some((u, d)) = queue.pop_min() {
        done[u] = true;
        paths.settled += 1;
        for &(v, c) in g.neighs(u) {
            if done[v] {
                continue;
            }
            let alt = d + c;
            let better = match paths.dist[v] {
                Some(dv) => alt < dv,
                None => true,
            };
            if better {
                trace!(node = v, pred = u, "relax");
                paths.dist[v] = Some(alt);
                paths.pred[v] = Some((u, c));
                queue.push_or_decrease(v, alt);
            }
        }
    }

    debug!(source = s, nodes = n, settled = paths.settled, "search finished");
    paths
}

impl<'a, N, D> ShortestPaths<'a, N, D>
where
    N: Hash + Eq + Clone,
    D: Copy + PartialOrd + Zero + Add<D, Output = D>,
{
    /// The source node of the search.
    pub fn source(&self) -> &N {
        &self.src
    }

    /// The number of nodes reached from the source, including the source.
    pub fn num_settled(&self) -> usize {
        self.settled
    }

    /// Return the distance of `u` from the source.
    ///
    /// The distance of the source itself is always zero, even if it is not a
    /// node of the graph. Returns `None` if `u` has not been reached.
    pub fn distance(&self, u: &N) -> Option<D> {
        if *u == self.src {
            return Some(D::zero());
        }
        self.graph.node_id(u).and_then(|u| self.dist[u])
    }

    /// Return the predecessor of `u` on a cheapest path from the source.
    ///
    /// The source and unreachable nodes have no predecessor.
    pub fn predecessor(&self, u: &N) -> Option<&N> {
        let u = self.graph.node_id(u)?;
        self.pred[u].map(|(p, _)| self.graph.node(p))
    }

    /// Return the cheapest path from the source to `dst`.
    ///
    /// The path is reconstructed by following the predecessors backwards from
    /// `dst`. Returns `None` if `dst` has no predecessor, which in particular
    /// is the case for `dst` equal to the source.
    pub fn path_to(&self, dst: &N) -> Option<CheapestPath<N, D>> {
        let mut cur = self.graph.node_id(dst)?;
        let mut sum = D::zero();
        let mut path = vec![];
        while let Some((p, c)) = self.pred[cur] {
            path.push(self.graph.node(cur).clone());
            sum = sum + c;
            cur = p;
        }
        if path.is_empty() {
            return None;
        }
        path.push(self.src.clone());
        path.reverse();
        Some(CheapestPath { sum, path })
    }

    /// Return an iterator over all reached nodes and their distances.
    ///
    /// The nodes are returned in id order. The source is only contained if
    /// it is a node of the graph.
    pub fn distances(&self) -> impl Iterator<Item = (&N, D)> + '_ {
        self.dist
            .iter()
            .enumerate()
            .filter_map(move |(u, d)| d.map(|d| (self.graph.node(u), d)))
    }
}
