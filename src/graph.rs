// Copyright (c) 2017-2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Weighted undirected graphs with labelled nodes.
//!
//! A [`CostGraph`] maps each node to its neighbors and the cost of the
//! connecting edge. Internally the node labels are numbered consecutively
//! in the order of their first appearance, and adjacencies are stored as
//! vectors of `(neighbor id, cost)` pairs.
//!
//! # Example
//!
//! ```
//! use cheapest_path::CostGraph;
//!
//! let g = CostGraph::from_edges(vec![("a", "b", 4), ("b", "c", 1), ("a", "b", 2)]).unwrap();
//!
//! assert_eq!(g.num_nodes(), 3);
//! assert_eq!(g.num_edges(), 2);
//! assert_eq!(g.cost(&"a", &"b"), Some(2));
//! assert_eq!(g.cost(&"b", &"a"), Some(2));
//! assert_eq!(g.cost(&"a", &"c"), None);
//! ```

use crate::edge::EdgeRecord;
use crate::error::InvalidEdgeError;

use std::collections::HashMap;
use std::hash::Hash;
use std::slice::Iter as SliceIter;

/// An undirected graph with edge costs.
#[derive(Debug, Clone)]
pub struct CostGraph<N, D> {
    /// The node labels, indexed by node id.
    nodes: Vec<N>,
    /// The id of each node label.
    ids: HashMap<N, usize>,
    /// The adjacency list `(neighbor, cost)` of each node.
    adj: Vec<Vec<(usize, D)>>,
}

impl<N, D> Default for CostGraph<N, D> {
    fn default() -> Self {
        CostGraph {
            nodes: vec![],
            ids: HashMap::new(),
            adj: vec![],
        }
    }
}

impl<N, D> CostGraph<N, D>
where
    N: Hash + Eq + Clone,
    D: Copy,
{
    /// Create an empty graph.
    pub fn new() -> Self {
        Default::default()
    }

    /// Build a graph from a list of edge records.
    ///
    /// Each record `(u, v, c)` inserts the adjacencies `u -> v` and `v -> u`
    /// with cost `c`. If the same pair of nodes occurs more than once, the
    /// cost of the last occurrence is used for both directions.
    ///
    /// If some record lacks one of its fields, an error referencing the
    /// first invalid record is returned and no graph is built.
    pub fn from_edges<I, E>(edges: I) -> Result<Self, InvalidEdgeError>
    where
        I: IntoIterator<Item = E>,
        E: Into<EdgeRecord<N, D>>,
    {
        let mut g = CostGraph::new();
        for (i, e) in edges.into_iter().enumerate() {
            let (u, v, c) = e.into().into_parts(i)?;
            let u = g.add_node(u);
            let v = g.add_node(v);
            g.set_cost(u, v, c);
            g.set_cost(v, u, c);
        }
        Ok(g)
    }

    /// Build a graph from a nested adjacency mapping.
    ///
    /// The mapping is taken as is: for each node `u` and each neighbor `v`
    /// with cost `c` the adjacency `u -> v` is inserted. The reverse
    /// direction is *not* added automatically, so the caller is responsible
    /// for passing a symmetric mapping. Neighbors that do not occur as keys
    /// become nodes without adjacencies.
    pub fn from_adjacency<I, A>(adjacency: I) -> Self
    where
        I: IntoIterator<Item = (N, A)>,
        A: IntoIterator<Item = (N, D)>,
    {
        let mut g = CostGraph::new();
        for (u, neighs) in adjacency {
            let u = g.add_node(u);
            for (v, c) in neighs {
                let v = g.add_node(v);
                g.set_cost(u, v, c);
            }
        }
        g
    }

    /// Return the id of node `u` or `None` if it does not belong to the
    /// graph.
    pub fn node_id(&self, u: &N) -> Option<usize> {
        self.ids.get(u).copied()
    }

    /// Return `true` if `u` is a node of this graph.
    pub fn contains(&self, u: &N) -> bool {
        self.ids.contains_key(u)
    }

    /// Return the cost of the adjacency `u -> v`.
    pub fn cost(&self, u: &N, v: &N) -> Option<D> {
        let u = self.node_id(u)?;
        let v = self.node_id(v)?;
        self.adj[u].iter().find(|&&(w, _)| w == v).map(|&(_, c)| c)
    }

    /// Return the nested adjacency mapping of this graph.
    pub fn to_adjacency(&self) -> HashMap<N, HashMap<N, D>> {
        self.nodes
            .iter()
            .zip(self.adj.iter())
            .map(|(u, neighs)| {
                (
                    u.clone(),
                    neighs.iter().map(|&(v, c)| (self.nodes[v].clone(), c)).collect(),
                )
            })
            .collect()
    }

    fn add_node(&mut self, u: N) -> usize {
        if let Some(&id) = self.ids.get(&u) {
            return id;
        }
        let id = self.nodes.len();
        self.ids.insert(u.clone(), id);
        self.nodes.push(u);
        self.adj.push(vec![]);
        id
    }

    fn set_cost(&mut self, u: usize, v: usize, c: D) {
        let neighs = &mut self.adj[u];
        match neighs.iter_mut().find(|(w, _)| *w == v) {
            Some(entry) => entry.1 = c,
            None => neighs.push((v, c)),
        }
    }
}

impl<N, D> CostGraph<N, D> {
    /// Return the number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Return the number of stored adjacencies divided by two.
    ///
    /// For graphs built from edge records this is the number of distinct
    /// undirected edges.
    pub fn num_edges(&self) -> usize {
        self.adj.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Return `true` if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Return the label of the node with the given id.
    pub fn node(&self, id: usize) -> &N {
        &self.nodes[id]
    }

    /// Return an iterator over all node labels in id order.
    pub fn nodes(&self) -> SliceIter<N> {
        self.nodes.iter()
    }

    /// Return an iterator over the `(neighbor id, cost)` pairs of the node
    /// with the given id.
    pub fn neighs(&self, id: usize) -> SliceIter<(usize, D)> {
        self.adj[id].iter()
    }
}

#[cfg(test)]
mod tests {
    use super::CostGraph;
    use crate::edge::{EdgeField, EdgeRecord};
    use std::collections::HashMap;

    #[test]
    fn test_from_edges() {
        let g = CostGraph::from_edges(vec![("A", "B", 3), ("A", "D", 3), ("B", "D", 1)]).unwrap();

        assert_eq!(g.num_nodes(), 3);
        assert_eq!(g.num_edges(), 3);
        assert_eq!(g.nodes().cloned().collect::<Vec<_>>(), vec!["A", "B", "D"]);
        assert_eq!(g.node_id(&"D"), Some(2));
        assert_eq!(g.node(1), &"B");
        assert_eq!(g.neighs(0).cloned().collect::<Vec<_>>(), vec![(1, 3), (2, 3)]);
        assert_eq!(g.cost(&"D", &"B"), Some(1));
        assert!(!g.contains(&"C"));
    }

    #[test]
    fn test_last_cost_wins() {
        let g = CostGraph::from_edges(vec![("A", "B", 5), ("B", "A", 7), ("A", "B", 2)]).unwrap();
        assert_eq!(g.num_edges(), 1);
        assert_eq!(g.cost(&"A", &"B"), Some(2));
        assert_eq!(g.cost(&"B", &"A"), Some(2));
    }

    #[test]
    fn test_empty() {
        let g = CostGraph::<&str, u32>::from_edges(Vec::<(&str, &str, u32)>::new()).unwrap();
        assert!(g.is_empty());
        assert_eq!(g.num_edges(), 0);
    }

    #[test]
    fn test_invalid_edge() {
        let edges: Vec<EdgeRecord<&str, u32>> = vec![
            ("A", "B", 1).into(),
            ("B", "C", 2).into(),
            (Some("C"), Some("D"), None).into(),
            (None, Some("E"), Some(4)).into(),
        ];
        let err = CostGraph::from_edges(edges).unwrap_err();
        assert_eq!(err.index, 2);
        assert_eq!(err.missing, EdgeField::Cost);
    }

    #[test]
    fn test_adjacency() {
        let mut adj = HashMap::new();
        adj.insert("x", vec![("y", 1.5), ("z", 2.0)]);
        let g = CostGraph::from_adjacency(adj);

        assert_eq!(g.num_nodes(), 3);
        assert_eq!(g.cost(&"x", &"y"), Some(1.5));
        // no reverse adjacency is added
        assert_eq!(g.cost(&"y", &"x"), None);

        let back = g.to_adjacency();
        assert_eq!(back[&"x"][&"z"], 2.0);
        assert!(back[&"z"].is_empty());
    }
}
