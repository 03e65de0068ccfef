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

use std::fmt;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// A cheapest path between two nodes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct CheapestPath<N, D> {
    /// The total cost of the path.
    pub sum: D,
    /// The nodes on the path, starting at the source.
    pub path: Vec<N>,
}

impl<N, D> CheapestPath<N, D> {
    /// The first node of the path.
    pub fn source(&self) -> Option<&N> {
        self.path.first()
    }

    /// The last node of the path.
    pub fn target(&self) -> Option<&N> {
        self.path.last()
    }

    /// The number of edges on the path.
    pub fn num_edges(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Writes the nodes separated by ` -> `.
impl<N: fmt::Display, D> fmt::Display for CheapestPath<N, D> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        for (i, u) in self.path.iter().enumerate() {
            if i > 0 {
                write!(fmt, " -> ")?;
            }
            write!(fmt, "{}", u)?;
        }
        Ok(())
    }
}
