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

//! Edge records used as input for graph construction.
//!
//! An edge record consists of two node labels and a cost. Each field may be
//! absent, in which case the record is invalid and graph construction
//! fails.
//!
//! ```
//! use cheapest_path::edge::{EdgeField, EdgeRecord};
//!
//! let e: EdgeRecord<&str, u32> = ("A", "B", 3).into();
//! assert_eq!(e.into_parts(0), Ok(("A", "B", 3)));
//!
//! let e: EdgeRecord<&str, u32> = (Some("A"), Some("B"), None).into();
//! assert_eq!(e.into_parts(4).unwrap_err().missing, EdgeField::Cost);
//! ```

use crate::error::InvalidEdgeError;

use std::fmt;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// The fields of an edge record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeField {
    Start,
    End,
    Cost,
}

impl fmt::Display for EdgeField {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            EdgeField::Start => write!(fmt, "start node"),
            EdgeField::End => write!(fmt, "end node"),
            EdgeField::Cost => write!(fmt, "cost"),
        }
    }
}

/// An undirected edge `{start, end}` with some cost.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct EdgeRecord<N, D> {
    pub start: Option<N>,
    pub end: Option<N>,
    pub cost: Option<D>,
}

impl<N, D> EdgeRecord<N, D> {
    /// Create a complete edge record.
    pub fn new(start: N, end: N, cost: D) -> Self {
        EdgeRecord {
            start: Some(start),
            end: Some(end),
            cost: Some(cost),
        }
    }

    /// Return the first missing field or `None` if the record is complete.
    pub fn missing_field(&self) -> Option<EdgeField> {
        if self.start.is_none() {
            Some(EdgeField::Start)
        } else if self.end.is_none() {
            Some(EdgeField::End)
        } else if self.cost.is_none() {
            Some(EdgeField::Cost)
        } else {
            None
        }
    }

    /// Split the record into its fields.
    ///
    /// `index` is the position of the record in its input sequence and is
    /// reported in the error if some field is missing.
    pub fn into_parts(self, index: usize) -> Result<(N, N, D), InvalidEdgeError> {
        match (self.start, self.end, self.cost) {
            (Some(u), Some(v), Some(c)) => Ok((u, v, c)),
            (None, _, _) => Err(InvalidEdgeError {
                index,
                missing: EdgeField::Start,
            }),
            (_, None, _) => Err(InvalidEdgeError {
                index,
                missing: EdgeField::End,
            }),
            (_, _, None) => Err(InvalidEdgeError {
                index,
                missing: EdgeField::Cost,
            }),
        }
    }
}

impl<N, D> From<(N, N, D)> for EdgeRecord<N, D> {
    fn from((u, v, c): (N, N, D)) -> Self {
        EdgeRecord::new(u, v, c)
    }
}

impl<N, D> From<(Option<N>, Option<N>, Option<D>)> for EdgeRecord<N, D> {
    fn from((start, end, cost): (Option<N>, Option<N>, Option<D>)) -> Self {
        EdgeRecord { start, end, cost }
    }
}

#[cfg(test)]
mod tests {
    use super::{EdgeField, EdgeRecord};

    #[test]
    fn test_missing_field() {
        let e = EdgeRecord::<&str, i32>::from((None, None, None));
        assert_eq!(e.missing_field(), Some(EdgeField::Start));

        let e = EdgeRecord::<&str, i32>::from((Some("a"), None, Some(1)));
        assert_eq!(e.missing_field(), Some(EdgeField::End));
        let err = e.into_parts(5).unwrap_err();
        assert_eq!(err.index, 5);
        assert_eq!(err.missing, EdgeField::End);

        let e = EdgeRecord::from(("a", "b", 1));
        assert_eq!(e.missing_field(), None);
    }

    #[cfg(feature = "serialize")]
    mod serialize {
        use super::EdgeRecord;
        use serde_json;

        #[test]
        fn test_serde() {
            let e = EdgeRecord::new("A".to_string(), "B".to_string(), 3);
            let serialized = serde_json::to_string(&e).unwrap();
            assert_eq!(serialized, r#"{"start":"A","end":"B","cost":3}"#);

            let e: EdgeRecord<String, u32> = serde_json::from_str(r#"{"start":"A","end":"B","cost":null}"#).unwrap();
            assert_eq!(e.cost, None);
        }
    }
}
