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

//! Errors returned by graph construction and path queries.

use crate::edge::EdgeField;

use std::error;
use std::fmt;
use std::io;

/// An edge record lacks one of its three fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidEdgeError {
    /// Position of the offending record in the input sequence.
    pub index: usize,
    /// The first missing field of the record.
    pub missing: EdgeField,
}

impl fmt::Display for InvalidEdgeError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> std::result::Result<(), fmt::Error> {
        write!(fmt, "invalid edge record {}: missing {}", self.index, self.missing)
    }
}

impl error::Error for InvalidEdgeError {}

/// There is no path between two nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoPathError<N> {
    pub from: N,
    pub to: N,
}

impl<N: fmt::Display> fmt::Display for NoPathError<N> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> std::result::Result<(), fmt::Error> {
        write!(fmt, "no path from {} to {}", self.from, self.to)
    }
}

impl<N: fmt::Debug + fmt::Display> error::Error for NoPathError<N> {}

/// Error when reading an edge list.
#[derive(Debug)]
pub enum ReadError {
    Io(io::Error),
    Format { line: usize, msg: String },
    InvalidEdge { line: usize, source: InvalidEdgeError },
}

impl From<io::Error> for ReadError {
    fn from(err: io::Error) -> Self {
        ReadError::Io(err)
    }
}

impl fmt::Display for ReadError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> std::result::Result<(), fmt::Error> {
        use self::ReadError::*;
        match self {
            Io(err) => err.fmt(fmt),
            Format { line, msg } => write!(fmt, "Format error on line {}: {}", line, msg),
            InvalidEdge { line, source } => write!(fmt, "Invalid edge on line {}: missing {}", line, source.missing),
        }
    }
}

impl error::Error for ReadError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            ReadError::Io(err) => Some(err),
            ReadError::InvalidEdge { source, .. } => Some(source),
            ReadError::Format { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ReadError>;

#[cfg(test)]
mod tests {
    use super::{InvalidEdgeError, NoPathError, ReadError};
    use crate::edge::EdgeField;
    use std::error::Error;

    #[test]
    fn test_messages() {
        let err = InvalidEdgeError {
            index: 3,
            missing: EdgeField::Cost,
        };
        assert_eq!(err.to_string(), "invalid edge record 3: missing cost");

        let err = NoPathError { from: "A", to: "G" };
        assert_eq!(err.to_string(), "no path from A to G");

        let err = ReadError::InvalidEdge {
            line: 7,
            source: InvalidEdgeError {
                index: 2,
                missing: EdgeField::End,
            },
        };
        assert_eq!(err.to_string(), "Invalid edge on line 7: missing end node");
        assert!(err.source().is_some());
    }
}
