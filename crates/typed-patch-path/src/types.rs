//! Type definitions for patch paths.

use std::fmt;

/// A single step in a patch path.
///
/// Either a named member of a structured value or a position in an ordered
/// sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PathSegment {
    /// Member access by exact, case-sensitive name.
    Property(String),
    /// Sequence element access by position.
    Index(usize),
}

impl PathSegment {
    /// Create a property segment.
    #[inline]
    pub fn property(name: impl Into<String>) -> Self {
        PathSegment::Property(name.into())
    }

    /// Returns true if this is an index segment.
    #[inline]
    pub fn is_index(&self) -> bool {
        matches!(self, PathSegment::Index(_))
    }

    /// Get the member name if this is a property segment.
    #[inline]
    pub fn as_property(&self) -> Option<&str> {
        match self {
            PathSegment::Property(name) => Some(name),
            PathSegment::Index(_) => None,
        }
    }

    /// Get the position if this is an index segment.
    #[inline]
    pub fn as_index(&self) -> Option<usize> {
        match self {
            PathSegment::Property(_) => None,
            PathSegment::Index(i) => Some(*i),
        }
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Property(name) => f.write_str(name),
            PathSegment::Index(i) => write!(f, "{i}"),
        }
    }
}

impl From<usize> for PathSegment {
    fn from(i: usize) -> Self {
        PathSegment::Index(i)
    }
}

impl From<&str> for PathSegment {
    fn from(s: &str) -> Self {
        PathSegment::Property(s.to_owned())
    }
}

/// A parsed patch path.
pub type Path = Vec<PathSegment>;
