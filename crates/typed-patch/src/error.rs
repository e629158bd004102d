//! Error types for building and applying patch documents.

use thiserror::Error;
use typed_patch_path::PathSegment;

use crate::op::OperationKind;

// ── Build time ────────────────────────────────────────────────────────────

/// Why a segment did not resolve against the declared shape.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PathErrorKind {
    #[error("unknown member")]
    UnknownMember,
    #[error("sequences only accept index segments")]
    PropertyOnSequence,
    #[error("structured types only accept property segments")]
    IndexOnRecord,
    #[error("cannot descend into a leaf value")]
    SegmentOnLeaf,
}

/// A path that does not resolve against an entity type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{kind} at segment {position} (`{segment}`)")]
pub struct PathError {
    /// Zero-based position of the offending segment.
    pub position: usize,
    pub segment: PathSegment,
    pub kind: PathErrorKind,
}

/// Raised by every builder call whose path fails validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid patch path `{path}`: {source}")]
pub struct ParseError {
    /// The path exactly as supplied by the caller.
    pub path: String,
    #[source]
    pub source: PathError,
}

// ── Apply time ────────────────────────────────────────────────────────────

/// A failure while walking or writing the live object graph.
#[derive(Debug, Error)]
pub enum ApplyErrorKind {
    #[error("index {index} is out of range for a sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("no member named `{0}`")]
    MemberNotFound(String),
    #[error("segment `{segment}` cannot be resolved against {found}")]
    Unresolvable {
        segment: PathSegment,
        found: &'static str,
    },
    #[error("empty path")]
    EmptyPath,
    #[error("value does not fit the destination: {0}")]
    TypeMismatch(#[source] serde_json::Error),
    #[error("could not read the source value: {0}")]
    Read(#[source] serde_json::Error),
}

/// An operation that failed while being applied.
///
/// Operations before `index` have already been applied to the instance.
#[derive(Debug, Error)]
#[error("error in operation [index = {index}] ({op} `{path}`): {kind}")]
pub struct ApplyError {
    pub index: usize,
    pub op: OperationKind,
    /// The path being resolved when the failure happened.
    pub path: String,
    #[source]
    pub kind: ApplyErrorKind,
}

impl ApplyError {
    /// Returns true if the value could not be written into its destination.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self.kind, ApplyErrorKind::TypeMismatch(_))
    }
}
