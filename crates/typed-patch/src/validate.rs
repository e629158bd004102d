//! Static path validation.
//!
//! Walks a declared [`Shape`] with a parsed path. Only the shape is
//! consulted, never a live instance, so sequence bounds are not checked here.

use typed_patch_path::PathSegment;

use crate::error::{PathError, PathErrorKind};
use crate::shape::{Patchable, Shape};

/// Resolve `path` against `shape`, returning the shape it addresses.
///
/// # Errors
///
/// Returns a [`PathError`] naming the first segment that does not resolve:
/// an unknown member, a property on a sequence, an index on a record, or any
/// segment below a leaf.
pub fn validate_shape(shape: Shape, path: &[PathSegment]) -> Result<Shape, PathError> {
    let mut cursor = shape;
    for (position, segment) in path.iter().enumerate() {
        let fail = |kind| PathError {
            position,
            segment: segment.clone(),
            kind,
        };
        cursor = match (cursor, segment) {
            (Shape::Sequence { element }, PathSegment::Index(_)) => element(),
            (Shape::Sequence { .. }, PathSegment::Property(_)) => {
                return Err(fail(PathErrorKind::PropertyOnSequence))
            }
            (record @ Shape::Record { .. }, PathSegment::Property(name)) => match record.member(name) {
                Some(member) => (member.shape)(),
                None => return Err(fail(PathErrorKind::UnknownMember)),
            },
            (Shape::Record { .. }, PathSegment::Index(_)) => {
                return Err(fail(PathErrorKind::IndexOnRecord))
            }
            (Shape::Leaf { .. }, _) => return Err(fail(PathErrorKind::SegmentOnLeaf)),
        };
    }
    Ok(cursor)
}

/// Resolve `path` against the declared shape of `T`.
pub fn validate_path<T: Patchable>(path: &[PathSegment]) -> Result<Shape, PathError> {
    validate_shape(T::shape(), path)
}
