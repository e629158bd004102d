//! Typed patch documents.
//!
//! A [`PatchDocument<T>`] records add, remove, replace and move edits against
//! an entity type `T`, addressed with string paths such as `/Norf/0/Foo/1`.
//! Paths are checked against `T`'s declared [`Shape`] when an edit is
//! recorded, and resolved against the live object graph when the document is
//! applied.
//!
//! # Operations
//!
//! - `add`: set a property, or insert into a sequence (shifting later
//!   elements up).
//! - `remove`: reset a property to its default, or remove a sequence element
//!   (shifting later elements down).
//! - `replace`: overwrite a property or sequence element in place.
//! - `move`: remove the source, then add the removed value at the
//!   destination. The destination is resolved after the removal.
//!
//! # Example
//!
//! ```
//! use serde::{Deserialize, Serialize};
//! use typed_patch::{PatchDocument, Patchable};
//!
//! #[derive(Debug, Default, Clone, Serialize, Deserialize, Patchable)]
//! struct Playlist {
//!     #[patch(rename = "Tracks")]
//!     tracks: Vec<String>,
//! }
//!
//! let mut playlist = Playlist {
//!     tracks: vec!["one".into(), "two".into(), "three".into()],
//! };
//!
//! let mut patch = PatchDocument::<Playlist>::new();
//! patch.move_value("/Tracks/2", "/Tracks/1").unwrap();
//! patch.apply_updates_to(&mut playlist).unwrap();
//!
//! assert_eq!(playlist.tracks, vec!["one", "three", "two"]);
//! ```

pub mod apply;
pub mod document;
pub mod error;
mod finite;
pub mod op;
pub mod shape;
pub mod validate;
pub mod walker;

pub use apply::{apply_op, apply_ops, apply_patch, ApplyOptions};
pub use document::PatchDocument;
pub use error::{ApplyError, ApplyErrorKind, ParseError, PathError, PathErrorKind};
pub use op::{Operation, OperationKind};
pub use shape::{Member, Patchable, Shape};
pub use validate::{validate_path, validate_shape};
pub use walker::{locate, Node, Position, Record, Sequence};

pub use typed_patch_path::{format_path, parse_path, Path, PathSegment};

#[cfg(feature = "derive")]
pub use typed_patch_derive::Patchable;

/// Support items for generated code. Not public API.
#[doc(hidden)]
pub mod __private {
    pub use crate::walker::{from_value, to_value};
    pub use serde_json::Value;
}
