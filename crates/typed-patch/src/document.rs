//! Patch documents.

use std::fmt;
use std::marker::PhantomData;

use serde_json::Value;
use typed_patch_path::{parse_path, Path};

use crate::apply::{apply_ops, apply_patch, ApplyOptions};
use crate::error::{ApplyError, ParseError};
use crate::op::Operation;
use crate::shape::Patchable;
use crate::validate::validate_path;

/// An ordered list of edits scoped to the entity type `T`.
///
/// Every builder call validates its path(s) against `T`'s declared shape and
/// appends one [`Operation`]; a rejected call leaves the document untouched.
/// Recorded operations are never rewritten or reordered.
///
/// # Example
///
/// ```
/// use serde::{Deserialize, Serialize};
/// use typed_patch::{PatchDocument, Patchable};
///
/// #[derive(Debug, Default, Clone, Serialize, Deserialize, Patchable)]
/// struct Ticket {
///     title: String,
///     labels: Vec<String>,
/// }
///
/// let mut patch = PatchDocument::<Ticket>::new();
/// patch
///     .replace("title", "Fix login")
///     .unwrap()
///     .add("/labels/0", "bug")
///     .unwrap();
/// assert!(patch.replace("Title", "case matters").is_err());
///
/// let mut ticket = Ticket::default();
/// patch.apply_updates_to(&mut ticket).unwrap();
/// assert_eq!(ticket.title, "Fix login");
/// assert_eq!(ticket.labels, vec!["bug"]);
/// ```
pub struct PatchDocument<T> {
    operations: Vec<Operation>,
    _entity: PhantomData<fn() -> T>,
}

impl<T> PatchDocument<T> {
    /// Create an empty document.
    pub fn new() -> Self {
        Self {
            operations: Vec::new(),
            _entity: PhantomData,
        }
    }

    /// Recorded operations, in insertion order.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn has_operations(&self) -> bool {
        !self.operations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Operation> {
        self.operations.iter()
    }
}

impl<T: Patchable> PatchDocument<T> {
    fn parse(path: &str) -> Result<Path, ParseError> {
        let segments = parse_path(path);
        match validate_path::<T>(&segments) {
            Ok(_) => Ok(segments),
            Err(source) => {
                tracing::debug!("rejected patch path {:?}: {}", path, source);
                Err(ParseError {
                    path: path.to_owned(),
                    source,
                })
            }
        }
    }

    fn push(&mut self, op: Operation) -> &mut Self {
        self.operations.push(op);
        self
    }

    /// Record an add: set a property, or insert into a sequence.
    ///
    /// # Errors
    ///
    /// [`ParseError`] if `path` does not resolve against `T`.
    pub fn add(&mut self, path: &str, value: impl Into<Value>) -> Result<&mut Self, ParseError> {
        let path = Self::parse(path)?;
        Ok(self.push(Operation::add(path, value.into())))
    }

    /// Record a remove: reset a property to its default, or remove a
    /// sequence element.
    ///
    /// # Errors
    ///
    /// [`ParseError`] if `path` does not resolve against `T`.
    pub fn remove(&mut self, path: &str) -> Result<&mut Self, ParseError> {
        let path = Self::parse(path)?;
        Ok(self.push(Operation::remove(path)))
    }

    /// Record a replace: overwrite a property or sequence element in place.
    ///
    /// # Errors
    ///
    /// [`ParseError`] if `path` does not resolve against `T`.
    pub fn replace(&mut self, path: &str, value: impl Into<Value>) -> Result<&mut Self, ParseError> {
        let path = Self::parse(path)?;
        Ok(self.push(Operation::replace(path, value.into())))
    }

    /// Record a move from `from` to `to`.
    ///
    /// Both paths are validated independently; they may resolve to different
    /// types. When applied, the source is removed before `to` is resolved.
    ///
    /// # Errors
    ///
    /// [`ParseError`] for the first path that does not resolve against `T`.
    pub fn move_value(&mut self, from: &str, to: &str) -> Result<&mut Self, ParseError> {
        let from = Self::parse(from)?;
        let to = Self::parse(to)?;
        Ok(self.push(Operation::move_value(from, to)))
    }

    /// Apply every recorded operation to `entity`, in order.
    ///
    /// # Errors
    ///
    /// [`ApplyError`] for the first operation that fails. Earlier operations
    /// remain applied; see [`apply_with_options`](Self::apply_with_options)
    /// for rollback.
    pub fn apply_updates_to(&self, entity: &mut T) -> Result<(), ApplyError> {
        apply_ops(entity, &self.operations)
    }

    /// Apply every recorded operation to `entity` with the given options.
    pub fn apply_with_options(&self, entity: &mut T, options: &ApplyOptions) -> Result<(), ApplyError>
    where
        T: Clone,
    {
        apply_patch(entity, &self.operations, options)
    }
}

impl<T> Default for PatchDocument<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for PatchDocument<T> {
    fn clone(&self) -> Self {
        Self {
            operations: self.operations.clone(),
            _entity: PhantomData,
        }
    }
}

impl<T> fmt::Debug for PatchDocument<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatchDocument")
            .field("entity", &std::any::type_name::<T>())
            .field("operations", &self.operations)
            .finish()
    }
}

impl<'a, T> IntoIterator for &'a PatchDocument<T> {
    type Item = &'a Operation;
    type IntoIter = std::slice::Iter<'a, Operation>;

    fn into_iter(self) -> Self::IntoIter {
        self.operations.iter()
    }
}
