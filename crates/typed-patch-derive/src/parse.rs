//! Attribute parsing for the Patchable derive.

use darling::{ast, FromDeriveInput, FromField};
use syn::ext::IdentExt;
use syn::{Generics, Ident, Type};

/// Parsed struct-level input.
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(patch), supports(struct_named))]
pub struct PatchableInput {
    pub ident: Ident,

    pub generics: Generics,

    pub data: ast::Data<(), FieldInput>,
}

impl PatchableInput {
    /// Fields that take part in patching.
    pub fn fields(&self) -> Vec<&FieldInput> {
        self.data
            .as_ref()
            .take_struct()
            .map(|s| s.fields.into_iter().filter(|f| !f.skip).collect())
            .unwrap_or_default()
    }
}

/// Parsed field-level options.
#[derive(Debug, FromField)]
#[darling(attributes(patch))]
pub struct FieldInput {
    pub ident: Option<Ident>,

    pub ty: Type,

    /// Member name used in paths.
    #[darling(default)]
    pub rename: Option<String>,

    #[darling(default)]
    pub skip: bool,
}

impl FieldInput {
    /// The member name paths use for this field.
    pub fn member_name(&self) -> String {
        match (&self.rename, &self.ident) {
            (Some(rename), _) => rename.clone(),
            (None, Some(ident)) => ident.unraw().to_string(),
            (None, None) => String::new(),
        }
    }
}
