//! Derive macro for the typed-patch `Patchable` trait.
//!
//! `#[derive(Patchable)]` on a struct with named fields generates:
//! - `impl Patchable`: the struct's declared shape, one member per field
//! - `impl Record`: runtime member access used when a patch is applied
//!
//! # Usage
//!
//! ```ignore
//! use serde::{Deserialize, Serialize};
//! use typed_patch::Patchable;
//!
//! #[derive(Default, Serialize, Deserialize, Patchable)]
//! struct Order {
//!     #[patch(rename = "Lines")]
//!     lines: Vec<Line>,
//!     #[patch(skip)]
//!     cached_total: u64,
//! }
//! ```

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod codegen;
mod parse;

/// Derive `Patchable` and `Record` for a struct.
///
/// # Field Attributes
///
/// - `#[patch(rename = "Name")]`: address the field by a different member name
/// - `#[patch(skip)]`: leave the field out of the shape; paths naming it fail
///   validation
///
/// Patched field types must implement `Patchable`, `Serialize`,
/// `DeserializeOwned` and `Default`.
#[proc_macro_derive(Patchable, attributes(patch))]
pub fn derive_patchable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match codegen::expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
