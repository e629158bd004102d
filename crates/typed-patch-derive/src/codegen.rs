//! Code generation for the Patchable derive.

use std::collections::HashSet;

use darling::FromDeriveInput;
use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;

use crate::parse::PatchableInput;

/// Main entry point for code generation.
pub fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let parsed = PatchableInput::from_derive_input(input)
        .map_err(|e| syn::Error::new_spanned(input, e.to_string()))?;

    if !parsed.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &parsed.generics,
            "#[derive(Patchable)] does not support generic types",
        ));
    }

    let fields = parsed.fields();
    let mut seen = HashSet::new();
    for field in &fields {
        if !seen.insert(field.member_name()) {
            return Err(syn::Error::new_spanned(
                &field.ident,
                format!("duplicate patch member name `{}`", field.member_name()),
            ));
        }
    }

    let name = &parsed.ident;
    let type_name = name.to_string();
    let keys: Vec<String> = fields.iter().map(|f| f.member_name()).collect();
    let idents: Vec<_> = fields.iter().map(|f| &f.ident).collect();
    let tys: Vec<_> = fields.iter().map(|f| &f.ty).collect();

    Ok(quote! {
        impl ::typed_patch::Patchable for #name {
            fn shape() -> ::typed_patch::Shape {
                static MEMBERS: &[::typed_patch::Member] = &[
                    #( ::typed_patch::Member::new(#keys, <#tys as ::typed_patch::Patchable>::shape), )*
                ];
                ::typed_patch::Shape::Record {
                    name: #type_name,
                    members: MEMBERS,
                }
            }

            fn node(&mut self) -> ::typed_patch::Node<'_> {
                ::typed_patch::Node::Record(self)
            }
        }

        impl ::typed_patch::Record for #name {
            fn type_name(&self) -> &'static str {
                #type_name
            }

            fn member_mut(
                &mut self,
                name: &str,
            ) -> ::core::option::Option<::typed_patch::Node<'_>> {
                match name {
                    #( #keys => ::core::option::Option::Some(
                        ::typed_patch::Patchable::node(&mut self.#idents)
                    ), )*
                    _ => ::core::option::Option::None,
                }
            }

            fn get_member(
                &self,
                name: &str,
            ) -> ::core::result::Result<::typed_patch::__private::Value, ::typed_patch::ApplyErrorKind> {
                match name {
                    #( #keys => ::typed_patch::__private::to_value(&self.#idents), )*
                    _ => ::core::result::Result::Err(
                        ::typed_patch::ApplyErrorKind::MemberNotFound(name.to_owned())
                    ),
                }
            }

            #[allow(unused_variables)]
            fn set_member(
                &mut self,
                name: &str,
                value: ::typed_patch::__private::Value,
            ) -> ::core::result::Result<(), ::typed_patch::ApplyErrorKind> {
                match name {
                    #( #keys => {
                        self.#idents = ::typed_patch::__private::from_value(value)?;
                        ::core::result::Result::Ok(())
                    } )*
                    _ => ::core::result::Result::Err(
                        ::typed_patch::ApplyErrorKind::MemberNotFound(name.to_owned())
                    ),
                }
            }

            fn clear_member(
                &mut self,
                name: &str,
            ) -> ::core::result::Result<(), ::typed_patch::ApplyErrorKind> {
                match name {
                    #( #keys => {
                        self.#idents = ::core::default::Default::default();
                        ::core::result::Result::Ok(())
                    } )*
                    _ => ::core::result::Result::Err(
                        ::typed_patch::ApplyErrorKind::MemberNotFound(name.to_owned())
                    ),
                }
            }
        }
    })
}
