// -----------------------------------------------------------------------------
// Modules

mod auto_register;
mod trait_reflect;
mod trait_typed;

// -----------------------------------------------------------------------------
// Internal API

use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;

use crate::derive_data::ReflectStruct;

use auto_register::get_auto_register_impl;
use trait_reflect::impl_trait_reflect;
use trait_typed::impl_trait_typed;

/// Generate `Typed`, `Reflect` and the optional auto registration.
pub(crate) fn impl_reflect(ast: &DeriveInput) -> syn::Result<TokenStream> {
    let reflect_struct = ReflectStruct::from_derive_input(ast)?;

    let typed_tokens = impl_trait_typed(&reflect_struct);
    let reflect_tokens = impl_trait_reflect(&reflect_struct);
    let auto_register_tokens = get_auto_register_impl(reflect_struct.meta());

    Ok(quote! {
        #typed_tokens

        #reflect_tokens

        #auto_register_tokens
    })
}
