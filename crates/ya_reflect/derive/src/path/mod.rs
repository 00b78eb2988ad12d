//! Paths of the `ya_reflect` items generated code refers to.
//!
//! The only special feature is the path of ya_reflect itself,
//! See [`ya_reflect`] function doc.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the correct access path to the `ya_reflect` crate.
///
/// 1. For crates that depend on `ya_reflect`, `::ya_reflect` is returned.
/// 2. For crates that depend on `ya_core`, `::ya_core::reflect` is returned.
/// 3. For other situations, `::ya_reflect` is returned, but this may be incorrect.
///
/// Reading the manifest is not free, so the path is resolved once per
/// derive and passed around.
pub(crate) fn ya_reflect() -> syn::Path {
    ya_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("ya_reflect"))
}

// -----------------------------------------------------------------------------
// Modules

mod info;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use info::*;

#[inline(always)]
pub(crate) fn reflect_(ya_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #ya_reflect_path::Reflect
    }
}

#[inline(always)]
pub(crate) fn erased_value_(ya_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #ya_reflect_path::value::ErasedValue
    }
}

#[inline(always)]
pub(crate) fn access_error_(ya_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #ya_reflect_path::access::AccessError
    }
}

#[inline(always)]
pub(crate) fn macro_exports_(ya_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #ya_reflect_path::__macro_exports
    }
}

#[cfg(feature = "auto_register")]
#[inline(always)]
pub(crate) fn auto_register_(ya_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #ya_reflect_path::__macro_exports::auto_register
    }
}
