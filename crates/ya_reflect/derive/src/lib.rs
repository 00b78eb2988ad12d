//! See [`Reflect`](derive_reflect).
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// # Reflection Derivation
///
/// `#[derive(Reflect)]` implements `Typed` and `Reflect` for a struct with
/// named fields, tuple fields, or no fields. Generic types, enums and
/// unions are rejected.
///
/// Every field becomes a member; tuple fields are named `"0"`, `"1"`...
/// Field types must be `Clone + Send + Sync + 'static`.
///
/// ## Properties
///
/// Members backed by functions are declared on the type:
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(property(name = "area", get = Rect::area))]
/// #[reflect(property(name = "size", get = Rect::size, set = Rect::set_size))]
/// struct Rect { w: f32, h: f32 }
/// ```
///
/// `get` takes `fn(&Self) -> V`, `set` takes `fn(&mut Self, V)`; at least
/// one is required. A property without `set` is read-only, one without
/// `get` is write-only.
///
/// ## Field Attributes
///
/// - `#[reflect(skip)]`: not a member.
/// - `#[reflect(readonly)]`: no setter can be compiled.
/// - `#[reflect(serialize = never | assign | content | binary)]`: the
///   serialization policy. Also accepted inside `property(..)`.
///
/// ## Type Attributes
///
/// - `#[reflect(auto_register)]`: register the type in
///   `TypeRegistry::auto_register` (feature `auto_register`).
///
/// ## Layout
///
/// The `#[repr(...)]` of the type is recorded. Fields of `#[repr(packed)]`
/// types must be `Copy`; their accessors read and write by name.
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    match impls::impl_reflect(&ast) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}
