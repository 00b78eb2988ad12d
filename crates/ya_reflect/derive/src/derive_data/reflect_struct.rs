use std::collections::BTreeSet;

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Index, Member, Type};

use super::{FieldAttributes, ReflectMeta, ReprLayout, TypeAttributes};

// -----------------------------------------------------------------------------
// StructField

/// A reflected field.
pub(crate) struct StructField<'a> {
    /// `x` or `0`, as written in `self.#member`.
    pub member: Member,
    /// The member name, `"x"` or `"0"`.
    pub name: String,
    pub ty: &'a Type,
    pub attrs: FieldAttributes,
}

impl StructField<'_> {
    #[inline]
    pub fn member_tokens(&self) -> TokenStream {
        self.member.to_token_stream()
    }
}

// -----------------------------------------------------------------------------
// ReflectStruct

/// A struct accepted by `#[derive(Reflect)]`.
pub(crate) struct ReflectStruct<'a> {
    meta: ReflectMeta<'a>,
    fields: Vec<StructField<'a>>,
}

impl<'a> ReflectStruct<'a> {
    pub fn from_derive_input(ast: &'a DeriveInput) -> syn::Result<Self> {
        let data = match &ast.data {
            Data::Struct(data) => data,
            Data::Enum(data) => {
                return Err(syn::Error::new(
                    data.enum_token.span(),
                    "`Reflect` cannot be derived for enums",
                ));
            }
            Data::Union(data) => {
                return Err(syn::Error::new(
                    data.union_token.span(),
                    "`Reflect` cannot be derived for unions",
                ));
            }
        };

        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new(
                ast.generics.span(),
                "`Reflect` cannot be derived for generic types",
            ));
        }

        let attrs = TypeAttributes::parse_attrs(&ast.attrs)?;
        let layout = ReprLayout::parse_attrs(&ast.attrs)?;

        let mut fields = Vec::new();
        for (index, field) in data.fields.iter().enumerate() {
            let field_attrs = FieldAttributes::parse_attrs(&field.attrs)?;
            if field_attrs.skip {
                continue;
            }
            let (member, name) = match &field.ident {
                Some(ident) => (Member::Named(ident.clone()), ident.to_string()),
                None => (Member::Unnamed(Index::from(index)), index.to_string()),
            };
            fields.push(StructField {
                member,
                name,
                ty: &field.ty,
                attrs: field_attrs,
            });
        }

        let this = Self {
            meta: ReflectMeta::new(&ast.ident, attrs, layout),
            fields,
        };
        this.check_unique_names()?;
        Ok(this)
    }

    fn check_unique_names(&self) -> syn::Result<()> {
        let mut names = BTreeSet::new();
        for field in &self.fields {
            names.insert(field.name.clone());
        }
        for property in &self.meta.attrs().properties {
            if !names.insert(property.name.value()) {
                return Err(syn::Error::new(
                    property.name.span(),
                    format!("duplicate member name `{}`", property.name.value()),
                ));
            }
        }
        Ok(())
    }

    #[inline]
    pub fn meta(&self) -> &ReflectMeta<'a> {
        &self.meta
    }

    #[inline]
    pub fn fields(&self) -> &[StructField<'a>] {
        &self.fields
    }

    /// Fields of packed types may be unaligned and are read by copy.
    pub fn field_read_tokens(&self, field: &StructField) -> TokenStream {
        let member = field.member_tokens();
        if self.meta.layout().is_packed() {
            quote!({ self.#member })
        } else {
            quote!(::core::clone::Clone::clone(&self.#member))
        }
    }
}
