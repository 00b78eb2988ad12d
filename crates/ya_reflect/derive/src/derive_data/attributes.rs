use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::meta::ParseNestedMeta;
use syn::{Attribute, Expr, Ident, LitStr};

use crate::REFLECT_ATTRIBUTE_NAME;

// -----------------------------------------------------------------------------
// PolicyAttr

/// `serialize = never | assign | content | binary`
#[derive(Debug, Clone, Copy)]
pub(crate) enum PolicyAttr {
    Never,
    Assign,
    Content,
    Binary,
}

impl PolicyAttr {
    fn parse(meta: &ParseNestedMeta) -> syn::Result<Self> {
        let ident: Ident = meta.value()?.parse()?;
        match ident.to_string().as_str() {
            "never" => Ok(Self::Never),
            "assign" => Ok(Self::Assign),
            "content" => Ok(Self::Content),
            "binary" => Ok(Self::Binary),
            _ => Err(syn::Error::new(
                ident.span(),
                "expected one of `never`, `assign`, `content`, `binary`",
            )),
        }
    }

    /// `.with_policy(_path_::SerializationPolicy::Xxx)`
    pub fn with_policy_expression(policy: Option<Self>, ya_reflect_path: &syn::Path) -> TokenStream {
        let Some(policy) = policy else {
            return TokenStream::new();
        };
        let policy_ = crate::path::serialization_policy_(ya_reflect_path);
        let variant = match policy {
            Self::Never => quote!(Never),
            Self::Assign => quote!(Assign),
            Self::Content => quote!(Content),
            Self::Binary => quote!(Binary),
        };
        quote! {
            .with_policy(#policy_::#variant)
        }
    }
}

fn set_once<T>(slot: &mut Option<T>, value: T, meta: &ParseNestedMeta) -> syn::Result<()> {
    if slot.is_some() {
        return Err(meta.error("duplicate attribute"));
    }
    *slot = Some(value);
    Ok(())
}

fn reflect_attrs(attrs: &[Attribute]) -> impl Iterator<Item = &Attribute> {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident(REFLECT_ATTRIBUTE_NAME))
}

// -----------------------------------------------------------------------------
// PropertyAttr

/// `property(name = "..", get = expr, set = expr, serialize = ..)`
pub(crate) struct PropertyAttr {
    pub name: LitStr,
    pub get: Option<Expr>,
    pub set: Option<Expr>,
    pub policy: Option<PolicyAttr>,
}

impl PropertyAttr {
    fn parse(meta: &ParseNestedMeta) -> syn::Result<Self> {
        let mut name = None;
        let mut get = None;
        let mut set = None;
        let mut policy = None;

        meta.parse_nested_meta(|inner| {
            if inner.path.is_ident("name") {
                let lit: LitStr = inner.value()?.parse()?;
                set_once(&mut name, lit, &inner)
            } else if inner.path.is_ident("get") {
                let expr: Expr = inner.value()?.parse()?;
                set_once(&mut get, expr, &inner)
            } else if inner.path.is_ident("set") {
                let expr: Expr = inner.value()?.parse()?;
                set_once(&mut set, expr, &inner)
            } else if inner.path.is_ident("serialize") {
                let value = PolicyAttr::parse(&inner)?;
                set_once(&mut policy, value, &inner)
            } else {
                Err(inner.error("expected `name`, `get`, `set` or `serialize`"))
            }
        })?;

        let Some(name) = name else {
            return Err(meta.error("property requires `name = \"..\"`"));
        };
        if get.is_none() && set.is_none() {
            return Err(meta.error("property requires `get`, `set` or both"));
        }

        Ok(Self {
            name,
            get,
            set,
            policy,
        })
    }
}

// -----------------------------------------------------------------------------
// TypeAttributes

/// `#[reflect(...)]` on the type.
#[derive(Default)]
pub(crate) struct TypeAttributes {
    pub properties: Vec<PropertyAttr>,
    pub auto_register: Option<Span>,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in reflect_attrs(attrs) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("property") {
                    this.properties.push(PropertyAttr::parse(&meta)?);
                    Ok(())
                } else if meta.path.is_ident("auto_register") {
                    let span = meta.path.get_ident().map_or_else(Span::call_site, Ident::span);
                    set_once(&mut this.auto_register, span, &meta)
                } else {
                    Err(meta.error("expected `property(..)` or `auto_register`"))
                }
            })?;
        }

        Ok(this)
    }
}

// -----------------------------------------------------------------------------
// FieldAttributes

/// `#[reflect(...)]` on a field.
#[derive(Default)]
pub(crate) struct FieldAttributes {
    pub skip: bool,
    pub readonly: bool,
    pub policy: Option<PolicyAttr>,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in reflect_attrs(attrs) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    this.skip = true;
                    Ok(())
                } else if meta.path.is_ident("readonly") {
                    this.readonly = true;
                    Ok(())
                } else if meta.path.is_ident("serialize") {
                    let value = PolicyAttr::parse(&meta)?;
                    set_once(&mut this.policy, value, &meta)
                } else {
                    Err(meta.error("expected `skip`, `readonly` or `serialize = ..`"))
                }
            })?;
        }

        Ok(this)
    }
}
