use proc_macro2::TokenStream;
use quote::quote;
use syn::{Attribute, LitInt, parenthesized, token};

// -----------------------------------------------------------------------------
// ReprLayout

/// The layout declared through `#[repr(...)]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum ReprLayout {
    #[default]
    Rust,
    C,
    Transparent,
    Packed(usize),
}

impl ReprLayout {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut c = false;
        let mut transparent = false;
        let mut packed = None;

        for attr in attrs.iter().filter(|attr| attr.path().is_ident("repr")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("C") {
                    c = true;
                } else if meta.path.is_ident("transparent") {
                    transparent = true;
                } else if meta.path.is_ident("packed") {
                    let mut align = 1;
                    if meta.input.peek(token::Paren) {
                        let content;
                        parenthesized!(content in meta.input);
                        align = content.parse::<LitInt>()?.base10_parse()?;
                    }
                    packed = Some(align);
                } else if meta.input.peek(token::Paren) {
                    // `align(N)` and anything else with arguments.
                    let content;
                    parenthesized!(content in meta.input);
                    content.parse::<TokenStream>()?;
                }
                Ok(())
            })?;
        }

        Ok(match packed {
            Some(align) => Self::Packed(align),
            None if transparent => Self::Transparent,
            None if c => Self::C,
            None => Self::Rust,
        })
    }

    #[inline]
    pub fn is_packed(self) -> bool {
        matches!(self, Self::Packed(_))
    }

    /// `_path_::TypeLayout::Xxx`
    pub fn to_tokens(self, ya_reflect_path: &syn::Path) -> TokenStream {
        let type_layout_ = crate::path::type_layout_(ya_reflect_path);
        match self {
            Self::Rust => quote!(#type_layout_::Rust),
            Self::C => quote!(#type_layout_::C),
            Self::Transparent => quote!(#type_layout_::Transparent),
            Self::Packed(align) => quote!(#type_layout_::Packed { align: #align }),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::ReprLayout;
    use syn::{DeriveInput, parse_quote};

    fn layout(input: DeriveInput) -> ReprLayout {
        ReprLayout::parse_attrs(&input.attrs).unwrap()
    }

    #[test]
    fn reads_repr_variants() {
        assert_eq!(layout(parse_quote!(struct A;)), ReprLayout::Rust);
        assert_eq!(layout(parse_quote!(#[repr(C)] struct A;)), ReprLayout::C);
        assert_eq!(layout(parse_quote!(#[repr(transparent)] struct A(u8);)), ReprLayout::Transparent);
        assert_eq!(layout(parse_quote!(#[repr(C, align(8))] struct A;)), ReprLayout::C);
    }

    #[test]
    fn packed_wins() {
        assert_eq!(layout(parse_quote!(#[repr(packed)] struct A;)), ReprLayout::Packed(1));
        assert_eq!(layout(parse_quote!(#[repr(C, packed(2))] struct A;)), ReprLayout::Packed(2));
        assert_eq!(
            layout(parse_quote!(#[repr(C)] #[repr(packed(4))] struct A;)),
            ReprLayout::Packed(4)
        );
    }
}
