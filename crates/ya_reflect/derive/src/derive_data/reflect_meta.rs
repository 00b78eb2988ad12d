use quote::ToTokens;
use syn::{Ident, Path};

use super::{ReprLayout, TypeAttributes};

/// Everything about the derived type except its fields.
pub(crate) struct ReflectMeta<'a> {
    ya_reflect_path: Path,
    ident: &'a Ident,
    attrs: TypeAttributes,
    layout: ReprLayout,
}

impl core::fmt::Debug for ReflectMeta<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ReflectMeta")
            .field("ya_reflect_path", &self.ya_reflect_path.to_token_stream())
            .field("ident", &self.ident)
            .field("layout", &self.layout)
            .finish()
    }
}

impl<'a> ReflectMeta<'a> {
    #[inline]
    pub fn new(ident: &'a Ident, attrs: TypeAttributes, layout: ReprLayout) -> Self {
        Self {
            ya_reflect_path: crate::path::ya_reflect(),
            ident,
            attrs,
            layout,
        }
    }

    #[inline]
    pub fn ya_reflect_path(&self) -> &Path {
        &self.ya_reflect_path
    }

    #[inline]
    pub fn ident(&self) -> &Ident {
        self.ident
    }

    #[inline]
    pub fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    #[inline]
    pub fn layout(&self) -> ReprLayout {
        self.layout
    }
}
