use proc_macro2::TokenStream;
use quote::quote;

#[inline(always)]
pub(crate) fn typed_(ya_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #ya_reflect_path::info::Typed
    }
}

#[inline(always)]
pub(crate) fn type_info_(ya_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #ya_reflect_path::info::TypeInfo
    }
}

#[inline(always)]
pub(crate) fn type_info_cell_(ya_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #ya_reflect_path::info::TypeInfoCell
    }
}

#[inline(always)]
pub(crate) fn declaring_type_(ya_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #ya_reflect_path::info::DeclaringType
    }
}

#[inline(always)]
pub(crate) fn type_layout_(ya_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #ya_reflect_path::info::TypeLayout
    }
}

#[inline(always)]
pub(crate) fn member_info_(ya_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #ya_reflect_path::info::MemberInfo
    }
}

#[inline(always)]
pub(crate) fn field_info_(ya_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #ya_reflect_path::info::FieldInfo
    }
}

#[inline(always)]
pub(crate) fn property_info_(ya_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #ya_reflect_path::info::PropertyInfo
    }
}

#[inline(always)]
pub(crate) fn serialization_policy_(ya_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #ya_reflect_path::info::SerializationPolicy
    }
}
