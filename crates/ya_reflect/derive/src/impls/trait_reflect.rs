use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectStruct;

/// Generate implementation code for `Reflect`.
///
/// Each readable member gets an arm in `reflect_get` and each writable one
/// an arm in `reflect_set`; other names return `AccessError::MissingMember`.
pub(crate) fn impl_trait_reflect(reflect_struct: &ReflectStruct) -> TokenStream {
    let meta = reflect_struct.meta();
    let ya_reflect_path = meta.ya_reflect_path();

    let reflect_ = crate::path::reflect_(ya_reflect_path);
    let erased_value_ = crate::path::erased_value_(ya_reflect_path);
    let access_error_ = crate::path::access_error_(ya_reflect_path);
    let macro_exports_ = crate::path::macro_exports_(ya_reflect_path);

    let mut get_arms = Vec::new();
    let mut set_arms = Vec::new();

    for field in reflect_struct.fields() {
        let name = &field.name;
        let member = field.member_tokens();
        let ty = field.ty;
        let read = reflect_struct.field_read_tokens(field);

        get_arms.push(quote! {
            #name => ::core::result::Result::Ok(#erased_value_::new(#read)),
        });
        if !field.attrs.readonly {
            set_arms.push(quote! {
                #name => {
                    self.#member = #macro_exports_::take_field::<#ty>(#name, value)?;
                    ::core::result::Result::Ok(())
                }
            });
        }
    }

    for property in &meta.attrs().properties {
        let name = &property.name;
        if let Some(get) = &property.get {
            get_arms.push(quote! {
                #name => ::core::result::Result::Ok(#macro_exports_::call_getter(self, #get)),
            });
        }
        if let Some(set) = &property.set {
            set_arms.push(quote! {
                #name => #macro_exports_::call_setter(self, #name, #set, value),
            });
        }
    }

    // Keeps `value` used when nothing is writable.
    let value_ident = if set_arms.is_empty() {
        quote!(_value)
    } else {
        quote!(value)
    };

    let ident = meta.ident();

    quote! {
        impl #reflect_ for #ident {
            fn reflect_get(
                &self,
                member: &str,
            ) -> ::core::result::Result<#erased_value_, #access_error_> {
                match member {
                    #(#get_arms)*
                    _ => ::core::result::Result::Err(#access_error_::missing_member(
                        ::core::any::type_name::<Self>(),
                        member,
                    )),
                }
            }

            fn reflect_set(
                &mut self,
                member: &str,
                #value_ident: #erased_value_,
            ) -> ::core::result::Result<(), #access_error_> {
                match member {
                    #(#set_arms)*
                    _ => ::core::result::Result::Err(#access_error_::missing_member(
                        ::core::any::type_name::<Self>(),
                        member,
                    )),
                }
            }
        }
    }
}
